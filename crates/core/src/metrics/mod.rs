//! Metrics module - per-table ratio metric derivation.

mod deriver;


pub use deriver::{derive_campaign_metrics, derive_sales_metrics};

pub(crate) use deriver::scaled_ratio;
