//! Reporting module - overview KPIs, funnel totals, and grouped summaries.

mod dimension;
mod reports_model;
mod summary;


#[cfg(test)]
mod summary_tests;

pub use dimension::{dimension_summary, top_campaigns};
pub use reports_model::{AggSpec, Aggregation, FunnelStage, OverviewKpis};
pub use summary::{funnel_stages, overview_kpis};
