//! Records module - typed source rows and their frame builders.

mod records_model;


pub use records_model::{campaign_frame, sales_frame, CampaignRecord, SalesRecord};
