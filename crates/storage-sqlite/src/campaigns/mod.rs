//! SQLite storage implementation for campaign performance rows.

mod model;
mod repository;

pub use model::CampaignRecordDB;
pub use repository::CampaignRepository;
