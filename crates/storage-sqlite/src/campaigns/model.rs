//! Database model for campaign performance rows.

use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use adlytics_core::dimensions::{Platform, Region};
use adlytics_core::frame::parse_date_text;
use adlytics_core::records::CampaignRecord;

/// Database model for one campaign row.
///
/// Dates are stored as ISO `YYYY-MM-DD` text and money columns as decimal
/// text, so SQLite never rounds them through floats.
#[derive(
    Queryable, Identifiable, Selectable, Insertable, AsChangeset, Debug, Clone, PartialEq,
)]
#[diesel(table_name = crate::schema::marketing_campaigns)]
#[diesel(primary_key(campaign_id, date, platform, region))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CampaignRecordDB {
    pub campaign_id: i64,
    pub campaign_name: String,
    pub date: String,
    pub platform: String,
    pub region: String,
    pub impressions: i64,
    pub clicks: i64,
    pub installs: i64,
    pub spend: String,
    pub revenue: String,
}

impl From<CampaignRecordDB> for CampaignRecord {
    fn from(db: CampaignRecordDB) -> Self {
        CampaignRecord {
            campaign_id: db.campaign_id,
            campaign_name: db.campaign_name,
            date: parse_date_text(&db.date).unwrap_or_default(),
            platform: Platform::canonicalize(&db.platform),
            region: Region::canonicalize(&db.region),
            impressions: db.impressions,
            clicks: db.clicks,
            installs: db.installs,
            spend: Decimal::from_str(&db.spend).unwrap_or_default(),
            revenue: Decimal::from_str(&db.revenue).unwrap_or_default(),
        }
    }
}

impl From<&CampaignRecord> for CampaignRecordDB {
    fn from(record: &CampaignRecord) -> Self {
        CampaignRecordDB {
            campaign_id: record.campaign_id,
            campaign_name: record.campaign_name.clone(),
            date: record.date.format("%Y-%m-%d").to_string(),
            platform: record.platform.as_str().to_string(),
            region: record.region.as_str().to_string(),
            impressions: record.impressions,
            clicks: record.clicks,
            installs: record.installs,
            spend: record.spend.to_string(),
            revenue: record.revenue.to_string(),
        }
    }
}
