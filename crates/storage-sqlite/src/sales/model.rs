//! Database model for sales performance rows.

use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use adlytics_core::dimensions::{Platform, Region};
use adlytics_core::frame::parse_date_text;
use adlytics_core::records::SalesRecord;

/// Database model for one sales row. Same text encodings as the campaign
/// table: ISO dates and decimal text.
#[derive(
    Queryable, Identifiable, Selectable, Insertable, AsChangeset, Debug, Clone, PartialEq,
)]
#[diesel(table_name = crate::schema::sales_performance)]
#[diesel(primary_key(campaign_id, date, platform, region))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SalesRecordDB {
    pub campaign_id: i64,
    pub date: String,
    pub platform: String,
    pub region: String,
    pub purchases: i64,
    pub revenue: String,
    pub users: i64,
    pub retention: String,
    pub lifetime_value: String,
}

impl From<SalesRecordDB> for SalesRecord {
    fn from(db: SalesRecordDB) -> Self {
        SalesRecord {
            campaign_id: db.campaign_id,
            date: parse_date_text(&db.date).unwrap_or_default(),
            platform: Platform::canonicalize(&db.platform),
            region: Region::canonicalize(&db.region),
            purchases: db.purchases,
            revenue: Decimal::from_str(&db.revenue).unwrap_or_default(),
            users: db.users,
            retention: Decimal::from_str(&db.retention).unwrap_or_default(),
            lifetime_value: Decimal::from_str(&db.lifetime_value).unwrap_or_default(),
        }
    }
}

impl From<&SalesRecord> for SalesRecordDB {
    fn from(record: &SalesRecord) -> Self {
        SalesRecordDB {
            campaign_id: record.campaign_id,
            date: record.date.format("%Y-%m-%d").to_string(),
            platform: record.platform.as_str().to_string(),
            region: record.region.as_str().to_string(),
            purchases: record.purchases,
            revenue: record.revenue.to_string(),
            users: record.users,
            retention: record.retention.to_string(),
            lifetime_value: record.lifetime_value.to_string(),
        }
    }
}
