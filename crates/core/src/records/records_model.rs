//! Typed campaign and sales rows as produced by every source adapter.
//!
//! Adapters that read loosely-shaped data (spreadsheets, APIs) normalize
//! into these records before frames are built, so the column contract lives
//! in exactly one place.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dimensions::{Platform, Region};
use crate::errors::{Result, ValidationError};
use crate::frame::{Frame, Value};

/// One campaign performance row per (campaign, date, platform, region).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRecord {
    pub campaign_id: i64,
    pub campaign_name: String,
    pub date: NaiveDate,
    pub platform: Platform,
    pub region: Region,
    pub impressions: i64,
    pub clicks: i64,
    pub installs: i64,
    pub spend: Decimal,
    pub revenue: Decimal,
}

impl CampaignRecord {
    pub fn validate(&self) -> Result<()> {
        if self.campaign_name.trim().is_empty() {
            return Err(ValidationError::MissingField("campaignName".to_string()).into());
        }
        if self.impressions < 0 || self.clicks < 0 || self.installs < 0 {
            return Err(ValidationError::InvalidInput(
                "impressions, clicks and installs must be non-negative".to_string(),
            )
            .into());
        }
        if self.spend.is_sign_negative() || self.revenue.is_sign_negative() {
            return Err(ValidationError::InvalidInput(
                "spend and revenue must be non-negative".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// One sales performance row per (campaign_id, date, platform, region).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub campaign_id: i64,
    pub date: NaiveDate,
    pub platform: Platform,
    pub region: Region,
    pub purchases: i64,
    pub revenue: Decimal,
    pub users: i64,
    pub retention: Decimal,
    pub lifetime_value: Decimal,
}

impl SalesRecord {
    pub fn validate(&self) -> Result<()> {
        if self.purchases < 0 || self.users < 0 {
            return Err(ValidationError::InvalidInput(
                "purchases and users must be non-negative".to_string(),
            )
            .into());
        }
        if self.retention < Decimal::ZERO || self.retention > Decimal::ONE_HUNDRED {
            return Err(ValidationError::InvalidInput(
                "retention must be a percentage between 0 and 100".to_string(),
            )
            .into());
        }
        if self.revenue.is_sign_negative() || self.lifetime_value.is_sign_negative() {
            return Err(ValidationError::InvalidInput(
                "revenue and lifetime value must be non-negative".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Build the campaign frame with the contract column order.
pub fn campaign_frame(records: &[CampaignRecord]) -> Result<Frame> {
    let mut frame = Frame::new();
    frame.push_column(
        "campaign_id",
        records.iter().map(|r| Value::Int(r.campaign_id)).collect(),
    )?;
    frame.push_column(
        "campaign_name",
        records
            .iter()
            .map(|r| Value::Text(r.campaign_name.clone()))
            .collect(),
    )?;
    frame.push_column("date", records.iter().map(|r| Value::Date(r.date)).collect())?;
    frame.push_column(
        "platform",
        records
            .iter()
            .map(|r| Value::Text(r.platform.to_string()))
            .collect(),
    )?;
    frame.push_column(
        "region",
        records
            .iter()
            .map(|r| Value::Text(r.region.to_string()))
            .collect(),
    )?;
    frame.push_column(
        "impressions",
        records.iter().map(|r| Value::Int(r.impressions)).collect(),
    )?;
    frame.push_column("clicks", records.iter().map(|r| Value::Int(r.clicks)).collect())?;
    frame.push_column(
        "installs",
        records.iter().map(|r| Value::Int(r.installs)).collect(),
    )?;
    frame.push_column("spend", records.iter().map(|r| Value::Number(r.spend)).collect())?;
    frame.push_column(
        "revenue",
        records.iter().map(|r| Value::Number(r.revenue)).collect(),
    )?;
    Ok(frame)
}

/// Build the sales frame with the contract column order.
pub fn sales_frame(records: &[SalesRecord]) -> Result<Frame> {
    let mut frame = Frame::new();
    frame.push_column(
        "campaign_id",
        records.iter().map(|r| Value::Int(r.campaign_id)).collect(),
    )?;
    frame.push_column("date", records.iter().map(|r| Value::Date(r.date)).collect())?;
    frame.push_column(
        "platform",
        records
            .iter()
            .map(|r| Value::Text(r.platform.to_string()))
            .collect(),
    )?;
    frame.push_column(
        "region",
        records
            .iter()
            .map(|r| Value::Text(r.region.to_string()))
            .collect(),
    )?;
    frame.push_column(
        "purchases",
        records.iter().map(|r| Value::Int(r.purchases)).collect(),
    )?;
    frame.push_column(
        "revenue",
        records.iter().map(|r| Value::Number(r.revenue)).collect(),
    )?;
    frame.push_column("users", records.iter().map(|r| Value::Int(r.users)).collect())?;
    frame.push_column(
        "retention",
        records.iter().map(|r| Value::Number(r.retention)).collect(),
    )?;
    frame.push_column(
        "lifetime_value",
        records
            .iter()
            .map(|r| Value::Number(r.lifetime_value))
            .collect(),
    )?;
    Ok(frame)
}
