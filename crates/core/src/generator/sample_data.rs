//! Seeded sampling of demo campaign and sales tables.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::constants::METRIC_DECIMAL_PRECISION;
use crate::dimensions::{Platform, Region};
use crate::errors::{Error, Result};
use crate::records::{campaign_frame, sales_frame, CampaignRecord, SalesRecord};
use crate::utils::DateRange;

use super::generator_model::{SampleConfig, SampleDatasets};

// Campaign-side sampling parameters.
const IMPRESSIONS_MEAN: f64 = 10_000.0;
const IMPRESSIONS_STD_DEV: f64 = 2_000.0;
const CTR_PERCENT: (f64, f64) = (1.5, 4.5);
const CONVERSION_PERCENT: (f64, f64) = (3.0, 15.0);
const SPEND_DOLLARS: (f64, f64) = (500.0, 2_000.0);
const REVENUE_MULTIPLIER: (f64, f64) = (0.8, 2.5);

// Sales-side sampling parameters.
const PURCHASE_RATE: (f64, f64) = (0.1, 0.4);
const ORDER_VALUE_DOLLARS: (f64, f64) = (30.0, 80.0);
const RETENTION_PERCENT: (f64, f64) = (40.0, 80.0);
const LTV_MULTIPLIER: (f64, f64) = (2.0, 5.0);

/// Generate one consistent campaign/sales table pair over the date range.
///
/// Rows are emitted campaign by campaign, then date, platform, region, with
/// ids assigned from roster position. The sales table reuses each campaign
/// row's installs, so per-row figures stay mutually plausible: purchases
/// are a fraction of installs and users equal installs exactly.
pub fn generate_sample_data(range: &DateRange, config: &SampleConfig) -> Result<SampleDatasets> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let impressions_dist = Normal::new(IMPRESSIONS_MEAN, IMPRESSIONS_STD_DEV)
        .map_err(|error| Error::Unexpected(error.to_string()))?;

    let days = range.days();
    let row_count =
        config.campaign_names.len() * days.len() * config.platforms.len() * config.regions.len();

    let mut campaign_records = Vec::with_capacity(row_count);
    for (index, name) in config.campaign_names.iter().enumerate() {
        let campaign_id = index as i64 + 1;
        for &date in &days {
            for &platform in &config.platforms {
                for &region in &config.regions {
                    let impressions = (impressions_dist.sample(&mut rng) as i64).max(0);
                    let ctr = sample(&mut rng, CTR_PERCENT);
                    let clicks = (impressions as f64 * ctr / 100.0) as i64;
                    let conversion = sample(&mut rng, CONVERSION_PERCENT);
                    let mut installs = (clicks as f64 * conversion / 100.0) as i64;
                    let mut spend = sample(&mut rng, SPEND_DOLLARS);
                    let mut revenue = spend * sample(&mut rng, REVENUE_MULTIPLIER);

                    // Platform and region uplifts keep the spread realistic.
                    match platform {
                        Platform::Ios => {
                            spend *= 1.2;
                            revenue *= 1.3;
                        }
                        Platform::Android => {
                            installs = (installs as f64 * 1.3) as i64;
                        }
                        _ => {}
                    }
                    match region {
                        Region::NorthAmerica => {
                            spend *= 1.4;
                            revenue *= 1.5;
                        }
                        Region::Europe => {
                            spend *= 1.2;
                            revenue *= 1.3;
                        }
                        _ => {}
                    }

                    campaign_records.push(CampaignRecord {
                        campaign_id,
                        campaign_name: name.clone(),
                        date,
                        platform,
                        region,
                        impressions,
                        clicks,
                        installs,
                        spend: rounded(spend),
                        revenue: rounded(revenue),
                    });
                }
            }
        }
    }

    let mut sales_records = Vec::with_capacity(campaign_records.len());
    for record in &campaign_records {
        let purchases = (record.installs as f64 * sample(&mut rng, PURCHASE_RATE)) as i64;
        let revenue = purchases as f64 * sample(&mut rng, ORDER_VALUE_DOLLARS);
        let retention = sample(&mut rng, RETENTION_PERCENT);
        let lifetime_value = revenue / purchases.max(1) as f64 * sample(&mut rng, LTV_MULTIPLIER);

        sales_records.push(SalesRecord {
            campaign_id: record.campaign_id,
            date: record.date,
            platform: record.platform,
            region: record.region,
            purchases,
            revenue: rounded(revenue),
            users: record.installs,
            retention: rounded(retention),
            lifetime_value: rounded(lifetime_value),
        });
    }

    log::debug!(
        "generated {} campaign rows and {} sales rows from seed {}",
        campaign_records.len(),
        sales_records.len(),
        config.seed
    );

    Ok(SampleDatasets {
        campaign: campaign_frame(&campaign_records)?,
        sales: sales_frame(&sales_records)?,
    })
}

fn sample(rng: &mut StdRng, (low, high): (f64, f64)) -> f64 {
    rng.gen_range(low..high)
}

fn rounded(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .unwrap_or_default()
        .round_dp(METRIC_DECIMAL_PRECISION)
}
