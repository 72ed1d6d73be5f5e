//! The combiner: one unified table out of the two derived tables.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::constants::{
    BOUNCE_RATE_MAX, BOUNCE_RATE_MIN, EXTENDED_KEY_COLUMNS, METRIC_DECIMAL_PRECISION,
    PRIMARY_KEY_COLUMN,
};
use crate::errors::Result;
use crate::frame::{Frame, Value};
use crate::metrics::scaled_ratio;

use super::collisions::resolve_collisions;
use super::combine_model::{CombineOptions, CombineOutput, CombineWarning, JoinStrategy, TableSide};
use super::concat::concat_columns;
use super::join::{outer_join, MergedFrame};

/// Combine the campaign and sales tables into the unified table.
///
/// The join key starts as `campaign_id` and widens to
/// `(campaign_id, date, platform, region)` when all three extension columns
/// exist in both inputs. Without `campaign_id` on both sides there is no
/// keyed join at all: the tables are concatenated positionally and the
/// degradation is reported through warnings, never silently.
///
/// After the merge: collisions resolve by explicit precedence,
/// `cost_per_purchase` is computed when `spend` and `purchases` both
/// survived resolution, and a missing `bounce_rate` is backfilled with
/// seeded placeholder values. Missing markers introduced by unmatched rows
/// stay in place here; the caller's final coercion pass flattens them.
pub fn combine(campaign: &Frame, sales: &Frame, options: &CombineOptions) -> Result<CombineOutput> {
    let mut warnings = Vec::new();
    for (frame, side) in [(campaign, TableSide::Campaign), (sales, TableSide::Sales)] {
        if !frame.has_column(PRIMARY_KEY_COLUMN) {
            warnings.push(CombineWarning::MissingJoinKey {
                side,
                column: PRIMARY_KEY_COLUMN.to_string(),
            });
        }
    }

    let keyed = campaign.has_column(PRIMARY_KEY_COLUMN) && sales.has_column(PRIMARY_KEY_COLUMN);
    let (merged, strategy) = if keyed {
        let mut key = vec![PRIMARY_KEY_COLUMN.to_string()];
        if EXTENDED_KEY_COLUMNS
            .iter()
            .all(|column| campaign.has_column(column) && sales.has_column(column))
        {
            key.extend(EXTENDED_KEY_COLUMNS.iter().map(|column| column.to_string()));
        }
        log::debug!("joining campaign and sales tables on {:?}", key);
        (
            outer_join(campaign, sales, &key)?,
            JoinStrategy::Keyed { key },
        )
    } else {
        warnings.push(CombineWarning::PositionalFallback {
            campaign_rows: campaign.row_count(),
            sales_rows: sales.row_count(),
        });
        (concat_columns(campaign, sales)?, JoinStrategy::Positional)
    };

    let MergedFrame {
        mut frame,
        collisions,
    } = merged;
    resolve_collisions(&mut frame, &collisions)?;

    if let (Some(spend), Some(purchases)) = (frame.column("spend"), frame.column("purchases")) {
        let values: Vec<Value> = spend
            .values()
            .iter()
            .zip(purchases.values())
            .map(|(spend, purchases)| {
                scaled_ratio(spend.as_decimal(), purchases.as_decimal(), None)
            })
            .collect();
        frame.set_column("cost_per_purchase", values)?;
    }

    if !frame.has_column("bounce_rate") {
        let values = synthetic_bounce_rates(frame.row_count(), options.bounce_rate_seed);
        frame.push_column("bounce_rate", values)?;
        warnings.push(CombineWarning::SyntheticBounceRate {
            seed: options.bounce_rate_seed,
        });
    }

    for warning in &warnings {
        log::warn!("combine: {}", warning);
    }

    Ok(CombineOutput {
        frame,
        strategy,
        warnings,
    })
}

/// Placeholder bounce rates in `[BOUNCE_RATE_MIN, BOUNCE_RATE_MAX]`,
/// reproducible from the seed.
fn synthetic_bounce_rates(rows: usize, seed: u64) -> Vec<Value> {
    let mut rng = StdRng::seed_from_u64(seed);
    let range = Uniform::new_inclusive(BOUNCE_RATE_MIN, BOUNCE_RATE_MAX);
    (0..rows)
        .map(|_| {
            let sampled: f64 = range.sample(&mut rng);
            Value::Number(
                Decimal::from_f64(sampled)
                    .unwrap_or_default()
                    .round_dp(METRIC_DECIMAL_PRECISION),
            )
        })
        .collect()
}
