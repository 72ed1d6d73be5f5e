//! Result types for table combination.

use serde::Serialize;
use std::fmt;

use crate::constants::DEFAULT_BOUNCE_RATE_SEED;
use crate::frame::Frame;

/// Which input table a collided column came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TableSide {
    Campaign,
    Sales,
}

impl fmt::Display for TableSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSide::Campaign => write!(f, "campaign"),
            TableSide::Sales => write!(f, "sales"),
        }
    }
}

/// How the unified table was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum JoinStrategy {
    /// Full outer join on the named key columns.
    Keyed { key: Vec<String> },
    /// Side-by-side fallback without row correspondence guarantees.
    Positional,
}

impl JoinStrategy {
    pub fn is_degraded(&self) -> bool {
        matches!(self, JoinStrategy::Positional)
    }
}

/// Non-fatal conditions produced while combining. The load completes, but
/// callers must surface these instead of treating the result as a clean
/// keyed join.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum CombineWarning {
    /// A join key column is absent from one side.
    MissingJoinKey { side: TableSide, column: String },
    /// The combiner fell back to positional concatenation.
    PositionalFallback {
        campaign_rows: usize,
        sales_rows: usize,
    },
    /// `bounce_rate` was filled with generated placeholder values, not
    /// measured data.
    SyntheticBounceRate { seed: u64 },
}

impl fmt::Display for CombineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombineWarning::MissingJoinKey { side, column } => {
                write!(f, "{} table has no '{}' column; keyed join unavailable", side, column)
            }
            CombineWarning::PositionalFallback {
                campaign_rows,
                sales_rows,
            } => write!(
                f,
                "laid {} campaign rows beside {} sales rows positionally; row correspondence is not guaranteed",
                campaign_rows, sales_rows
            ),
            CombineWarning::SyntheticBounceRate { seed } => {
                write!(f, "bounce_rate backfilled with synthetic values (seed {})", seed)
            }
        }
    }
}

/// Tuning knobs for [`combine`](crate::combine::combine).
#[derive(Debug, Clone)]
pub struct CombineOptions {
    /// Seed for the synthetic bounce-rate backfill, explicit so repeated
    /// loads reproduce identical placeholder values.
    pub bounce_rate_seed: u64,
}

impl Default for CombineOptions {
    fn default() -> Self {
        CombineOptions {
            bounce_rate_seed: DEFAULT_BOUNCE_RATE_SEED,
        }
    }
}

/// The unified table together with how it was produced.
#[derive(Debug, Clone)]
pub struct CombineOutput {
    pub frame: Frame,
    pub strategy: JoinStrategy,
    pub warnings: Vec<CombineWarning>,
}

impl CombineOutput {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
