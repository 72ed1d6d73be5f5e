/// Decimal precision for derived ratio metrics
pub const METRIC_DECIMAL_PRECISION: u32 = 2;

/// Base join column; without it in both tables the combiner degrades to
/// positional concatenation
pub const PRIMARY_KEY_COLUMN: &str = "campaign_id";

/// Columns that extend the join key when present in both tables
pub const EXTENDED_KEY_COLUMNS: &[&str] = &["date", "platform", "region"];

/// Date column name shared by both tables
pub const DATE_COLUMN: &str = "date";

/// Campaign-side measure columns expected from every source
pub const CAMPAIGN_MEASURE_COLUMNS: &[&str] =
    &["impressions", "clicks", "installs", "spend", "revenue"];

/// Sales-side measure columns expected from every source
pub const SALES_MEASURE_COLUMNS: &[&str] =
    &["purchases", "revenue", "users", "retention", "lifetime_value"];

/// Count-shaped columns coerced to integers during ingest
pub const COUNT_COLUMNS: &[&str] = &["impressions", "clicks", "installs", "purchases", "users"];

/// Metric columns the deriver and combiner can add to a table
pub const DERIVED_METRIC_COLUMNS: &[&str] = &[
    "ctr",
    "conversion_rate",
    "cpa",
    "roi",
    "arpu",
    "cltv",
    "cost_per_purchase",
    "bounce_rate",
];

/// Suffix applied to campaign-side columns on a name collision
pub const CAMPAIGN_COLLISION_SUFFIX: &str = "_campaign";

/// Suffix applied to sales-side columns on a name collision
pub const SALES_COLLISION_SUFFIX: &str = "_sales";

/// Default seed for synthetic dataset generation
pub const DEFAULT_SAMPLE_SEED: u64 = 42;

/// Default seed for the synthetic bounce-rate backfill
pub const DEFAULT_BOUNCE_RATE_SEED: u64 = 42;

/// Bounds of the synthetic bounce-rate placeholder, in percent
pub const BOUNCE_RATE_MIN: f64 = 20.0;
pub const BOUNCE_RATE_MAX: f64 = 60.0;
