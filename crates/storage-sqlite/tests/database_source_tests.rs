//! End-to-end tests: seed SQLite through the repositories, read it back
//! through the `DatabaseSource` adapter, and run the pipeline over the
//! result.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::tempdir;

use adlytics_core::combine::CombineOptions;
use adlytics_core::dimensions::{Platform, Region};
use adlytics_core::frame::Value;
use adlytics_core::pipeline::process;
use adlytics_core::records::{CampaignRecord, SalesRecord};
use adlytics_core::sources::{DatabaseSource, DatasetSource, SourceKind};
use adlytics_core::utils::DateRange;

use adlytics_storage_sqlite::campaigns::CampaignRepository;
use adlytics_storage_sqlite::sales::SalesRepository;
use adlytics_storage_sqlite::{create_pool, init, run_migrations, spawn_writer};

struct Fixture {
    campaigns: Arc<CampaignRepository>,
    sales: Arc<SalesRepository>,
    _temp_dir: tempfile::TempDir,
}

fn setup() -> Fixture {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("adlytics.db");
    let db_path_str = db_path.to_string_lossy().to_string();

    init(&db_path_str).expect("Failed to init database");
    let pool = create_pool(&db_path_str).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer((*pool).clone());

    Fixture {
        campaigns: Arc::new(CampaignRepository::new(Arc::clone(&pool), writer.clone())),
        sales: Arc::new(SalesRepository::new(Arc::clone(&pool), writer)),
        _temp_dir: temp_dir,
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, d).unwrap()
}

fn june() -> DateRange {
    DateRange::new(day(1), day(30)).unwrap()
}

fn campaign_record(campaign_id: i64, d: u32) -> CampaignRecord {
    CampaignRecord {
        campaign_id,
        campaign_name: format!("Campaign {}", campaign_id),
        date: day(d),
        platform: Platform::Web,
        region: Region::Europe,
        impressions: 20_000,
        clicks: 400,
        installs: 80,
        spend: dec!(640.00),
        revenue: dec!(1280.00),
    }
}

fn sales_record(campaign_id: i64, d: u32) -> SalesRecord {
    SalesRecord {
        campaign_id,
        date: day(d),
        platform: Platform::Web,
        region: Region::Europe,
        purchases: 25,
        revenue: dec!(500.00),
        users: 80,
        retention: dec!(42.0),
        lifetime_value: dec!(262.50),
    }
}

#[tokio::test]
async fn test_database_source_produces_contract_frames() {
    let fixture = setup();

    fixture
        .campaigns
        .upsert_campaigns(&[campaign_record(1, 1), campaign_record(2, 2)])
        .await
        .unwrap();
    fixture
        .sales
        .upsert_sales(&[sales_record(1, 1)])
        .await
        .unwrap();

    let source = DatabaseSource::new(fixture.campaigns.clone(), fixture.sales.clone());
    assert_eq!(source.kind(), SourceKind::Database);

    let datasets = source.fetch(&june()).await.unwrap();

    assert_eq!(datasets.campaign.row_count(), 2);
    assert_eq!(
        datasets.campaign.column_names(),
        vec![
            "campaign_id",
            "campaign_name",
            "date",
            "platform",
            "region",
            "impressions",
            "clicks",
            "installs",
            "spend",
            "revenue",
        ]
    );
    assert_eq!(datasets.sales.row_count(), 1);
    assert_eq!(
        datasets.sales.column_names(),
        vec![
            "campaign_id",
            "date",
            "platform",
            "region",
            "purchases",
            "revenue",
            "users",
            "retention",
            "lifetime_value",
        ]
    );
    assert_eq!(
        datasets.campaign.value(0, "date"),
        Some(&Value::Date(day(1)))
    );
    assert_eq!(
        datasets.sales.value(0, "revenue"),
        Some(&Value::Number(dec!(500.00)))
    );
}

#[tokio::test]
async fn test_fetched_datasets_run_through_the_pipeline() {
    let fixture = setup();

    fixture
        .campaigns
        .upsert_campaigns(&[campaign_record(1, 1)])
        .await
        .unwrap();
    fixture
        .sales
        .upsert_sales(&[sales_record(1, 1)])
        .await
        .unwrap();

    let source = DatabaseSource::new(fixture.campaigns.clone(), fixture.sales.clone());
    let datasets = source.fetch(&june()).await.unwrap();

    let processed = process(
        datasets.campaign,
        datasets.sales,
        &CombineOptions::default(),
    )
    .unwrap();

    assert!(!processed.is_degraded());
    assert!(processed.warnings.is_empty());
    assert_eq!(processed.combined.row_count(), 1);
    // ctr = clicks / impressions * 100 = 400 / 20000 * 100
    assert_eq!(
        processed.combined.value(0, "ctr"),
        Some(&Value::Number(dec!(2.00)))
    );
    // arpu = sales revenue / users = 500 / 80
    assert_eq!(
        processed.combined.value(0, "arpu"),
        Some(&Value::Number(dec!(6.25)))
    );
}

#[tokio::test]
async fn test_empty_store_yields_empty_frames() {
    let fixture = setup();

    let source = DatabaseSource::new(fixture.campaigns.clone(), fixture.sales.clone());
    let datasets = source.fetch(&june()).await.unwrap();

    assert!(datasets.campaign.is_empty());
    assert!(datasets.sales.is_empty());
}
