use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::model::CampaignRecordDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::marketing_campaigns::dsl as campaigns_dsl;
use adlytics_core::records::CampaignRecord;
use adlytics_core::sources::CampaignRepositoryTrait;
use adlytics_core::utils::DateRange;
use adlytics_core::Result;

pub struct CampaignRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl CampaignRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    /// Inserts or replaces campaign rows, keyed on
    /// (campaign_id, date, platform, region).
    pub async fn upsert_campaigns(&self, records: &[CampaignRecord]) -> Result<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        let db_rows: Vec<CampaignRecordDB> =
            records.iter().map(CampaignRecordDB::from).collect();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut total_upserted = 0;
                for chunk in db_rows.chunks(1_000) {
                    total_upserted += diesel::replace_into(campaigns_dsl::marketing_campaigns)
                        .values(chunk)
                        .execute(conn)
                        .map_err(|e| StorageError::QueryFailed(e))?;
                }
                Ok(total_upserted)
            })
            .await
    }
}

impl CampaignRepositoryTrait for CampaignRepository {
    fn get_campaign_records(&self, range: &DateRange) -> Result<Vec<CampaignRecord>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = campaigns_dsl::marketing_campaigns
            .filter(campaigns_dsl::date.between(
                range.start.format("%Y-%m-%d").to_string(),
                range.end.format("%Y-%m-%d").to_string(),
            ))
            .order((
                campaigns_dsl::campaign_id.asc(),
                campaigns_dsl::date.asc(),
                campaigns_dsl::platform.asc(),
                campaigns_dsl::region.asc(),
            ))
            .select(CampaignRecordDB::as_select())
            .load::<CampaignRecordDB>(&mut conn)
            .map_err(|e| StorageError::QueryFailed(e))?;

        Ok(rows.into_iter().map(CampaignRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, write_actor::spawn_writer};
    use adlytics_core::dimensions::{Platform, Region};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    /// Creates a test repository backed by a temp database.
    /// Returns the temp dir as well to keep the file alive.
    async fn create_test_repository() -> (CampaignRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");

        // spawn_writer expects DbPool (not Arc<DbPool>), so clone the inner pool
        let writer = spawn_writer((*pool).clone());

        let repo = CampaignRepository::new(Arc::clone(&pool), writer);
        (repo, temp_dir)
    }

    fn test_record(campaign_id: i64, day: u32, spend: &str) -> CampaignRecord {
        CampaignRecord {
            campaign_id,
            campaign_name: format!("Campaign {}", campaign_id),
            date: NaiveDate::from_ymd_opt(2023, 6, day).unwrap(),
            platform: Platform::Ios,
            region: Region::NorthAmerica,
            impressions: 10_000,
            clicks: 500,
            installs: 50,
            spend: spend.parse().unwrap(),
            revenue: dec!(900.00),
        }
    }

    fn june() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_upsert_and_fetch_round_trip() {
        let (repo, _temp_dir) = create_test_repository().await;

        // Inserted out of order; reads come back sorted by (campaign, date).
        let records = vec![
            test_record(2, 3, "120.50"),
            test_record(1, 2, "80.00"),
            test_record(1, 1, "75.25"),
        ];
        let count = repo.upsert_campaigns(&records).await.unwrap();
        assert_eq!(count, 3);

        let fetched = repo.get_campaign_records(&june()).unwrap();
        assert_eq!(
            fetched,
            vec![
                test_record(1, 1, "75.25"),
                test_record(1, 2, "80.00"),
                test_record(2, 3, "120.50"),
            ]
        );
    }

    #[tokio::test]
    async fn test_upsert_replaces_row_with_same_key() {
        let (repo, _temp_dir) = create_test_repository().await;

        repo.upsert_campaigns(&[test_record(1, 1, "100.00")])
            .await
            .unwrap();
        repo.upsert_campaigns(&[test_record(1, 1, "250.00")])
            .await
            .unwrap();

        let fetched = repo.get_campaign_records(&june()).unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].spend, dec!(250.00));
    }

    #[tokio::test]
    async fn test_date_range_filter_is_inclusive() {
        let (repo, _temp_dir) = create_test_repository().await;

        repo.upsert_campaigns(&[
            test_record(1, 1, "10.00"),
            test_record(1, 15, "20.00"),
            test_record(1, 30, "30.00"),
        ])
        .await
        .unwrap();

        let first_half = DateRange::new(
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
        )
        .unwrap();
        let fetched = repo.get_campaign_records(&first_half).unwrap();
        assert_eq!(fetched.len(), 2);
        assert_eq!(fetched[0].spend, dec!(10.00));
        assert_eq!(fetched[1].spend, dec!(20.00));
    }

    #[tokio::test]
    async fn test_empty_upsert_is_a_no_op() {
        let (repo, _temp_dir) = create_test_repository().await;

        let count = repo.upsert_campaigns(&[]).await.unwrap();
        assert_eq!(count, 0);
        assert!(repo.get_campaign_records(&june()).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_range_outside_data_returns_empty() {
        let (repo, _temp_dir) = create_test_repository().await;

        repo.upsert_campaigns(&[test_record(1, 1, "10.00")])
            .await
            .unwrap();

        let july = DateRange::new(
            NaiveDate::from_ymd_opt(2023, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 7, 31).unwrap(),
        )
        .unwrap();
        assert!(repo.get_campaign_records(&july).unwrap().is_empty());
    }
}
