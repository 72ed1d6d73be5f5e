use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::model::SalesRecordDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::sales_performance::dsl as sales_dsl;
use adlytics_core::records::SalesRecord;
use adlytics_core::sources::SalesRepositoryTrait;
use adlytics_core::utils::DateRange;
use adlytics_core::Result;

pub struct SalesRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl SalesRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    /// Inserts or replaces sales rows, keyed on
    /// (campaign_id, date, platform, region).
    pub async fn upsert_sales(&self, records: &[SalesRecord]) -> Result<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        let db_rows: Vec<SalesRecordDB> = records.iter().map(SalesRecordDB::from).collect();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut total_upserted = 0;
                for chunk in db_rows.chunks(1_000) {
                    total_upserted += diesel::replace_into(sales_dsl::sales_performance)
                        .values(chunk)
                        .execute(conn)
                        .map_err(|e| StorageError::QueryFailed(e))?;
                }
                Ok(total_upserted)
            })
            .await
    }
}

impl SalesRepositoryTrait for SalesRepository {
    fn get_sales_records(&self, range: &DateRange) -> Result<Vec<SalesRecord>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = sales_dsl::sales_performance
            .filter(sales_dsl::date.between(
                range.start.format("%Y-%m-%d").to_string(),
                range.end.format("%Y-%m-%d").to_string(),
            ))
            .order((
                sales_dsl::campaign_id.asc(),
                sales_dsl::date.asc(),
                sales_dsl::platform.asc(),
                sales_dsl::region.asc(),
            ))
            .select(SalesRecordDB::as_select())
            .load::<SalesRecordDB>(&mut conn)
            .map_err(|e| StorageError::QueryFailed(e))?;

        Ok(rows.into_iter().map(SalesRecord::from).collect())
    }
}
