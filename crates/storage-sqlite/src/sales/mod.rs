//! SQLite storage implementation for sales performance rows.

mod model;
mod repository;

pub use model::SalesRecordDB;
pub use repository::SalesRepository;
