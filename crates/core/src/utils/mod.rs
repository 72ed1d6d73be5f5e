//! Shared helpers: date windows and display formatting.

mod format;
mod time_utils;


pub use format::format_number;
pub use time_utils::DateRange;
