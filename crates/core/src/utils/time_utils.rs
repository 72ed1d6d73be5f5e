use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// An inclusive calendar date window.
///
/// Every source fetch and report slice is bounded by one of these. The
/// bounds are validated once at construction, so downstream code never has
/// to re-check ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ValidationError::InvalidInput(format!(
                "date range start {} is after end {}",
                start, end
            ))
            .into());
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Every date in the window, in order, both endpoints included.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut current = self.start;
        while current <= self.end {
            days.push(current);
            if let Some(next) = current.succ_opt() {
                current = next;
            } else {
                // Should not happen for typical date ranges
                break;
            }
        }
        days
    }

    pub fn day_count(&self) -> usize {
        self.days().len()
    }
}
