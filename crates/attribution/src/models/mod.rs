//! Attribution partner API response models.
//!
//! These models parse the aggregated report payloads returned by the
//! partner's `performance` and `in-app-events` endpoints. Every field is
//! optional on the wire; downstream normalization decides how to fill the
//! gaps.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Response wrapper for the aggregated performance report endpoint.
#[derive(Debug, Deserialize)]
pub struct PerformanceReport {
    pub data: Vec<PerformanceRow>,
}

/// One grouped row of the performance report.
///
/// Grouping is `campaign,platform,geo`, so a row carries the campaign
/// identity plus per-platform, per-country ad delivery measures.
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceRow {
    /// Campaign display name.
    pub campaign: Option<String>,
    /// Partner-assigned campaign id, when the account exposes one.
    pub campaign_id: Option<i64>,
    /// Report date in `YYYY-MM-DD` form.
    pub date: Option<String>,
    /// Raw platform token (`android`, `ios`, `web`).
    pub platform: Option<String>,
    /// ISO country code the partner groups by.
    pub geo: Option<String>,
    pub impressions: Option<i64>,
    pub clicks: Option<i64>,
    pub installs: Option<i64>,
    /// Ad spend; renamed to `spend` during normalization.
    pub cost: Option<Decimal>,
    pub revenue: Option<Decimal>,
}

/// Response wrapper for the in-app events report endpoint.
#[derive(Debug, Deserialize)]
pub struct EventsReport {
    pub data: Vec<EventRow>,
}

/// One grouped row of the in-app events report.
///
/// Rows are keyed by event name on top of the campaign grouping; purchase
/// and retention rows feed the sales table, other event names are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRow {
    /// Campaign display name.
    pub campaign: Option<String>,
    /// Partner-assigned campaign id, when the account exposes one.
    pub campaign_id: Option<i64>,
    /// Report date in `YYYY-MM-DD` form.
    pub date: Option<String>,
    /// Raw platform token (`android`, `ios`, `web`).
    pub platform: Option<String>,
    /// ISO country code the partner groups by.
    pub geo: Option<String>,
    /// Which in-app event this row aggregates.
    pub event_name: Option<String>,
    /// Number of occurrences of the event.
    pub event_count: Option<i64>,
    /// Revenue attributed to the event.
    pub event_revenue: Option<Decimal>,
    /// Free-form numeric value; retention rows carry the retention percent.
    pub event_value: Option<Decimal>,
    /// Distinct users that triggered the event.
    pub unique_users: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decode_performance_report() {
        let payload = r#"{
            "data": [
                {
                    "campaign": "Summer Sale 2023",
                    "campaign_id": 1,
                    "date": "2023-06-01",
                    "platform": "ios",
                    "geo": "US",
                    "impressions": 10500,
                    "clicks": 320,
                    "installs": 41,
                    "cost": 1520.75,
                    "revenue": 2840.5
                }
            ]
        }"#;

        let report: PerformanceReport =
            serde_json::from_str(payload).expect("payload should decode");
        assert_eq!(report.data.len(), 1);

        let row = &report.data[0];
        assert_eq!(row.campaign.as_deref(), Some("Summer Sale 2023"));
        assert_eq!(row.campaign_id, Some(1));
        assert_eq!(row.platform.as_deref(), Some("ios"));
        assert_eq!(row.geo.as_deref(), Some("US"));
        assert_eq!(row.impressions, Some(10500));
        assert_eq!(row.cost, Some(dec!(1520.75)));
        assert_eq!(row.revenue, Some(dec!(2840.5)));
    }

    #[test]
    fn test_decode_tolerates_missing_and_unknown_fields() {
        let payload = r#"{
            "data": [
                {
                    "campaign": "Back to School",
                    "date": "2023-06-01",
                    "media_source": "partner_int",
                    "impressions": 900
                }
            ]
        }"#;

        let report: PerformanceReport =
            serde_json::from_str(payload).expect("payload should decode");

        let row = &report.data[0];
        assert_eq!(row.campaign_id, None);
        assert_eq!(row.clicks, None);
        assert_eq!(row.cost, None);
        assert_eq!(row.impressions, Some(900));
    }

    #[test]
    fn test_decode_events_report() {
        let payload = r#"{
            "data": [
                {
                    "campaign": "Holiday Special",
                    "campaign_id": 3,
                    "date": "2023-06-02",
                    "platform": "android",
                    "geo": "DE",
                    "event_name": "purchase",
                    "event_count": 12,
                    "event_revenue": 540.25,
                    "unique_users": 30
                },
                {
                    "campaign": "Holiday Special",
                    "campaign_id": 3,
                    "date": "2023-06-02",
                    "platform": "android",
                    "geo": "DE",
                    "event_name": "retention",
                    "event_value": 62.5
                }
            ]
        }"#;

        let report: EventsReport = serde_json::from_str(payload).expect("payload should decode");
        assert_eq!(report.data.len(), 2);

        let purchase = &report.data[0];
        assert_eq!(purchase.event_name.as_deref(), Some("purchase"));
        assert_eq!(purchase.event_count, Some(12));
        assert_eq!(purchase.event_revenue, Some(dec!(540.25)));
        assert_eq!(purchase.unique_users, Some(30));

        let retention = &report.data[1];
        assert_eq!(retention.event_name.as_deref(), Some("retention"));
        assert_eq!(retention.event_value, Some(dec!(62.5)));
        assert_eq!(retention.event_count, None);
    }
}
