//! Attribution partner API client.
//!
//! Fetches aggregated marketing reports from the partner's REST API with
//! Bearer token authentication.
//!
//! # API Endpoints
//!
//! - Performance: `{base}/partners/{app_id}/performance?from={start}&to={end}&grouping=campaign,platform,geo&metrics={...}`
//! - In-app events: `{base}/partners/{app_id}/in-app-events?from={start}&to={end}&grouping=campaign,platform,geo&event_names={...}`
//!
//! # Response Format
//!
//! Both endpoints wrap their rows in a `{"data": [...]}` envelope.

use std::time::Duration;

use chrono::NaiveDate;
use log::debug;
use reqwest::Client;

use crate::errors::AttributionError;
use crate::models::{EventRow, EventsReport, PerformanceReport, PerformanceRow};

const DEFAULT_BASE_URL: &str = "https://hq.appsflyer.com/api/v1";

/// Dimensions both report endpoints are grouped by.
const REPORT_GROUPING: &str = "campaign,platform,geo";

/// Measures requested from the performance endpoint.
const PERFORMANCE_METRICS: &str = "impressions,clicks,installs,cost,revenue";

/// Event names requested from the in-app events endpoint.
const REPORT_EVENT_NAMES: &str = "purchase,subscription,registration,retention";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the attribution partner's reporting API.
///
/// # Example
///
/// ```ignore
/// let client = AttributionClient::new("your-api-token".to_string(), "com.example.app".to_string());
/// let rows = client.get_performance_report(start, end).await?;
/// ```
pub struct AttributionClient {
    client: Client,
    base_url: String,
    api_token: String,
    app_id: String,
}

impl AttributionClient {
    /// Create a new client with the given API token and app id.
    pub fn new(api_token: String, app_id: String) -> Self {
        Self::with_timeout(api_token, app_id, REQUEST_TIMEOUT)
    }

    /// Create a new client with a custom request timeout.
    ///
    /// Requests that exceed the timeout surface as [`AttributionError::Timeout`].
    pub fn with_timeout(api_token: String, app_id: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token,
            app_id,
        }
    }

    /// Override the API base URL. Used for gateway deployments and tests.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Fetch the aggregated performance report for an inclusive date window.
    ///
    /// Rows are grouped by campaign, platform, and country, and carry the
    /// ad delivery measures (impressions, clicks, installs, cost, revenue).
    pub async fn get_performance_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PerformanceRow>, AttributionError> {
        let query = [
            ("from", start.format("%Y-%m-%d").to_string()),
            ("to", end.format("%Y-%m-%d").to_string()),
            ("grouping", REPORT_GROUPING.to_string()),
            ("metrics", PERFORMANCE_METRICS.to_string()),
        ];

        let body = self.fetch(&self.performance_url(), &query).await?;
        let report: PerformanceReport = serde_json::from_str(&body)?;

        debug!(
            "Fetched {} performance rows for app {}",
            report.data.len(),
            self.app_id
        );
        Ok(report.data)
    }

    /// Fetch the in-app events report for an inclusive date window.
    ///
    /// Rows are grouped like the performance report with one extra event
    /// dimension (purchase, subscription, registration, retention).
    pub async fn get_in_app_events(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<EventRow>, AttributionError> {
        let query = [
            ("from", start.format("%Y-%m-%d").to_string()),
            ("to", end.format("%Y-%m-%d").to_string()),
            ("grouping", REPORT_GROUPING.to_string()),
            ("event_names", REPORT_EVENT_NAMES.to_string()),
        ];

        let body = self.fetch(&self.events_url(), &query).await?;
        let report: EventsReport = serde_json::from_str(&body)?;

        debug!(
            "Fetched {} event rows for app {}",
            report.data.len(),
            self.app_id
        );
        Ok(report.data)
    }

    fn performance_url(&self) -> String {
        format!("{}/partners/{}/performance", self.base_url, self.app_id)
    }

    fn events_url(&self) -> String {
        format!("{}/partners/{}/in-app-events", self.base_url, self.app_id)
    }

    /// Fetch a report with Bearer token authentication.
    async fn fetch(&self, url: &str, query: &[(&str, String)]) -> Result<String, AttributionError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .header(reqwest::header::ACCEPT, "application/json")
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AttributionError::Timeout
                } else {
                    AttributionError::Network(e)
                }
            })?;

        // Check for credential rejection
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AttributionError::Unauthorized);
        }

        // Check for rate limiting
        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AttributionError::RateLimited);
        }

        // Check for other HTTP errors
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_else(|_| String::new());
            return Err(AttributionError::Api { status, message });
        }

        response.text().await.map_err(AttributionError::Network)
    }
}
