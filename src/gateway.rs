use crate::models::{CreateEntry, DailyEntry, WorkerTotals};
use futures::future::try_join3;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

const EMPTY_RANGE_EN: &str = "must be at least one";
const EMPTY_RANGE_AR: &str = "يجب ألا تقل الصفوف في النطاق عن صف واحد";

/// Script-side failures from an empty sheet range, in either language the
/// spreadsheet may run in. Treated as a valid empty month, not an error.
pub fn is_empty_range_error(message: &str) -> bool {
    message.contains(EMPTY_RANGE_EN) || message.contains(EMPTY_RANGE_AR)
}

/// Envelope around month-scoped rows. The script reports its own failures
/// in `error` alongside a 200 status.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct RowsResponse<T> {
    #[serde(default)]
    pub rows: Vec<T>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WorkersResponse {
    #[serde(default)]
    pub workers: Vec<String>,
    pub error: Option<String>,
}

/// One month of remote data, all three feeds.
#[derive(Debug, Clone, Default)]
pub struct MonthPayload {
    pub totals: Vec<WorkerTotals>,
    pub entries: Vec<DailyEntry>,
    pub workers: Vec<String>,
}

pub struct Gateway {
    base_url: String,
    client: reqwest::Client,
}

impl Gateway {
    pub fn new(base_url: String) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .map_err(|e| format!("HTTP client error: {e}"))?;

        Ok(Gateway { base_url, client })
    }

    /// Pull the three feeds for `month` concurrently. Script-side errors are
    /// combined summary first, then entries, then workers.
    pub async fn fetch_month(&self, month: &str) -> Result<MonthPayload, String> {
        let summary =
            self.get_json::<RowsResponse<WorkerTotals>>(&[("action", "summary"), ("month", month)]);
        let entries =
            self.get_json::<RowsResponse<DailyEntry>>(&[("action", "entries"), ("month", month)]);
        let workers = self.get_json::<WorkersResponse>(&[("action", "workers")]);

        let (summary, entries, workers) = try_join3(summary, entries, workers).await?;

        if let Some(message) = summary.error.or(entries.error).or(workers.error) {
            if is_empty_range_error(&message) {
                warn!("gateway reported an empty sheet for {month}, showing an empty month");
                return Ok(MonthPayload::default());
            }
            return Err(message);
        }

        Ok(MonthPayload {
            totals: summary.rows,
            entries: entries.rows,
            workers: workers.workers,
        })
    }

    /// Append one entry. The script answers cross-origin posts opaquely, so
    /// the response is not read; only transport failures are errors.
    pub async fn submit_entry(&self, entry: &CreateEntry) -> Result<(), String> {
        self.client
            .post(&self.base_url)
            .json(entry)
            .send()
            .await
            .map_err(|e| format!("Gateway request failed: {e}"))?;

        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, query: &[(&str, &str)]) -> Result<T, String> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(query)
            .send()
            .await
            .map_err(|e| format!("Gateway request failed: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("Gateway error ({})", resp.status()));
        }

        resp.json::<T>()
            .await
            .map_err(|e| format!("Gateway JSON parse error: {e}"))
    }
}
