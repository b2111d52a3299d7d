use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Row ids are assigned by the spreadsheet backend and arrive either
/// numeric or as text.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum EntryId {
    Number(f64),
    Text(String),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    pub id: EntryId,
    pub worker_name: String,
    pub date: String, // YYYY-MM-DD
    pub items: f64,
    pub price: f64,
    pub daily_total: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntry {
    pub worker_name: String,
    pub date: String,
    pub items: f64,
    pub price: f64,
}

impl CreateEntry {
    /// Field checks in the order the form presents them. The returned entry
    /// carries the trimmed worker name.
    pub fn validated(mut self) -> Result<Self, String> {
        let name = self.worker_name.trim();
        if name.is_empty() {
            return Err("Worker name is required".to_string());
        }
        if self.date.is_empty() {
            return Err("Date is required".to_string());
        }
        if self.items.is_nan() || self.items <= 0.0 {
            return Err("Items delivered must be greater than zero".to_string());
        }
        if self.price.is_nan() || self.price < 0.0 {
            // Price can be 0
            return Err("Price per item cannot be negative".to_string());
        }
        self.worker_name = name.to_string();
        Ok(self)
    }
}

/// Per-worker monthly totals as the gateway reports them.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorkerTotals {
    pub worker_name: String,
    pub total_items: f64,
    pub total_salary: f64,
}

/// Totals joined with local adjustments. Derived on demand, never stored.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorkerSummary {
    pub worker_name: String,
    pub total_items: f64,
    pub total_salary: f64,
    pub base_salary: f64,
    pub advance: f64,
    pub final_salary: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatus {
    pub paid_date: String, // YYYY-MM-DD
    pub notes: String,
}

/// month -> worker -> status. A worker absent from their month is unpaid.
pub type PaymentLedger = HashMap<String, HashMap<String, PaymentStatus>>;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorkerProfile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>, // base64 data URL
}

impl WorkerProfile {
    /// Register `name` unless a profile for it already exists. Returns true
    /// when a profile was added.
    pub fn ensure(profiles: &mut Vec<WorkerProfile>, name: &str) -> bool {
        if profiles.iter().any(|p| p.name == name) {
            return false;
        }
        profiles.push(WorkerProfile {
            name: name.to_string(),
            photo: None,
        });
        true
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Adjustments {
    pub base_salaries: HashMap<String, f64>,
    pub advances: HashMap<String, f64>,
}

/// Everything the frontend renders for one month.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MonthView {
    pub month: String, // YYYY-MM
    pub summary: Vec<WorkerSummary>,
    pub entries: Vec<DailyEntry>,
    pub workers: Vec<String>,
}

/// Result of submitting an entry: the write succeeded, the follow-up fetch
/// of the entry's month may still have failed on its own.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOutcome {
    pub month: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<MonthView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExportOutcome {
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
