use crate::db::{keys, Database};
use crate::models::{DailyEntry, MonthView, PaymentLedger, WorkerTotals};
use crate::payroll;
use std::collections::HashMap;
use std::sync::Mutex;
use tauri::AppHandle;

/// Raw remote data for the month the user is looking at.
#[derive(Debug, Clone, Default)]
pub struct MonthData {
    pub month: String,
    pub totals: Vec<WorkerTotals>,
    pub entries: Vec<DailyEntry>,
    pub workers: Vec<String>,
}

struct Inner {
    seq: u64,
    data: MonthData,
}

/// Snapshot of the loaded month plus a fetch generation counter. The counter
/// keeps a slow fetch for a month the user already left from clobbering the
/// one they switched to.
pub struct MonthCache {
    inner: Mutex<Inner>,
}

impl MonthCache {
    pub fn new() -> Self {
        MonthCache {
            inner: Mutex::new(Inner {
                seq: 0,
                data: MonthData {
                    month: payroll::current_month(),
                    ..Default::default()
                },
            }),
        }
    }

    /// Start a fetch. The returned token wins until the next one is handed
    /// out.
    pub fn begin_fetch(&self) -> Result<u64, String> {
        let mut inner = self.inner.lock().map_err(|e| e.to_string())?;
        inner.seq += 1;
        Ok(inner.seq)
    }

    /// Install fetched data unless a newer fetch has started since `token`.
    /// Returns whether the data was installed.
    pub fn commit(&self, token: u64, data: MonthData) -> Result<bool, String> {
        let mut inner = self.inner.lock().map_err(|e| e.to_string())?;
        if token != inner.seq {
            return Ok(false);
        }
        inner.data = data;
        Ok(true)
    }

    /// Drop the datasets after a failed fetch, keeping `month` as the shown
    /// month. Same staleness rule as `commit`.
    pub fn reset(&self, token: u64, month: &str) -> Result<bool, String> {
        let mut inner = self.inner.lock().map_err(|e| e.to_string())?;
        if token != inner.seq {
            return Ok(false);
        }
        inner.data = MonthData {
            month: month.to_string(),
            ..Default::default()
        };
        Ok(true)
    }

    pub fn snapshot(&self) -> Result<MonthData, String> {
        let inner = self.inner.lock().map_err(|e| e.to_string())?;
        Ok(inner.data.clone())
    }

    /// Unconditional wipe back to an empty current month (configuration
    /// reset). Invalidates any fetch still in flight.
    pub fn clear(&self) -> Result<(), String> {
        let mut inner = self.inner.lock().map_err(|e| e.to_string())?;
        inner.seq += 1;
        inner.data = MonthData {
            month: payroll::current_month(),
            ..Default::default()
        };
        Ok(())
    }

    /// Derive the frontend view for the cached month.
    pub fn view(&self, db: &Database) -> Result<MonthView, String> {
        let data = self.snapshot()?;
        view_of(db, &data)
    }
}

/// Join raw month data with the stored adjustments and payment ledger.
pub fn view_of(db: &Database, data: &MonthData) -> Result<MonthView, String> {
    let base_salaries: HashMap<String, f64> = db.load_or_default(keys::BASE_SALARIES)?;
    let advances: HashMap<String, f64> = db.load_or_default(keys::ADVANCES)?;
    let ledger: PaymentLedger = db.load_or_default(keys::PAYMENT_STATUSES)?;
    let month_statuses = ledger.get(&data.month).cloned().unwrap_or_default();

    Ok(MonthView {
        month: data.month.clone(),
        summary: payroll::derive_summary(&data.totals, &base_salaries, &advances, &month_statuses),
        entries: data.entries.clone(),
        workers: data.workers.clone(),
    })
}

use tauri::Manager;

pub trait MonthCacheExt {
    fn month_cache(&self) -> &MonthCache;
}

impl MonthCacheExt for AppHandle {
    fn month_cache(&self) -> &MonthCache {
        self.state::<MonthCache>().inner()
    }
}
