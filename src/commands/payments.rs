use crate::cache::MonthCacheExt;
use crate::db::{keys, DatabaseExt};
use crate::models::{MonthView, PaymentLedger};
use crate::payroll;
use tauri::AppHandle;

/// Record a payment for `worker_name` in the month currently on screen.
/// Notes may be empty; confirming an already paid worker keeps the original
/// paid date.
#[tauri::command]
pub fn mark_worker_paid(
    app: AppHandle,
    worker_name: String,
    notes: String,
) -> Result<MonthView, String> {
    let db = app.db();
    let cache = app.month_cache();
    let month = cache.snapshot()?.month;

    let mut ledger: PaymentLedger = db.load_or_default(keys::PAYMENT_STATUSES)?;
    payroll::mark_paid(&mut ledger, &month, &worker_name, notes, payroll::today());
    db.save(keys::PAYMENT_STATUSES, &ledger)?;

    cache.view(db)
}

#[tauri::command]
pub fn unmark_worker_paid(app: AppHandle, worker_name: String) -> Result<MonthView, String> {
    let db = app.db();
    let cache = app.month_cache();
    let month = cache.snapshot()?.month;

    let mut ledger: PaymentLedger = db.load_or_default(keys::PAYMENT_STATUSES)?;
    payroll::unmark_paid(&mut ledger, &month, &worker_name);
    db.save(keys::PAYMENT_STATUSES, &ledger)?;

    cache.view(db)
}
