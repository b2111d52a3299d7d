use crate::models::{PaymentLedger, PaymentStatus, WorkerSummary, WorkerTotals};
use std::collections::HashMap;

/// Join raw gateway totals with local base salaries, advances and payment
/// statuses. Workers missing an adjustment get 0; the final salary is
/// `totalSalary + baseSalary - advance` and may go negative. Output order
/// follows the input.
pub fn derive_summary(
    totals: &[WorkerTotals],
    base_salaries: &HashMap<String, f64>,
    advances: &HashMap<String, f64>,
    month_statuses: &HashMap<String, PaymentStatus>,
) -> Vec<WorkerSummary> {
    totals
        .iter()
        .map(|row| {
            let base_salary = base_salaries.get(&row.worker_name).copied().unwrap_or(0.0);
            let advance = advances.get(&row.worker_name).copied().unwrap_or(0.0);
            WorkerSummary {
                worker_name: row.worker_name.clone(),
                total_items: row.total_items,
                total_salary: row.total_salary,
                base_salary,
                advance,
                final_salary: row.total_salary + base_salary - advance,
                payment_status: month_statuses.get(&row.worker_name).cloned(),
            }
        })
        .collect()
}

/// Record a payment for `worker` in `month`. Re-confirming an already paid
/// worker replaces the notes but keeps the original paid date.
pub fn mark_paid(ledger: &mut PaymentLedger, month: &str, worker: &str, notes: String, today: String) {
    let month_statuses = ledger.entry(month.to_string()).or_default();
    let paid_date = month_statuses
        .get(worker)
        .map(|s| s.paid_date.clone())
        .unwrap_or(today);
    month_statuses.insert(worker.to_string(), PaymentStatus { paid_date, notes });
}

/// Drop the payment record for `worker` in `month`. The month map stays,
/// empty or not. Marking again later stamps a fresh date.
pub fn unmark_paid(ledger: &mut PaymentLedger, month: &str, worker: &str) {
    let month_statuses = ledger.entry(month.to_string()).or_default();
    month_statuses.remove(worker);
}

/// YYYY-MM of an entry date.
pub fn month_of(date: &str) -> String {
    date.get(..7).unwrap_or(date).to_string()
}

pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

pub fn current_month() -> String {
    chrono::Local::now().format("%Y-%m").to_string()
}
