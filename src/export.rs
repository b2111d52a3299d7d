use crate::models::WorkerSummary;

const BOM: &str = "\u{feff}";

const HEADERS: [&str; 9] = [
    "Worker Name",
    "Total Items",
    "Piecework Salary",
    "Base Salary",
    "Advance",
    "Final Salary",
    "Payment Status",
    "Payment Date",
    "Notes",
];

/// Spreadsheet-ready rendition of a month's summary. Leads with a BOM so
/// Excel picks up UTF-8; rows are newline-joined with no trailing newline.
/// Money columns get two decimals, item counts keep their shortest form.
pub fn summary_csv(summary: &[WorkerSummary]) -> String {
    let mut lines = vec![HEADERS.join(",")];

    for item in summary {
        let (status, paid_date, notes) = match &item.payment_status {
            Some(s) => ("Paid", s.paid_date.as_str(), s.notes.as_str()),
            None => ("Unpaid", "", ""),
        };
        lines.push(format!(
            "{},{},{:.2},{:.2},{:.2},{:.2},{},{},{}",
            quoted(&item.worker_name),
            item.total_items,
            item.total_salary,
            item.base_salary,
            item.advance,
            item.final_salary,
            status,
            paid_date,
            quoted(notes),
        ));
    }

    format!("{BOM}{}", lines.join("\n"))
}

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

pub fn export_filename(month: &str) -> String {
    format!("payroll_summary_{month}.csv")
}
