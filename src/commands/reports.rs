use crate::cache::MonthCacheExt;
use crate::db::DatabaseExt;
use crate::export;
use crate::models::ExportOutcome;
use tauri::AppHandle;

/// Render the cached month's summary to CSV and write it wherever the user
/// points the save dialog. Cancelling the dialog is not an error.
#[tauri::command]
pub fn export_summary(app: AppHandle) -> Result<ExportOutcome, String> {
    let db = app.db();
    let view = app.month_cache().view(db)?;

    let csv = export::summary_csv(&view.summary);
    let filename = export::export_filename(&view.month);

    let path = rfd::FileDialog::new()
        .set_file_name(filename.as_str())
        .save_file();

    let Some(path) = path else {
        return Ok(ExportOutcome {
            saved: false,
            path: None,
        });
    };

    std::fs::write(&path, csv).map_err(|e| format!("Failed to write {}: {e}", path.display()))?;

    Ok(ExportOutcome {
        saved: true,
        path: Some(path.to_string_lossy().to_string()),
    })
}
