use crate::cache::MonthCacheExt;
use crate::db::{keys, DatabaseExt};
use crate::models::{Adjustments, MonthView};
use std::collections::HashMap;
use tauri::AppHandle;

#[tauri::command]
pub fn get_adjustments(app: AppHandle) -> Result<Adjustments, String> {
    let db = app.db();

    Ok(Adjustments {
        base_salaries: db.load_or_default(keys::BASE_SALARIES)?,
        advances: db.load_or_default(keys::ADVANCES)?,
    })
}

/// Replace the stored base salary map wholesale and hand back the
/// recomputed month.
#[tauri::command]
pub fn set_base_salaries(
    app: AppHandle,
    salaries: HashMap<String, f64>,
) -> Result<MonthView, String> {
    let db = app.db();
    db.save(keys::BASE_SALARIES, &salaries)?;

    app.month_cache().view(db)
}

#[tauri::command]
pub fn set_advances(app: AppHandle, advances: HashMap<String, f64>) -> Result<MonthView, String> {
    let db = app.db();
    db.save(keys::ADVANCES, &advances)?;

    app.month_cache().view(db)
}
