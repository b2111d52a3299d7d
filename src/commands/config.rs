use crate::cache::MonthCacheExt;
use crate::db::{keys, DatabaseExt};
use crate::models::Settings;
use tauri::AppHandle;

const SCRIPT_URL_PREFIX: &str = "https://script.google.com/macros/s/";

#[tauri::command]
pub fn get_settings(app: AppHandle) -> Result<Settings, String> {
    let db = app.db();

    Ok(Settings {
        script_url: db.load(keys::SCRIPT_URL)?,
    })
}

#[tauri::command]
pub fn save_script_url(app: AppHandle, url: String) -> Result<Settings, String> {
    let url = url.trim().to_string();
    if !url.starts_with(SCRIPT_URL_PREFIX) {
        return Err(format!(
            "The gateway URL must start with {SCRIPT_URL_PREFIX}"
        ));
    }

    app.db().save(keys::SCRIPT_URL, &url)?;

    Ok(Settings {
        script_url: Some(url),
    })
}

/// Wipe every stored key and reset the cached month. The frontend asks for
/// confirmation before calling this.
#[tauri::command]
pub fn clear_settings(app: AppHandle) -> Result<(), String> {
    let db = app.db();
    for key in keys::ALL {
        db.remove(key)?;
    }

    app.month_cache().clear()
}
