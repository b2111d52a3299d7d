use crate::cache::{self, MonthCacheExt, MonthData};
use crate::db::{keys, Database, DatabaseExt};
use crate::gateway::Gateway;
use crate::models::{CreateEntry, MonthView, SubmitOutcome, WorkerProfile};
use crate::payroll;
use tauri::AppHandle;
use tracing::debug;

fn gateway(db: &Database) -> Result<Gateway, String> {
    let url = db
        .load::<String>(keys::SCRIPT_URL)?
        .ok_or_else(|| "The payroll gateway is not configured".to_string())?;

    Gateway::new(url)
}

/// Load one month from the gateway into the cache and return it joined with
/// the stored adjustments. A fetch that loses to a newer one still returns
/// its own result, it just leaves the cache alone.
async fn refresh_month(app: &AppHandle, month: &str) -> Result<MonthView, String> {
    let db = app.db();
    let cache = app.month_cache();
    let gw = gateway(db)?;
    let token = cache.begin_fetch()?;

    match gw.fetch_month(month).await {
        Ok(payload) => {
            let data = MonthData {
                month: month.to_string(),
                totals: payload.totals,
                entries: payload.entries,
                workers: payload.workers,
            };
            let view = cache::view_of(db, &data)?;
            if !cache.commit(token, data)? {
                debug!("fetch for {month} superseded, cache left untouched");
            }
            Ok(view)
        }
        Err(e) => {
            if !cache.reset(token, month)? {
                debug!("failed fetch for {month} superseded, cache left untouched");
            }
            Err(e)
        }
    }
}

#[tauri::command]
pub async fn fetch_month_data(app: AppHandle, month: String) -> Result<MonthView, String> {
    refresh_month(&app, &month).await
}

#[tauri::command]
pub async fn submit_entry(app: AppHandle, entry: CreateEntry) -> Result<SubmitOutcome, String> {
    let entry = entry.validated()?;

    let db = app.db();

    // First sight of a worker registers a profile. The registration stays
    // even if the gateway write fails.
    let mut profiles: Vec<WorkerProfile> = db.load_or_default(keys::WORKER_PROFILES)?;
    if WorkerProfile::ensure(&mut profiles, &entry.worker_name) {
        db.save(keys::WORKER_PROFILES, &profiles)?;
    }

    gateway(db)?.submit_entry(&entry).await?;

    // The write landed. Refresh the entry's month, which can differ from the
    // displayed one, and report a refresh failure on its own so it does not
    // read as a failed submission.
    let month = payroll::month_of(&entry.date);
    match refresh_month(&app, &month).await {
        Ok(view) => Ok(SubmitOutcome {
            month,
            view: Some(view),
            fetch_error: None,
        }),
        Err(e) => Ok(SubmitOutcome {
            month,
            view: None,
            fetch_error: Some(e),
        }),
    }
}
