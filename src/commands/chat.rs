use crate::assistant::{self, Snapshot};
use crate::cache::MonthCacheExt;
use crate::db::{keys, DatabaseExt};
use crate::models::Adjustments;
use tauri::AppHandle;

#[tauri::command]
pub async fn ask_assistant(app: AppHandle, question: String) -> Result<String, String> {
    let question = question.trim().to_string();
    if question.is_empty() {
        return Err("Ask a question first".to_string());
    }

    // Snapshot before going to the network so the answer matches what the
    // user is looking at.
    let snapshot = {
        let db = app.db();
        let view = app.month_cache().view(db)?;
        Snapshot {
            month: view.month,
            adjustments: Adjustments {
                base_salaries: db.load_or_default(keys::BASE_SALARIES)?,
                advances: db.load_or_default(keys::ADVANCES)?,
            },
            summary: view.summary,
            entries: view.entries,
        }
    };

    assistant::ask(&snapshot, &question).await
}
