use rusqlite::{Connection, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Mutex;
use tauri::AppHandle;

/// Store keys. Values are JSON documents shaped exactly like the payloads
/// the webview reads and writes, so stored data survives frontend swaps.
pub mod keys {
    pub const SCRIPT_URL: &str = "scriptUrl";
    pub const WORKER_PROFILES: &str = "workerProfiles";
    pub const BASE_SALARIES: &str = "baseSalaries";
    pub const ADVANCES: &str = "advances";
    pub const PAYMENT_STATUSES: &str = "paymentStatuses";

    pub const ALL: [&str; 5] = [
        SCRIPT_URL,
        WORKER_PROFILES,
        BASE_SALARIES,
        ADVANCES,
        PAYMENT_STATUSES,
    ];
}

pub struct Database {
    pub conn: Mutex<Connection>,
}

impl Database {
    pub fn new(app_handle: &AppHandle) -> Result<Self> {
        let app_dir = app_handle
            .path()
            .app_data_dir()
            .expect("Failed to get app data dir");

        std::fs::create_dir_all(&app_dir).expect("Failed to create app data directory");

        let db_path: PathBuf = app_dir.join("tailors_payroll.db");
        let conn = Connection::open(db_path)?;

        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    pub fn initialize(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute_batch(
            "
            -- One JSON document per key
            CREATE TABLE IF NOT EXISTS store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;

        Ok(())
    }

    /// Read and decode the document stored under `key`, if any.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> std::result::Result<Option<T>, String> {
        let conn = self.conn.lock().map_err(|e| e.to_string())?;

        let stored: Result<String> = conn.query_row(
            "SELECT value FROM store WHERE key = ?1",
            [key],
            |row| row.get(0),
        );

        match stored {
            Ok(json) => {
                let value = serde_json::from_str(&json).map_err(|e| e.to_string())?;
                Ok(Some(value))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn load_or_default<T: DeserializeOwned + Default>(
        &self,
        key: &str,
    ) -> std::result::Result<T, String> {
        Ok(self.load(key)?.unwrap_or_default())
    }

    /// Encode `value` and replace whatever is stored under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> std::result::Result<(), String> {
        let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
        let conn = self.conn.lock().map_err(|e| e.to_string())?;

        conn.execute(
            "INSERT OR REPLACE INTO store (key, value) VALUES (?1, ?2)",
            rusqlite::params![key, json],
        )
        .map_err(|e| e.to_string())?;

        Ok(())
    }

    pub fn remove(&self, key: &str) -> std::result::Result<(), String> {
        let conn = self.conn.lock().map_err(|e| e.to_string())?;

        conn.execute("DELETE FROM store WHERE key = ?1", [key])
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}

use tauri::Manager;

pub trait DatabaseExt {
    fn db(&self) -> &Database;
}

impl DatabaseExt for AppHandle {
    fn db(&self) -> &Database {
        self.state::<Database>().inner()
    }
}
