mod assistant;
mod cache;
mod commands;
mod db;
mod export;
mod gateway;
mod models;
mod payroll;


use cache::MonthCache;
use commands::{adjustments, chat, config, entries, payments, reports, workers};
use db::Database;
use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .setup(|app| {
            // Initialize database
            let db = Database::new(&app.handle()).expect("Failed to create database");
            db.initialize().expect("Failed to initialize database");
            app.manage(db);

            app.manage(MonthCache::new());

            info!("tailors payroll started");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Configuration
            config::get_settings,
            config::save_script_url,
            config::clear_settings,
            // Month data
            entries::fetch_month_data,
            entries::submit_entry,
            // Adjustments
            adjustments::get_adjustments,
            adjustments::set_base_salaries,
            adjustments::set_advances,
            // Payments
            payments::mark_worker_paid,
            payments::unmark_worker_paid,
            // Workers
            workers::get_worker_profiles,
            workers::add_worker_profile,
            workers::update_worker_photo,
            workers::delete_worker_profile,
            // Reports
            reports::export_summary,
            // Assistant
            chat::ask_assistant,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
