use crate::db::{keys, DatabaseExt};
use crate::models::WorkerProfile;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tauri::AppHandle;

const MAX_PHOTO_BYTES: usize = 2 * 1024 * 1024; // 2MB limit
const PHOTO_PREFIXES: [&str; 2] = ["data:image/png;base64,", "data:image/jpeg;base64,"];

pub fn validate_photo(photo: &str) -> Result<(), String> {
    let encoded = PHOTO_PREFIXES
        .iter()
        .find_map(|prefix| photo.strip_prefix(prefix))
        .ok_or_else(|| "Photos must be PNG or JPEG images".to_string())?;

    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| format!("Photo data is not valid base64: {e}"))?;

    if bytes.len() > MAX_PHOTO_BYTES {
        return Err("File is too large. Please select an image under 2MB.".to_string());
    }

    Ok(())
}

#[tauri::command]
pub fn get_worker_profiles(app: AppHandle) -> Result<Vec<WorkerProfile>, String> {
    app.db().load_or_default(keys::WORKER_PROFILES)
}

#[tauri::command]
pub fn add_worker_profile(app: AppHandle, name: String) -> Result<Vec<WorkerProfile>, String> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err("Worker name is required".to_string());
    }

    let db = app.db();
    let mut profiles: Vec<WorkerProfile> = db.load_or_default(keys::WORKER_PROFILES)?;
    if WorkerProfile::ensure(&mut profiles, &name) {
        db.save(keys::WORKER_PROFILES, &profiles)?;
    }

    Ok(profiles)
}

/// Attach a photo to a profile, creating the profile if the name is new.
/// The payload is validated for type and size before anything is touched.
#[tauri::command]
pub fn update_worker_photo(
    app: AppHandle,
    worker_name: String,
    photo: String,
) -> Result<Vec<WorkerProfile>, String> {
    validate_photo(&photo)?;

    let db = app.db();
    let mut profiles: Vec<WorkerProfile> = db.load_or_default(keys::WORKER_PROFILES)?;
    match profiles.iter_mut().find(|p| p.name == worker_name) {
        Some(profile) => profile.photo = Some(photo),
        None => profiles.push(WorkerProfile {
            name: worker_name,
            photo: Some(photo),
        }),
    }
    db.save(keys::WORKER_PROFILES, &profiles)?;

    Ok(profiles)
}

#[tauri::command]
pub fn delete_worker_profile(
    app: AppHandle,
    worker_name: String,
) -> Result<Vec<WorkerProfile>, String> {
    let db = app.db();
    let mut profiles: Vec<WorkerProfile> = db.load_or_default(keys::WORKER_PROFILES)?;
    profiles.retain(|p| p.name != worker_name);
    db.save(keys::WORKER_PROFILES, &profiles)?;

    Ok(profiles)
}
