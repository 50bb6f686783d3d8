//! Durable JSON codec for the game library and settings files.
//!
//! Every save encodes the full value in one pass and writes it to a sibling
//! temporary file, then renames over the target. A crash mid-write leaves
//! either the old complete file or the new complete file, never a truncated
//! one. Loads tolerate a missing file (empty list / default settings) but
//! report a malformed one as [`StoreError::CorruptState`] so the application
//! can decide the fallback policy.

use crate::error::{Result, StoreError};
use crate::models::{AppSettings, GameItem};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Serialize, de::DeserializeOwned};
use std::io;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

/// Serialize `value` as pretty-printed JSON and atomically replace `path`.
async fn write_json_atomic<T: Serialize>(path: &Utf8Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| StoreError::Persistence(e.into()))?;

    // Same directory as the target so the rename stays on one filesystem.
    let tmp = Utf8PathBuf::from(format!("{path}.tmp"));
    let mut file = File::create(&tmp).await?;
    file.write_all(json.as_bytes()).await?;
    // The data must reach stable storage before the rename makes it visible,
    // or a power loss could surface an empty renamed file.
    file.sync_all().await?;
    drop(file);
    fs::rename(&tmp, path).await?;
    Ok(())
}

/// Read and decode `path`. `Ok(None)` when the file does not exist.
async fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<Option<T>> {
    let text = match fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::Persistence(e)),
    };

    match serde_json::from_str(&text) {
        Ok(value) => Ok(Some(value)),
        Err(source) => Err(StoreError::CorruptState {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load the ordered game list, or an empty list when no file exists yet.
pub async fn load_game_list(path: &Utf8Path) -> Result<Vec<GameItem>> {
    let games: Vec<GameItem> = read_json(path).await?.unwrap_or_default();
    tracing::debug!("Loaded {} games from {}", games.len(), path);
    Ok(games)
}

/// Persist the full game list atomically.
pub async fn save_game_list(path: &Utf8Path, games: &[GameItem]) -> Result<()> {
    write_json_atomic(path, &games).await?;
    tracing::debug!("Saved {} games to {}", games.len(), path);
    Ok(())
}

/// Load the settings snapshot, or the documented defaults when no file exists.
pub async fn load_settings(path: &Utf8Path) -> Result<AppSettings> {
    match read_json(path).await? {
        Some(settings) => {
            tracing::debug!("Loaded settings from {}", path);
            Ok(settings)
        }
        None => {
            tracing::debug!("No settings file at {}, using defaults", path);
            Ok(AppSettings::default())
        }
    }
}

/// Persist the settings snapshot atomically.
pub async fn save_settings(path: &Utf8Path, settings: &AppSettings) -> Result<()> {
    write_json_atomic(path, settings).await?;
    tracing::debug!("Saved settings to {}", path);
    Ok(())
}
