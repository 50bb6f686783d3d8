// Settings store: one observable snapshot backed by settings.json.

use crate::error::Result;
use crate::models::AppSettings;
use crate::storage;
use camino::Utf8PathBuf;
use tokio::sync::{Mutex, watch};

/// In-memory settings snapshot with the same commit discipline as the game
/// library: mutations pass a FIFO gate, persist, then publish. Because the
/// gate serializes every read-modify-write, two concurrent [`update`] calls
/// touching disjoint fields both land; there is no last-writer-wins race on
/// the whole object.
///
/// [`update`]: SettingsStore::update
#[derive(Debug)]
pub struct SettingsStore {
    /// Canonical value; the lock is the admission gate.
    value: Mutex<AppSettings>,

    /// Last committed snapshot.
    snapshot_tx: watch::Sender<AppSettings>,

    file: Utf8PathBuf,
}

impl SettingsStore {
    /// Open the store from its persisted file. Missing file → defaults;
    /// malformed file → [`CorruptState`](crate::error::StoreError::CorruptState).
    pub async fn load(file: Utf8PathBuf) -> Result<Self> {
        let settings = storage::load_settings(&file).await?;
        tracing::info!("Opened settings from {}", file);
        Ok(Self::from_value(file, settings))
    }

    /// Open with the documented defaults, ignoring the file until the first
    /// mutation commits. The explicit fallback after a corrupt load.
    pub fn with_defaults(file: Utf8PathBuf) -> Self {
        Self::from_value(file, AppSettings::default())
    }

    fn from_value(file: Utf8PathBuf, settings: AppSettings) -> Self {
        let (snapshot_tx, _) = watch::channel(settings.clone());
        Self {
            value: Mutex::new(settings),
            snapshot_tx,
            file,
        }
    }

    /// Last committed snapshot. Never blocks.
    pub fn snapshot(&self) -> AppSettings {
        self.snapshot_tx.borrow().clone()
    }

    /// Observe committed snapshots.
    pub fn subscribe(&self) -> watch::Receiver<AppSettings> {
        self.snapshot_tx.subscribe()
    }

    /// Replace the whole snapshot.
    pub async fn update_settings(&self, settings: AppSettings) -> Result<()> {
        self.commit(|value| *value = settings).await
    }

    /// Serialized read-modify-write: `transform` receives a mutable copy of
    /// the current snapshot and the result is committed as the new value.
    pub async fn update<F>(&self, transform: F) -> Result<()>
    where
        F: FnOnce(&mut AppSettings),
    {
        self.commit(transform).await
    }

    /// Commit the documented default snapshot.
    pub async fn reset_to_defaults(&self) -> Result<()> {
        tracing::info!("Resetting settings to defaults");
        self.commit(|value| *value = AppSettings::default()).await
    }

    async fn commit<F>(&self, transform: F) -> Result<()>
    where
        F: FnOnce(&mut AppSettings),
    {
        let mut value = self.value.lock().await;

        let mut updated = value.clone();
        transform(&mut updated);

        // Persist before publishing; on failure the canonical value is
        // untouched and the caller may retry.
        storage::save_settings(&self.file, &updated).await.map_err(|e| {
            tracing::warn!("Settings persist failed: {e}");
            e
        })?;

        *value = updated.clone();
        self.snapshot_tx.send_replace(updated);
        Ok(())
    }
}
