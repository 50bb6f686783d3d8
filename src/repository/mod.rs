//! Repository facades consumed by the UI and use-case layers.
//!
//! Thin over the stores: resolve file locations through the
//! [`PathResolver`](crate::paths::PathResolver), validate ids, delegate. Both
//! repositories are cheap to clone and safe to share across tasks; every
//! surface sharing a clone observes the same committed snapshots.

use crate::error::{Result, StoreError};
use crate::models::{AppSettings, GameItem};
use crate::paths::PathResolver;
use crate::state::{GameLibraryStore, SettingsStore};
use camino::Utf8PathBuf;
use std::io;
use std::sync::Arc;
use tokio::sync::watch;

/// Map a path-resolver failure into the persistence condition.
fn resolve(path: anyhow::Result<Utf8PathBuf>) -> Result<Utf8PathBuf> {
    path.map_err(|e| StoreError::Persistence(io::Error::other(e)))
}

/// The game library: ordered, uniquely keyed by id, durably persisted.
#[derive(Clone, Debug)]
pub struct GameRepository {
    store: Arc<GameLibraryStore>,
}

impl GameRepository {
    /// Open the repository from persisted state. A missing file is an empty
    /// library; a malformed one surfaces [`StoreError::CorruptState`] and the
    /// application chooses between halting and [`GameRepository::open_empty`].
    pub async fn open(paths: &dyn PathResolver) -> Result<Self> {
        let file = resolve(paths.game_list_file())?;
        Ok(Self {
            store: Arc::new(GameLibraryStore::load(file).await?),
        })
    }

    /// Open an empty library, discarding whatever the file holds. The file is
    /// rewritten on the first committed mutation.
    pub fn open_empty(paths: &dyn PathResolver) -> Result<Self> {
        let file = resolve(paths.game_list_file())?;
        Ok(Self {
            store: Arc::new(GameLibraryStore::empty(file)),
        })
    }

    /// Current snapshot in display order. Never blocks.
    pub fn games(&self) -> Vec<GameItem> {
        self.store.games()
    }

    /// Observe committed snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Vec<GameItem>> {
        self.store.subscribe()
    }

    /// Entry with the given id, or `None`. A miss is not an error; an empty
    /// id can never be stored, so it is just an ordinary miss.
    pub fn get_by_id(&self, id: &str) -> Option<GameItem> {
        self.store.get_by_id(id)
    }

    /// Insert at `index` (clamped), or replace the existing entry with the
    /// same id in place, keeping its position.
    pub async fn upsert(&self, game: GameItem, index: usize) -> Result<()> {
        if game.id.is_empty() {
            return Err(StoreError::InvalidId);
        }
        self.store.upsert(game, index).await
    }

    /// Remove by id; no-op when absent. Id validation applies only to the
    /// paths that introduce entries (`upsert`, `replace_all`); here an empty
    /// id is an absent one and the call is a no-op, not an `InvalidId` error.
    pub async fn remove_by_id(&self, id: &str) -> Result<()> {
        self.store.remove_by_id(id).await
    }

    /// Remove the entry at `index`.
    pub async fn remove_at(&self, index: usize) -> Result<()> {
        self.store.remove_at(index).await
    }

    /// Move an entry to a new position, shifting the entries between.
    pub async fn reorder(&self, from: usize, to: usize) -> Result<()> {
        self.store.reorder(from, to).await
    }

    /// Atomically replace the whole library.
    pub async fn replace_all(&self, games: Vec<GameItem>) -> Result<()> {
        if games.iter().any(|g| g.id.is_empty()) {
            return Err(StoreError::InvalidId);
        }
        self.store.replace_all(games).await
    }

    /// Empty the library.
    pub async fn clear(&self) -> Result<()> {
        self.store.clear().await
    }
}

/// The single app settings snapshot.
#[derive(Clone, Debug)]
pub struct SettingsRepository {
    store: Arc<SettingsStore>,
}

impl SettingsRepository {
    /// Open from persisted state; missing file → defaults, malformed file →
    /// [`StoreError::CorruptState`].
    pub async fn open(paths: &dyn PathResolver) -> Result<Self> {
        let file = resolve(paths.settings_file())?;
        Ok(Self {
            store: Arc::new(SettingsStore::load(file).await?),
        })
    }

    /// Open with the documented defaults, ignoring the persisted file.
    pub fn open_with_defaults(paths: &dyn PathResolver) -> Result<Self> {
        let file = resolve(paths.settings_file())?;
        Ok(Self {
            store: Arc::new(SettingsStore::with_defaults(file)),
        })
    }

    /// Current snapshot, copy semantics. Never blocks.
    pub fn settings_snapshot(&self) -> AppSettings {
        self.store.snapshot()
    }

    /// Observe committed snapshots.
    pub fn subscribe(&self) -> watch::Receiver<AppSettings> {
        self.store.subscribe()
    }

    /// Atomic whole-value replace.
    pub async fn update_settings(&self, settings: AppSettings) -> Result<()> {
        self.store.update_settings(settings).await
    }

    /// Serialized read-modify-write of the snapshot.
    pub async fn update<F>(&self, transform: F) -> Result<()>
    where
        F: FnOnce(&mut AppSettings),
    {
        self.store.update(transform).await
    }

    /// Commit the documented default snapshot.
    pub async fn reset_to_defaults(&self) -> Result<()> {
        self.store.reset_to_defaults().await
    }
}
