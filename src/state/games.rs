// Ordered keyed store for the game library.
//
// Canonical state is an insertion-ordered map keyed by game id, guarded by a
// fair async mutex that doubles as the mutation admission gate. Committed
// snapshots are published through a watch channel; reads never touch the gate.

use crate::error::{Result, StoreError};
use crate::models::GameItem;
use crate::storage;
use camino::Utf8PathBuf;
use indexmap::IndexMap;
use tokio::sync::{Mutex, watch};

type Entries = IndexMap<String, GameItem>;

/// In-memory game library backed by `game_list.json`.
///
/// Mutations are admitted one at a time in arrival order (tokio's `Mutex` is
/// FIFO-fair): the working copy is mutated, persisted, and only then published
/// to observers. If the persist fails the working copy is discarded, so memory
/// never holds a value that is not also on disk.
#[derive(Debug)]
pub struct GameLibraryStore {
    /// Canonical entries; the lock is the admission gate.
    entries: Mutex<Entries>,

    /// Last committed snapshot in display order.
    snapshot_tx: watch::Sender<Vec<GameItem>>,

    /// Target of every persist, supplied by the path resolver at open time.
    file: Utf8PathBuf,
}

impl GameLibraryStore {
    /// Open the store from its persisted file.
    ///
    /// A missing file yields an empty library. A malformed file surfaces
    /// [`StoreError::CorruptState`]; use [`GameLibraryStore::empty`] if the
    /// application decides to discard it.
    pub async fn load(file: Utf8PathBuf) -> Result<Self> {
        let games = storage::load_game_list(&file).await?;
        tracing::info!("Opened game library with {} entries from {}", games.len(), file);
        Ok(Self::from_games(file, games))
    }

    /// Open an empty store, ignoring whatever the file currently holds.
    /// The file is not touched until the first mutation commits.
    pub fn empty(file: Utf8PathBuf) -> Self {
        Self::from_games(file, Vec::new())
    }

    fn from_games(file: Utf8PathBuf, games: Vec<GameItem>) -> Self {
        let entries: Entries = games.into_iter().map(|g| (g.id.clone(), g)).collect();
        let snapshot: Vec<GameItem> = entries.values().cloned().collect();
        let (snapshot_tx, _) = watch::channel(snapshot);
        Self {
            entries: Mutex::new(entries),
            snapshot_tx,
            file,
        }
    }

    /// Last committed snapshot in display order. Never blocks.
    pub fn games(&self) -> Vec<GameItem> {
        self.snapshot_tx.borrow().clone()
    }

    /// Entry with the given id, if present. Never blocks.
    pub fn get_by_id(&self, id: &str) -> Option<GameItem> {
        self.snapshot_tx.borrow().iter().find(|g| g.id == id).cloned()
    }

    /// Observe committed snapshots. The receiver always starts with the
    /// current value; intermediate states are never visible.
    pub fn subscribe(&self) -> watch::Receiver<Vec<GameItem>> {
        self.snapshot_tx.subscribe()
    }

    /// Insert `game` at `index` (clamped to the list length), or replace the
    /// existing entry with the same id in place.
    ///
    /// When the id already exists `index` is ignored and the entry keeps its
    /// position: callers refreshing metadata must not have the entry silently
    /// reordered. This asymmetry is deliberate.
    pub async fn upsert(&self, game: GameItem, index: usize) -> Result<()> {
        self.commit(|entries| {
            upsert_entry(entries, game, index);
            Ok(())
        })
        .await
    }

    /// Remove the entry with the given id. No-op when absent.
    pub async fn remove_by_id(&self, id: &str) -> Result<()> {
        self.commit(|entries| {
            entries.shift_remove(id);
            Ok(())
        })
        .await
    }

    /// Remove the entry at `index`.
    pub async fn remove_at(&self, index: usize) -> Result<()> {
        self.commit(|entries| {
            if index >= entries.len() {
                return Err(StoreError::OutOfRange {
                    index,
                    len: entries.len(),
                });
            }
            entries.shift_remove_index(index);
            Ok(())
        })
        .await
    }

    /// Move the entry at `from` to position `to`, shifting the span between.
    pub async fn reorder(&self, from: usize, to: usize) -> Result<()> {
        self.commit(|entries| {
            let len = entries.len();
            for index in [from, to] {
                if index >= len {
                    return Err(StoreError::OutOfRange { index, len });
                }
            }
            entries.move_index(from, to);
            Ok(())
        })
        .await
    }

    /// Atomically replace the whole sequence. Input order is preserved.
    pub async fn replace_all(&self, games: Vec<GameItem>) -> Result<()> {
        self.commit(|entries| {
            let mut replacement = Entries::with_capacity(games.len());
            for game in games {
                let id = game.id.clone();
                if replacement.insert(id.clone(), game).is_some() {
                    return Err(StoreError::DuplicateKey(id));
                }
            }
            *entries = replacement;
            Ok(())
        })
        .await
    }

    /// Empty the library.
    pub async fn clear(&self) -> Result<()> {
        self.commit(|entries| {
            entries.clear();
            Ok(())
        })
        .await
    }

    /// Admit one mutation: apply it to the canonical entries, persist the
    /// result, then publish. Any failure restores the pre-mutation state
    /// before the gate is released.
    async fn commit<F>(&self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Entries) -> Result<()>,
    {
        let mut entries = self.entries.lock().await;
        let rollback = entries.clone();

        if let Err(e) = mutate(&mut entries) {
            *entries = rollback;
            return Err(e);
        }

        let snapshot: Vec<GameItem> = entries.values().cloned().collect();
        if let Err(e) = storage::save_game_list(&self.file, &snapshot).await {
            tracing::warn!("Game list persist failed, rolling back: {e}");
            *entries = rollback;
            return Err(e);
        }

        self.snapshot_tx.send_replace(snapshot);
        Ok(())
    }
}

/// Apply the upsert rule to an entries map.
///
/// Existing id: value replaced, position kept, `index` ignored.
/// New id: inserted at `index` clamped to `[0, len]`.
fn upsert_entry(entries: &mut Entries, game: GameItem, index: usize) {
    if entries.contains_key(&game.id) {
        entries.insert(game.id.clone(), game);
    } else {
        let index = index.min(entries.len());
        entries.shift_insert(index, game.id.clone(), game);
    }
}
