//! Filesystem locations for the persisted stores.
//!
//! The data layer never computes its own paths; it is handed a
//! [`PathResolver`] at construction. Each accessor is responsible for making
//! sure the directory it points into exists before returning.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// File name of the game library index inside the games directory.
pub const GAME_LIST_FILE: &str = "game_list.json";

/// Supplies the locations of the persisted files.
///
/// Implemented by the host application (on Android the directories live under
/// the app's external files dir; tests point it at a temp dir).
pub trait PathResolver: Send + Sync {
    /// Directory holding `game_list.json` and per-game storage roots.
    fn games_dir(&self) -> Result<Utf8PathBuf>;

    /// Full path of the settings file.
    fn settings_file(&self) -> Result<Utf8PathBuf>;

    /// Directory holding control layout files.
    fn control_layouts_dir(&self) -> Result<Utf8PathBuf>;

    /// Full path of the game library index file.
    fn game_list_file(&self) -> Result<Utf8PathBuf> {
        Ok(self.games_dir()?.join(GAME_LIST_FILE))
    }
}

/// Default resolver rooting everything under a single data directory:
///
/// ```text
/// {data_dir}/games/game_list.json
/// {data_dir}/settings.json
/// {data_dir}/control_layouts/
/// ```
#[derive(Debug, Clone)]
pub struct DataDirPaths {
    data_dir: Utf8PathBuf,
}

impl DataDirPaths {
    pub fn new<P: AsRef<Utf8Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn ensure_dir(dir: &Utf8Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {dir}"))?;
        }
        Ok(())
    }
}

impl PathResolver for DataDirPaths {
    fn games_dir(&self) -> Result<Utf8PathBuf> {
        let dir = self.data_dir.join("games");
        Self::ensure_dir(&dir)?;
        Ok(dir)
    }

    fn settings_file(&self) -> Result<Utf8PathBuf> {
        Self::ensure_dir(&self.data_dir)?;
        Ok(self.data_dir.join("settings.json"))
    }

    fn control_layouts_dir(&self) -> Result<Utf8PathBuf> {
        let dir = self.data_dir.join("control_layouts");
        Self::ensure_dir(&dir)?;
        Ok(dir)
    }
}
