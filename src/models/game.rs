use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// One launchable entry in the game library.
///
/// The `id` is assigned by the caller when the entry is created and never
/// changes for the lifetime of the entry. The library guarantees that no two
/// entries share an id and that insertion order is the display order.
///
/// All fields carry serde defaults so that files written by older or newer
/// versions of the launcher still load: unknown fields are ignored, missing
/// fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameItem {
    /// Caller-assigned unique identifier. Immutable once stored.
    pub id: String,

    /// Name shown in the library list.
    pub displayed_name: String,

    /// Secondary line shown under the name (version, source, notes).
    pub displayed_description: String,

    /// Absolute path to the entry's icon image, when one has been extracted.
    pub icon_path_full: Option<Utf8PathBuf>,

    /// Lightweight pointer to an external game rather than a fully managed one.
    pub is_shortcut: bool,

    /// Whether the mod loader is injected when this entry is launched.
    pub mod_loader_enabled: bool,
}

impl Default for GameItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            displayed_name: String::new(),
            displayed_description: String::new(),
            icon_path_full: None,
            is_shortcut: false,
            mod_loader_enabled: false,
        }
    }
}

impl GameItem {
    /// Create a minimal entry with the given id and display name.
    pub fn new(id: impl Into<String>, displayed_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            displayed_name: displayed_name.into(),
            ..Self::default()
        }
    }
}
