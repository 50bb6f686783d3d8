// ralaunch-data - Reactive data layer for the RaLaunch game launcher
//
// Presents the game library (ordered, uniquely keyed by id) and the app
// settings snapshot as observable single sources of truth, durably persisted
// to JSON files. The host application provides the UI, DI wiring, and the
// filesystem locations (via `paths::PathResolver`).

pub mod error;
pub mod logging;
pub mod models;
pub mod paths;
pub mod repository;
pub mod state;
pub mod storage;

// Re-export commonly used types for convenience
pub use error::StoreError;
pub use models::{AppSettings, GameItem, ThemeMode};
pub use paths::{DataDirPaths, PathResolver};
pub use repository::{GameRepository, SettingsRepository};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
