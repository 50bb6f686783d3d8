//! Data models for the RaLaunch data layer.
//!
//! - [`GameItem`]: one entry of the game library, serialized into `game_list.json`
//! - [`AppSettings`]: the single settings snapshot, serialized into `settings.json`
//!
//! Both types are plain serde values with defaults on every field, so
//! persisted files survive version skew in both directions. The stores hand
//! out owned clones only; callers never receive a reference into a store's
//! internal state.

pub mod game;
pub mod settings;

pub use game::GameItem;
pub use settings::{AppSettings, ThemeMode};
