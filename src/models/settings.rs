use serde::{Deserialize, Serialize};

/// User-configurable launcher options, persisted as a single JSON object.
///
/// The store treats this as one atomic value: callers replace the whole
/// snapshot or commit a transformation of a copy, never individual fields.
/// Field names mirror the launcher's preference keys; every field has a serde
/// default so settings files survive version skew in both directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Appearance
    pub theme_mode: ThemeMode,
    pub theme_color: u32,
    pub background_image_path: String,
    pub background_opacity: u32,
    pub language: String,

    // Controls
    pub controls_opacity: f32,
    pub vibration_enabled: bool,
    pub virtual_controller_as_first: bool,
    pub back_button_open_menu: bool,

    // In-game overlay
    pub fps_display_enabled: bool,
    pub fps_display_x: f32,
    pub fps_display_y: f32,

    // Runtime
    pub renderer: String,
    pub target_fps: u32,
    pub set_thread_affinity_to_big_core: bool,

    // Developer
    pub log_system_enabled: bool,
    pub verbose_logging: bool,

    // Initialization state
    pub legal_agreed: bool,
    pub components_extracted: bool,

    /// Id of the active control layout under the layouts directory.
    pub current_layout_id: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::System,
            theme_color: 0xFF66_59A4,
            background_image_path: String::new(),
            background_opacity: 100,
            language: "en".to_string(),
            controls_opacity: 0.6,
            vibration_enabled: true,
            virtual_controller_as_first: false,
            back_button_open_menu: true,
            fps_display_enabled: false,
            fps_display_x: 0.0,
            fps_display_y: 0.0,
            renderer: "opengl".to_string(),
            target_fps: 60,
            set_thread_affinity_to_big_core: false,
            log_system_enabled: true,
            verbose_logging: false,
            legal_agreed: false,
            components_extracted: false,
            current_layout_id: String::new(),
        }
    }
}

impl AppSettings {
    /// Whether first-run initialization has completed.
    pub fn is_fully_initialized(&self) -> bool {
        self.legal_agreed && self.components_extracted
    }
}

/// Light/dark/system theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    System,
    Light,
    Dark,
}
