//! Game settings and preferences
//!
//! Physics is fixed (see [`crate::consts`]); only presentation and the
//! headless run script are configurable. Stored as JSON: a file on native,
//! LocalStorage in the browser.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FRAME_DT, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

/// Colors used by the frame renderer (`0x00RRGGBB`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Playfield background
    pub arena: u32,
    /// Bars outside the playfield
    pub border: u32,
    pub ball: u32,
    pub paddle: u32,
    pub score: u32,
    /// Selected menu entry
    pub menu_highlight: u32,
    /// Unselected menu entry
    pub menu_dimmed: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            arena: 0xffaa33,
            border: 0xff5500,
            ball: 0xffffff,
            paddle: 0xff0000,
            score: 0xbbffbb,
            menu_highlight: 0xff0000,
            menu_dimmed: 0xaaaaaa,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub palette: Palette,

    // === Window ===
    /// Initial surface width (pixels)
    pub window_width: u32,
    /// Initial surface height (pixels)
    pub window_height: u32,

    // === Headless runs ===
    /// Frame delta fed to every headless frame (seconds)
    pub frame_dt: f32,
    /// Number of frames the headless runner simulates
    pub demo_frames: u32,
    /// Pick multiplayer on the menu instead of single player
    pub demo_multiplayer: bool,
    /// Write the final frame here as a PPM image
    pub snapshot_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette: Palette::default(),

            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,

            frame_dt: DEFAULT_FRAME_DT,
            demo_frames: 600,
            demo_multiplayer: false,
            snapshot_path: None,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "soft_pong_settings";

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_default_window() {
        let settings = Settings::default();
        assert_eq!((settings.window_width, settings.window_height), (840, 640));
        assert_eq!(settings.palette.arena, 0xffaa33);
        assert!(settings.snapshot_path.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "demo_frames": 30, "palette": { "ball": 65280 } }"#).unwrap();
        assert_eq!(settings.demo_frames, 30);
        assert_eq!(settings.palette.ball, 0x00ff00);
        assert_eq!(settings.palette.paddle, Palette::default().paddle);
        assert_eq!(settings.frame_dt, DEFAULT_FRAME_DT);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            demo_multiplayer: true,
            snapshot_path: Some(PathBuf::from("last.ppm")),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_from("/nonexistent/soft-pong/settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }
}
