//! Game settings and preferences
//!
//! Read once at startup from an optional JSON file. Gameplay tuning is
//! fixed in [`crate::consts`]; only presentation and the RNG seed live here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; a clock-derived seed is used when absent
    pub seed: Option<u64>,

    // === Window ===
    /// Start in borderless fullscreen
    pub fullscreen: bool,

    // === Rendering ===
    /// 4x multisampling
    pub msaa: bool,
    /// Present with vsync
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            fullscreen: false,
            msaa: true,
            vsync: true,
        }
    }
}

impl Settings {
    /// Environment variable naming an explicit settings file
    pub const PATH_ENV: &'static str = "RAY_PONG_SETTINGS";
    /// Settings file looked up in the working directory
    pub const DEFAULT_FILE: &'static str = "ray-pong.json";

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load() -> Self {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
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

    fn locate() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(Self::PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(Self::DEFAULT_FILE);
        local.exists().then_some(local)
    }

    /// Multisample count for the render pipeline
    pub fn sample_count(&self) -> u32 {
        if self.msaa { 4 } else { 1 }
    }

    /// Seed to run with: the configured one or one derived from the clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.sample_count(), 4);
        assert!(settings.seed.is_none());
        assert!(!settings.fullscreen);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "msaa": false }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.sample_count(), 1);
        assert!(settings.vsync);
    }

    #[test]
    fn test_frame_rate_is_not_configurable() {
        // Older files carrying a rate still load; the key is ignored
        let settings = Settings::from_json(r#"{ "target_fps": 30, "seed": 9 }"#).unwrap();
        assert_eq!(settings.seed, Some(9));
        assert_eq!(
            settings,
            Settings {
                seed: Some(9),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ seed: }").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_from(Path::new("/nonexistent/ray-pong.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_fixed_seed_is_used() {
        let settings = Settings {
            seed: Some(7),
            ..Default::default()
        };
        assert_eq!(settings.resolve_seed(), 7);
    }
}
