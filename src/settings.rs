//! Mount-time page configuration
//!
//! A small JSON block embedded in the page tunes the wave stroke and the
//! default modulation toggles; an absent or malformed block falls back
//! to defaults. Read once at mount, never persisted.

use serde::{Deserialize, Serialize};

use crate::wave::ModInputs;

/// Page configuration, read once at mount
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Stroke color for the wave polyline
    pub wave_color: String,
    /// Stroke width in pixels
    pub wave_line_width: f32,
    /// Initial modulation toggle states
    pub mods: ModInputs,
    /// Fixed RNG seed for demos; the clock seeds otherwise
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wave_color: "#3a7ca5".to_string(),
            wave_line_width: 1.0,
            mods: ModInputs::default(),
            seed: None,
        }
    }
}

impl Settings {
    /// Element holding the embedded JSON config
    #[allow(dead_code)]
    const CONFIG_ELEMENT_ID: &'static str = "wavecat-config";

    /// Read configuration from the embedded JSON block (wasm only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(el) = document.get_element_by_id(Self::CONFIG_ELEMENT_ID) else {
            log::info!("no page config, using defaults");
            return Self::default();
        };
        let json = el.text_content().unwrap_or_default();
        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("loaded page config");
                settings
            }
            Err(err) => {
                log::warn!("malformed page config ({err}), using defaults");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r##"{"wave_color": "#ffffff", "mods": {"main": true}}"##).unwrap();
        assert_eq!(settings.wave_color, "#ffffff");
        assert_eq!(settings.wave_line_width, 1.0);
        assert!(settings.mods.main);
        assert!(!settings.mods.one);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_empty_object_is_all_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        let defaults = Settings::default();
        assert_eq!(settings.wave_color, defaults.wave_color);
        assert_eq!(settings.mods, defaults.mods);
    }
}
