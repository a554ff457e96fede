//! Configuration for the icon manager
//!
//! Options can be built in code, taken from a preset, or loaded from JSON.

use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconManagerOptions {
    /// Register the transparent ghost icon when the manager is created
    pub seed_ghost_icon: bool,
    /// Upload marker-view icons to the native atlas. Views draw themselves,
    /// so turning this off keeps their icons tracked but out of the atlas.
    pub upload_marker_view_icons: bool,
    /// Used instead of the bridge's device pixel ratio when converting top offsets
    pub pixel_ratio_override: Option<f32>,
}

impl IconManagerOptions {
    /// Options for a manager driven without a real display (tests, servers)
    pub fn headless() -> Self {
        Self {
            seed_ghost_icon: true,
            upload_marker_view_icons: true,
            pixel_ratio_override: Some(1.0),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        self.pixel_ratio_override = Some(ratio);
        self
    }

    pub fn with_marker_view_upload(mut self, upload: bool) -> Self {
        self.upload_marker_view_icons = upload;
        self
    }
}

impl Default for IconManagerOptions {
    fn default() -> Self {
        Self {
            seed_ghost_icon: true,
            upload_marker_view_icons: true,
            pixel_ratio_override: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let options = IconManagerOptions::from_json(r#"{ "upload_marker_view_icons": false }"#)
            .unwrap();
        assert!(options.seed_ghost_icon);
        assert!(!options.upload_marker_view_icons);
        assert_eq!(options.pixel_ratio_override, None);
    }

    #[test]
    fn test_json_roundtrip_preserves_preset() {
        let options = IconManagerOptions::headless().with_pixel_ratio(2.0);
        let json = options.to_json().unwrap();
        assert_eq!(IconManagerOptions::from_json(&json).unwrap(), options);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = IconManagerOptions::from_json("{ nope").unwrap_err();
        assert!(matches!(err, crate::IconError::Config(_)));
    }
}
