//! Transition configuration

use serde::{Deserialize, Serialize};

use crate::error::{LauncherError, LauncherResult};

/// Default duration of the overlay slide reveal and dismiss
pub const DEFAULT_OVERLAY_SLIDE_REVEAL_MS: u32 = 320;

/// Default duration of workspace state changes
pub const DEFAULT_WORKSPACE_STATE_MS: u32 = 350;

/// Default distance the overlay travels while sliding
pub const DEFAULT_OVERLAY_SHIFT_PX: f32 = 400.0;

/// Durations and switches used when building transitions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Duration of the overlay reveal/dismiss slide
    pub overlay_slide_reveal_ms: u32,
    /// Duration of workspace state animations
    pub workspace_state_ms: u32,
    /// Vertical distance the overlay slides in from
    pub overlay_shift_px: f32,
    /// Promote the overlay to a compositing layer while it fades in
    pub promote_overlay_layer: bool,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            overlay_slide_reveal_ms: DEFAULT_OVERLAY_SLIDE_REVEAL_MS,
            workspace_state_ms: DEFAULT_WORKSPACE_STATE_MS,
            overlay_shift_px: DEFAULT_OVERLAY_SHIFT_PX,
            promote_overlay_layer: true,
        }
    }
}

impl TransitionConfig {
    /// Parse and validate a config from JSON
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> LauncherResult<Self> {
        let config: TransitionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable
    pub fn validate(&self) -> LauncherResult<()> {
        if self.overlay_slide_reveal_ms == 0 {
            return Err(LauncherError::InvalidConfig {
                field: "overlay_slide_reveal_ms",
                reason: "must be positive",
            });
        }
        if self.workspace_state_ms == 0 {
            return Err(LauncherError::InvalidConfig {
                field: "workspace_state_ms",
                reason: "must be positive",
            });
        }
        if !self.overlay_shift_px.is_finite() || self.overlay_shift_px < 0.0 {
            return Err(LauncherError::InvalidConfig {
                field: "overlay_shift_px",
                reason: "must be finite and non-negative",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TransitionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.overlay_slide_reveal_ms, 320);
        assert!(config.promote_overlay_layer);
    }

    #[test]
    fn test_from_json_partial() {
        let config = TransitionConfig::from_json(r#"{ "workspace_state_ms": 200 }"#).unwrap();
        assert_eq!(config.workspace_state_ms, 200);
        assert_eq!(config.overlay_slide_reveal_ms, DEFAULT_OVERLAY_SLIDE_REVEAL_MS);
    }

    #[test]
    fn test_from_json_rejects_zero_duration() {
        let err = TransitionConfig::from_json(r#"{ "overlay_slide_reveal_ms": 0 }"#).unwrap_err();
        assert_eq!(
            err,
            LauncherError::InvalidConfig {
                field: "overlay_slide_reveal_ms",
                reason: "must be positive",
            }
        );
    }

    #[test]
    fn test_from_json_rejects_negative_shift() {
        let err = TransitionConfig::from_json(r#"{ "overlay_shift_px": -1.0 }"#).unwrap_err();
        assert!(matches!(err, LauncherError::InvalidConfig { field: "overlay_shift_px", .. }));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = TransitionConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, LauncherError::Config(_)));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = TransitionConfig {
            promote_overlay_layer: false,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(TransitionConfig::from_json(&json).unwrap(), config);
    }
}
