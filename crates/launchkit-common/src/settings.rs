//! Launcher preferences.
//!
//! These are plain values. The sound player, the voice announcer and the
//! animation helper all receive them per call instead of reaching back into
//! an application store.

use serde::{Deserialize, Serialize};

use crate::catalog::sanitize;
use crate::Result;

/// Default phrase spoken for an application. `%@` is replaced by its name.
pub const DEFAULT_APP_FORMAT: &str = "%@";

/// Default phrase spoken for a folder. `%@` is replaced by its name.
pub const DEFAULT_FOLDER_FORMAT: &str = "Folder %@";

/// Sound effect preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SoundSettings {
    /// Master toggle for launcher sound effects.
    pub effects_enabled: bool,
    /// When voice feedback is on, navigation sounds are suppressed.
    pub voice_feedback_enabled: bool,
    /// System sound played when the launcher opens.
    pub launchpad_open_sound: String,
    /// System sound played when the launcher closes.
    pub launchpad_close_sound: String,
    /// System sound played when the selection moves.
    pub navigation_sound: String,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            effects_enabled: false,
            voice_feedback_enabled: false,
            launchpad_open_sound: "Pop".to_string(),
            launchpad_close_sound: "Blow".to_string(),
            navigation_sound: "Tink".to_string(),
        }
    }
}

/// Spoken feedback preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VoiceSettings {
    pub enabled: bool,
    /// Localized format for applications, with a `%@` placeholder.
    pub app_format: String,
    /// Localized format for folders, with a `%@` placeholder.
    pub folder_format: String,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            app_format: DEFAULT_APP_FORMAT.to_string(),
            folder_format: DEFAULT_FOLDER_FORMAT.to_string(),
        }
    }
}

/// Animation preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationPreferences {
    pub animations_enabled: bool,
    /// Mirrors the system "reduce motion" accessibility setting.
    pub reduce_motion: bool,
}

impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            animations_enabled: true,
            reduce_motion: false,
        }
    }
}

/// All launcher preferences handled by LaunchKit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LauncherSettings {
    pub sound: SoundSettings,
    pub voice: VoiceSettings,
    pub animation: AnimationPreferences,
}

impl LauncherSettings {
    /// Parse settings from JSON. Missing fields take their defaults, and
    /// sound names outside the system catalog fall back to theirs.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut settings: Self = serde_json::from_str(json)?;
        sanitize(&mut settings.sound);
        tracing::debug!(
            sound_effects = settings.sound.effects_enabled,
            voice = settings.voice.enabled,
            animations = settings.animation.animations_enabled,
            "Loaded launcher settings"
        );
        Ok(settings)
    }

    /// Serialize settings to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Voice feedback is tracked in two places; keep them in agreement.
    pub fn sync_voice_feedback(&mut self) {
        self.sound.voice_feedback_enabled = self.voice.enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            LauncherSettings::from_json(r#"{"sound": {"effectsEnabled": true}}"#).unwrap();

        assert!(settings.sound.effects_enabled);
        assert_eq!(settings.sound.navigation_sound, "Tink");
        assert_eq!(settings.voice, VoiceSettings::default());
        assert!(settings.animation.animations_enabled);
    }

    #[test]
    fn test_json_roundtrip_preserves_custom_values() {
        let mut settings = LauncherSettings::default();
        settings.sound.launchpad_open_sound = "Glass".to_string();
        settings.voice.enabled = true;
        settings.animation.reduce_motion = true;

        let json = settings.to_json().unwrap();
        assert!(json.contains("launchpadOpenSound"));
        assert_eq!(LauncherSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_unknown_sound_names_fall_back_on_load() {
        let settings = LauncherSettings::from_json(
            r#"{"sound": {"launchpadOpenSound": "Kaboom", "launchpadCloseSound": "", "navigationSound": "Morse"}}"#,
        )
        .unwrap();

        assert_eq!(settings.sound.launchpad_open_sound, "Pop");
        assert_eq!(settings.sound.launchpad_close_sound, "");
        assert_eq!(settings.sound.navigation_sound, "Morse");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(LauncherSettings::from_json("{not json").is_err());
    }

    #[test]
    fn test_sync_voice_feedback() {
        let mut settings = LauncherSettings::default();
        settings.voice.enabled = true;
        settings.sync_voice_feedback();
        assert!(settings.sound.voice_feedback_enabled);
    }
}
