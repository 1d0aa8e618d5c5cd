//! # LaunchKit Common
//!
//! Shared building blocks for the LaunchKit crates:
//!
//! - [`catalog`]: the system sounds a user may pick from
//! - [`logging`]: tracing subscriber setup
//! - [`settings`]: launcher preferences passed by value into the sound,
//!   voice and animation helpers
//!
//! Nothing in here holds global application state. Callers own their
//! settings and hand copies to the helpers that need them.

pub mod catalog;
pub mod logging;
pub mod settings;

pub use catalog::{is_valid_system_sound_name, sanitize, SystemSoundOption, SYSTEM_SOUND_OPTIONS};
pub use settings::{
    AnimationPreferences, LauncherSettings, SoundSettings, VoiceSettings, DEFAULT_APP_FORMAT,
    DEFAULT_FOLDER_FORMAT,
};

use thiserror::Error;

/// Errors shared across LaunchKit crates.
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Failed to parse settings: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("Logging already initialized")]
    LoggingAlreadyInitialized,
}

/// Result alias using [`CommonError`].
pub type Result<T> = std::result::Result<T, CommonError>;
