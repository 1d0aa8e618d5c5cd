//! # LaunchKit Media
//!
//! Sound effects for launcher events.
//!
//! ## Overview
//!
//! - [`player`]: maps events to sounds, honours the sound toggles, caches
//!   loaded sound data
//! - [`output`]: the audio device seam, with an `afplay` implementation for
//!   the system sounds and a `rodio` one for formats it can decode
//!
//! Settings are passed into every call. The player never looks them up on
//! its own.

pub mod output;
pub mod player;

pub use launchkit_common::catalog::{is_valid_system_sound_name, sanitize, SystemSoundOption, SYSTEM_SOUND_OPTIONS};
pub use output::{AfplayOutput, LoadedSound, RodioOutput, SoundOutput, AFPLAY_PROGRAM};
pub use player::{SoundEvent, SoundPlayer, SOUND_EXTENSIONS, SYSTEM_SOUNDS_DIR};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during sound playback.
#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Sound not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No tokio runtime to run the audio player on: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    #[error("Audio output unavailable: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("Playback failed: {0}")]
    Play(#[from] rodio::PlayError),

    #[error("Unsupported sound data: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
}
