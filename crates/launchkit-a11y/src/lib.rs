//! # LaunchKit Accessibility
//!
//! Spoken feedback for keyboard and controller navigation.
//!
//! As the selection moves, the launcher announces the selected app or
//! folder. Announcements are debounced: while the user keeps moving, only
//! the last selection is spoken.

pub mod announcer;
pub mod phrase;
pub mod synth;

pub use announcer::{VoiceAnnouncer, ANNOUNCEMENT_DELAY};
pub use phrase::{format_phrase, phrase_for, AnnouncedItem};
pub use synth::{SayCommandSynthesizer, SpeechSynthesizer};

use thiserror::Error;

/// Errors from the speech layer.
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Failed to start speech: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Scheduling failed: {0}")]
    Scheduling(#[from] launchkit_core::CoreError),
}
