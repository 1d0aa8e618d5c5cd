//! System sound catalog.

use crate::settings::SoundSettings;
use tracing::warn;

/// A system sound offered in preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemSoundOption {
    pub id: &'static str,
    pub display_name: &'static str,
}

const fn option(name: &'static str) -> SystemSoundOption {
    SystemSoundOption {
        id: name,
        display_name: name,
    }
}

/// Sounds shipped with the OS under `/System/Library/Sounds`.
pub const SYSTEM_SOUND_OPTIONS: [SystemSoundOption; 14] = [
    option("Basso"),
    option("Blow"),
    option("Bottle"),
    option("Frog"),
    option("Funk"),
    option("Glass"),
    option("Hero"),
    option("Morse"),
    option("Ping"),
    option("Pop"),
    option("Purr"),
    option("Sosumi"),
    option("Submarine"),
    option("Tink"),
];

pub fn is_valid_system_sound_name(name: &str) -> bool {
    SYSTEM_SOUND_OPTIONS.iter().any(|option| option.id == name)
}

/// Replace unknown sound names with their defaults. An empty name means
/// "no sound" and is kept. Returns the number of names replaced.
pub fn sanitize(settings: &mut SoundSettings) -> usize {
    let defaults = SoundSettings::default();
    let mut replaced = 0;

    for (slot, fallback) in [
        (&mut settings.launchpad_open_sound, defaults.launchpad_open_sound),
        (&mut settings.launchpad_close_sound, defaults.launchpad_close_sound),
        (&mut settings.navigation_sound, defaults.navigation_sound),
    ] {
        if !slot.is_empty() && !is_valid_system_sound_name(slot) {
            warn!(name = %slot, fallback = %fallback, "Unknown system sound, using default");
            *slot = fallback;
            replaced += 1;
        }
    }

    replaced
}
