//! Launcher sound effects.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use hashbrown::HashMap;
use launchkit_common::SoundSettings;
use tracing::{debug, trace, warn};

use crate::output::{LoadedSound, SoundOutput};
use crate::MediaError;

/// Where the OS keeps its alert sounds.
pub const SYSTEM_SOUNDS_DIR: &str = "/System/Library/Sounds";

/// File extensions tried, in order, when resolving a sound name.
pub const SOUND_EXTENSIONS: [&str; 3] = ["aiff", "caf", "wav"];

const VOLUME: f32 = 1.0;

/// Launcher events that have a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    LaunchpadOpen,
    LaunchpadClose,
    Navigation,
}

impl SoundEvent {
    /// Sound configured for this event.
    pub fn sound_name<'a>(&self, settings: &'a SoundSettings) -> &'a str {
        match self {
            Self::LaunchpadOpen => settings.launchpad_open_sound.as_str(),
            Self::LaunchpadClose => settings.launchpad_close_sound.as_str(),
            Self::Navigation => settings.navigation_sound.as_str(),
        }
    }
}

/// Plays launcher sound effects through a [`SoundOutput`].
///
/// Sound files are read once per name and kept in memory. Each play hands
/// the cached sound to the output, which starts a fresh playback.
pub struct SoundPlayer<O: SoundOutput> {
    output: O,
    search_dirs: Vec<PathBuf>,
    cache: HashMap<String, LoadedSound>,
}

impl<O: SoundOutput> SoundPlayer<O> {
    /// Create a player that looks sounds up in the system sounds directory.
    pub fn new(output: O) -> Self {
        Self::with_search_dirs(output, vec![PathBuf::from(SYSTEM_SOUNDS_DIR)])
    }

    /// Create a player that looks sounds up in `search_dirs`, in order.
    pub fn with_search_dirs(output: O, search_dirs: Vec<PathBuf>) -> Self {
        Self {
            output,
            search_dirs,
            cache: HashMap::new(),
        }
    }

    /// Add a directory searched after the existing ones.
    pub fn add_search_dir(&mut self, dir: impl Into<PathBuf>) {
        self.search_dirs.push(dir.into());
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Number of sounds held in memory.
    pub fn cached_sounds(&self) -> usize {
        self.cache.len()
    }

    /// Play the sound for `event`. Returns whether a sound started.
    ///
    /// Nothing plays while sound effects are off. With voice feedback on,
    /// navigation stays silent so it does not talk over the announcement.
    pub fn play(&mut self, event: SoundEvent, settings: &SoundSettings) -> bool {
        if !settings.effects_enabled {
            return false;
        }
        if settings.voice_feedback_enabled && event == SoundEvent::Navigation {
            trace!("Navigation sound suppressed by voice feedback");
            return false;
        }

        let name = event.sound_name(settings);
        if name.is_empty() {
            return false;
        }

        debug!(?event, sound = name, "Playing launcher sound");
        self.play_named(name)
    }

    /// Play `name` regardless of the sound toggle, for previews in settings.
    pub fn preview(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.play_named(name)
    }

    fn play_named(&mut self, name: &str) -> bool {
        let result = self
            .load(name)
            .and_then(|sound| self.output.play(&sound, VOLUME));

        match result {
            Ok(()) => true,
            Err(err) => {
                warn!(sound = name, error = %err, "Sound playback failed");
                false
            }
        }
    }

    fn load(&mut self, name: &str) -> Result<LoadedSound, MediaError> {
        if let Some(sound) = self.cache.get(name) {
            trace!(sound = name, "Sound cache hit");
            return Ok(sound.clone());
        }

        let path = self
            .resolve(name)
            .ok_or_else(|| MediaError::NotFound(name.to_string()))?;
        let data: Arc<[u8]> = std::fs::read(&path)
            .map_err(|source| MediaError::Io {
                path: path.clone(),
                source,
            })?
            .into();

        debug!(sound = name, path = %path.display(), bytes = data.len(), "Loaded sound");
        let sound = LoadedSound { path, data };
        self.cache.insert(name.to_string(), sound.clone());
        Ok(sound)
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        // Names are bare file stems; anything path-like is rejected.
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return None;
        }

        self.search_dirs
            .iter()
            .flat_map(|dir| SOUND_EXTENSIONS.iter().map(move |ext| sound_path(dir, name, ext)))
            .find(|path| path.is_file())
    }
}

fn sound_path(dir: &Path, name: &str, ext: &str) -> PathBuf {
    dir.join(format!("{name}.{ext}"))
}
