//! Audio output.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tokio::process::Command;
use tokio::runtime::Handle;
use tracing::{debug, trace};

use crate::MediaError;

/// Where macOS keeps its command-line audio player.
pub const AFPLAY_PROGRAM: &str = "/usr/bin/afplay";

/// A sound file resolved on disk together with its contents.
#[derive(Debug, Clone)]
pub struct LoadedSound {
    pub path: PathBuf,
    pub data: Arc<[u8]>,
}

impl LoadedSound {
    pub fn new(path: impl Into<PathBuf>, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Something that can play a loaded sound.
///
/// Every call starts an independent playback, so the same sound may overlap
/// with itself.
pub trait SoundOutput {
    fn play(&self, sound: &LoadedSound, volume: f32) -> Result<(), MediaError>;
}

/// Plays sounds through the `afplay` command.
///
/// `afplay` uses the system decoders, so it handles the AIFF and CAF files
/// under `/System/Library/Sounds`. Each play spawns a short-lived process
/// that is reaped by the tokio runtime.
#[derive(Debug)]
pub struct AfplayOutput {
    program: String,
    runtime: Handle,
}

impl AfplayOutput {
    /// Create an output that spawns its processes on `runtime`.
    pub fn new(runtime: Handle) -> Self {
        Self {
            program: AFPLAY_PROGRAM.to_string(),
            runtime,
        }
    }

    /// Create an output on the current tokio runtime.
    pub fn current() -> Result<Self, MediaError> {
        Ok(Self::new(Handle::try_current()?))
    }

    /// Run a different executable with the same arguments as `afplay`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl SoundOutput for AfplayOutput {
    fn play(&self, sound: &LoadedSound, volume: f32) -> Result<(), MediaError> {
        // Child reaping needs the runtime's process driver.
        let _guard = self.runtime.enter();

        let child = Command::new(&self.program)
            .arg("-v")
            .arg(volume.to_string())
            .arg(sound.path())
            .spawn()
            .map_err(|source| MediaError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        trace!(path = %sound.path().display(), pid = ?child.id(), volume, "Started afplay");
        Ok(())
    }
}

/// Plays sounds on the default output device by decoding them in-process.
///
/// Only the formats enabled on `rodio` (WAV, MP3, Vorbis, FLAC) decode.
/// The stream must stay alive for as long as sounds are playing, so keep
/// this value around rather than creating one per sound.
pub struct RodioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl RodioOutput {
    /// Open the default output device.
    pub fn try_default() -> Result<Self, MediaError> {
        let (stream, handle) = OutputStream::try_default()?;
        debug!("Opened default audio output");
        Ok(Self {
            _stream: stream,
            handle,
        })
    }
}

impl std::fmt::Debug for RodioOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioOutput").finish_non_exhaustive()
    }
}

impl SoundOutput for RodioOutput {
    fn play(&self, sound: &LoadedSound, volume: f32) -> Result<(), MediaError> {
        let source = Decoder::new(Cursor::new(Arc::clone(&sound.data)))?;
        let sink = Sink::try_new(&self.handle)?;
        sink.set_volume(volume);
        sink.append(source);
        // Let the sound finish on its own.
        sink.detach();
        trace!(volume, "Started sound playback");
        Ok(())
    }
}
