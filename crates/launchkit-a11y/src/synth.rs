//! Speech synthesis backends.

use std::sync::{Mutex, PoisonError};

use tokio::process::{Child, Command};
use tracing::{debug, warn};

use crate::SpeechError;

/// A speech engine that says one phrase at a time.
pub trait SpeechSynthesizer: Send + Sync + 'static {
    fn is_speaking(&self) -> bool;

    fn start_speaking(&self, phrase: &str) -> Result<(), SpeechError>;

    fn stop_speaking(&self);
}

/// Speaks through the macOS `say` command.
///
/// Spawning needs a tokio runtime; the announcer always calls this from one.
#[derive(Debug)]
pub struct SayCommandSynthesizer {
    program: String,
    voice: Option<String>,
    current: Mutex<Option<Child>>,
}

impl Default for SayCommandSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SayCommandSynthesizer {
    pub fn new() -> Self {
        Self {
            program: "say".to_string(),
            voice: None,
            current: Mutex::new(None),
        }
    }

    /// Use a specific system voice instead of the user's default.
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    /// Run a different executable with the same arguments as `say`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl SpeechSynthesizer for SayCommandSynthesizer {
    fn is_speaking(&self) -> bool {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        match current.as_mut().map(Child::try_wait) {
            Some(Ok(None)) => true,
            Some(Ok(Some(_))) | None => {
                *current = None;
                false
            }
            Some(Err(err)) => {
                warn!(error = %err, "Failed to poll speech process");
                *current = None;
                false
            }
        }
    }

    fn start_speaking(&self, phrase: &str) -> Result<(), SpeechError> {
        let mut command = Command::new(&self.program);
        if let Some(voice) = &self.voice {
            command.arg("-v").arg(voice);
        }
        command.arg("--").arg(phrase).kill_on_drop(true);

        let child = command.spawn()?;
        debug!(phrase, "Speaking");

        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(mut previous) = current.replace(child) {
            let _ = previous.start_kill();
        }
        Ok(())
    }

    fn stop_speaking(&self) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(mut child) = current.take() {
            if let Err(err) = child.start_kill() {
                debug!(error = %err, "Speech process already gone");
            }
        }
    }
}
