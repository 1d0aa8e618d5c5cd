//! Debounced selection announcements.

use std::sync::Arc;
use std::time::Duration;

use launchkit_common::VoiceSettings;
use launchkit_core::DelayedTask;
use tokio::runtime::Handle;
use tracing::{trace, warn};

use crate::phrase::{phrase_for, AnnouncedItem};
use crate::synth::SpeechSynthesizer;
use crate::SpeechError;

/// Quiet period before the selection is spoken.
pub const ANNOUNCEMENT_DELAY: Duration = Duration::from_millis(250);

/// Speaks the current selection once the user pauses.
pub struct VoiceAnnouncer<S: SpeechSynthesizer> {
    synthesizer: Arc<S>,
    pending: DelayedTask,
    delay: Duration,
}

impl<S: SpeechSynthesizer> VoiceAnnouncer<S> {
    /// Create an announcer that schedules its work on `runtime`.
    pub fn new(synthesizer: Arc<S>, runtime: Handle) -> Self {
        Self {
            synthesizer,
            pending: DelayedTask::new(runtime),
            delay: ANNOUNCEMENT_DELAY,
        }
    }

    /// Create an announcer on the current tokio runtime.
    pub fn current(synthesizer: Arc<S>) -> Result<Self, SpeechError> {
        Ok(Self {
            synthesizer,
            pending: DelayedTask::current()?,
            delay: ANNOUNCEMENT_DELAY,
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn synthesizer(&self) -> &Arc<S> {
        &self.synthesizer
    }

    /// Announce `item` after the quiet period, replacing any announcement
    /// still waiting. Does nothing while voice feedback is off.
    pub fn announce_selection(&self, item: AnnouncedItem, settings: &VoiceSettings) {
        if !settings.enabled {
            return;
        }

        let synthesizer = Arc::clone(&self.synthesizer);
        let settings = settings.clone();
        trace!(?item, "Scheduling announcement");

        self.pending.schedule(self.delay, async move {
            speak(synthesizer.as_ref(), &item, &settings);
        });
    }

    /// Whether an announcement is waiting for the quiet period to end.
    pub fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }

    /// Drop any waiting announcement and cut off current speech.
    pub fn stop(&self) {
        self.pending.cancel();
        if self.synthesizer.is_speaking() {
            self.synthesizer.stop_speaking();
        }
    }
}

fn speak<S: SpeechSynthesizer>(synthesizer: &S, item: &AnnouncedItem, settings: &VoiceSettings) {
    let Some(phrase) = phrase_for(item, settings) else {
        return;
    };

    if synthesizer.is_speaking() {
        synthesizer.stop_speaking();
    }

    if let Err(err) = synthesizer.start_speaking(&phrase) {
        warn!(error = %err, "Announcement failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSynthesizer {
        spoken: Mutex<Vec<String>>,
        speaking: AtomicBool,
        stops: AtomicUsize,
    }

    impl SpeechSynthesizer for RecordingSynthesizer {
        fn is_speaking(&self) -> bool {
            self.speaking.load(Ordering::SeqCst)
        }

        fn start_speaking(&self, phrase: &str) -> Result<(), SpeechError> {
            self.spoken.lock().unwrap().push(phrase.to_string());
            self.speaking.store(true, Ordering::SeqCst);
            Ok(())
        }

        fn stop_speaking(&self) {
            self.stops.fetch_add(1, Ordering::SeqCst);
            self.speaking.store(false, Ordering::SeqCst);
        }
    }

    impl RecordingSynthesizer {
        fn spoken(&self) -> Vec<String> {
            self.spoken.lock().unwrap().clone()
        }
    }

    fn enabled() -> VoiceSettings {
        VoiceSettings {
            enabled: true,
            ..VoiceSettings::default()
        }
    }

    fn app(name: &str) -> AnnouncedItem {
        AnnouncedItem::App { name: name.to_string() }
    }

    #[tokio::test(start_paused = true)]
    async fn test_announces_after_delay() {
        launchkit_common::logging::init_for_tests();
        let synth = Arc::new(RecordingSynthesizer::default());
        let announcer = VoiceAnnouncer::current(Arc::clone(&synth)).unwrap();

        announcer.announce_selection(app("Safari"), &enabled());
        assert!(announcer.is_pending());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(synth.spoken().is_empty());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(synth.spoken(), vec!["Safari".to_string()]);
        assert!(!announcer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_selection_speaks_last_item_only() {
        let synth = Arc::new(RecordingSynthesizer::default());
        let announcer = VoiceAnnouncer::current(Arc::clone(&synth)).unwrap();
        let settings = enabled();

        for name in ["Mail", "Maps", "Messages"] {
            announcer.announce_selection(app(name), &settings);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(synth.spoken(), vec!["Messages".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_voice_is_silent() {
        let synth = Arc::new(RecordingSynthesizer::default());
        let announcer = VoiceAnnouncer::current(Arc::clone(&synth)).unwrap();

        announcer.announce_selection(app("Safari"), &VoiceSettings::default());
        assert!(!announcer.is_pending());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(synth.spoken().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_phrase_interrupts_current_speech() {
        let synth = Arc::new(RecordingSynthesizer::default());
        let announcer = VoiceAnnouncer::current(Arc::clone(&synth)).unwrap();
        let settings = enabled();

        announcer.announce_selection(app("Notes"), &settings);
        tokio::time::sleep(Duration::from_millis(300)).await;
        announcer.announce_selection(
            AnnouncedItem::Folder {
                name: "Utilities".to_string(),
            },
            &settings,
        );
        tokio::time::sleep(Duration::from_millis(300)).await;

        assert_eq!(synth.spoken(), vec!["Notes".to_string(), "Folder Utilities".to_string()]);
        assert_eq!(synth.stops.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_slot_is_not_spoken() {
        let synth = Arc::new(RecordingSynthesizer::default());
        let announcer = VoiceAnnouncer::current(Arc::clone(&synth)).unwrap();

        announcer.announce_selection(AnnouncedItem::Empty, &enabled());
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(synth.spoken().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_pending_and_current_speech() {
        let synth = Arc::new(RecordingSynthesizer::default());
        let announcer = VoiceAnnouncer::current(Arc::clone(&synth)).unwrap();
        let settings = enabled();

        announcer.announce_selection(app("Notes"), &settings);
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(synth.is_speaking());

        announcer.announce_selection(app("Photos"), &settings);
        announcer.stop();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(synth.spoken(), vec!["Notes".to_string()]);
        assert!(!synth.is_speaking());
        assert!(!announcer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_announcement_keeps_scheduled_settings() {
        launchkit_common::logging::init_for_tests();
        let synth = Arc::new(RecordingSynthesizer::default());
        let announcer = VoiceAnnouncer::current(Arc::clone(&synth)).unwrap();
        let settings = VoiceSettings {
            app_format: "Open %@".to_string(),
            ..enabled()
        };

        announcer.announce_selection(app("Maps"), &settings);
        // Turning voice off later is a no-op for the waiting announcement.
        announcer.announce_selection(app("Mail"), &VoiceSettings::default());
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(synth.spoken(), vec!["Open Maps".to_string()]);

        announcer.announce_selection(app("Notes"), &settings);
        announcer.stop();
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(synth.spoken(), vec!["Open Maps".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_delay() {
        let synth = Arc::new(RecordingSynthesizer::default());
        let announcer = VoiceAnnouncer::current(Arc::clone(&synth))
            .unwrap()
            .with_delay(Duration::from_millis(50));

        announcer.announce_selection(app("Music"), &enabled());
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(synth.spoken(), vec!["Music".to_string()]);
    }
}
