mod audio;
mod flash;

use std::sync::Arc;

use common::{FeedbackCue, FeedbackSink};

pub use audio::AudioFeedback;
pub use flash::BoardFlash;

pub struct DesktopFeedback {
    audio: AudioFeedback,
    flash: Arc<BoardFlash>,
}

impl DesktopFeedback {
    pub fn new(audio: AudioFeedback, flash: Arc<BoardFlash>) -> Self {
        Self { audio, flash }
    }
}

impl FeedbackSink for DesktopFeedback {
    fn play_sound(&self, cue: FeedbackCue) {
        self.audio.play(cue);
    }

    fn pulse_haptic(&self, cue: FeedbackCue) {
        self.flash.trigger(cue);
    }
}
