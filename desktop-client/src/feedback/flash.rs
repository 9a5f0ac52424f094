use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use common::FeedbackCue;

#[derive(Default)]
pub struct BoardFlash {
    last_pulse: Mutex<Option<(Instant, FeedbackCue)>>,
}

impl BoardFlash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self, cue: FeedbackCue) {
        self.trigger_at(cue, Instant::now());
    }

    fn trigger_at(&self, cue: FeedbackCue, at: Instant) {
        *self.last_pulse.lock().unwrap_or_else(PoisonError::into_inner) = Some((at, cue));
    }

    pub fn intensity(&self, now: Instant) -> Option<(FeedbackCue, f32)> {
        let (started, cue) = (*self.last_pulse.lock().unwrap_or_else(PoisonError::into_inner))?;
        let elapsed = now.saturating_duration_since(started);
        let length = pulse_length(cue);
        if elapsed >= length {
            return None;
        }
        Some((cue, 1.0 - elapsed.as_secs_f32() / length.as_secs_f32()))
    }
}

fn pulse_length(cue: FeedbackCue) -> Duration {
    match cue {
        FeedbackCue::FoodEaten => Duration::from_millis(120),
        FeedbackCue::GameOver => Duration::from_millis(400),
    }
}
