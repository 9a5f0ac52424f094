#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeedbackCue {
    FoodEaten,
    GameOver,
}

pub trait FeedbackSink: Send + Sync {
    fn play_sound(&self, cue: FeedbackCue);
    fn pulse_haptic(&self, cue: FeedbackCue);
}
