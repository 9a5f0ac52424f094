use std::time::Duration;

use common::{log, FeedbackCue};
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};
use tokio::sync::mpsc;

// The rodio output stream cannot leave the thread it was opened on.
pub struct AudioFeedback {
    cue_tx: mpsc::UnboundedSender<FeedbackCue>,
}

impl AudioFeedback {
    pub fn spawn() -> Self {
        let (cue_tx, mut cue_rx) = mpsc::unbounded_channel::<FeedbackCue>();

        std::thread::spawn(move || {
            let (_stream, handle) = match OutputStream::try_default() {
                Ok(output) => output,
                Err(e) => {
                    log!("No audio output available, sound cues disabled: {}", e);
                    return;
                }
            };

            while let Some(cue) = cue_rx.blocking_recv() {
                match Sink::try_new(&handle) {
                    Ok(sink) => {
                        for (frequency, millis) in tones(cue) {
                            sink.append(
                                SineWave::new(*frequency)
                                    .take_duration(Duration::from_millis(*millis))
                                    .amplify(0.2),
                            );
                        }
                        sink.detach();
                    }
                    Err(e) => log!("Failed to play {:?} cue: {}", cue, e),
                }
            }
        });

        Self { cue_tx }
    }

    pub fn play(&self, cue: FeedbackCue) {
        // The audio thread is gone only if no device was found.
        let _ = self.cue_tx.send(cue);
    }
}

// (frequency Hz, duration ms) segments played back to back.
fn tones(cue: FeedbackCue) -> &'static [(f32, u64)] {
    match cue {
        FeedbackCue::FoodEaten => &[(880.0, 60)],
        FeedbackCue::GameOver => &[(440.0, 150), (330.0, 150), (220.0, 300)],
    }
}
