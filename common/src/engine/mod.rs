mod controller;
mod feedback;
mod input;
mod scheduler;

pub use controller::GameController;
pub use feedback::{FeedbackCue, FeedbackSink};
pub use input::{ControlCommand, InputEvent, InputSource};
pub use scheduler::{RunToken, TickScheduler};
