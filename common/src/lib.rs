pub mod config;
pub mod engine;
pub mod games;
pub mod logger;
pub mod settings;

pub use engine::{
    ControlCommand, FeedbackCue, FeedbackSink, GameController, InputEvent, InputSource,
};
pub use games::snake::{Direction, GamePhase, GameState, GridPoint, GRID_HEIGHT, GRID_WIDTH};
pub use settings::{FileSettingsStore, PlayerSettings, SettingsStore};
