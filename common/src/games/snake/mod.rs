mod game_state;
mod rules;
mod types;

pub use game_state::{GamePhase, GameState};
pub use rules::{advance, initial_state, random_food};
pub use types::{
    tick_interval, Direction, GridPoint, GRID_CELL_COUNT, GRID_HEIGHT, GRID_WIDTH,
    INITIAL_SNAKE_LENGTH, INITIAL_TICK_MS, MINIMUM_TICK_MS, TICK_STEP_MS,
};
