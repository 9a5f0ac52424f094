use std::collections::VecDeque;
use std::time::Duration;

use super::types::{Direction, GridPoint};

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    // Head first, tail last.
    pub snake: VecDeque<GridPoint>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
    pub food: GridPoint,
    pub score: u32,
    pub is_running: bool,
    pub is_game_over: bool,
    pub tick_interval: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

impl GameState {
    pub fn head(&self) -> GridPoint {
        *self.snake.front().expect("Snake body should never be empty")
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_game_over {
            GamePhase::GameOver
        } else if self.is_running {
            GamePhase::Running
        } else if self.score == 0 {
            GamePhase::NotStarted
        } else {
            GamePhase::Paused
        }
    }

    pub fn occupies(&self, point: &GridPoint) -> bool {
        self.snake.contains(point)
    }

    pub(crate) fn with_running(&self, is_running: bool) -> Self {
        Self {
            is_running,
            ..self.clone()
        }
    }

    pub(crate) fn with_pending_direction(&self, direction: Direction) -> Self {
        Self {
            pending_direction: Some(direction),
            ..self.clone()
        }
    }
}
