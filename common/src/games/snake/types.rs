use std::time::Duration;

pub const GRID_WIDTH: i32 = 20;
pub const GRID_HEIGHT: i32 = 20;
pub const INITIAL_SNAKE_LENGTH: usize = 3;

pub const INITIAL_TICK_MS: u64 = 200;
pub const MINIMUM_TICK_MS: u64 = 80;
pub const TICK_STEP_MS: u64 = 5;

pub const GRID_CELL_COUNT: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

pub fn tick_interval(score: u32) -> Duration {
    let speedup = u64::from(score).saturating_mul(TICK_STEP_MS);
    let ms = INITIAL_TICK_MS.saturating_sub(speedup).max(MINIMUM_TICK_MS);
    Duration::from_millis(ms)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn moved(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn is_inside_grid(&self) -> bool {
        (0..GRID_WIDTH).contains(&self.x) && (0..GRID_HEIGHT).contains(&self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    // Screen coordinates: y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}
