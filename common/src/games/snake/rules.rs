use std::collections::{HashSet, VecDeque};

use rand::Rng;

use super::game_state::GameState;
use super::types::{
    tick_interval, Direction, GridPoint, GRID_CELL_COUNT, GRID_HEIGHT, GRID_WIDTH,
    INITIAL_SNAKE_LENGTH,
};

pub fn initial_state<R: Rng + ?Sized>(rng: &mut R) -> GameState {
    let start_x = GRID_WIDTH / 2;
    let start_y = GRID_HEIGHT / 2;
    let snake: VecDeque<GridPoint> = (0..INITIAL_SNAKE_LENGTH as i32)
        .map(|offset| GridPoint::new(start_x - offset, start_y))
        .collect();
    let food = random_food(&snake, rng).expect("A fresh grid always has free cells");

    GameState {
        snake,
        direction: Direction::Right,
        pending_direction: None,
        food,
        score: 0,
        is_running: false,
        is_game_over: false,
        tick_interval: tick_interval(0),
    }
}

pub fn advance<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> GameState {
    if !state.is_running || state.is_game_over {
        return state.clone();
    }

    let mut next = state.clone();

    // A reversal is dropped, not deferred to a later tick.
    if let Some(pending) = state.pending_direction
        && !pending.is_opposite(&state.direction)
    {
        next.direction = pending;
    }
    next.pending_direction = None;

    let new_head = state.head().moved(next.direction);

    if !new_head.is_inside_grid() {
        return finish(next);
    }

    let ate = new_head == state.food;

    // Without food the tail cell is vacated this tick, so the head may enter it.
    let body_len = if ate {
        state.snake.len()
    } else {
        state.snake.len() - 1
    };
    if state.snake.iter().take(body_len).any(|segment| *segment == new_head) {
        return finish(next);
    }

    next.snake.push_front(new_head);
    if !ate {
        next.snake.pop_back();
        return next;
    }

    next.score += 1;
    match random_food(&next.snake, rng) {
        Some(food) => {
            next.food = food;
            next.tick_interval = tick_interval(next.score);
            next
        }
        // Board filled: nowhere left to put food.
        None => finish(next),
    }
}

// `None` only when the snake covers the grid.
pub fn random_food<'a, I, R>(occupied: I, rng: &mut R) -> Option<GridPoint>
where
    I: IntoIterator<Item = &'a GridPoint>,
    R: Rng + ?Sized,
{
    let occupied: HashSet<GridPoint> = occupied.into_iter().copied().collect();
    if occupied.len() >= GRID_CELL_COUNT {
        return None;
    }

    loop {
        let point = GridPoint::new(
            rng.random_range(0..GRID_WIDTH),
            rng.random_range(0..GRID_HEIGHT),
        );
        if !occupied.contains(&point) {
            return Some(point);
        }
    }
}

fn finish(mut state: GameState) -> GameState {
    state.is_game_over = true;
    state.is_running = false;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn running_state(snake: &[(i32, i32)], direction: Direction, food: (i32, i32)) -> GameState {
        GameState {
            snake: snake.iter().map(|&(x, y)| GridPoint::new(x, y)).collect(),
            direction,
            pending_direction: None,
            food: GridPoint::new(food.0, food.1),
            score: 0,
            is_running: true,
            is_game_over: false,
            tick_interval: tick_interval(0),
        }
    }

    fn points(snake: &VecDeque<GridPoint>) -> Vec<(i32, i32)> {
        snake.iter().map(|p| (p.x, p.y)).collect()
    }

    // Row 0 left to right, row 1 right to left, and so on.
    fn serpentine_path() -> Vec<GridPoint> {
        (0..GRID_HEIGHT)
            .flat_map(|y| {
                let xs: Vec<i32> = if y % 2 == 0 {
                    (0..GRID_WIDTH).collect()
                } else {
                    (0..GRID_WIDTH).rev().collect()
                };
                xs.into_iter().map(move |x| GridPoint::new(x, y))
            })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let mut rng = rng();
        for _ in 0..50 {
            let state = initial_state(&mut rng);
            assert_eq!(points(&state.snake), vec![(10, 10), (9, 10), (8, 10)]);
            assert_eq!(state.direction, Direction::Right);
            assert_eq!(state.pending_direction, None);
            assert_eq!(state.score, 0);
            assert!(!state.is_running);
            assert!(!state.is_game_over);
            assert_eq!(state.tick_interval, Duration::from_millis(200));
            assert!(state.food.is_inside_grid());
            assert!(!state.occupies(&state.food));
        }
    }

    #[test]
    fn test_advance_is_noop_when_not_running() {
        let mut rng = rng();
        let state = initial_state(&mut rng);
        assert_eq!(advance(&state, &mut rng), state);
    }

    #[test]
    fn test_advance_is_noop_when_game_over() {
        let mut rng = rng();
        let mut state = running_state(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (0, 0));
        state.is_game_over = true;
        state.pending_direction = Some(Direction::Up);
        assert_eq!(advance(&state, &mut rng), state);
    }

    #[test]
    fn test_advance_moves_one_cell_and_shifts_tail() {
        let mut rng = rng();
        let state = running_state(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (0, 0));
        let next = advance(&state, &mut rng);
        assert_eq!(points(&next.snake), vec![(6, 5), (5, 5), (4, 5)]);
        assert_eq!(next.score, 0);
        assert_eq!(next.food, state.food);
        assert!(next.is_running);
    }

    #[test]
    fn test_perpendicular_pending_direction_is_committed() {
        let mut rng = rng();
        let mut state = running_state(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (0, 0));
        state.pending_direction = Some(Direction::Down);
        let next = advance(&state, &mut rng);
        assert_eq!(next.direction, Direction::Down);
        assert_eq!(next.pending_direction, None);
        assert_eq!(next.head(), GridPoint::new(5, 6));
    }

    #[test]
    fn test_reversal_is_dropped_and_cleared() {
        let mut rng = rng();
        let mut state = running_state(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (0, 0));
        state.pending_direction = Some(Direction::Left);
        let next = advance(&state, &mut rng);
        assert_eq!(next.direction, Direction::Right);
        assert_eq!(next.pending_direction, None);
        assert_eq!(next.head(), GridPoint::new(6, 5));
        assert!(!next.is_game_over);

        // Dropped, not deferred: the following tick keeps going right.
        let after = advance(&next, &mut rng);
        assert_eq!(after.direction, Direction::Right);
        assert_eq!(after.head(), GridPoint::new(7, 5));
    }

    #[test]
    fn test_eating_grows_scores_and_respawns_food() {
        let mut rng = rng();
        let state = running_state(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (6, 5));
        let next = advance(&state, &mut rng);
        assert_eq!(next.score, 1);
        assert_eq!(points(&next.snake), vec![(6, 5), (5, 5), (4, 5), (3, 5)]);
        assert!(!next.occupies(&next.food));
        assert!(next.food.is_inside_grid());
        assert_eq!(next.tick_interval, Duration::from_millis(195));
    }

    #[test]
    fn test_wall_collision_ends_game_without_moving() {
        let mut rng = rng();
        let mut state = running_state(&[(19, 5), (18, 5), (17, 5)], Direction::Right, (0, 0));
        state.score = 7;
        let next = advance(&state, &mut rng);
        assert!(next.is_game_over);
        assert!(!next.is_running);
        assert_eq!(next.snake, state.snake);
        assert_eq!(next.score, 7);
    }

    #[test]
    fn test_wall_collision_on_every_edge() {
        let mut rng = rng();
        let cases = [
            (&[(0, 5), (1, 5), (2, 5)], Direction::Left),
            (&[(5, 0), (5, 1), (5, 2)], Direction::Up),
            (&[(5, 19), (5, 18), (5, 17)], Direction::Down),
        ];
        for (snake, direction) in cases {
            let next = advance(&running_state(snake, direction, (10, 10)), &mut rng);
            assert!(next.is_game_over, "{:?} should hit the wall", direction);
        }
    }

    #[test]
    fn test_self_collision_with_body_ends_game() {
        let mut rng = rng();
        let mut state = running_state(
            &[(5, 5), (5, 6), (6, 6), (6, 5), (6, 4)],
            Direction::Up,
            (0, 0),
        );
        state.pending_direction = Some(Direction::Right);
        let next = advance(&state, &mut rng);
        assert!(next.is_game_over);
        assert!(!next.is_running);
        assert_eq!(next.snake, state.snake);
    }

    #[test]
    fn test_moving_into_vacating_tail_is_allowed() {
        let mut rng = rng();
        let mut state = running_state(&[(5, 5), (5, 6), (6, 6), (6, 5)], Direction::Up, (0, 0));
        state.pending_direction = Some(Direction::Right);
        let next = advance(&state, &mut rng);
        assert!(!next.is_game_over);
        assert_eq!(points(&next.snake), vec![(6, 5), (5, 5), (5, 6), (6, 6)]);
    }

    #[test]
    fn test_filling_the_board_ends_game() {
        let mut rng = rng();
        let path = serpentine_path();
        let last = path.len() - 1;
        let state = GameState {
            snake: path[..last].iter().rev().copied().collect(),
            direction: Direction::Left,
            pending_direction: None,
            food: path[last],
            score: 396,
            is_running: true,
            is_game_over: false,
            tick_interval: tick_interval(396),
        };

        let next = advance(&state, &mut rng);
        assert_eq!(next.snake.len(), GRID_CELL_COUNT);
        assert_eq!(next.score, 397);
        assert!(next.is_game_over);
        assert!(!next.is_running);
    }

    #[test]
    fn test_random_food_on_full_and_nearly_full_board() {
        let mut rng = rng();
        let path = serpentine_path();
        assert_eq!(random_food(&path, &mut rng), None);

        let free = path[123];
        let occupied: Vec<GridPoint> = path.iter().copied().filter(|p| *p != free).collect();
        assert_eq!(random_food(&occupied, &mut rng), Some(free));
    }

    #[test]
    fn test_five_meals_speed_up_to_175ms() {
        let mut rng = rng();
        let mut state = initial_state(&mut rng).with_running(true);

        for _ in 0..5 {
            state.food = state.head().moved(state.direction);
            state.pending_direction = Some(state.direction);
            state = advance(&state, &mut rng);
        }

        assert_eq!(state.score, 5);
        assert_eq!(state.snake.len(), INITIAL_SNAKE_LENGTH + 5);
        assert_eq!(state.head(), GridPoint::new(15, 10));
        assert_eq!(state.tick_interval, Duration::from_millis(175));
        assert!(!state.is_game_over);
    }

    #[test]
    fn test_driving_into_wall_keeps_score() {
        let mut rng = rng();
        let mut state = initial_state(&mut rng).with_running(true);
        state.food = GridPoint::new(0, 0);

        let mut ticks = 0;
        while !state.is_game_over {
            let before = state.clone();
            state = advance(&state, &mut rng);
            ticks += 1;
            if state.is_game_over {
                assert_eq!(state.score, before.score);
                assert_eq!(state.head(), GridPoint::new(GRID_WIDTH - 1, 10));
            }
        }

        assert_eq!(ticks, 10);
        assert!(!state.is_running);
    }

    #[test]
    fn test_random_play_keeps_invariants() {
        let mut rng = rng();
        let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

        for _ in 0..20 {
            let mut state = initial_state(&mut rng).with_running(true);
            while !state.is_game_over {
                state.pending_direction = Some(directions[rng.random_range(0..4)]);
                let next = advance(&state, &mut rng);

                if next.is_game_over {
                    assert!(!next.is_running);
                    assert_eq!(next.snake, state.snake);
                } else {
                    assert_eq!(next.head(), state.head().moved(next.direction));
                    let grew = next.score == state.score + 1;
                    let expected_len = state.snake.len() + usize::from(grew);
                    assert_eq!(next.snake.len(), expected_len);
                    assert!(!next.occupies(&next.food));
                    let unique: HashSet<GridPoint> = next.snake.iter().copied().collect();
                    assert_eq!(unique.len(), next.snake.len());
                    assert!(next.tick_interval <= state.tick_interval);
                }
                assert!(!next.direction.is_opposite(&state.direction));
                state = next;
            }
        }
    }
}
