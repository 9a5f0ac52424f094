use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;

use crate::games::snake::{self, tick_interval, Direction, GameState};
use crate::log;
use crate::settings::SettingsStore;

use super::feedback::{FeedbackCue, FeedbackSink};
use super::input::{ControlCommand, InputEvent};
use super::scheduler::{RunToken, TickScheduler};

type Observer = Box<dyn Fn(&GameState) + Send + Sync>;

struct ControllerState {
    state: Arc<GameState>,
    scheduler: TickScheduler,
    settings: Arc<dyn SettingsStore>,
    feedback: Arc<dyn FeedbackSink>,
    observers: Vec<Observer>,
}

impl ControllerState {
    fn publish(&mut self, next: GameState) {
        self.state = Arc::new(next);
        for observer in &self.observers {
            observer(&self.state);
        }
    }

    fn emit(&self, cue: FeedbackCue) {
        if self.settings.sound_enabled() {
            self.feedback.play_sound(cue);
        }
        if self.settings.haptics_enabled() {
            self.feedback.pulse_haptic(cue);
        }
    }

    fn on_tick(&mut self) {
        if !self.state.is_running || self.state.is_game_over {
            return;
        }

        let previous_score = self.state.score;
        let was_game_over = self.state.is_game_over;

        let next = snake::advance(&self.state, &mut rand::rng());
        let score = next.score;
        self.publish(next);

        if score > previous_score {
            self.emit(FeedbackCue::FoodEaten);

            if score > self.settings.high_score() {
                self.settings.set_high_score(score);
                log!("New high score: {}", score);
            }
        }

        if self.state.is_game_over && !was_game_over {
            self.emit(FeedbackCue::GameOver);
            self.scheduler.stop();
            log!("Game over with score {}", score);
        }
    }
}

fn lock(shared: &Mutex<ControllerState>) -> MutexGuard<'_, ControllerState> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone)]
pub struct GameController {
    shared: Arc<Mutex<ControllerState>>,
}

impl GameController {
    pub fn new(
        runtime: Handle,
        settings: Arc<dyn SettingsStore>,
        feedback: Arc<dyn FeedbackSink>,
    ) -> Self {
        Self::with_state(
            snake::initial_state(&mut rand::rng()),
            runtime,
            settings,
            feedback,
        )
    }

    fn with_state(
        state: GameState,
        runtime: Handle,
        settings: Arc<dyn SettingsStore>,
        feedback: Arc<dyn FeedbackSink>,
    ) -> Self {
        Self {
            shared: Arc::new(Mutex::new(ControllerState {
                state: Arc::new(state),
                scheduler: TickScheduler::new(runtime),
                settings,
                feedback,
                observers: Vec::new(),
            })),
        }
    }

    pub fn snapshot(&self) -> Arc<GameState> {
        lock(&self.shared).state.clone()
    }

    pub fn settings(&self) -> Arc<dyn SettingsStore> {
        lock(&self.shared).settings.clone()
    }

    pub fn is_ticking(&self) -> bool {
        lock(&self.shared).scheduler.is_active()
    }

    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn(&GameState) + Send + Sync + 'static,
    {
        lock(&self.shared).observers.push(Box::new(observer));
    }

    pub fn start(&self) {
        let mut inner = lock(&self.shared);
        self.start_locked(&mut inner);
    }

    pub fn pause(&self) {
        let mut inner = lock(&self.shared);
        self.pause_locked(&mut inner);
    }

    pub fn resume(&self) {
        let mut inner = lock(&self.shared);
        self.resume_locked(&mut inner);
    }

    pub fn restart(&self) {
        let mut inner = lock(&self.shared);
        self.restart_locked(&mut inner);
    }

    pub fn handle_direction(&self, direction: Direction) {
        let mut inner = lock(&self.shared);
        if inner.state.is_game_over {
            return;
        }

        let next = inner.state.with_pending_direction(direction);
        inner.publish(next);

        if !inner.state.is_running {
            self.start_locked(&mut inner);
        }
    }

    pub fn apply(&self, event: InputEvent) {
        match event {
            InputEvent::Direction(direction) => self.handle_direction(direction),
            InputEvent::Command(command) => self.apply_command(command),
        }
    }

    fn apply_command(&self, command: ControlCommand) {
        let mut inner = lock(&self.shared);
        match command {
            ControlCommand::Start => self.start_locked(&mut inner),
            ControlCommand::Restart => self.restart_locked(&mut inner),
            ControlCommand::PauseResume => {
                if inner.state.is_running {
                    self.pause_locked(&mut inner);
                } else {
                    self.resume_locked(&mut inner);
                }
            }
            ControlCommand::Toggle => {
                if inner.state.is_game_over {
                    self.restart_locked(&mut inner);
                } else if inner.state.is_running {
                    self.pause_locked(&mut inner);
                } else if inner.state.score == 0 {
                    self.start_locked(&mut inner);
                } else {
                    self.resume_locked(&mut inner);
                }
            }
        }
    }

    fn start_locked(&self, inner: &mut ControllerState) {
        if inner.state.is_game_over {
            self.restart_locked(inner);
            return;
        }
        if inner.state.is_running {
            return;
        }

        let next = inner.state.with_running(true);
        inner.publish(next);
        self.run_scheduler(inner);
        log!("Game started");
    }

    fn pause_locked(&self, inner: &mut ControllerState) {
        if !inner.state.is_running {
            return;
        }

        let next = inner.state.with_running(false);
        inner.publish(next);
        inner.scheduler.stop();
        log!("Game paused at score {}", inner.state.score);
    }

    fn resume_locked(&self, inner: &mut ControllerState) {
        if inner.state.is_running || inner.state.is_game_over {
            return;
        }

        let next = inner.state.with_running(true);
        inner.publish(next);
        self.run_scheduler(inner);
        log!("Game resumed at score {}", inner.state.score);
    }

    fn restart_locked(&self, inner: &mut ControllerState) {
        inner.scheduler.stop();
        let next = snake::initial_state(&mut rand::rng()).with_running(true);
        inner.publish(next);
        self.run_scheduler(inner);
        log!("Game restarted");
    }

    fn run_scheduler(&self, inner: &mut ControllerState) {
        let for_interval = Arc::downgrade(&self.shared);
        let for_tick = Arc::downgrade(&self.shared);

        inner.scheduler.run(
            move || match for_interval.upgrade() {
                Some(shared) => {
                    let inner = lock(&shared);
                    inner.state.tick_interval
                }
                None => tick_interval(0),
            },
            move |token: &RunToken| {
                let Some(shared) = for_tick.upgrade() else {
                    return;
                };
                let mut inner = lock(&shared);
                // stop() may have won the race for the lock while this tick was waiting on it.
                if token.is_cancelled() {
                    return;
                }
                inner.on_tick();
            },
        );
    }
}
