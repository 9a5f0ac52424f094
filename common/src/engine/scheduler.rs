use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[derive(Clone, Debug, Default)]
pub struct RunToken {
    cancelled: Arc<AtomicBool>,
}

impl RunToken {
    fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

struct ActiveRun {
    handle: JoinHandle<()>,
    token: RunToken,
}

pub struct TickScheduler {
    runtime: Handle,
    active: Option<ActiveRun>,
}

impl TickScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            active: None,
        }
    }

    pub fn run<I, T>(&mut self, interval_provider: I, tick: T)
    where
        I: Fn() -> Duration + Send + 'static,
        T: Fn(&RunToken) + Send + 'static,
    {
        self.stop();

        let token = RunToken::new();
        let run_token = token.clone();
        let handle = self.runtime.spawn(async move {
            while !run_token.is_cancelled() {
                let interval = interval_provider();
                tokio::time::sleep(interval).await;
                if run_token.is_cancelled() {
                    break;
                }
                tick(&run_token);
            }
        });

        self.active = Some(ActiveRun { handle, token });
    }

    pub fn stop(&mut self) {
        if let Some(run) = self.active.take() {
            run.token.cancel();
            run.handle.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|run| !run.token.is_cancelled() && !run.handle.is_finished())
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
