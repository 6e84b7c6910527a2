//! Redirect simulation ("crypto miner")
//!
//! A visitor landing on `/{short_code}` watches a fake mining screen for a
//! fixed time; then the code is resolved and the visitor is forwarded.
//!
//! ```text
//!            ┌──────── resolve ok ────────→ Redirecting (navigate once)
//! Mining ────┤
//!            └── 404 / error / network ───→ Failed ── retry ──→ Mining
//! ```
//!
//! Entering `Mining` arms three timers together: progress ticks, status
//! rotation, and the single deferred resolve. All handles are owned by the
//! [`Miner`] and aborted on state exit, restart, or drop.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at, sleep};
use tracing::{debug, info, warn};

use crate::client::{ApiError, ShortenerApi};
use crate::navigator::Navigator;

pub const DISPLAY_DURATION: Duration = Duration::from_millis(3200);
pub const PROGRESS_TICK: Duration = Duration::from_millis(300);
pub const STATUS_MESSAGES: [&str; 3] = [
    "Initializing crypto miner...",
    "Borrowing a bit of your GPU...",
    "Hashing for friendship... (jk)",
];
pub const STATUS_ROTATE: Duration =
    Duration::from_millis(DISPLAY_DURATION.as_millis() as u64 / STATUS_MESSAGES.len() as u64);

pub const NOT_FOUND_MESSAGE: &str = "Link not found. Trust issues? 🤔";
pub const FAILED_MESSAGE: &str = "Something went wrong. Try again?";
pub const NETWORK_MESSAGE: &str = "Failed to connect. The miner ate your connection.";

const MIN_INCREMENT: f64 = 5.0;
const MAX_INCREMENT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinerState {
    Mining,
    /// Terminal: the destination has been handed to the navigator
    Redirecting(String),
    /// Terminal until retried; carries the message to show
    Failed(String),
}

impl MinerState {
    pub fn is_mining(&self) -> bool {
        matches!(self, MinerState::Mining)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinerSnapshot {
    pub short_code: String,
    pub state: MinerState,
    /// 0.0..=100.0
    pub progress: f64,
    pub status_index: usize,
    pub status_text: &'static str,
}

impl MinerSnapshot {
    pub fn can_retry(&self) -> bool {
        matches!(self.state, MinerState::Failed(_))
    }
}

/// Map a lookup failure onto the message shown in `Failed`
pub fn failure_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::NotFound(_) => NOT_FOUND_MESSAGE,
        ApiError::Network(_) => NETWORK_MESSAGE,
        _ => FAILED_MESSAGE,
    }
}

struct Progress {
    generation: u64,
    state: MinerState,
    progress: f64,
    status_index: usize,
}

impl Progress {
    fn fresh(generation: u64) -> Self {
        Self {
            generation,
            state: MinerState::Mining,
            progress: 0.0,
            status_index: 0,
        }
    }
}

#[derive(Default)]
struct Timers {
    progress: Option<JoinHandle<()>>,
    status: Option<JoinHandle<()>>,
    redirect: Option<JoinHandle<()>>,
}

impl Timers {
    /// Stop the animation timers; the deferred resolve keeps running
    fn stop_animation(&mut self) {
        for handle in [self.progress.take(), self.status.take()].into_iter().flatten() {
            handle.abort();
        }
    }

    fn cancel_all(&mut self) {
        self.stop_animation();
        if let Some(handle) = self.redirect.take() {
            handle.abort();
        }
    }
}

struct Shared {
    progress: Mutex<Progress>,
    timers: Mutex<Timers>,
}

/// Owner of one mining sequence; dropping it cancels every timer
pub struct Miner {
    short_code: String,
    api: Arc<dyn ShortenerApi>,
    navigator: Arc<dyn Navigator>,
    shared: Arc<Shared>,
}

impl Miner {
    /// Enter `Mining` for `short_code` and arm the timers.
    ///
    /// Must be called inside a tokio runtime.
    pub fn start(
        short_code: &str,
        api: Arc<dyn ShortenerApi>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let miner = Self {
            short_code: short_code.to_string(),
            api,
            navigator,
            shared: Arc::new(Shared {
                progress: Mutex::new(Progress::fresh(0)),
                timers: Mutex::new(Timers::default()),
            }),
        };
        miner.arm();
        miner
    }

    pub fn short_code(&self) -> &str {
        &self.short_code
    }

    pub fn snapshot(&self) -> MinerSnapshot {
        let p = self.shared.progress.lock();
        MinerSnapshot {
            short_code: self.short_code.clone(),
            state: p.state.clone(),
            progress: p.progress,
            status_index: p.status_index,
            status_text: STATUS_MESSAGES[p.status_index],
        }
    }

    pub fn state(&self) -> MinerState {
        self.shared.progress.lock().state.clone()
    }

    /// Start over from `Mining` for the same code (the "reload")
    pub fn retry(&mut self) {
        info!("Retrying redirect for /{}", self.short_code);
        self.restart();
    }

    /// Follow a new short code; the previous sequence is discarded
    pub fn set_short_code(&mut self, short_code: &str) {
        if self.short_code == short_code {
            return;
        }
        self.short_code = short_code.to_string();
        self.restart();
    }

    /// Cancel everything without starting again
    pub fn cancel(&self) {
        self.shared.timers.lock().cancel_all();
    }

    fn restart(&mut self) {
        self.cancel();
        {
            let mut p = self.shared.progress.lock();
            let generation = p.generation + 1;
            *p = Progress::fresh(generation);
        }
        self.arm();
    }

    fn arm(&self) {
        let generation = self.shared.progress.lock().generation;
        debug!("Mining /{} (generation {})", self.short_code, generation);

        let mut timers = self.shared.timers.lock();
        timers.cancel_all();
        timers.progress = Some(self.spawn_progress());
        timers.status = Some(self.spawn_status());
        timers.redirect = Some(self.spawn_redirect(generation));
    }

    fn spawn_progress(&self) -> JoinHandle<()> {
        let shared = Arc::downgrade(&self.shared);
        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + PROGRESS_TICK, PROGRESS_TICK);
            loop {
                ticker.tick().await;
                let Some(shared) = shared.upgrade() else { break };
                let mut p = shared.progress.lock();
                if !p.state.is_mining() {
                    break;
                }
                let step: f64 = rand::random_range(MIN_INCREMENT..MAX_INCREMENT);
                p.progress = (p.progress + step).min(100.0);
            }
        })
    }

    fn spawn_status(&self) -> JoinHandle<()> {
        let shared = Arc::downgrade(&self.shared);
        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + STATUS_ROTATE, STATUS_ROTATE);
            loop {
                ticker.tick().await;
                let Some(shared) = shared.upgrade() else { break };
                let mut p = shared.progress.lock();
                if !p.state.is_mining() {
                    break;
                }
                p.status_index = (p.status_index + 1).min(STATUS_MESSAGES.len() - 1);
            }
        })
    }

    fn spawn_redirect(&self, generation: u64) -> JoinHandle<()> {
        let shared = Arc::downgrade(&self.shared);
        let api = Arc::clone(&self.api);
        let navigator = Arc::clone(&self.navigator);
        let code = self.short_code.clone();

        tokio::spawn(async move {
            sleep(DISPLAY_DURATION).await;
            if code.is_empty() {
                return;
            }

            let result = api.resolve(&code).await;
            let Some(shared) = shared.upgrade() else { return };

            let destination = {
                let mut p = shared.progress.lock();
                if p.generation != generation || !p.state.is_mining() {
                    return;
                }
                match result {
                    Ok(url) => {
                        p.progress = 100.0;
                        p.state = MinerState::Redirecting(url.clone());
                        Some(url)
                    }
                    Err(e) => {
                        warn!("Resolving /{} failed: {}", code, e);
                        p.state = MinerState::Failed(failure_message(&e).to_string());
                        None
                    }
                }
            };
            shared.timers.lock().stop_animation();

            if let Some(url) = destination {
                info!("/{} resolved, navigating", code);
                if let Err(e) = navigator.navigate(&url) {
                    warn!("Navigation to {} failed: {}", url, e);
                }
            }
        })
    }
}

impl Drop for Miner {
    fn drop(&mut self) {
        self.shared.timers.lock().cancel_all();
    }
}
