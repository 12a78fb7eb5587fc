use std::{
    sync::{Arc, Condvar, Mutex},
    thread::{self, JoinHandle},
    time::Duration,
};

use feed::{samples_from_states, AircraftProvider, AircraftSample};
use logger::{Color, Logger};

use crate::{errors::MapError, sources::LiveSource};

pub const REFRESH_INTERVAL_MS: u64 = 1000;

/// Cooperative stop signal shared between the shell and the refresher thread.
///
/// Waiting on the token wakes up as soon as it is cancelled.
#[derive(Clone, Default)]
pub struct CancellationToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        let (cancelled, wakeup) = &*self.inner;
        match cancelled.lock() {
            Ok(mut flag) => *flag = true,
            Err(poisoned) => *poisoned.into_inner() = true,
        }
        wakeup.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        let (cancelled, _) = &*self.inner;
        match cancelled.lock() {
            Ok(flag) => *flag,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Sleeps for `timeout` or until cancelled. Returns whether it was cancelled.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let (cancelled, wakeup) = &*self.inner;
        let guard = match cancelled.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match wakeup.wait_timeout_while(guard, timeout, |cancelled| !*cancelled) {
            Ok((flag, _)) => *flag,
            Err(poisoned) => *poisoned.into_inner().0,
        }
    }
}

/// What a single fetch-filter-publish cycle ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// The source now holds this many points.
    Published(usize),
    /// The fetch failed; the source was left untouched.
    Failed,
    /// The fetch finished after teardown; nothing was written.
    Skipped,
}

/// Polls aircraft positions and republishes them to the `planes` source.
pub struct Refresher<P: AircraftProvider> {
    provider: P,
    planes: Arc<LiveSource<AircraftSample>>,
    logger: Logger,
    interval: Duration,
}

impl<P: AircraftProvider + 'static> Refresher<P> {
    pub fn new(provider: P, planes: Arc<LiveSource<AircraftSample>>, logger: Logger) -> Self {
        Self {
            provider,
            planes,
            logger,
            interval: Duration::from_millis(REFRESH_INTERVAL_MS),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Fetches once and replaces the whole source with the filtered points.
    ///
    /// Failures are logged and never returned. The source is not written when
    /// the token was cancelled or the source disposed while the request was
    /// in flight.
    pub fn run_cycle(&mut self, token: &CancellationToken) -> CycleOutcome {
        let states = match self.provider.fetch() {
            Ok(states) => states,
            Err(e) => {
                self.log_error(&format!("Aircraft refresh failed: {}", e));
                return CycleOutcome::Failed;
            }
        };

        if token.is_cancelled() || !self.planes.is_alive() {
            return CycleOutcome::Skipped;
        }

        let samples = samples_from_states(states);
        let count = samples.len();
        match self.planes.set_data(samples) {
            Ok(()) => CycleOutcome::Published(count),
            Err(e) => {
                self.log_error(&format!("Aircraft refresh dropped: {}", e));
                CycleOutcome::Skipped
            }
        }
    }

    /// Runs cycles until `token` is cancelled, waiting the interval in between.
    pub fn run(mut self, token: CancellationToken) {
        let _ = self.logger.info(
            &format!("Refreshing '{}' every {:?}", self.planes.name(), self.interval),
            Color::Cyan,
        );

        while !token.is_cancelled() {
            self.run_cycle(&token);
            if token.wait_timeout(self.interval) {
                break;
            }
        }

        let _ = self.logger.info("Aircraft refresher stopped", Color::Cyan);
    }

    /// Starts the loop on its own thread.
    pub fn spawn(self, token: CancellationToken) -> Result<RefresherHandle, MapError> {
        let thread_token = token.clone();
        let thread = thread::Builder::new()
            .name("aircraft-refresher".to_string())
            .spawn(move || self.run(thread_token))
            .map_err(|e| MapError::Thread(e.to_string()))?;

        Ok(RefresherHandle {
            token,
            thread: Some(thread),
        })
    }

    fn log_error(&self, message: &str) {
        if self.logger.error(message).is_err() {
            eprintln!("{}", message);
        }
    }
}

/// Owner side of a running refresher.
pub struct RefresherHandle {
    token: CancellationToken,
    thread: Option<JoinHandle<()>>,
}

impl RefresherHandle {
    /// Prevents the next cycle from starting. An in-flight request is not
    /// aborted and the thread is not waited for.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Cancels and waits for the thread to exit.
    pub fn join(mut self) -> thread::Result<()> {
        self.token.cancel();
        match self.thread.take() {
            Some(thread) => thread.join(),
            None => Ok(()),
        }
    }
}
