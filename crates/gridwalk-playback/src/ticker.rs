#![forbid(unsafe_code)]

//! The playback interval ticker.
//!
//! A single background thread that delivers [`TickEvent`]s at the playback
//! speed until cancelled. Cancellation is synchronous: `cancel` signals the
//! condvar-backed stop flag and joins the thread, so after it returns no
//! further tick can be produced. The interval is read fresh at the top of
//! each wait, which is what gives `set_speed` its takes-effect-next-tick
//! semantics without rescheduling the pending wait.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::Duration;

/// One timer firing, tagged with the session epoch it was scheduled under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TickEvent {
    pub(crate) epoch: u64,
}

/// Signal checked by the ticker thread between waits.
#[derive(Clone)]
struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    fn new() -> (Self, StopTrigger) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        (
            Self {
                inner: inner.clone(),
            },
            StopTrigger { inner },
        )
    }

    /// Wait for either the stop signal or a timeout.
    ///
    /// Returns `true` if stopped, `false` if timed out.
    fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap();
        if *stopped {
            return true;
        }
        let result = cvar.wait_timeout(stopped, duration).unwrap();
        stopped = result.0;
        *stopped
    }
}

/// Trigger to stop the ticker from the session side.
struct StopTrigger {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopTrigger {
    fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap();
        *stopped = true;
        cvar.notify_all();
    }
}

/// A live interval timer. Exactly one exists per playing session.
pub(crate) struct RunningTicker {
    trigger: StopTrigger,
    thread: Option<thread::JoinHandle<()>>,
    interval: Arc<AtomicU64>,
    epoch: u64,
}

impl RunningTicker {
    /// Spawn a ticker delivering epoch-tagged events at `interval`.
    pub(crate) fn spawn(
        interval: Duration,
        epoch: u64,
        sender: mpsc::Sender<TickEvent>,
    ) -> Self {
        let shared = Arc::new(AtomicU64::new(as_nanos(interval)));
        let (signal, trigger) = StopSignal::new();
        let thread_interval = shared.clone();

        tracing::debug!(?interval, epoch, "starting playback ticker");
        let thread = thread::spawn(move || {
            loop {
                let wait = Duration::from_nanos(thread_interval.load(Ordering::Relaxed));
                if signal.wait_timeout(wait) {
                    break;
                }
                if sender.send(TickEvent { epoch }).is_err() {
                    break;
                }
            }
        });

        Self {
            trigger,
            thread: Some(thread),
            interval: shared,
            epoch,
        }
    }

    /// The epoch this ticker's events carry.
    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Update the interval. The wait already in progress completes at the
    /// old interval; the next one uses the new value.
    pub(crate) fn set_interval(&self, interval: Duration) {
        self.interval.store(as_nanos(interval), Ordering::Relaxed);
    }

    /// Stop the ticker and join its thread. After this returns, no further
    /// events from this ticker can enter the channel.
    pub(crate) fn cancel(mut self) {
        tracing::debug!(epoch = self.epoch, "cancelling playback ticker");
        self.trigger.stop();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RunningTicker {
    fn drop(&mut self) {
        self.trigger.stop();
        // Don't join in drop to avoid blocking.
    }
}

fn as_nanos(interval: Duration) -> u64 {
    u64::try_from(interval.as_nanos()).unwrap_or(u64::MAX)
}
