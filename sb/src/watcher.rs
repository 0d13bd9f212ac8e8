//! Turn watcher
//!
//! The watcher polls the clock while a participant is being awaited and emits
//! a single seen alert if the deadline passes before it is told to stop. It
//! only observes time; it never touches session state or the pending read.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info};

use crate::alert::Alert;
use crate::output::{ChatEvent, ChatSink};

/// How a watcher finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    /// Deadline passed and the alert was emitted
    Alerted,
    /// Stopped before the deadline
    Cancelled,
}

/// Handle to a running watcher task
///
/// Dropping the handle raises the stop flag, so a watcher cannot outlive its
/// turn even on an early return.
pub struct Watcher {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<WatchOutcome>>,
}

impl Watcher {
    /// Spawn a watcher that alerts once `deadline` passes
    ///
    /// A `None` deadline lies beyond what `Instant` can represent: the watcher
    /// never alerts and only waits to be stopped.
    pub fn spawn(deadline: Option<Instant>, poll_interval: Duration, alert: Alert, sink: Arc<dyn ChatSink>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let handle = tokio::spawn(watch(deadline, poll_interval, stop.clone(), alert, sink));
        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Check whether the watcher task has already terminated
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(|h| h.is_finished())
    }

    /// Raise the stop flag and wait for the task to terminate
    pub async fn stop(mut self) -> Result<WatchOutcome, JoinError> {
        self.stop.store(true, Ordering::SeqCst);
        match self.handle.take() {
            Some(handle) => handle.await,
            None => Ok(WatchOutcome::Cancelled),
        }
    }
}

impl Drop for Watcher {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

async fn watch(
    deadline: Option<Instant>,
    poll_interval: Duration,
    stop: Arc<AtomicBool>,
    alert: Alert,
    sink: Arc<dyn ChatSink>,
) -> WatchOutcome {
    debug!(?poll_interval, "Watcher started");

    loop {
        if stop.load(Ordering::SeqCst) {
            debug!("Watcher cancelled");
            return WatchOutcome::Cancelled;
        }

        let now = Instant::now();
        let nap = match deadline {
            Some(deadline) if now >= deadline => {
                info!(target_user = %alert.target(), left_on_seen = %alert.left_on_seen(), "Seen deadline passed");
                sink.emit(ChatEvent::Alert(alert));
                return WatchOutcome::Alerted;
            }
            Some(deadline) => poll_interval.min(deadline - now),
            None => poll_interval,
        };

        tokio::time::sleep(nap).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<ChatEvent>>);

    impl ChatSink for Recorder {
        fn emit(&self, event: ChatEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    fn alert() -> Alert {
        Alert::Watcher {
            previous: "UserB".to_string(),
            awaited: "UserA".to_string(),
        }
    }

    #[tokio::test]
    async fn test_watcher_alerts_after_deadline() {
        let sink = Arc::new(Recorder::default());
        let deadline = Instant::now() + Duration::from_millis(50);
        let watcher = Watcher::spawn(Some(deadline), Duration::from_millis(10), alert(), sink.clone());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(watcher.is_finished());

        let outcome = watcher.stop().await.unwrap();
        assert_eq!(outcome, WatchOutcome::Alerted);
        assert_eq!(*sink.0.lock().unwrap(), vec![ChatEvent::Alert(alert())]);
    }

    #[tokio::test]
    async fn test_watcher_cancelled_before_deadline() {
        let sink = Arc::new(Recorder::default());
        let deadline = Instant::now() + Duration::from_secs(10);
        let watcher = Watcher::spawn(Some(deadline), Duration::from_millis(10), alert(), sink.clone());

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(!watcher.is_finished());

        let outcome = watcher.stop().await.unwrap();
        assert_eq!(outcome, WatchOutcome::Cancelled);
        assert!(sink.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_watcher_alerts_only_once() {
        let sink = Arc::new(Recorder::default());
        let deadline = Instant::now() + Duration::from_millis(20);
        let watcher = Watcher::spawn(Some(deadline), Duration::from_millis(5), alert(), sink.clone());

        tokio::time::sleep(Duration::from_millis(200)).await;
        watcher.stop().await.unwrap();
        assert_eq!(sink.0.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_dropped_watcher_stops() {
        let sink = Arc::new(Recorder::default());
        let deadline = Instant::now() + Duration::from_millis(100);
        let watcher = Watcher::spawn(Some(deadline), Duration::from_millis(10), alert(), sink.clone());
        drop(watcher);

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(sink.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_watcher_without_deadline_never_alerts() {
        let sink = Arc::new(Recorder::default());
        let watcher = Watcher::spawn(None, Duration::from_millis(5), alert(), sink.clone());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!watcher.is_finished());

        let outcome = watcher.stop().await.unwrap();
        assert_eq!(outcome, WatchOutcome::Cancelled);
        assert!(sink.0.lock().unwrap().is_empty());
    }
}
