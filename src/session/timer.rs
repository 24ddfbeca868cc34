//! Cancellable auto-clear timer for the error display.

use super::Event;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// How long an error stays on screen before it is cleared automatically.
pub const DEFAULT_ERROR_DISPLAY: Duration = Duration::from_millis(1500);

/// Posts [`Event::ErrorTimeout`] after a delay.
///
/// Each schedule gets a new generation number. A timeout is only honoured
/// if it carries the current generation and the timer has not been
/// cancelled since, so a late delivery never clears a fresh entry.
pub struct ErrorTimer {
    delay: Duration,
    events: flume::Sender<Event>,
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl ErrorTimer {
    pub fn new(delay: Duration, events: flume::Sender<Event>) -> Self {
        Self {
            delay,
            events,
            generation: 0,
            task: None,
        }
    }

    /// Arm the timer, replacing any previous one. Must be called from within
    /// a tokio runtime.
    pub fn schedule(&mut self) -> u64 {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let delay = self.delay;
        let events = self.events.clone();
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // the receiver only goes away on shutdown
            let _ = events.send_async(Event::ErrorTimeout(generation)).await;
        }));

        debug!(generation, delay_ms = delay.as_millis() as u64, "error timer armed");
        generation
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!(generation = self.generation, "error timer cancelled");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.task.is_some()
    }

    /// Accept a delivered timeout. Returns `true` only for the live timer,
    /// which is disarmed by the call.
    pub fn fire(&mut self, generation: u64) -> bool {
        if self.is_armed() && generation == self.generation {
            self.task = None;
            true
        } else {
            debug!(generation, current = self.generation, "stale error timeout ignored");
            false
        }
    }
}

impl Drop for ErrorTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: Duration = Duration::from_millis(10);
    const WAIT: Duration = Duration::from_secs(2);

    #[tokio::test]
    async fn test_fires_after_delay() {
        let (tx, rx) = flume::unbounded();
        let mut timer = ErrorTimer::new(SHORT, tx);

        let generation = timer.schedule();
        assert!(timer.is_armed());

        let event = tokio::time::timeout(WAIT, rx.recv_async())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event, Event::ErrorTimeout(generation));
        assert!(timer.fire(generation));
        assert!(!timer.is_armed());
        // a second delivery of the same generation is ignored
        assert!(!timer.fire(generation));
    }

    #[tokio::test]
    async fn test_cancelled_timer_never_fires() {
        let (tx, rx) = flume::unbounded();
        let mut timer = ErrorTimer::new(SHORT, tx);

        let generation = timer.schedule();
        timer.cancel();
        tokio::time::sleep(SHORT * 5).await;

        assert!(rx.try_recv().is_err());
        assert!(!timer.fire(generation));
    }

    #[tokio::test]
    async fn test_reschedule_supersedes_old_generation() {
        let (tx, _rx) = flume::unbounded();
        let mut timer = ErrorTimer::new(SHORT, tx);

        let first = timer.schedule();
        let second = timer.schedule();
        assert_ne!(first, second);
        assert!(!timer.fire(first));
        assert!(timer.fire(second));
    }
}
