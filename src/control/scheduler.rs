use std::pin::Pin;
use std::time::Duration;

use tokio::time::{Instant, Sleep};

/// Handle to one scheduled tick, used to cancel it or to tell a stale firing
/// from the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickToken(u64);

impl TickToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// One-shot tick scheduling with cancellation
pub trait Scheduler {
    /// Arm a tick that fires once after `after`
    fn schedule(&mut self, after: Duration) -> TickToken;

    /// Drop a tick that has not fired yet; unknown tokens are ignored
    fn cancel(&mut self, token: TickToken);
}

/// Scheduler driven by the tokio timer.
///
/// Holds at most one pending tick; scheduling again replaces it.
#[derive(Debug, Default)]
pub struct TokioScheduler {
    next_id: u64,
    pending: Option<(TickToken, Pin<Box<Sleep>>)>,
}

impl TokioScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Wait for the pending tick and return its token.
    ///
    /// Never resolves while nothing is armed. Cancel-safe: dropping the
    /// future keeps the pending tick in place.
    pub async fn fired(&mut self) -> TickToken {
        match &mut self.pending {
            Some((token, sleep)) => {
                let token = *token;
                sleep.as_mut().await;
                self.pending = None;
                token
            }
            None => std::future::pending().await,
        }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, after: Duration) -> TickToken {
        self.next_id += 1;
        let token = TickToken(self.next_id);
        let sleep = tokio::time::sleep_until(Instant::now() + after);
        self.pending = Some((token, Box::pin(sleep)));
        token
    }

    fn cancel(&mut self, token: TickToken) {
        if matches!(&self.pending, Some((pending, _)) if *pending == token) {
            self.pending = None;
        }
    }
}

/// Scheduler whose ticks fire only when asked to; used for headless driving
/// and in tests
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Vec<(TickToken, Duration)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks that are armed and not cancelled, oldest first
    pub fn pending(&self) -> Vec<TickToken> {
        self.pending.iter().map(|(token, _)| *token).collect()
    }

    pub fn last_delay(&self) -> Option<Duration> {
        self.pending.last().map(|(_, delay)| *delay)
    }

    /// Remove and return the oldest armed tick
    pub fn fire_next(&mut self) -> Option<TickToken> {
        if self.pending.is_empty() {
            return None;
        }
        Some(self.pending.remove(0).0)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, after: Duration) -> TickToken {
        self.next_id += 1;
        let token = TickToken(self.next_id);
        self.pending.push((token, after));
        token
    }

    fn cancel(&mut self, token: TickToken) {
        self.pending.retain(|(pending, _)| *pending != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique_and_increasing() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.schedule(Duration::from_millis(10));
        let b = scheduler.schedule(Duration::from_millis(10));
        assert!(b > a);
        assert_eq!(scheduler.pending(), vec![a, b]);
    }

    #[test]
    fn test_manual_cancel() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.schedule(Duration::from_millis(10));
        let b = scheduler.schedule(Duration::from_millis(20));
        scheduler.cancel(a);

        assert_eq!(scheduler.pending(), vec![b]);
        assert_eq!(scheduler.last_delay(), Some(Duration::from_millis(20)));
        assert_eq!(scheduler.fire_next(), Some(b));
        assert_eq!(scheduler.fire_next(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_fires_after_delay() {
        let mut scheduler = TokioScheduler::new();
        let start = Instant::now();
        let token = scheduler.schedule(Duration::from_millis(125));

        assert_eq!(scheduler.fired().await, token);
        assert!(start.elapsed() >= Duration::from_millis(125));
        assert!(!scheduler.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_replaces_pending_tick() {
        let mut scheduler = TokioScheduler::new();
        let first = scheduler.schedule(Duration::from_millis(50));
        let second = scheduler.schedule(Duration::from_millis(100));

        assert_ne!(first, second);
        assert_eq!(scheduler.fired().await, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_cancel() {
        let mut scheduler = TokioScheduler::new();
        let token = scheduler.schedule(Duration::from_millis(50));
        scheduler.cancel(token);
        assert!(!scheduler.is_armed());

        let fired = tokio::time::timeout(Duration::from_secs(1), scheduler.fired()).await;
        assert!(fired.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_fired_is_cancel_safe() {
        let mut scheduler = TokioScheduler::new();
        let token = scheduler.schedule(Duration::from_millis(100));

        let early = tokio::time::timeout(Duration::from_millis(10), scheduler.fired()).await;
        assert!(early.is_err());
        assert!(scheduler.is_armed());
        assert_eq!(scheduler.fired().await, token);
    }
}
