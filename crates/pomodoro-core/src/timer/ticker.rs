//! The one-second tick driver.
//!
//! A `Ticker` owns at most one spawned interval task. Starting it while a
//! task is alive replaces that task, and stopping or dropping it aborts
//! the task, so two intervals can never feed the same engine.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    pub fn with_period(period: Duration) -> Self {
        Self { period, task: None }
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Spawn the interval task; `make_msg` builds the value sent each period.
    /// The first message arrives one full period after this call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<M, F>(&mut self, tx: UnboundedSender<M>, make_msg: F)
    where
        M: Send + 'static,
        F: Fn() -> M + Send + 'static,
    {
        self.stop();
        let period = self.period;
        let first = Instant::now() + period;
        self.task = Some(tokio::spawn(async move {
            let mut interval = interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(make_msg()).is_err() {
                    // Receiver gone; nothing left to drive.
                    break;
                }
            }
        }));
        tracing::debug!(period_ms = period.as_millis() as u64, "ticker started");
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("ticker stopped");
        }
    }

    /// Start or stop to match `running`.
    pub fn sync<M, F>(&mut self, running: bool, tx: &UnboundedSender<M>, make_msg: F)
    where
        M: Send + 'static,
        F: Fn() -> M + Send + 'static,
    {
        match (running, self.is_active()) {
            (true, false) => self.start(tx.clone(), make_msg),
            (false, true) => self.stop(),
            _ => {}
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    #[tokio::test(start_paused = true)]
    async fn first_tick_after_one_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::new();
        let begin = Instant::now();
        ticker.start(tx, || ());

        assert_eq!(rx.recv().await, Some(()));
        assert_eq!(begin.elapsed(), TICK_PERIOD);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_every_period_until_stopped() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::new();
        let begin = Instant::now();
        ticker.start(tx, || 1u8);

        for _ in 0..3 {
            assert_eq!(rx.recv().await, Some(1));
        }
        assert_eq!(begin.elapsed(), Duration::from_secs(3));

        ticker.stop();
        assert!(!ticker.is_active());
        let next = timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(!matches!(next, Ok(Some(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn restart_does_not_double_tick() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::new();
        ticker.start(tx.clone(), || ());
        ticker.start(tx, || ());

        assert_eq!(rx.recv().await, Some(()));
        assert!(timeout(Duration::from_millis(500), rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn sync_follows_run_flag() {
        let (tx, _rx) = mpsc::unbounded_channel::<()>();
        let mut ticker = Ticker::new();

        ticker.sync(true, &tx, || ());
        assert!(ticker.is_active());
        ticker.sync(true, &tx, || ());
        assert!(ticker.is_active());
        ticker.sync(false, &tx, || ());
        assert!(!ticker.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_aborts_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let mut ticker = Ticker::new();
            ticker.start(tx, || ());
        }
        let next = timeout(Duration::from_secs(3), rx.recv()).await;
        assert!(!matches!(next, Ok(Some(_))));
    }
}
