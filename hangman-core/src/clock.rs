use chrono::{DateTime, Duration, Utc};

/// Wall-clock start/stop timestamps of a session.
///
/// Elapsed time is measured to the stop timestamp once stopped, otherwise to
/// "now". The clock never blocks or fires; expiry is only ever observed by
/// asking for the elapsed time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameClock {
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the clock now, clearing any stop timestamp.
    pub fn start(&mut self) {
        self.start_at(Utc::now());
    }

    pub fn start_at(&mut self, started_at: DateTime<Utc>) {
        self.started_at = Some(started_at);
        self.ended_at = None;
    }

    /// Stop the clock. Stopping twice keeps the first stop timestamp.
    pub fn stop(&mut self) {
        if self.is_running() {
            self.ended_at = Some(Utc::now());
        }
    }

    /// Restart a stopped clock so that the elapsed time carries on from where
    /// it stopped instead of starting over.
    pub fn resume(&mut self) {
        let elapsed = self.elapsed();
        self.start_at(Utc::now() - elapsed);
    }

    pub fn restore(started_at: DateTime<Utc>, ended_at: Option<DateTime<Utc>>) -> Self {
        Self {
            started_at: Some(started_at),
            ended_at,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.ended_at.is_none()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Utc::now())
    }

    /// Elapsed time as seen at `now`. Zero if the clock was never started.
    pub fn elapsed_at(&self, now: DateTime<Utc>) -> Duration {
        let Some(started_at) = self.started_at else {
            return Duration::zero();
        };
        let end = self.ended_at.unwrap_or(now);
        (end - started_at).max(Duration::zero())
    }

    /// Whole seconds elapsed.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed().num_seconds().max(0) as u64
    }
}
