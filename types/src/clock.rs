use std::time::{Duration, Instant};

/// Resolution of the game clock.
pub const TICK: Duration = Duration::from_millis(100);

/// Stopwatch for the game clock. Elapsed time advances in whole ticks.
#[derive(Clone, Debug, Default)]
pub struct Clock {
    accumulated_ms: u64,
    running_since: Option<Instant>,
}

fn whole_ticks_ms(elapsed: Duration) -> u64 {
    let tick_ms = TICK.as_millis() as u64;
    (elapsed.as_millis() as u64 / tick_ms) * tick_ms
}

impl Clock {
    /// A paused clock showing a previously persisted elapsed time.
    pub fn resume_from(elapsed_ms: u64) -> Self {
        Self {
            accumulated_ms: elapsed_ms,
            running_since: None,
        }
    }

    pub fn start(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    pub fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated_ms += whole_ticks_ms(since.elapsed());
        }
    }

    pub fn reset(&mut self) {
        self.running_since = None;
        self.accumulated_ms = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.accumulated_ms
            + self
                .running_since
                .map_or(0, |since| whole_ticks_ms(since.elapsed()))
    }

    pub fn formatted(&self) -> String {
        format_elapsed(self.elapsed_ms())
    }
}

/// `MM:SS.T`, tenths as a single digit.
pub fn format_elapsed(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let tenths = (ms % 1000) / 100;
    format!("{minutes:02}:{seconds:02}.{tenths}")
}

/// Long form used on the printed score sheet.
pub fn format_game_time(ms: u64) -> String {
    format!("{} min {} s", ms / 60_000, (ms % 60_000) / 1000)
}
