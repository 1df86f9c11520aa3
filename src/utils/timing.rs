//! Wall-clock timing for load-test stages.

use std::time::{Duration, Instant};

/// Scoped timer that logs its label and elapsed time when dropped.
///
/// ```
/// use triage_desk::utils::PerfTimer;
///
/// {
///     let _t = PerfTimer::start("Enqueue workload");
///     // ... measured work ...
/// } // logs "Enqueue workload completed in ..." at info level
/// ```
#[derive(Debug)]
pub struct PerfTimer {
    label: String,
    start: Instant,
}

impl PerfTimer {
    /// Start measuring.
    #[must_use]
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }

    /// Time elapsed since the timer started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        log::info!("{} completed in {:?}", self.label, self.start.elapsed());
    }
}
