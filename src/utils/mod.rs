//! Cross-cutting instrumentation utilities.
//!
//! Pure measurement and display helpers; no semantic contract with the
//! triage core.

pub mod progress;
pub mod timing;

// Re-export commonly used helpers for convenience
pub use progress::create_intake_progress_bar;
pub use timing::PerfTimer;
