//! Progress reporting for the bulk intake demo, using the indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};

/// Bar style for synthetic patient intake: throughput matters more than
/// the spinner, so `per_sec` sits next to the counts.
pub const INTAKE_BAR_TEMPLATE: &str =
    "[{elapsed_precise}] {bar:40.green/dim} {pos}/{len} patients ({per_sec}) {msg}";

/// Create the intake progress bar.
///
/// # Arguments
/// * `length` - Number of patients the demo will generate
/// * `description` - Optional initial message
///
/// # Returns
/// A configured `ProgressBar`
#[must_use]
pub fn create_intake_progress_bar(length: u64, description: Option<&str>) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(INTAKE_BAR_TEMPLATE)
            .unwrap()
            .progress_chars("=> "),
    );

    if let Some(desc) = description {
        pb.set_message(desc.to_string());
    }

    pb
}
