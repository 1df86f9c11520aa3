//! Completed-treatment records and the append-only treatment log.
//!
//! A [`TreatedCase`] captures one finished patient pass: who, when, with
//! what disposition. Cases are immutable once appended; the log only ever
//! grows, preserving chronological order for display and export.

use crate::models::Patient;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

/// Disposition classification of a completed treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Patient stabilised, likely dischargeable soon.
    Stable,
    /// Patient remains under monitoring.
    Observe,
    /// Patient must be moved to a facility with more resources.
    Transfer,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Stable => "STABLE",
            Self::Observe => "OBSERVE",
            Self::Transfer => "TRANSFER",
        };
        f.write_str(s)
    }
}

/// Error for an outcome string that matches no known disposition.
#[derive(Debug, thiserror::Error)]
#[error("unknown outcome: {0}")]
pub struct UnknownOutcome(String);

impl FromStr for Outcome {
    type Err = UnknownOutcome;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stable" => Ok(Self::Stable),
            "observe" => Ok(Self::Observe),
            "transfer" => Ok(Self::Transfer),
            _ => Err(UnknownOutcome(s.to_string())),
        }
    }
}

/// One completed treatment event for one patient.
///
/// Holds the shared patient handle (identity), the treatment window, the
/// disposition, and free-text notes. Never edited after creation.
#[derive(Debug, Clone)]
pub struct TreatedCase {
    /// The patient who was treated.
    pub patient: Patient,
    /// When treatment began.
    pub start: DateTime<Utc>,
    /// When treatment ended.
    pub end: DateTime<Utc>,
    /// Disposition selected by the treating clinician.
    pub outcome: Outcome,
    /// Optional free-text notes; blank allowed.
    pub notes: String,
}

impl TreatedCase {
    /// Create a treatment record. No validation; the record is a
    /// historical fact, stored as given.
    #[must_use]
    pub fn new(
        patient: Patient,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        outcome: Outcome,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            patient,
            start,
            end,
            outcome,
            notes: notes.into(),
        }
    }
}

impl fmt::Display for TreatedCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TreatedCase{{patient={}, start={}, end={}, outcome={}, notes='{}'}}",
            self.patient.id(),
            self.start.to_rfc3339(),
            self.end.to_rfc3339(),
            self.outcome,
            self.notes
        )
    }
}

/// Append-only, insertion-ordered record of completed treatments.
///
/// Internally a mutex-guarded vector: append is O(1) amortised and the
/// natural order is oldest → newest. Read accessors hand out owned
/// copies, so callers can never disturb the log itself.
#[derive(Debug, Default)]
pub struct TreatmentLog {
    entries: Mutex<Vec<TreatedCase>>,
}

impl TreatmentLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one treated case at the tail.
    pub fn append(&self, case: TreatedCase) {
        self.entries.lock().unwrap().push(case);
    }

    /// Number of treatment events recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether no treatments have been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    /// A copy of the log in append order, oldest first.
    #[must_use]
    pub fn oldest_first(&self) -> Vec<TreatedCase> {
        self.entries.lock().unwrap().clone()
    }

    /// A copy of the log in reverse append order, newest first.
    #[must_use]
    pub fn newest_first(&self) -> Vec<TreatedCase> {
        let mut copy = self.oldest_first();
        copy.reverse();
        copy
    }
}
