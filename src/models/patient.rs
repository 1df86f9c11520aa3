//! Patient entity model
//!
//! Immutable identity (id, arrival timestamp, arrival sequence) plus
//! mutable clinical state (name, age, severity). A `Patient` is a cheap
//! shared handle: clones refer to the same underlying record, so an update
//! made through the registry is visible to every holder, including
//! entries already sitting in the triage queue or the treatment log.

use chrono::{DateTime, Utc};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

/// Sentinel id assigned when registration supplies a blank id.
pub const PLACEHOLDER_ID: &str = "No Id";

/// Sentinel name assigned when registration supplies a blank name.
pub const PLACEHOLDER_NAME: &str = "No Name";

/// Lowest valid severity (least urgent).
pub const MIN_SEVERITY: i32 = 1;

/// Highest valid severity (requires critical care).
pub const MAX_SEVERITY: i32 = 10;

/// Mutable clinical fields, guarded together under one lock.
#[derive(Debug, Clone)]
struct ClinicalState {
    name: String,
    age: i32,
    severity: i32,
}

#[derive(Debug)]
struct PatientInner {
    id: String,
    arrival: DateTime<Utc>,
    arrival_seq: u64,
    state: RwLock<ClinicalState>,
}

/// Shared handle to one patient record.
///
/// Equality and hashing use `id` only; the mutable clinical fields never
/// participate, so a patient keeps its identity across updates.
///
/// Construction and mutation go through [`PatientRegistry`], which owns
/// arrival-sequence assignment. Invalid values follow the safe-defaults
/// policy: at construction they fall back to a placeholder or clamp
/// (blank id/name, negative age, out-of-range severity), and on update
/// they are silently ignored.
///
/// [`PatientRegistry`]: crate::registry::PatientRegistry
#[derive(Debug, Clone)]
pub struct Patient {
    inner: Arc<PatientInner>,
}

impl Patient {
    /// Create a patient with safe-default validation.
    ///
    /// Only the registry constructs patients; it is the sole authority for
    /// `arrival_seq`.
    pub(crate) fn new(id: &str, name: &str, age: i32, severity: i32, arrival_seq: u64) -> Self {
        let id = if id.trim().is_empty() {
            PLACEHOLDER_ID.to_string()
        } else {
            id.to_string()
        };
        let name = if name.trim().is_empty() {
            PLACEHOLDER_NAME.to_string()
        } else {
            name.to_string()
        };
        let age = if age >= 0 { age } else { 0 };
        let severity = if (MIN_SEVERITY..=MAX_SEVERITY).contains(&severity) {
            severity
        } else {
            MIN_SEVERITY
        };

        Self {
            inner: Arc::new(PatientInner {
                id,
                arrival: Utc::now(),
                arrival_seq,
                state: RwLock::new(ClinicalState { name, age, severity }),
            }),
        }
    }

    /// Unique patient id, fixed for the lifetime of the record.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Current name.
    #[must_use]
    pub fn name(&self) -> String {
        self.read_state().name.clone()
    }

    /// Current age in years.
    #[must_use]
    pub fn age(&self) -> i32 {
        self.read_state().age
    }

    /// Current severity in `1..=10`; higher is more urgent.
    #[must_use]
    pub fn severity(&self) -> i32 {
        self.read_state().severity
    }

    /// Wall-clock registration time. Informational only, never used for
    /// ordering.
    #[must_use]
    pub fn arrival(&self) -> DateTime<Utc> {
        self.inner.arrival
    }

    /// Monotonic sequence number assigned at registration; the sole
    /// tie-breaking key among equal severities.
    #[must_use]
    pub fn arrival_seq(&self) -> u64 {
        self.inner.arrival_seq
    }

    /// Update the name. Blank input is silently ignored.
    pub(crate) fn set_name(&self, name: &str) {
        if !name.trim().is_empty() {
            self.write_state().name = name.to_string();
        }
    }

    /// Update the age. Negative input is silently ignored.
    pub(crate) fn set_age(&self, age: i32) {
        if age >= 0 {
            self.write_state().age = age;
        }
    }

    /// Update the severity. Values outside `1..=10` are silently ignored.
    pub(crate) fn set_severity(&self, severity: i32) {
        if (MIN_SEVERITY..=MAX_SEVERITY).contains(&severity) {
            self.write_state().severity = severity;
        }
    }

    /// Whether two handles point at the same underlying record.
    ///
    /// Distinct from `==`: re-registering an id produces a fresh record
    /// that is id-equal to the old one but not the same record.
    pub(crate) fn same_record(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, ClinicalState> {
        self.inner.state.read().unwrap()
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, ClinicalState> {
        self.inner.state.write().unwrap()
    }
}

impl PartialEq for Patient {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Patient {}

impl Hash for Patient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read_state();
        write!(
            f,
            "Patient{{id='{}', name='{}', age={}, severity={}, arrival_seq={}}}",
            self.inner.id, state.name, state.age, state.severity, self.inner.arrival_seq
        )
    }
}
