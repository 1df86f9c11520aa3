//! Patient identity registry
//!
//! Sole authority for patient identity and arrival ordering. The registry
//! creates every [`Patient`], assigns each one the next value of a
//! monotonically increasing arrival-sequence counter, and stores the
//! handles keyed by id for O(1) lookup.
//!
//! All state sits behind one mutex, so any two calls against the same
//! registry behave as if executed sequentially and no two registrations
//! can ever observe the same sequence value.

use crate::models::Patient;
use rustc_hash::FxHashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct RegistryState {
    by_id: FxHashMap<String, Patient>,
    next_arrival_seq: u64,
}

/// Central store of all known patients.
#[derive(Debug, Default)]
pub struct PatientRegistry {
    state: Mutex<RegistryState>,
}

impl PatientRegistry {
    /// Create an empty registry. Arrival sequences start at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new patient and return its handle.
    ///
    /// Field validation follows the safe-defaults policy of
    /// [`Patient`]: blank id/name fall back to placeholders, negative age
    /// becomes 0, out-of-range severity becomes 1. A sequence number is
    /// consumed on every call, regardless of validation outcomes.
    ///
    /// If the (normalised) id collides with an existing entry, the
    /// existing entry is replaced (last write wins). Re-registration
    /// corrects a record; it does not reject. The replaced patient keeps
    /// its own sequence number, which is never reused.
    pub fn register(&self, id: &str, name: &str, age: i32, severity: i32) -> Patient {
        let mut state = self.state.lock().unwrap();

        let seq = state.next_arrival_seq;
        state.next_arrival_seq += 1;

        let patient = Patient::new(id, name, age, severity, seq);
        state.by_id.insert(patient.id().to_string(), patient.clone());
        patient
    }

    /// Update an existing patient, applying only the fields provided.
    ///
    /// `None` means "leave untouched". Provided values go through the same
    /// per-field validation as construction; invalid ones are silently
    /// ignored rather than erroring. Returns `None` only when no patient
    /// with `id` exists.
    pub fn update(
        &self,
        id: &str,
        name: Option<&str>,
        age: Option<i32>,
        severity: Option<i32>,
    ) -> Option<Patient> {
        let patient = self.lookup(id)?;

        if let Some(name) = name {
            patient.set_name(name);
        }
        if let Some(age) = age {
            patient.set_age(age);
        }
        if let Some(severity) = severity {
            patient.set_severity(severity);
        }

        Some(patient)
    }

    /// Retrieve a patient handle by id.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<Patient> {
        self.state.lock().unwrap().by_id.get(id).cloned()
    }

    /// Whether a patient with this id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.state.lock().unwrap().by_id.contains_key(id)
    }

    /// Number of distinct registered patients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().by_id.len()
    }

    /// Whether the registry holds no patients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
