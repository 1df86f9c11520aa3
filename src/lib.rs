//! Single-facility patient intake and triage.
//!
//! The core of this crate is the triage ordering engine: a priority-ranked
//! waiting line ([`TriageQueue`]) over patients owned by an identity
//! registry ([`PatientRegistry`]). Together they guarantee a total,
//! deterministic order over all waiting patients (severity descending,
//! arrival sequence ascending) with stable FIFO tie-breaking, and remain
//! safe under concurrent callers: each component serialises its own
//! operations independently.
//!
//! Completed treatments are recorded in an append-only [`TreatmentLog`].
//! The CSV adapter, workload generator, and operator menu are collaborators
//! around that core, not part of it.

pub mod csv;
pub mod error;
pub mod models;
pub mod registry;
pub mod treatment;
pub mod triage;
pub mod utils;
pub mod workload;

// Re-export the most common types for easier use
pub use error::{Result, TriageError};
pub use models::Patient;
pub use registry::PatientRegistry;
pub use treatment::{Outcome, TreatedCase, TreatmentLog};
pub use triage::{TriageQueue, triage_cmp};
pub use workload::{SampleWorkloads, SeverityDistribution};
