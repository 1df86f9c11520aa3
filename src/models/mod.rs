//! Domain models for the intake and triage process.
//!
//! Leaf entities only: validation lives in the types themselves, behaviour
//! lives in the registry, queue, and log that own them.

pub mod patient;

// Re-export commonly used types
pub use patient::Patient;
