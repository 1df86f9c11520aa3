//! Triage ordering engine
//!
//! The ordering rule ([`order::triage_cmp`]) defines a total order over
//! patients; the queue ([`queue::TriageQueue`]) maintains the waiting line
//! under it. The comparison stays a standalone function so the ordering
//! law is testable without a queue in sight.

pub mod order;
pub mod queue;

pub use order::triage_cmp;
pub use queue::TriageQueue;
