//! Priority-ranked waiting line.
//!
//! A binary heap keyed by the triage order. The heap only guarantees its
//! head; [`TriageQueue::snapshot_order`] recovers the full order on demand
//! by draining a throwaway copy, never the live structure.

use crate::models::Patient;
use crate::registry::PatientRegistry;
use crate::triage::order::triage_cmp;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Mutex;

/// Heap entry wrapper. `BinaryHeap` pops its greatest element, so this
/// reverses the triage comparison: the patient treated first is the
/// maximum.
#[derive(Debug, Clone)]
struct Ranked(Patient);

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        triage_cmp(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        triage_cmp(&self.0, &other.0).reverse()
    }
}

/// The waiting line of patients, ordered by severity descending and
/// arrival sequence ascending.
///
/// All methods take `&self`; an internal mutex serialises operations, so
/// concurrent callers observe some sequential order. Enqueueing requires a
/// fully constructed [`Patient`]; there is no way to hand the queue an
/// absent reference, which is the contract-violation rejection the design
/// calls for, enforced at compile time. Every "nothing to do" case (empty
/// queue, unknown id) is an ordinary `None`/`false` result, never an
/// error.
#[derive(Debug, Default)]
pub struct TriageQueue {
    heap: Mutex<BinaryHeap<Ranked>>,
}

impl TriageQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a patient into the waiting line. O(log n).
    pub fn enqueue(&self, patient: Patient) {
        self.heap.lock().unwrap().push(Ranked(patient));
    }

    /// Look up `id` in the registry and enqueue the patient if present.
    ///
    /// Returns `false` without mutating anything when the id is unknown.
    /// The lookup and the insert are two separate steps; a registry update
    /// landing between them is a tolerated race.
    pub fn enqueue_by_id(&self, registry: &PatientRegistry, id: &str) -> bool {
        match registry.lookup(id) {
            Some(patient) => {
                self.enqueue(patient);
                true
            }
            None => false,
        }
    }

    /// The current head of the line, without removing it. O(1).
    #[must_use]
    pub fn peek_next(&self) -> Option<Patient> {
        self.heap.lock().unwrap().peek().map(|r| r.0.clone())
    }

    /// Remove and return the current head of the line. O(log n).
    ///
    /// An empty queue is a normal outcome, reported as `None`.
    pub fn dequeue_next(&self) -> Option<Patient> {
        self.heap.lock().unwrap().pop().map(|r| r.0)
    }

    /// Number of patients currently waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.lock().unwrap().len()
    }

    /// Whether the waiting line is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.lock().unwrap().is_empty()
    }

    /// The full current priority order, without mutating the live queue.
    ///
    /// Clones the heap and drains the clone, since heap iteration order is
    /// unspecified, so the copy is popped element by element instead.
    /// O(n log n). The returned vector is an independent value; mutating
    /// it has no effect on the queue.
    #[must_use]
    pub fn snapshot_order(&self) -> Vec<Patient> {
        let mut copy = self.heap.lock().unwrap().clone();

        let mut ordered = Vec::with_capacity(copy.len());
        while let Some(Ranked(patient)) = copy.pop() {
            ordered.push(patient);
        }
        ordered
    }

    /// Discard all waiting patients. The registry and the treatment log
    /// are untouched.
    pub fn clear(&self) {
        self.heap.lock().unwrap().clear();
    }
}
