//! Total order over waiting patients.
//!
//! Higher severity ranks first; among equal severities the earlier
//! arrival ranks first (FIFO tie-breaking). Arrival sequences are unique
//! per registry, so no two distinct records can tie on both keys; the
//! order is total and transitive by construction. The short-circuit
//! applies only to two handles on the same record, never to mere
//! id-equality: a stale handle left over from a re-registered id is a
//! distinct record and ranks by its own keys.

use crate::models::Patient;
use std::cmp::Ordering;

/// Compare two patients under the triage order.
///
/// `Less` means `a` is treated before `b`. Rules, in order:
/// 1. same underlying record ⇒ `Equal`
/// 2. severity descending (higher severity first)
/// 3. arrival sequence ascending (earlier arrival first)
#[must_use]
pub fn triage_cmp(a: &Patient, b: &Patient) -> Ordering {
    if a.same_record(b) {
        return Ordering::Equal;
    }

    b.severity()
        .cmp(&a.severity())
        .then_with(|| a.arrival_seq().cmp(&b.arrival_seq()))
}
