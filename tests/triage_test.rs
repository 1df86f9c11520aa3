#[cfg(test)]
mod tests {
    use triage_desk::{PatientRegistry, TriageQueue};

    #[test]
    fn test_snapshot_order_scenario() {
        // P1 and P3 tie on severity 4; P1 arrived first.
        let registry = PatientRegistry::new();
        let queue = TriageQueue::new();

        queue.enqueue(registry.register("P1", "Ann", 30, 4));
        queue.enqueue(registry.register("P2", "Bea", 45, 8));
        queue.enqueue(registry.register("P3", "Cal", 61, 4));

        let ids: Vec<String> = queue
            .snapshot_order()
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        assert_eq!(ids, ["P2", "P1", "P3"]);
    }

    #[test]
    fn test_dequeue_sequence_respects_triage_order() {
        let registry = PatientRegistry::new();
        let queue = TriageQueue::new();

        for (id, severity) in [("A", 2), ("B", 7), ("C", 7), ("D", 10), ("E", 1)] {
            queue.enqueue(registry.register(id, id, 40, severity));
        }

        let mut drained = Vec::new();
        while let Some(p) = queue.dequeue_next() {
            drained.push((p.severity(), p.arrival_seq()));
        }

        // Non-increasing severity; within equal severity, non-decreasing
        // arrival sequence.
        for pair in drained.windows(2) {
            let (sev_a, seq_a) = pair[0];
            let (sev_b, seq_b) = pair[1];
            assert!(sev_a >= sev_b);
            if sev_a == sev_b {
                assert!(seq_a <= seq_b);
            }
        }
        assert_eq!(drained.len(), 5);
    }

    #[test]
    fn test_snapshot_matches_drain_and_preserves_size() {
        let registry = PatientRegistry::new();
        let queue = TriageQueue::new();

        for (id, severity) in [("A", 5), ("B", 9), ("C", 5), ("D", 2)] {
            queue.enqueue(registry.register(id, id, 40, severity));
        }

        let snapshot: Vec<String> = queue
            .snapshot_order()
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        assert_eq!(queue.len(), 4);

        let mut drained = Vec::new();
        while let Some(p) = queue.dequeue_next() {
            drained.push(p.id().to_string());
        }
        assert_eq!(snapshot, drained);
    }

    #[test]
    fn test_mutating_the_snapshot_leaves_the_queue_alone() {
        let registry = PatientRegistry::new();
        let queue = TriageQueue::new();
        queue.enqueue(registry.register("P1", "Ann", 30, 4));

        let mut snapshot = queue.snapshot_order();
        snapshot.clear();

        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_enqueue_by_id() {
        let registry = PatientRegistry::new();
        let queue = TriageQueue::new();
        registry.register("P1", "Ann", 30, 4);

        assert!(!queue.enqueue_by_id(&registry, "ghost"));
        assert_eq!(queue.len(), 0);

        assert!(queue.enqueue_by_id(&registry, "P1"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_peek_is_idempotent() {
        let registry = PatientRegistry::new();
        let queue = TriageQueue::new();
        queue.enqueue(registry.register("P1", "Ann", 30, 4));
        queue.enqueue(registry.register("P2", "Bea", 45, 9));

        for _ in 0..5 {
            assert_eq!(queue.peek_next().unwrap().id(), "P2");
        }
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_empty_queue_is_a_normal_outcome() {
        let queue = TriageQueue::new();

        assert!(queue.dequeue_next().is_none());
        assert!(queue.peek_next().is_none());
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear_discards_waiting_patients_only() {
        let registry = PatientRegistry::new();
        let queue = TriageQueue::new();
        queue.enqueue(registry.register("P1", "Ann", 30, 4));
        queue.enqueue(registry.register("P2", "Bea", 45, 9));

        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_update_visible_through_queued_handle() {
        let registry = PatientRegistry::new();
        let queue = TriageQueue::new();
        queue.enqueue(registry.register("P1", "Ann", 30, 4));

        registry.update("P1", Some("Ann B"), None, None);

        let treated = queue.dequeue_next().unwrap();
        assert_eq!(treated.name(), "Ann B");
    }

    #[test]
    fn test_stale_handle_from_reregistration_keeps_order_sound() {
        // Re-registering an id replaces the record, but a handle to the
        // old record may already be waiting. The two are id-equal yet must
        // still rank by their own severity and arrival keys.
        let registry = PatientRegistry::new();
        let queue = TriageQueue::new();

        queue.enqueue(registry.register("P1", "Ann", 30, 2));
        registry.register("P1", "Ann", 30, 9);
        assert!(queue.enqueue_by_id(&registry, "P1"));
        queue.enqueue(registry.register("P2", "Bea", 45, 5));

        let mut severities = Vec::new();
        while let Some(p) = queue.dequeue_next() {
            severities.push(p.severity());
        }
        assert_eq!(severities, [9, 5, 2]);
    }

    #[test]
    fn test_same_patient_can_wait_twice() {
        // The queue is a multiset; it does not deduplicate.
        let registry = PatientRegistry::new();
        let queue = TriageQueue::new();
        let p = registry.register("P1", "Ann", 30, 4);

        queue.enqueue(p.clone());
        queue.enqueue(p);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue_next().unwrap().id(), "P1");
        assert_eq!(queue.dequeue_next().unwrap().id(), "P1");
    }
}
