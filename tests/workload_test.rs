#[cfg(test)]
mod tests {
    use triage_desk::{
        PatientRegistry, SampleWorkloads, SeverityDistribution, TriageQueue, workload,
    };

    #[test]
    fn test_bulk_enqueue_fills_registry_and_queue() {
        let registry = PatientRegistry::new();
        let queue = TriageQueue::new();
        let mut workloads = SampleWorkloads::new(42, SeverityDistribution::Uniform);

        workloads.enqueue_random_patients(25, &registry, &queue);

        assert_eq!(registry.len(), 25);
        assert_eq!(queue.len(), 25);
        assert!(registry.contains("P0001"));
        assert!(registry.contains("P0025"));
    }

    #[test]
    fn test_generated_severities_stay_in_range() {
        for distribution in [SeverityDistribution::Uniform, SeverityDistribution::Skewed] {
            let registry = PatientRegistry::new();
            let queue = TriageQueue::new();
            let mut workloads = SampleWorkloads::new(7, distribution);

            workloads.enqueue_random_patients(200, &registry, &queue);

            for patient in queue.snapshot_order() {
                let severity = patient.severity();
                assert!((1..=10).contains(&severity), "severity {severity} out of range");
            }
        }
    }

    #[test]
    fn test_equal_seeds_reproduce_the_same_stream() {
        let make = || {
            let registry = PatientRegistry::new();
            let queue = TriageQueue::new();
            let mut workloads = SampleWorkloads::new(12345, SeverityDistribution::Skewed);
            workloads.enqueue_random_patients(50, &registry, &queue);
            queue
                .snapshot_order()
                .iter()
                .map(|p| (p.id().to_string(), p.age(), p.severity()))
                .collect::<Vec<_>>()
        };

        assert_eq!(make(), make());
    }

    #[test]
    fn test_dequeues_on_empty_queue_are_ignored() {
        let queue = TriageQueue::new();

        workload::perform_dequeues(10, &queue);

        assert!(queue.is_empty());
    }

    #[test]
    fn test_mixed_workload_conserves_patients() {
        let registry = PatientRegistry::new();
        let queue = TriageQueue::new();
        let mut workloads = SampleWorkloads::new(99, SeverityDistribution::Uniform);

        workloads.run_mixed_workload(500, 2, 1, &registry, &queue);

        // Every enqueue registered one patient; the queue can only hold
        // patients that were registered.
        assert!(queue.len() <= registry.len());
        assert!(registry.len() <= 500);
    }

    #[test]
    fn test_mixed_workload_with_zero_ratio_is_a_no_op() {
        let registry = PatientRegistry::new();
        let queue = TriageQueue::new();
        let mut workloads = SampleWorkloads::new(1, SeverityDistribution::Uniform);

        workloads.run_mixed_workload(100, 0, 0, &registry, &queue);

        assert!(registry.is_empty());
        assert!(queue.is_empty());
    }
}
