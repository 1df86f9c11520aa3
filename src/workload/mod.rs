//! Deterministic synthetic workloads for load testing.
//!
//! Drives the registry and queue with reproducible traffic: a fixed RNG
//! seed yields an identical patient stream across runs, so performance
//! comparisons between implementations stay meaningful.

use crate::registry::PatientRegistry;
use crate::triage::TriageQueue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Statistical shape of generated severity values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityDistribution {
    /// Every severity 1-10 equally likely.
    Uniform,
    /// Biased towards low severities: minor cases dominate, as in real
    /// triage traffic. Roughly half of all patients land in 1-3.
    Skewed,
}

/// Deterministic workload generator.
#[derive(Debug)]
pub struct SampleWorkloads {
    rng: StdRng,
    distribution: SeverityDistribution,
    next_id_counter: u32,
}

impl SampleWorkloads {
    /// Create a generator with a fixed seed so runs can be reproduced
    /// exactly.
    #[must_use]
    pub fn new(seed: u64, distribution: SeverityDistribution) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            distribution,
            next_id_counter: 1,
        }
    }

    /// Register `count` brand-new synthetic patients and enqueue each one.
    ///
    /// The registry runs first so arrival sequences stay strictly
    /// increasing, then the patient joins the waiting line.
    pub fn enqueue_random_patients(
        &mut self,
        count: usize,
        registry: &PatientRegistry,
        queue: &TriageQueue,
    ) {
        for _ in 0..count {
            let id = self.next_generated_id();
            let name = format!("Patient-{id}");
            let age = self.rng.random_range(0..120);
            let severity = self.random_severity();

            let patient = registry.register(&id, &name, age, severity);
            queue.enqueue(patient);
        }
    }

    /// Mixed traffic: for `total_ops` operations, choose enqueue or
    /// dequeue at random weighted by the given ratio. Dequeues against an
    /// empty queue are ignored, as in real traffic where treatment
    /// capacity can outrun arrivals.
    pub fn run_mixed_workload(
        &mut self,
        total_ops: usize,
        ratio_enq: u32,
        ratio_deq: u32,
        registry: &PatientRegistry,
        queue: &TriageQueue,
    ) {
        let total_ratio = ratio_enq + ratio_deq;
        if total_ratio == 0 {
            return;
        }

        for _ in 0..total_ops {
            let roll = self.rng.random_range(0..total_ratio);
            if roll < ratio_enq {
                self.enqueue_random_patients(1, registry, queue);
            } else {
                queue.dequeue_next();
            }
        }
    }

    /// Severity sample under the configured distribution.
    fn random_severity(&mut self) -> i32 {
        match self.distribution {
            SeverityDistribution::Uniform => self.rng.random_range(1..=10),
            SeverityDistribution::Skewed => {
                // Weighted categories over a 0..100 roll; high severities
                // are rare events.
                let roll: u32 = self.rng.random_range(0..100);
                if roll < 25 {
                    1
                } else if roll < 50 {
                    2
                } else if roll < 60 {
                    3
                } else if roll < 75 {
                    4
                } else if roll < 85 {
                    5
                } else if roll < 92 {
                    6
                } else if roll < 96 {
                    7
                } else if roll < 98 {
                    8
                } else if roll < 99 {
                    9
                } else {
                    10
                }
            }
        }
    }

    /// Next synthetic id in fixed-width form (`P0001`, `P0002`, …) so ids
    /// sort lexicographically.
    fn next_generated_id(&mut self) -> String {
        let id = format!("P{:04}", self.next_id_counter);
        self.next_id_counter += 1;
        id
    }
}

/// Perform `count` dequeue attempts, ignoring empty-queue results.
pub fn perform_dequeues(count: usize, queue: &TriageQueue) {
    for _ in 0..count {
        queue.dequeue_next();
    }
}
