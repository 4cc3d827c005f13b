/*!
 * Property Tests
 * Invariants of the Round Robin run over generated workloads
 */

use proptest::prelude::*;
use rr_sim::{Process, Quantum, Scheduler, SchedulerEvent, Ticks, TraceCollector};
use std::collections::HashMap;

fn build(bursts: &[Ticks]) -> Vec<Process> {
    bursts
        .iter()
        .enumerate()
        .map(|(i, &burst)| Process::new(i as u32 + 1, burst))
        .collect()
}

proptest! {
    /// Time spent waiting plus time spent running accounts for every
    /// process's completion time exactly.
    #[test]
    fn conservation(
        bursts in prop::collection::vec(1u64..50, 1..12),
        quantum in 1u64..20,
    ) {
        let mut processes = build(&bursts);
        let scheduler = Scheduler::new(Quantum::new(quantum).unwrap());

        let report = scheduler.run(&mut processes).unwrap();

        let total_burst: Ticks = bursts.iter().sum();
        let total_waiting: Ticks = processes.iter().map(Process::waiting).sum();
        let total_finish: Ticks = processes
            .iter()
            .map(|p| p.finished_at().unwrap())
            .sum();

        prop_assert_eq!(total_waiting + total_burst, total_finish);
        prop_assert_eq!(report.total_ticks, total_burst);
    }

    /// Every process drains to exactly zero and its timestamps are ordered.
    #[test]
    fn completion_and_timestamp_order(
        bursts in prop::collection::vec(1u64..50, 1..12),
        quantum in 1u64..20,
    ) {
        let mut processes = build(&bursts);
        let scheduler = Scheduler::new(Quantum::new(quantum).unwrap());

        scheduler.run(&mut processes).unwrap();

        for process in &processes {
            prop_assert!(process.is_complete());
            prop_assert_eq!(process.remaining(), 0);

            let start = process.started_at().unwrap();
            let finish = process.finished_at().unwrap();
            prop_assert!(start <= finish);
            // All running happens between first dispatch and completion
            prop_assert!(finish - start >= process.burst());
            prop_assert_eq!(process.turnaround(), Some(finish - start));
        }
    }

    /// Per-process remaining time strictly decreases across the trace, the
    /// clock never moves backwards, and no slice exceeds the quantum.
    #[test]
    fn trace_is_monotone(
        bursts in prop::collection::vec(1u64..50, 1..12),
        quantum in 1u64..20,
    ) {
        let mut processes = build(&bursts);
        let scheduler = Scheduler::new(Quantum::new(quantum).unwrap());
        let mut trace = TraceCollector::new();

        scheduler.run_with_sink(&mut processes, &mut trace).unwrap();

        let mut last_remaining: HashMap<u32, Ticks> = HashMap::new();
        let mut last_clock: Ticks = 0;

        for event in trace.events() {
            if let SchedulerEvent::SliceExecuted { pid, slice, clock, remaining } = *event {
                prop_assert!(slice >= 1);
                prop_assert!(slice <= quantum);
                prop_assert!(clock >= last_clock);
                last_clock = clock;

                if let Some(&previous) = last_remaining.get(&pid) {
                    prop_assert!(remaining < previous);
                }
                last_remaining.insert(pid, remaining);
            }
        }

        // The last observation of every process is zero remaining
        for process in &processes {
            prop_assert_eq!(last_remaining.get(&process.pid()), Some(&0));
        }
    }

    /// With a quantum covering the longest burst, Round Robin degenerates
    /// to FCFS: completion times are prefix sums of the bursts.
    #[test]
    fn fcfs_degeneracy(bursts in prop::collection::vec(1u64..50, 1..12)) {
        let max_burst = *bursts.iter().max().unwrap();
        let mut processes = build(&bursts);
        let scheduler = Scheduler::new(Quantum::new(max_burst).unwrap());

        let report = scheduler.run(&mut processes).unwrap();

        let mut elapsed: Ticks = 0;
        for (process, &burst) in processes.iter().zip(&bursts) {
            prop_assert_eq!(process.started_at(), Some(elapsed));
            prop_assert_eq!(process.waiting(), elapsed);
            elapsed += burst;
            prop_assert_eq!(process.finished_at(), Some(elapsed));
            prop_assert_eq!(process.turnaround(), Some(burst));
        }

        prop_assert_eq!(report.preemptions, 0);
        prop_assert_eq!(report.dispatches, bursts.len() as u64);
    }
}
