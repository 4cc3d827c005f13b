/*!
 * Round Robin Simulator - Main Entry Point
 *
 * Demo driver playing the reporting collaborator:
 * - builds a fixed workload
 * - runs the scheduler with a trace collector
 * - renders the per-slice trace, the final summary, and the averages
 */

use log::info;
use rr_sim::{Process, Quantum, Scheduler, SchedulerEvent, TraceCollector};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut processes = vec![
        Process::new(1, 10),
        Process::new(2, 4),
        Process::new(3, 6),
        Process::new(4, 8),
    ];
    let quantum = Quantum::new(3)?;

    info!(
        "Starting Round Robin simulation: {} processes, quantum {} ticks",
        processes.len(),
        quantum.as_ticks()
    );

    println!("Initial processes:");
    for process in &processes {
        println!(
            "  pid {:>2} | burst {:>3} | remaining {:>3} | waiting {:>3}",
            process.pid(),
            process.burst(),
            process.remaining(),
            process.waiting()
        );
    }
    println!();

    let scheduler = Scheduler::new(quantum);
    let mut trace = TraceCollector::new();
    let report = scheduler.run_with_sink(&mut processes, &mut trace)?;

    println!("Execution trace:");
    for event in trace.events() {
        match event {
            SchedulerEvent::SliceExecuted {
                pid,
                slice,
                clock,
                remaining,
            } => {
                println!(
                    "  [t={:>3}] pid {} ran {} ticks ({} remaining)",
                    clock, pid, slice, remaining
                );
            }
            SchedulerEvent::ProcessCompleted {
                pid, finished_at, ..
            } => {
                println!("  [t={:>3}] pid {} completed", finished_at, pid);
            }
            SchedulerEvent::RunCompleted {
                total_ticks,
                dispatches,
                preemptions,
            } => {
                println!(
                    "  run complete: {} ticks, {} dispatches, {} preemptions",
                    total_ticks, dispatches, preemptions
                );
            }
        }
    }
    println!();

    println!("Final summary:");
    for process in &processes {
        let summary = process.summary();
        println!(
            "  pid {:>2} | burst {:>3} | remaining {:>3} | waiting {:>3} | finished at {:>3}",
            summary.pid,
            summary.burst,
            summary.remaining,
            summary.waiting,
            summary.finished_at.unwrap_or(0)
        );
    }
    println!();
    println!("Average waiting time:    {:.2} ticks", report.avg_waiting);
    println!("Average turnaround time: {:.2} ticks", report.avg_turnaround);
    println!();
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
