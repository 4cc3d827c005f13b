/*!
 * Scheduler Run Loop
 * Input validation, quantum rotation, and metric aggregation
 */

use super::events::{EventSink, SchedulerEvent};
use super::types::RunReport;
use super::Scheduler;
use crate::core::errors::SchedulerError;
use crate::core::types::{SimResult, Ticks};
use crate::process::Process;
use log::{debug, info};
use std::collections::{HashSet, VecDeque};

impl Scheduler {
    /// Run the simulation, streaming events into `sink`
    ///
    /// Validates the whole process list up front; a rejected run leaves
    /// every record exactly as constructed.
    pub fn run_with_sink(
        &self,
        processes: &mut [Process],
        sink: &mut dyn EventSink,
    ) -> SimResult<RunReport> {
        validate(processes)?;

        let quantum = self.quantum.as_ticks();
        info!(
            "Round Robin run starting: {} processes, quantum {} ticks",
            processes.len(),
            quantum
        );

        // Indices into the caller's slice; input order is the tie-break
        // for processes arriving together at clock 0.
        let mut ready: VecDeque<usize> = (0..processes.len()).collect();
        let mut clock: Ticks = 0;
        let mut dispatches: u64 = 0;
        let mut preemptions: u64 = 0;

        while let Some(idx) = ready.pop_front() {
            if processes[idx].started_at.is_none() {
                processes[idx].started_at = Some(clock);
            }

            let slice = quantum.min(processes[idx].remaining);
            processes[idx].remaining -= slice;
            clock += slice;
            dispatches += 1;

            // Waiting accrues to the queue as it stood at dequeue time; the
            // running process never charges itself for its own slice.
            for &waiter in &ready {
                processes[waiter].waiting += slice;
            }

            debug!(
                "pid {} ran {} ticks (clock {}, remaining {})",
                processes[idx].pid(),
                slice,
                clock,
                processes[idx].remaining
            );
            sink.emit(SchedulerEvent::SliceExecuted {
                pid: processes[idx].pid(),
                slice,
                clock,
                remaining: processes[idx].remaining,
            });

            if processes[idx].remaining > 0 {
                ready.push_back(idx);
                preemptions += 1;
            } else {
                processes[idx].finished_at = Some(clock);
                info!("pid {} finished at tick {}", processes[idx].pid(), clock);
                sink.emit(SchedulerEvent::ProcessCompleted {
                    pid: processes[idx].pid(),
                    finished_at: clock,
                    waiting: processes[idx].waiting(),
                });
            }
        }

        sink.emit(SchedulerEvent::RunCompleted {
            total_ticks: clock,
            dispatches,
            preemptions,
        });

        let count = processes.len() as f64;
        let total_waiting: Ticks = processes.iter().map(Process::waiting).sum();
        let total_turnaround: Ticks = processes.iter().filter_map(Process::turnaround).sum();

        let report = RunReport {
            avg_waiting: total_waiting as f64 / count,
            avg_turnaround: total_turnaround as f64 / count,
            total_ticks: clock,
            dispatches,
            preemptions,
            quantum,
            processes: processes.len(),
        };
        info!(
            "Round Robin run complete: {} ticks, avg waiting {:.2}, avg turnaround {:.2}",
            report.total_ticks, report.avg_waiting, report.avg_turnaround
        );
        Ok(report)
    }
}

/// Reject malformed input before any record is touched
fn validate(processes: &[Process]) -> SimResult<()> {
    if processes.is_empty() {
        return Err(SchedulerError::EmptyProcessList);
    }

    let mut seen = HashSet::with_capacity(processes.len());
    for process in processes {
        if process.burst() == 0 {
            return Err(SchedulerError::InvalidProcess {
                pid: process.pid(),
                reason: "zero-length CPU burst".to_string(),
            });
        }
        if !seen.insert(process.pid()) {
            return Err(SchedulerError::DuplicatePid(process.pid()));
        }
    }
    Ok(())
}
