/*!
 * Round Robin Scheduler
 * Rotates processes through fixed-size time slices until the ready queue drains
 */

use crate::core::types::SimResult;
use crate::process::Process;

mod events;
mod run;
mod types;

pub use events::{EventSink, NullSink, SchedulerEvent, TraceCollector};
pub use types::{Quantum, RunReport};

/// Round Robin scheduler
///
/// Owns the time quantum; each `run` drives a caller-owned process list to
/// completion and reports aggregate metrics. The scheduler itself performs
/// no console or file output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    quantum: Quantum,
}

impl Scheduler {
    /// Create a scheduler with the given quantum
    #[must_use]
    pub const fn new(quantum: Quantum) -> Self {
        Self { quantum }
    }

    /// Get the configured quantum
    #[inline(always)]
    #[must_use]
    pub const fn quantum(&self) -> Quantum {
        self.quantum
    }

    /// Run the simulation without observation
    pub fn run(&self, processes: &mut [Process]) -> SimResult<RunReport> {
        self.run_with_sink(processes, &mut NullSink)
    }
}
