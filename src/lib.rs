/*!
 * Round Robin Simulator Library
 * Deterministic Round Robin scheduling over a fixed process set
 */

pub mod core;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::SchedulerError;
pub use crate::core::types::{Pid, SimResult, Ticks};
pub use process::{Process, ProcessSummary};
pub use scheduler::{
    EventSink, NullSink, Quantum, RunReport, Scheduler, SchedulerEvent, TraceCollector,
};
