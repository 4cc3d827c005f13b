/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::{Pid, Ticks};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler-related errors with serialization support
///
/// Every variant is a caller error detected at the boundary of `run`,
/// before any process record is mutated.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid quantum: {0} ticks")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("The quantum must be at least one tick.")
    )]
    InvalidQuantum(Ticks),

    #[error("Invalid process {pid}: {reason}")]
    #[diagnostic(
        code(scheduler::invalid_process),
        help("Every process needs a CPU burst of at least one tick.")
    )]
    InvalidProcess { pid: Pid, reason: String },

    #[error("Duplicate pid {0} in process list")]
    #[diagnostic(
        code(scheduler::duplicate_pid),
        help("Process ids must be unique; traces and summaries are keyed by pid.")
    )]
    DuplicatePid(Pid),

    #[error("Empty process list")]
    #[diagnostic(
        code(scheduler::empty_process_list),
        help("Supply at least one process; the averages are undefined over zero processes.")
    )]
    EmptyProcessList,
}
