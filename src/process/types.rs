/*!
 * Process Types
 * Per-process timing record mutated in place by the scheduler
 */

use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};

/// One schedulable unit of work
///
/// Constructed by the caller before the run, mutated exclusively by the
/// scheduler through the caller's `&mut [Process]`, then read back as a
/// final record once the queue drains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pid: Pid,
    burst: Ticks,
    pub(crate) remaining: Ticks,
    pub(crate) waiting: Ticks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) started_at: Option<Ticks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) finished_at: Option<Ticks>,
}

impl Process {
    /// Create a process owing `burst` ticks of CPU time
    #[must_use]
    pub fn new(pid: Pid, burst: Ticks) -> Self {
        Self {
            pid,
            burst,
            remaining: burst,
            waiting: 0,
            started_at: None,
            finished_at: None,
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn pid(&self) -> Pid {
        self.pid
    }

    /// Total CPU time required, fixed at creation
    #[inline(always)]
    #[must_use]
    pub const fn burst(&self) -> Ticks {
        self.burst
    }

    /// CPU time still owed
    #[inline(always)]
    #[must_use]
    pub const fn remaining(&self) -> Ticks {
        self.remaining
    }

    /// Cumulative time spent ready but not running
    #[inline(always)]
    #[must_use]
    pub const fn waiting(&self) -> Ticks {
        self.waiting
    }

    /// Clock value at first dispatch, `None` until the process first runs
    #[inline(always)]
    #[must_use]
    pub const fn started_at(&self) -> Option<Ticks> {
        self.started_at
    }

    /// Clock value at completion, `None` until `remaining` reaches zero
    #[inline(always)]
    #[must_use]
    pub const fn finished_at(&self) -> Option<Ticks> {
        self.finished_at
    }

    /// Check if the process has run to completion
    #[inline(always)]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Elapsed ticks from first dispatch to completion
    ///
    /// Well-defined only after completion; `None` before that.
    #[must_use]
    pub fn turnaround(&self) -> Option<Ticks> {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(finish)) => Some(finish - start),
            _ => None,
        }
    }

    /// Read-only snapshot for reporting collaborators
    #[must_use]
    pub fn summary(&self) -> ProcessSummary {
        ProcessSummary {
            pid: self.pid,
            burst: self.burst,
            remaining: self.remaining,
            waiting: self.waiting,
            started_at: self.started_at,
            finished_at: self.finished_at,
            turnaround: self.turnaround(),
        }
    }
}

/// Serializable per-process record for presentation layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSummary {
    pub pid: Pid,
    pub burst: Ticks,
    pub remaining: Ticks,
    pub waiting: Ticks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Ticks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<Ticks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnaround: Option<Ticks>,
}
