/*!
 * Scheduler Types
 * Time quantum validation and aggregate run metrics
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{SimResult, Ticks};
use serde::{Deserialize, Deserializer, Serialize};

/// Fixed time quantum, in ticks
///
/// The maximum slice a process may run before it is preempted and returned
/// to the tail of the ready queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quantum {
    ticks: Ticks,
}

impl Quantum {
    /// Create a new quantum, rejecting zero
    pub fn new(ticks: Ticks) -> SimResult<Self> {
        if ticks == 0 {
            return Err(SchedulerError::InvalidQuantum(ticks));
        }
        Ok(Self { ticks })
    }

    /// Get ticks
    #[inline(always)]
    #[must_use]
    pub const fn as_ticks(&self) -> Ticks {
        self.ticks
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Inner {
            ticks: Ticks,
        }

        let inner = Inner::deserialize(deserializer)?;
        Self::new(inner.ticks).map_err(serde::de::Error::custom)
    }
}

/// Aggregate metrics for one completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunReport {
    /// Mean of all per-process waiting times
    pub avg_waiting: f64,
    /// Mean of all per-process turnaround times (first dispatch to completion)
    pub avg_turnaround: f64,
    /// Final clock value; equals the sum of all bursts
    pub total_ticks: Ticks,
    /// Slices executed
    pub dispatches: u64,
    /// Quantum-expiry re-enqueues
    pub preemptions: u64,
    /// Quantum the run was executed with, in ticks
    pub quantum: Ticks,
    /// Number of processes simulated
    pub processes: usize,
}
