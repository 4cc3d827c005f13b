/*!
 * Scheduler Events
 * Structured per-slice observation for presentation layers
 */

use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};

/// Event emitted by the scheduler as the run progresses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SchedulerEvent {
    /// A process ran for one slice; `clock` is the value after the advance
    SliceExecuted {
        pid: Pid,
        slice: Ticks,
        clock: Ticks,
        remaining: Ticks,
    },
    /// A process ran its remaining time down to zero
    ProcessCompleted {
        pid: Pid,
        finished_at: Ticks,
        waiting: Ticks,
    },
    /// The ready queue drained
    RunCompleted {
        total_ticks: Ticks,
        dispatches: u64,
        preemptions: u64,
    },
}

/// Sink for scheduler events
///
/// The scheduler never prints; presentation layers implement this trait
/// and render the stream however they like.
pub trait EventSink {
    fn emit(&mut self, event: SchedulerEvent);
}

/// Sink that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    #[inline(always)]
    fn emit(&mut self, _event: SchedulerEvent) {}
}

/// Sink that records events in emission order for later inspection
#[derive(Debug, Default, Clone)]
pub struct TraceCollector {
    events: Vec<SchedulerEvent>,
}

impl TraceCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, in emission order; reading does not mutate
    #[must_use]
    pub fn events(&self) -> &[SchedulerEvent] {
        &self.events
    }

    /// Number of recorded events
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for TraceCollector {
    fn emit(&mut self, event: SchedulerEvent) {
        self.events.push(event);
    }
}
