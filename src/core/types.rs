/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Simulated time, in abstract ticks
///
/// The simulation clock only advances when a slice executes; wall-clock
/// time never enters the arithmetic.
pub type Ticks = u64;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SchedulerError>;
