/*!
 * Core Module
 * Common types and error taxonomy shared across the simulator
 */

pub mod errors;
pub mod types;

pub use errors::SchedulerError;
pub use types::{Pid, SimResult, Ticks};
