/*!
 * Process Module
 * The schedulable unit of work and its reporting snapshot
 */

pub mod types;

pub use types::{Process, ProcessSummary};
