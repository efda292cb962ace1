//! Greedy day scheduler and schedule metrics.
//!
//! # Algorithm
//!
//! [`Scheduler`] uses a greedy, priority-driven, single-cursor heuristic:
//! tasks are placed back to back from the start of the owner's window,
//! highest priority first, and a task that does not fit is skipped. It is
//! not optimal (no bin-packing, no reordering to squeeze more in), but it is
//! predictable: a placed high-priority task is never displaced.
//!
//! # Metrics
//!
//! [`ScheduleSummary`] reports utilization, idle time, and feasibility.

mod greedy;
mod summary;

pub use greedy::Scheduler;
pub use summary::ScheduleSummary;
