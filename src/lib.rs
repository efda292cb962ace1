//! Single-day pet care scheduling.
//!
//! Builds a day plan for a pet owner: every pet's due tasks are placed back
//! to back inside the owner's availability window, highest priority first.
//! Tasks that do not fit are reported alongside the plan, and any schedule
//! can be checked for overlapping entries.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Owner`, `Pet`, `Task`, `ScheduledTask`,
//!   `ScheduleOutcome`, `Conflict`
//! - **`scheduler`**: Greedy `Scheduler` and `ScheduleSummary` metrics
//! - **`config`**: `SchedulerConfig` (placement order, offsets)
//! - **`validation`**: Construction checks and advisory owner validation
//! - **`error`**: `PawError` and the crate `Result` alias
//!
//! # Data Flow
//!
//! `Owner` → daily tasks → `Scheduler` → `ScheduleOutcome` → conflict report.
//! Everything is synchronous and in-memory; a scheduler borrows its owner
//! read-only, so one pass always sees a consistent snapshot.
//!
//! # Logging
//!
//! Placement decisions are emitted through `tracing` (`debug` per task,
//! `info` per pass, `warn` on skipped high-priority tasks and conflicts).
//! The crate never installs a subscriber.

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{PawError, Result};
