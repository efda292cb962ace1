//! Pet care domain models.
//!
//! Ownership is a strict tree: an [`Owner`] owns [`Pet`]s, a pet owns
//! [`Task`]s. Schedules borrow tasks read-only.
//!
//! # Time Model
//!
//! | Value | Unit |
//! |-------|------|
//! | Availability | whole hours, `[start, end)` |
//! | Task duration | minutes |
//! | Scheduled start/end | minutes since midnight |

mod owner;
mod pet;
mod schedule;
mod task;

pub use owner::Owner;
pub use pet::Pet;
pub use schedule::{format_minute, Conflict, ScheduleOutcome, ScheduledTask};
pub use task::{Frequency, Priority, Task};
