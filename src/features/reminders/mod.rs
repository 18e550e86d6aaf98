//! # Reminders Feature
//!
//! File-backed reminders with cancellable timers and a periodic due sweep.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Single reminder entity shared by voice scheduling and the HTTP API
//! - 1.0.0: Initial release with minute-based scheduling

pub mod model;
pub mod scheduler;
pub mod store;

pub use model::{announcement, parse_due_time, Reminder};
pub use scheduler::ReminderScheduler;
pub use store::{partition_due, ReminderStore};
