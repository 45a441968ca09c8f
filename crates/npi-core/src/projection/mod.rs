//! Derived views over the board: the day-by-day schedule and the Gantt bars.
//!
//! Both projections are pure functions of their inputs. They never mutate the
//! steps or specs they read, perform no I/O, and return identical output for
//! identical input. Malformed data degrades the output instead of failing:
//!
//! | Input problem                  | Schedule        | Gantt         |
//! |--------------------------------|-----------------|---------------|
//! | inactive step                  | no rows         | no bar        |
//! | empty start date               | no rows         | no bar        |
//! | unparseable start or end       | no rows         | no bar        |
//! | end before start               | no rows         | no bar        |
//! | empty end date                 | single day      | no bar        |
//! | dangling `relatedSpecId`       | plain notes     | n/a           |
//!
//! ```rust
//! use npi_core::models::{ProcessStep, StepType};
//! use npi_core::projection::{project_gantt, project_schedule, ScheduleInput};
//!
//! let steps = vec![
//!     ProcessStep::new("smt", "SMT", "Top and bottom side.", StepType::Process)
//!         .with_dates("2024-01-01", "2024-01-03"),
//! ];
//! let rows = project_schedule(&ScheduleInput {
//!     steps: &steps,
//!     specs: &[],
//!     ship: None,
//!     weekday_style: Default::default(),
//! });
//! assert_eq!(rows.len(), 3);
//! assert_eq!(project_gantt(&steps).len(), 1);
//! ```

pub mod gantt;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use gantt::{extend_to_end_of_day, project_gantt};
pub use schedule::{
    find_spec, first_day_notes, project_schedule, ScheduleInput, ShipTarget, CONTINUATION_MARKER,
    TARGET_SHIP_LABEL,
};
