//! Display formatting wrappers for board data and derived views.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and views are wrapped in newtypes that add headings and
//! empty-collection handling. Every formatter produces markdown, which the
//! CLI passes through its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Models/Views   │    │    Wrappers     │    │    Markdown     │
//! │ (Step, Spec,    │───▶│ (Schedule,      │───▶│     Output      │
//! │  ScheduleTask)  │    │  GanttChart..)  │    │   (terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: step and spec lists
//! - [`schedule`]: the day-by-day schedule
//! - [`chart`]: Gantt chart text rendering
//! - [`report`]: overview and full-board report
//! - [`status`]: confirmation after an applied edit
//! - [`datetime`]: date-time formatting
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use npi_core::{display::OperationStatus, params::Applied};
//!
//! let status = OperationStatus(Applied::new("Added step"));
//! assert!(format!("{status}").contains("Success:"));
//! ```

pub mod chart;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod report;
pub mod schedule;
pub mod status;

pub use chart::GanttChart;
pub use collections::{Specs, Steps};
pub use datetime::WallClock;
pub use report::{Attendees, Overview, Report};
pub use schedule::Schedule;
pub use status::OperationStatus;
