//! Data models for the NPI board.
//!
//! The editable models ([`ProcessStep`], [`SpecDetails`], [`ProjectDetails`])
//! are persisted together as a [`BoardSnapshot`]. The view models
//! ([`ScheduleTask`], [`GanttTask`]) are derived by [`crate::projection`] and
//! never stored. Display implementations for all of them live in
//! [`crate::display::models`].
//!
//! # JSON Layout
//!
//! Snapshots use camelCase keys so a stored board reads the same regardless
//! of which front end wrote it:
//!
//! ```rust
//! use npi_core::models::{ProcessStep, StepType};
//!
//! let step = ProcessStep::new("step-4", "SMT", "Surface mount assembly.", StepType::Process)
//!     .with_dates("2024-01-01", "2024-01-03")
//!     .with_spec("spec-smt");
//! let json = serde_json::to_value(&step).unwrap();
//! assert_eq!(json["type"], "process");
//! assert_eq!(json["isActive"], true);
//! assert_eq!(json["relatedSpecId"], "spec-smt");
//! ```

pub mod project;
pub mod snapshot;
pub mod spec;
pub mod step;
pub mod views;


pub use project::ProjectDetails;
pub use snapshot::{BoardSnapshot, StoredSnapshot};
pub use spec::{SpecDetails, SpecValue};
pub use step::{ProcessStep, StepType};
pub use views::{GanttTask, Highlight, ScheduleGroup, ScheduleTask, SHIPMENT_GROUP};
