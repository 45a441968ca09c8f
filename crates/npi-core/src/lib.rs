//! Core library for the NPI meeting board.
//!
//! The board tracks a New Product Introduction trial run: project metadata,
//! technical specs, an ordered manufacturing process flow, and meeting
//! attendees. From the process flow it derives two read-only views:
//!
//! - a **day-by-day schedule** with one row per calendar day each active step
//!   spans, plus the target ship date ([`projection::project_schedule`])
//! - **Gantt bars** for every active step with a start and end date
//!   ([`projection::project_gantt`])
//!
//! # Layers
//!
//! - [`models`]: editable data and derived view rows
//! - [`projection`]: the pure schedule and Gantt projectors
//! - [`chart`]: Gantt chart layout math
//! - [`board`]: the state container with its edit-and-persist transition
//! - [`params`]: the [`Edit`](params::Edit) operations a board accepts
//! - [`store`]: key-value snapshot persistence (SQLite or in memory)
//! - [`display`]: markdown formatting for terminals
//!
//! # Quick Start
//!
//! ```rust
//! use npi_core::{
//!     display::Schedule,
//!     params::{Edit, ProjectField},
//!     BoardBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut board = BoardBuilder::new().in_memory().build()?;
//!
//! board.apply(Edit::SetProjectDetail {
//!     field: ProjectField::Quantity,
//!     value: "500".to_string(),
//! })?;
//! board.apply(Edit::SetProjectDetail {
//!     field: ProjectField::TargetShipDate,
//!     value: "2024-03-01".to_string(),
//! })?;
//!
//! let rows = board.schedule();
//! assert_eq!(rows.len(), 1);
//! println!("{}", Schedule(&rows));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod board;
pub mod chart;
pub mod dates;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod projection;
pub mod store;

// Re-export commonly used types
pub use board::{Board, BoardBuilder};
pub use dates::WeekdayStyle;
pub use error::{BoardError, Result};
pub use models::{
    BoardSnapshot, GanttTask, ProcessStep, ProjectDetails, ScheduleTask, SpecDetails, StepType,
};
pub use params::{Applied, Edit};
pub use store::{MemoryStore, SnapshotStore, SqliteStore};
