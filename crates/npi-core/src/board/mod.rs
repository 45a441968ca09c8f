//! The board state container.
//!
//! A [`Board`] owns the current [`BoardSnapshot`] and the store it is
//! mirrored to. All changes go through [`Board::apply`], the single
//! update-and-persist transition:
//!
//! ```text
//! ┌──────────┐    ┌──────────────────┐    ┌──────────┐    ┌───────────────┐
//! │   Edit   │───▶│ apply to scratch │───▶│  commit  │───▶│ save snapshot │
//! └──────────┘    │   copy of state  │    └──────────┘    │ (best effort) │
//!                 └──────────────────┘                    └───────────────┘
//! ```
//!
//! A rejected edit leaves both the in-memory state and the store untouched.
//! A failed save is logged and otherwise ignored; the committed state stays
//! in memory and is written again with the next accepted edit.
//!
//! Derived views ([`Board::schedule`], [`Board::gantt`]) are recomputed from
//! the committed state on every call.
//!
//! ```rust
//! use npi_core::{params::{Edit, StepField}, BoardBuilder};
//!
//! # fn example() -> npi_core::Result<()> {
//! let mut board = BoardBuilder::new().in_memory().build()?;
//! let step_id = board.snapshot().process_steps[0].id.clone();
//! board.apply(Edit::SetStepField {
//!     step_id,
//!     field: StepField::StartDate,
//!     value: "2024-01-01".to_string(),
//! })?;
//! assert_eq!(board.schedule().len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use log::{debug, error, warn};

use crate::{
    chart::ChartLayout,
    dates::WeekdayStyle,
    error::Result,
    models::{BoardSnapshot, GanttTask, ProcessStep, ScheduleTask, SpecDetails, StoredSnapshot},
    params::{Applied, Edit},
    projection::{self, ScheduleInput, ShipTarget},
    store::{SnapshotStore, SNAPSHOT_KEY},
};

pub mod builder;
mod edits;
pub mod reorder;

pub use builder::BoardBuilder;

/// Board state plus the store it is persisted to.
pub struct Board {
    state: BoardSnapshot,
    store: Box<dyn SnapshotStore>,
    weekday_style: WeekdayStyle,
}

impl Board {
    /// Loads the board from `store`.
    ///
    /// A missing snapshot yields the seeded defaults. An unreadable or
    /// unparseable one is logged and also yields the defaults.
    pub fn open(store: Box<dyn SnapshotStore>, weekday_style: WeekdayStyle) -> Self {
        let state = match store.get(SNAPSHOT_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<StoredSnapshot>(&json) {
                Ok(stored) => BoardSnapshot::from(stored),
                Err(e) => {
                    warn!("Could not parse stored board, using defaults: {e}");
                    BoardSnapshot::default()
                }
            },
            Ok(None) => {
                debug!("No stored board, using defaults");
                BoardSnapshot::default()
            }
            Err(e) => {
                error!("Could not load state: {e}");
                BoardSnapshot::default()
            }
        };
        Self {
            state,
            store,
            weekday_style,
        }
    }

    /// Applies one edit, commits it and persists the new snapshot.
    ///
    /// # Errors
    ///
    /// Returns the validation error of a rejected edit (unknown id,
    /// out-of-range index, duplicate item key). Persistence failures are not
    /// reported here.
    pub fn apply(&mut self, edit: Edit) -> Result<Applied> {
        let mut next = self.state.clone();
        let applied = edits::apply_edit(&mut next, edit)?;
        self.state = next;
        debug!("{}", applied.message);
        self.persist();
        Ok(applied)
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            error!("Could not save state: {e}");
        }
    }

    fn save(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.state)?;
        self.store.set(SNAPSHOT_KEY, &json)
    }

    /// The committed board state.
    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.state
    }

    /// The store this board persists to.
    pub fn store(&self) -> &dyn SnapshotStore {
        self.store.as_ref()
    }

    pub fn weekday_style(&self) -> WeekdayStyle {
        self.weekday_style
    }

    /// Looks up a spec by id. Unknown ids yield `None`.
    pub fn find_spec(&self, id: &str) -> Option<&SpecDetails> {
        projection::find_spec(&self.state.specs, Some(id))
    }

    /// Looks up a process step by id.
    pub fn find_step(&self, id: &str) -> Option<&ProcessStep> {
        self.state.process_steps.iter().find(|s| s.id == id)
    }

    /// Day-by-day schedule derived from the current state.
    pub fn schedule(&self) -> Vec<ScheduleTask> {
        let project = &self.state.project_details;
        projection::project_schedule(&ScheduleInput {
            steps: &self.state.process_steps,
            specs: &self.state.specs,
            ship: project.target_ship_date().map(|date| ShipTarget {
                date,
                quantity: project.quantity,
            }),
            weekday_style: self.weekday_style,
        })
    }

    /// Gantt bars derived from the current state.
    pub fn gantt(&self) -> Vec<GanttTask> {
        projection::project_gantt(&self.state.process_steps)
    }

    /// Chart layout of the current Gantt bars.
    pub fn chart(&self) -> ChartLayout {
        ChartLayout::from_tasks(&self.gantt())
    }
}
