//! Edit parameters for board operations.
//!
//! Every change to a board is described by one [`Edit`] value and applied
//! through [`crate::Board::apply`]. Keeping edits as plain data means each
//! front end (the CLI today) only has to build an `Edit` from its own
//! argument types; the transition logic lives in one place.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │     Edit        │    │  Board::apply   │
//! │  (clap derives) │───▶│  (plain data)   │───▶│ validate+commit │
//! └─────────────────┘    └─────────────────┘    │   + persist     │
//!                                               └─────────────────┘
//! ```

pub use crate::dates::DateField;

/// Editable fields of the project details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Id,
    Quantity,
    PcbSize,
    TargetShipDate,
}

impl ProjectField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectField::Id => "id",
            ProjectField::Quantity => "quantity",
            ProjectField::PcbSize => "pcbSize",
            ProjectField::TargetShipDate => "targetShipDate",
        }
    }
}

/// Text fields of a process step that can be edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepField {
    Name,
    Details,
    StartDate,
    EndDate,
}

impl StepField {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepField::Name => "name",
            StepField::Details => "details",
            StepField::StartDate => "startDate",
            StepField::EndDate => "endDate",
        }
    }
}

impl From<DateField> for StepField {
    fn from(field: DateField) -> Self {
        match field {
            DateField::Start => StepField::StartDate,
            DateField::End => StepField::EndDate,
        }
    }
}

/// One state transition of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    SetAppTitle(String),
    SetProjectDetail {
        field: ProjectField,
        value: String,
    },
    AddSpec,
    SetSpecTitle {
        spec_id: String,
        title: String,
    },
    /// Sets an item value, appending the key if it is new
    SetSpecItem {
        spec_id: String,
        key: String,
        value: String,
    },
    /// Renames an item key in place; an empty or unchanged new key is a no-op
    RenameSpecItem {
        spec_id: String,
        old_key: String,
        new_key: String,
    },
    AddSpecItem {
        spec_id: String,
    },
    DeleteSpecItem {
        spec_id: String,
        key: String,
    },
    /// Removes the spec and clears every step link pointing at it
    DeleteSpec {
        spec_id: String,
    },
    MoveSpec {
        from: usize,
        to: usize,
    },
    SetStepField {
        step_id: String,
        field: StepField,
        value: String,
    },
    /// Sets the same start or end date on several steps
    SetStepDates {
        step_ids: Vec<String>,
        field: DateField,
        value: String,
    },
    /// Sets or (with `None`) clears a step's spec link
    LinkStepToSpec {
        step_id: String,
        spec_id: Option<String>,
    },
    AddStep,
    DeleteStep {
        step_id: String,
    },
    ToggleStep {
        step_id: String,
    },
    /// Moves a step within the full ordered sequence
    MoveStep {
        from: usize,
        to: usize,
    },
    /// Drag-and-drop among active steps; inactive steps end up last
    DropStep {
        dragged: String,
        target: String,
    },
    SetProcessFlowTitle(String),
    /// Newline-separated attendee names; blank lines are dropped
    SetAttendees(String),
    SetMeetingDate(String),
}

/// Outcome of an accepted edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// Human-readable description of the change
    pub message: String,
    /// Id of the spec or step the edit created, if any
    pub created_id: Option<String>,
}

impl Applied {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_id: None,
        }
    }

    pub fn created(message: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_id: Some(id.into()),
        }
    }
}
