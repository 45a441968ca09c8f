//! Derived view rows. These are recomputed from the board on demand and
//! never persisted.

use jiff::civil::DateTime;
use serde::{Serialize, Serializer};

use super::StepType;

/// Group name used by the synthetic target-ship row.
pub const SHIPMENT_GROUP: &str = "Shipment";

/// Which Gantt group a schedule row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleGroup {
    /// Row produced by a process step of this type
    Step(StepType),
    /// The target ship date row
    Shipment,
}

impl ScheduleGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleGroup::Step(step_type) => step_type.as_str(),
            ScheduleGroup::Shipment => SHIPMENT_GROUP,
        }
    }
}

impl Serialize for ScheduleGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Style hint for a schedule row.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    /// Strong marker, rendered bold red
    Critical,
}

/// One calendar-day row of the day-by-day schedule.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTask {
    /// ISO date (`YYYY-MM-DD`) for step rows; the stored string for an
    /// unparseable ship date
    pub date: String,
    /// Short weekday label, `-` when the date does not parse
    pub day: String,
    pub task: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
    pub gantt_group: ScheduleGroup,
}

/// One bar of the Gantt chart, in local wall-clock time.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GanttTask {
    pub name: String,
    pub start: DateTime,
    pub end: DateTime,
}
