//! Process step model definition and related functionality.

use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

/// Kind of stage a process step represents.
///
/// Used for grouping only: schedule rows carry it as their Gantt group.
/// Stored values outside the four known kinds read back as
/// [`StepType::Process`] so one odd step never invalidates the flow.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    /// Manufacturing or assembly work
    #[default]
    Process,

    /// Electrical or functional testing
    Test,

    /// Quality control and inspection
    Qc,

    /// Packaging and shipping preparation
    Pack,
}

impl FromStr for StepType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "process" => Ok(StepType::Process),
            "test" => Ok(StepType::Test),
            "qc" => Ok(StepType::Qc),
            "pack" => Ok(StepType::Pack),
            _ => Err(format!("Invalid step type: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for StepType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(StepType::Process);
        };
        Ok(raw.parse().unwrap_or_else(|e| {
            warn!("{e}, reading as process");
            StepType::Process
        }))
    }
}

impl StepType {
    /// Lowercase name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepType::Process => "process",
            StepType::Test => "test",
            StepType::Qc => "qc",
            StepType::Pack => "pack",
        }
    }
}

/// One manufacturing, QC, test, or packing stage of the process flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    /// Unique identifier, stable for the step's lifetime
    pub id: String,

    /// Short label shown in the flow, schedule and chart
    #[serde(default)]
    pub name: String,

    /// Free-text description, used as the first-day schedule note
    #[serde(default)]
    pub details: String,

    /// Grouping kind
    #[serde(rename = "type", default)]
    pub step_type: StepType,

    /// Inactive steps are excluded from every projection
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Date or date-time string; empty means unset
    #[serde(default)]
    pub start_date: String,

    /// Date or date-time string; empty means a single-day event
    #[serde(default)]
    pub end_date: String,

    /// Weak reference to a spec by id; may dangle
    #[serde(default)]
    pub related_spec_id: Option<String>,
}

fn default_active() -> bool {
    true
}

impl ProcessStep {
    /// Creates an active, undated step with no spec link.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        details: impl Into<String>,
        step_type: StepType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            details: details.into(),
            step_type,
            is_active: true,
            start_date: String::new(),
            end_date: String::new(),
            related_spec_id: None,
        }
    }

    /// Sets both date strings.
    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = start.into();
        self.end_date = end.into();
        self
    }

    /// Links the step to a spec.
    pub fn with_spec(mut self, spec_id: impl Into<String>) -> Self {
        self.related_spec_id = Some(spec_id.into());
        self
    }

    /// Marks the step inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// The linked spec id, with an empty string treated as no link.
    pub fn spec_link(&self) -> Option<&str> {
        self.related_spec_id.as_deref().filter(|id| !id.is_empty())
    }
}
