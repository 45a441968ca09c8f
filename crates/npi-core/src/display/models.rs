//! Display implementations for domain models.

use std::fmt;

use crate::models::{ProcessStep, ProjectDetails, ScheduleGroup, SpecDetails, StepType};

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ScheduleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ProcessStep {
    /// Formats the step, prefixed with its 1-based position when listed.
    pub(crate) fn fmt_step(&self, f: &mut fmt::Formatter<'_>, position: Option<usize>) -> fmt::Result {
        let state = if self.is_active { "○ active" } else { "✗ inactive" };
        match position {
            Some(n) => writeln!(f, "### {n}. {} ({}, {state})", self.name, self.step_type)?,
            None => writeln!(f, "### {} ({}, {state})", self.name, self.step_type)?,
        }
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        match (self.start_date.is_empty(), self.end_date.is_empty()) {
            (true, true) => writeln!(f, "- Dates: unscheduled")?,
            (false, true) => writeln!(f, "- Dates: {}", self.start_date)?,
            _ => writeln!(f, "- Dates: {} to {}", self.start_date, self.end_date)?,
        }
        if let Some(spec_id) = self.spec_link() {
            writeln!(f, "- Spec: {spec_id}")?;
        }

        if !self.details.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.details)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ProcessStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_step(f, None)
    }
}

impl fmt::Display for SpecDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.id)?;
        writeln!(f)?;
        if self.items.is_empty() {
            writeln!(f, "No parameters.")?;
        }
        for (key, value) in &self.items {
            writeln!(f, "- {key}: {value}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ProjectDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Project: {}", self.id)?;
        writeln!(f, "- Quantity: {}", self.quantity)?;
        writeln!(f, "- PCB Size: {}", self.pcb_size)?;
        writeln!(
            f,
            "- Target Ship Date: {}",
            self.target_ship_date().unwrap_or("not set")
        )
    }
}
