//! Board-level views: the overview page and the full printable report.

use std::fmt;

use super::{GanttChart, Schedule, Specs, Steps};
use crate::Board;

/// Project details, Gantt chart and schedule.
pub struct Overview<'a>(pub &'a Board);

impl<'a> fmt::Display for Overview<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0.snapshot();
        writeln!(f, "# {} {}", snapshot.app_title, snapshot.project_details.id)?;
        writeln!(f)?;
        writeln!(f, "## Overview")?;
        writeln!(f)?;
        write!(f, "{}", snapshot.project_details)?;
        writeln!(f)?;
        writeln!(f, "## Gantt")?;
        writeln!(f)?;
        write!(f, "{}", GanttChart(&self.0.chart()))?;
        writeln!(f)?;
        writeln!(f, "## Schedule")?;
        writeln!(f)?;
        write!(f, "{}", Schedule(&self.0.schedule()))
    }
}

/// Every section of the board, in print order.
pub struct Report<'a>(pub &'a Board);

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0.snapshot();
        write!(f, "{}", Overview(self.0))?;
        writeln!(f)?;
        writeln!(f, "## {}", snapshot.process_flow_title)?;
        writeln!(f)?;
        write!(f, "{}", Steps(&snapshot.process_steps))?;
        writeln!(f)?;
        writeln!(f, "## Specs")?;
        writeln!(f)?;
        write!(f, "{}", Specs(&snapshot.specs))?;
        writeln!(f)?;
        write!(f, "{}", Attendees(&snapshot.attendees, &snapshot.meeting_date))
    }
}

/// Meeting date and attendee list.
pub struct Attendees<'a>(pub &'a [String], pub &'a str);

impl<'a> fmt::Display for Attendees<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Attendees")?;
        writeln!(f)?;
        writeln!(f, "- Meeting Date: {}", self.1)?;
        if self.0.is_empty() {
            writeln!(f)?;
            return writeln!(f, "No attendees recorded.");
        }
        writeln!(f)?;
        for name in self.0 {
            writeln!(f, "- {name}")?;
        }
        Ok(())
    }
}
