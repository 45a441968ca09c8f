//! Day-by-day schedule display.

use std::fmt;

use crate::models::{Highlight, ScheduleTask};

/// Newtype wrapper for displaying schedule rows grouped under one heading
/// per date.
///
/// ```rust
/// use npi_core::display::Schedule;
/// use npi_core::models::{ScheduleGroup, ScheduleTask, StepType};
///
/// let rows = vec![ScheduleTask {
///     date: "2024-01-01".to_string(),
///     day: "一".to_string(),
///     task: "SMT".to_string(),
///     notes: "Top side".to_string(),
///     highlight: None,
///     gantt_group: ScheduleGroup::Step(StepType::Process),
/// }];
/// let output = Schedule(&rows).to_string();
/// assert!(output.contains("### 2024-01-01 (一)"));
/// assert!(output.contains("- SMT: Top side"));
/// ```
pub struct Schedule<'a>(pub &'a [ScheduleTask]);

impl<'a> fmt::Display for Schedule<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No scheduled tasks.");
        }
        let mut previous: Option<&str> = None;
        for row in self.0 {
            if previous != Some(row.date.as_str()) {
                if previous.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "### {} ({})", row.date, row.day)?;
                writeln!(f)?;
                previous = Some(row.date.as_str());
            }
            match row.highlight {
                Some(Highlight::Critical) => writeln!(f, "- **{}**: **{}**", row.task, row.notes)?,
                None => writeln!(f, "- {}: {}", row.task, row.notes)?,
            }
        }
        Ok(())
    }
}
