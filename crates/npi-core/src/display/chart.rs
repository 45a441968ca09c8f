//! Gantt chart text rendering.

use std::fmt;

use super::datetime::WallClock;
use crate::chart::{ChartBar, ChartLayout};

const TRACK_WIDTH: usize = 40;
const EMPTY_MESSAGE: &str = "No task data available for the Gantt chart.";
const INVALID_MESSAGE: &str = "Invalid date range for Gantt chart.";

/// Draws a [`ChartLayout`] as fixed-width text bars followed by a task
/// summary list.
pub struct GanttChart<'a>(pub &'a ChartLayout);

impl<'a> fmt::Display for GanttChart<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (window_start, window_end, bars) = match self.0 {
            ChartLayout::Empty => return writeln!(f, "{EMPTY_MESSAGE}"),
            ChartLayout::InvalidRange => return writeln!(f, "{INVALID_MESSAGE}"),
            ChartLayout::Bars {
                window_start,
                window_end,
                bars,
                ..
            } => (window_start, window_end, bars),
        };

        let label_width = bars
            .iter()
            .map(|bar| bar.name.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(f, "```")?;
        for bar in bars {
            writeln!(
                f,
                "{:<label_width$} |{}|",
                bar.name,
                track(bar),
                label_width = label_width
            )?;
        }
        writeln!(
            f,
            "{:<label_width$}  {} .. {}",
            "",
            window_start.date(),
            window_end.date(),
            label_width = label_width
        )?;
        writeln!(f, "```")?;
        writeln!(f)?;

        writeln!(f, "#### Task Summary")?;
        writeln!(f)?;
        for bar in bars {
            writeln!(
                f,
                "- **{}**: {} to {}",
                bar.name,
                WallClock(&bar.start),
                WallClock(&bar.end)
            )?;
        }
        Ok(())
    }
}

/// One bar drawn on a track of `TRACK_WIDTH` cells. Every bar gets at least
/// one cell.
fn track(bar: &ChartBar) -> String {
    let scale = |pct: f64| (pct / 100.0 * TRACK_WIDTH as f64).round().max(0.0) as usize;
    let start = scale(bar.offset_pct).min(TRACK_WIDTH - 1);
    let len = scale(bar.width_pct).clamp(1, TRACK_WIDTH - start);
    format!(
        "{}{}{}",
        " ".repeat(start),
        "█".repeat(len),
        " ".repeat(TRACK_WIDTH - start - len)
    )
}
