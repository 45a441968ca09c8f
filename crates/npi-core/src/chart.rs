//! Gantt chart layout.
//!
//! Turns projected [`GanttTask`]s into positioned bars on a shared time
//! window. The window is padded two days on each side of the earliest start
//! and latest end. Bars keep their input order.

use jiff::{civil::DateTime, ToSpan};

use crate::models::GanttTask;

const PADDING_DAYS: i64 = 2;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// A bar positioned within the chart window, in percent of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub name: String,
    pub start: DateTime,
    pub end: DateTime,
    /// Distance from the window start to the bar start
    pub offset_pct: f64,
    /// Length of the bar
    pub width_pct: f64,
}

/// Result of laying out a chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartLayout {
    /// No bars to draw
    Empty,
    /// The padded window has no positive length
    InvalidRange,
    /// Bars positioned on a window of `total_days`
    Bars {
        window_start: DateTime,
        window_end: DateTime,
        total_days: f64,
        bars: Vec<ChartBar>,
    },
}

impl ChartLayout {
    /// Lays out the given bars.
    pub fn from_tasks(tasks: &[GanttTask]) -> Self {
        let (Some(min_start), Some(max_end)) = (
            tasks.iter().map(|t| t.start).min(),
            tasks.iter().map(|t| t.end).max(),
        ) else {
            return ChartLayout::Empty;
        };

        let window_start = min_start
            .checked_sub(PADDING_DAYS.days())
            .unwrap_or(min_start);
        let window_end = max_end.checked_add(PADDING_DAYS.days()).unwrap_or(max_end);

        let total_days = days_between(window_start, window_end);
        if total_days <= 0.0 {
            return ChartLayout::InvalidRange;
        }

        let bars = tasks
            .iter()
            .map(|task| ChartBar {
                name: task.name.clone(),
                start: task.start,
                end: task.end,
                offset_pct: days_between(window_start, task.start) / total_days * 100.0,
                width_pct: days_between(task.start, task.end) / total_days * 100.0,
            })
            .collect();

        ChartLayout::Bars {
            window_start,
            window_end,
            total_days,
            bars,
        }
    }
}

/// Fractional days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: DateTime, to: DateTime) -> f64 {
    from.duration_until(to).as_secs_f64() / SECONDS_PER_DAY
}
