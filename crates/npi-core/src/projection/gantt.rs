//! Gantt bar projection.

use jiff::civil::{DateTime, Time};
use log::trace;

use crate::{
    dates::{parse_local, END_OF_DAY},
    models::{GanttTask, ProcessStep},
};

/// One bar per active step that has both a start and an end date, sorted by
/// start.
///
/// An end given without a time of day is stretched to the last millisecond
/// of that day so single-day steps get a visible bar. Steps whose dates do
/// not parse, or whose end lands before their start, are dropped.
pub fn project_gantt(steps: &[ProcessStep]) -> Vec<GanttTask> {
    let mut bars: Vec<GanttTask> = steps
        .iter()
        .filter(|step| {
            step.is_active && !step.start_date.trim().is_empty() && !step.end_date.trim().is_empty()
        })
        .filter_map(bar_for)
        .collect();
    bars.sort_by_key(|bar| bar.start);
    bars
}

fn bar_for(step: &ProcessStep) -> Option<GanttTask> {
    let (Some(start), Some(end)) = (parse_local(&step.start_date), parse_local(&step.end_date))
    else {
        trace!("step {} has no gantt bar: unparseable dates", step.id);
        return None;
    };
    let end = extend_to_end_of_day(end);
    if end < start {
        trace!("step {} has no gantt bar: end before start", step.id);
        return None;
    }
    Some(GanttTask {
        name: step.name.clone(),
        start,
        end,
    })
}

/// Midnight ends become 23:59:59.999 on the same day; explicit times are kept.
pub fn extend_to_end_of_day(end: DateTime) -> DateTime {
    if end.time() == Time::midnight() {
        end.date().to_datetime(END_OF_DAY)
    } else {
        end
    }
}
