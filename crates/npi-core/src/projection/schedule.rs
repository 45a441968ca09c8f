//! Day-by-day schedule projection.

use log::trace;

use crate::{
    dates::{days_inclusive, parse_local_date, weekday_label, WeekdayStyle},
    models::{Highlight, ProcessStep, ScheduleGroup, ScheduleTask, SpecDetails},
};

/// Notes shown on every day of a step after its first.
pub const CONTINUATION_MARKER: &str = "(續)";

/// Task label of the synthetic target-ship row.
pub const TARGET_SHIP_LABEL: &str = "目標出貨 (Target Ship Date)";

/// Shipment parameters for the synthetic final row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipTarget<'a> {
    pub date: &'a str,
    pub quantity: u64,
}

/// Inputs to [`project_schedule`].
#[derive(Debug, Clone, Copy)]
pub struct ScheduleInput<'a> {
    pub steps: &'a [ProcessStep],
    pub specs: &'a [SpecDetails],
    pub ship: Option<ShipTarget<'a>>,
    pub weekday_style: WeekdayStyle,
}

/// Expands active, dated steps into one row per calendar day they cover,
/// adds the target-ship row, and sorts everything by date.
///
/// Steps whose dates do not parse, or whose end precedes their start,
/// contribute no rows.
pub fn project_schedule(input: &ScheduleInput<'_>) -> Vec<ScheduleTask> {
    let mut rows: Vec<ScheduleTask> = input
        .steps
        .iter()
        .filter(|step| step.is_active && !step.start_date.trim().is_empty())
        .flat_map(|step| step_rows(step, input.specs, input.weekday_style))
        .collect();

    if let Some(ship) = input.ship.filter(|ship| !ship.date.trim().is_empty()) {
        rows.push(ship_row(ship, input.weekday_style));
    }

    // stable: rows on the same day keep step order
    rows.sort_by(|a, b| a.date.cmp(&b.date));
    rows
}

fn step_rows(step: &ProcessStep, specs: &[SpecDetails], style: WeekdayStyle) -> Vec<ScheduleTask> {
    let Some(start) = parse_local_date(&step.start_date) else {
        trace!("step {} skipped: unparseable start {:?}", step.id, step.start_date);
        return Vec::new();
    };
    let end = if step.end_date.trim().is_empty() {
        start
    } else {
        let Some(end) = parse_local_date(&step.end_date) else {
            trace!("step {} skipped: unparseable end {:?}", step.id, step.end_date);
            return Vec::new();
        };
        end
    };

    days_inclusive(start, end)
        .into_iter()
        .enumerate()
        .map(|(index, day)| {
            let date = day.to_string();
            ScheduleTask {
                day: weekday_label(&date, style),
                date,
                task: step.name.clone(),
                notes: if index == 0 {
                    first_day_notes(step, specs)
                } else {
                    CONTINUATION_MARKER.to_string()
                },
                highlight: None,
                gantt_group: ScheduleGroup::Step(step.step_type),
            }
        })
        .collect()
}

/// Step details, followed by the linked spec's title and items when the
/// link resolves to a spec with at least one item.
pub fn first_day_notes(step: &ProcessStep, specs: &[SpecDetails]) -> String {
    match find_spec(specs, step.spec_link()) {
        Some(spec) if !spec.items.is_empty() => format!(
            "{} | Related Spec: {} | {}",
            step.details,
            spec.title,
            spec.items_summary()
        ),
        _ => step.details.clone(),
    }
}

/// Resolves a weak spec reference. Unset and dangling links both yield
/// `None`.
pub fn find_spec<'a>(specs: &'a [SpecDetails], id: Option<&str>) -> Option<&'a SpecDetails> {
    let id = id?;
    specs.iter().find(|spec| spec.id == id)
}

fn ship_row(ship: ShipTarget<'_>, style: WeekdayStyle) -> ScheduleTask {
    // normalize to an ISO date so the row sorts among step rows
    let date = parse_local_date(ship.date)
        .map(|date| date.to_string())
        .unwrap_or_else(|| ship.date.to_string());
    ScheduleTask {
        day: weekday_label(ship.date, style),
        date,
        task: TARGET_SHIP_LABEL.to_string(),
        notes: format!("Final shipment for {} pcs.", ship.quantity),
        highlight: Some(Highlight::Critical),
        gantt_group: ScheduleGroup::Shipment,
    }
}
