use jiff::civil::{date, time};

use super::*;
use crate::{
    dates::WeekdayStyle,
    models::{Highlight, ProcessStep, ScheduleGroup, SpecDetails, StepType},
};

fn step(id: &str, start: &str, end: &str) -> ProcessStep {
    ProcessStep::new(id, format!("Step {id}"), format!("Details of {id}"), StepType::Process)
        .with_dates(start, end)
}

fn schedule(steps: &[ProcessStep], specs: &[SpecDetails]) -> Vec<crate::models::ScheduleTask> {
    project_schedule(&ScheduleInput {
        steps,
        specs,
        ship: None,
        weekday_style: WeekdayStyle::Chinese,
    })
}

#[test]
fn test_multi_day_step_expands_per_day() {
    let steps = [step("a", "2024-01-01", "2024-01-03")];
    let rows = schedule(&steps, &[]);

    let dates: Vec<_> = rows.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["2024-01-01", "2024-01-02", "2024-01-03"]);
    assert_eq!(rows[0].notes, "Details of a");
    assert_eq!(rows[1].notes, CONTINUATION_MARKER);
    assert_eq!(rows[2].notes, CONTINUATION_MARKER);
    assert_eq!(rows[0].day, "一");
    assert_eq!(rows[2].day, "三");
    assert!(rows.iter().all(|r| r.task == "Step a"));
    assert!(rows
        .iter()
        .all(|r| r.gantt_group == ScheduleGroup::Step(StepType::Process)));
}

#[test]
fn test_empty_end_is_single_day() {
    let rows = schedule(&[step("a", "2024-01-05", "")], &[]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, "2024-01-05");
}

#[test]
fn test_time_of_day_is_ignored_for_days() {
    let rows = schedule(&[step("a", "2024-01-05T17:00", "2024-01-06T09:00")], &[]);
    let dates: Vec<_> = rows.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["2024-01-05", "2024-01-06"]);
}

#[test]
fn test_inverted_range_is_excluded() {
    let steps = [step("a", "2024-02-05", "2024-02-01")];
    assert!(schedule(&steps, &[]).is_empty());
    assert!(project_gantt(&steps).is_empty());
}

#[test]
fn test_unparseable_dates_are_excluded() {
    let steps = [
        step("a", "soon", ""),
        step("b", "2024-01-01", "later"),
        step("c", "", "2024-01-01"),
    ];
    assert!(schedule(&steps, &[]).is_empty());
    assert!(project_gantt(&steps).is_empty());
}

#[test]
fn test_inactive_steps_are_excluded() {
    let steps = [
        step("a", "2024-01-01", "2024-01-02").inactive(),
        step("b", "2024-01-01", "2024-01-01"),
    ];
    let rows = schedule(&steps, &[]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].task, "Step b");

    let bars = project_gantt(&steps);
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].name, "Step b");
}

#[test]
fn test_related_spec_annotation() {
    let specs = [SpecDetails::new(
        "spec-pcb",
        "PCB Spec",
        [("Layer Count", "4"), ("Material", "FR-4")],
    )];
    let steps = [step("a", "2024-01-01", "2024-01-02").with_spec("spec-pcb")];
    let rows = schedule(&steps, &specs);
    assert!(rows[0]
        .notes
        .ends_with("Related Spec: PCB Spec | Layer Count: 4; Material: FR-4"));
    assert_eq!(
        rows[0].notes,
        "Details of a | Related Spec: PCB Spec | Layer Count: 4; Material: FR-4"
    );
    assert_eq!(rows[1].notes, CONTINUATION_MARKER);
}

#[test]
fn test_dangling_or_empty_spec_gives_plain_notes() {
    let specs = [SpecDetails::new("empty", "Empty", Vec::<(String, String)>::new())];
    let steps = [
        step("a", "2024-01-01", "").with_spec("missing"),
        step("b", "2024-01-01", "").with_spec("empty"),
    ];
    let rows = schedule(&steps, &specs);
    assert_eq!(rows[0].notes, "Details of a");
    assert_eq!(rows[1].notes, "Details of b");
}

#[test]
fn test_ship_row_alone() {
    let rows = project_schedule(&ScheduleInput {
        steps: &[],
        specs: &[],
        ship: Some(ShipTarget {
            date: "2024-03-01",
            quantity: 500,
        }),
        weekday_style: WeekdayStyle::English,
    });
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.date, "2024-03-01");
    assert_eq!(row.day, "Fri");
    assert_eq!(row.task, TARGET_SHIP_LABEL);
    assert!(row.notes.contains("500"));
    assert_eq!(row.highlight, Some(Highlight::Critical));
    assert_eq!(row.gantt_group, ScheduleGroup::Shipment);
}

#[test]
fn test_unparseable_ship_date_kept_verbatim() {
    let steps = [
        step("late", "2024-12-01", "2024-12-01"),
        step("early", "2024-02-01", "2024-02-01"),
    ];
    let rows = project_schedule(&ScheduleInput {
        steps: &steps,
        specs: &[],
        ship: Some(ShipTarget {
            date: "3/1/2024",
            quantity: 20,
        }),
        weekday_style: WeekdayStyle::Chinese,
    });

    let dates: Vec<_> = rows.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["2024-02-01", "2024-12-01", "3/1/2024"]);
    let ship = &rows[2];
    assert_eq!(ship.task, TARGET_SHIP_LABEL);
    assert_eq!(ship.day, "-");
    assert_eq!(ship.gantt_group, ScheduleGroup::Shipment);
}

#[test]
fn test_blank_ship_date_adds_nothing() {
    let rows = project_schedule(&ScheduleInput {
        steps: &[],
        specs: &[],
        ship: Some(ShipTarget {
            date: "  ",
            quantity: 10,
        }),
        weekday_style: WeekdayStyle::Chinese,
    });
    assert!(rows.is_empty());
}

#[test]
fn test_sort_is_chronological_and_stable() {
    let steps = [
        step("late", "2024-01-03", ""),
        step("first", "2024-01-01", "2024-01-02"),
        step("second", "2024-01-02", ""),
    ];
    let rows = project_schedule(&ScheduleInput {
        steps: &steps,
        specs: &[],
        ship: Some(ShipTarget {
            date: "2024-01-02",
            quantity: 1,
        }),
        weekday_style: WeekdayStyle::Chinese,
    });

    assert!(rows.windows(2).all(|w| w[0].date <= w[1].date));
    let on_second: Vec<_> = rows
        .iter()
        .filter(|r| r.date == "2024-01-02")
        .map(|r| r.task.as_str())
        .collect();
    assert_eq!(on_second, ["Step first", "Step second", TARGET_SHIP_LABEL]);
}

#[test]
fn test_overlapping_steps_both_contribute() {
    let steps = [
        step("a", "2024-01-01", "2024-01-02"),
        step("b", "2024-01-02", "2024-01-03"),
    ];
    assert_eq!(schedule(&steps, &[]).len(), 4);
}

#[test]
fn test_projections_are_deterministic_and_pure() {
    let specs = [SpecDetails::new("s", "S", [("k", "v")])];
    let steps = vec![
        step("a", "2024-01-01", "2024-01-04").with_spec("s"),
        step("b", "2024-01-02T09:00", "2024-01-02T17:00"),
    ];
    let before = steps.clone();
    assert_eq!(schedule(&steps, &specs), schedule(&steps, &specs));
    assert_eq!(project_gantt(&steps), project_gantt(&steps));
    assert_eq!(steps, before);
}

#[test]
fn test_gantt_same_day_has_width() {
    let bars = project_gantt(&[step("a", "2024-01-10", "2024-01-10")]);
    assert_eq!(bars.len(), 1);
    assert!(bars[0].end > bars[0].start);
    assert_eq!(bars[0].end, date(2024, 1, 10).at(23, 59, 59, 999_000_000));
}

#[test]
fn test_gantt_explicit_end_time_is_kept() {
    let bars = project_gantt(&[step("a", "2024-01-10T09:00", "2024-01-12T17:00")]);
    assert_eq!(bars[0].start, date(2024, 1, 10).at(9, 0, 0, 0));
    assert_eq!(bars[0].end.time(), time(17, 0, 0, 0));
}

#[test]
fn test_gantt_requires_end_date() {
    assert!(project_gantt(&[step("a", "2024-01-10", "")]).is_empty());
}

#[test]
fn test_gantt_sorted_by_start_stable() {
    let steps = [
        step("c", "2024-01-05", "2024-01-06"),
        step("a", "2024-01-01", "2024-01-02"),
        step("b", "2024-01-01", "2024-01-09"),
    ];
    let names: Vec<_> = project_gantt(&steps).into_iter().map(|b| b.name).collect();
    assert_eq!(names, ["Step a", "Step b", "Step c"]);
}

#[test]
fn test_gantt_keeps_duplicate_names() {
    let mut twin = step("b", "2024-01-03", "2024-01-04");
    twin.name = "Step a".to_string();
    let steps = [step("a", "2024-01-01", "2024-01-02"), twin];
    assert_eq!(project_gantt(&steps).len(), 2);
}

#[test]
fn test_extend_to_end_of_day() {
    let midnight = date(2024, 1, 1).at(0, 0, 0, 0);
    assert_eq!(
        extend_to_end_of_day(midnight),
        date(2024, 1, 1).at(23, 59, 59, 999_000_000)
    );
    let afternoon = date(2024, 1, 1).at(15, 0, 0, 0);
    assert_eq!(extend_to_end_of_day(afternoon), afternoon);
}
