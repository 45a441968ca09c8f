mod common;

use common::{create_test_board, reopen};
use jiff::civil::date;
use npi_core::{
    chart::ChartLayout,
    models::{ScheduleGroup, SpecValue},
    params::{DateField, Edit, ProjectField, StepField},
    store::SNAPSHOT_KEY,
    Board, BoardError, BoardSnapshot, MemoryStore, SnapshotStore, StepType, WeekdayStyle,
};

/// Store that refuses every write.
struct ReadOnlyStore;

impl SnapshotStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> npi_core::Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> npi_core::Result<()> {
        Err(BoardError::FileSystem {
            path: "board.db".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

fn empty_board() -> Board {
    let json = serde_json::to_string(&BoardSnapshot::empty()).expect("Failed to serialize");
    Board::open(
        Box::new(MemoryStore::with_entry(SNAPSHOT_KEY, json)),
        WeekdayStyle::default(),
    )
}

fn add_dated_step(board: &mut Board, name: &str, start: &str, end: &str) -> String {
    let id = board
        .apply(Edit::AddStep)
        .expect("Failed to add step")
        .created_id
        .expect("AddStep returns the new id");
    for (field, value) in [
        (StepField::Name, name),
        (StepField::StartDate, start),
        (StepField::EndDate, end),
    ] {
        board
            .apply(Edit::SetStepField {
                step_id: id.clone(),
                field,
                value: value.to_string(),
            })
            .expect("Failed to set step field");
    }
    id
}

#[test]
fn test_fresh_board_has_seeded_defaults() {
    let (_temp_dir, board) = create_test_board();
    let snapshot = board.snapshot();

    assert_eq!(snapshot.specs.len(), 15);
    assert_eq!(snapshot.process_steps.len(), 17);
    assert!(snapshot.attendees.is_empty());
    // no dates yet, so nothing is projected
    assert!(board.schedule().is_empty());
    assert!(board.gantt().is_empty());
    assert_eq!(board.chart(), ChartLayout::Empty);
}

#[test]
fn test_edits_survive_reopen() {
    let (temp_dir, mut board) = create_test_board();
    let step_id = board.snapshot().process_steps[3].id.clone();

    board
        .apply(Edit::SetAppTitle("Trial Run B".to_string()))
        .expect("Failed to set title");
    board
        .apply(Edit::SetProjectDetail {
            field: ProjectField::Quantity,
            value: "250".to_string(),
        })
        .expect("Failed to set quantity");
    board
        .apply(Edit::SetStepDates {
            step_ids: vec![step_id.clone()],
            field: DateField::Start,
            value: "2024-05-06T09:00".to_string(),
        })
        .expect("Failed to set dates");
    board
        .apply(Edit::SetAttendees("Amy\nBo".to_string()))
        .expect("Failed to set attendees");
    drop(board);

    let board = reopen(&temp_dir);
    let snapshot = board.snapshot();
    assert_eq!(snapshot.app_title, "Trial Run B");
    assert_eq!(snapshot.project_details.quantity, 250);
    assert_eq!(snapshot.attendees, ["Amy", "Bo"]);
    let step = board.find_step(&step_id).expect("step persisted");
    assert_eq!(step.start_date, "2024-05-06T09:00");
    assert_eq!(board.schedule().len(), 1);
}

#[test]
fn test_spec_item_order_survives_reopen() {
    let (temp_dir, mut board) = create_test_board();
    let spec_id = board
        .apply(Edit::AddSpec)
        .expect("Failed to add spec")
        .created_id
        .expect("AddSpec returns the new id");
    for key in ["Zeta", "Alpha", "Mid"] {
        board
            .apply(Edit::SetSpecItem {
                spec_id: spec_id.clone(),
                key: key.to_string(),
                value: "1".to_string(),
            })
            .expect("Failed to set item");
    }
    drop(board);

    let board = reopen(&temp_dir);
    let spec = board.find_spec(&spec_id).expect("spec persisted");
    let keys: Vec<_> = spec.items.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Zeta", "Alpha", "Mid"]);
}

#[test]
fn test_corrupt_snapshot_falls_back_to_defaults() {
    let store = MemoryStore::with_entry(SNAPSHOT_KEY, "{not json");
    let board = Board::open(Box::new(store), WeekdayStyle::default());
    assert_eq!(board.snapshot().process_steps.len(), 17);
}

#[test]
fn test_partial_snapshot_keeps_stored_fields() {
    let store = MemoryStore::with_entry(
        SNAPSHOT_KEY,
        r#"{"appTitle":"Stored","processSteps":[],"meetingDate":""}"#,
    );
    let board = Board::open(Box::new(store), WeekdayStyle::default());
    let snapshot = board.snapshot();
    assert_eq!(snapshot.app_title, "Stored");
    assert!(snapshot.process_steps.is_empty());
    assert_eq!(snapshot.specs.len(), 15);
    assert!(!snapshot.meeting_date.is_empty());
}

#[test]
fn test_malformed_field_keeps_the_rest() {
    let stored = r#"{
        "appTitle": "Line 7 trial",
        "projectDetails": {"id": "NPI-7", "quantity": 12.5, "pcbSize": "1 x 1 x 1 mm", "targetShipDate": ""},
        "processSteps": [{"id": "keep", "name": "Keep me", "type": "process", "startDate": "2024-01-01"}],
        "attendees": "not a list"
    }"#;
    let mut board = Board::open(
        Box::new(MemoryStore::with_entry(SNAPSHOT_KEY, stored)),
        WeekdayStyle::default(),
    );
    let snapshot = board.snapshot();
    assert_eq!(snapshot.app_title, "Line 7 trial");
    assert_eq!(snapshot.project_details.id, "NPI-7");
    assert_eq!(snapshot.project_details.quantity, 12);
    assert_eq!(snapshot.process_steps.len(), 1);
    assert!(snapshot.attendees.is_empty());

    board
        .apply(Edit::SetMeetingDate("2024-01-05".to_string()))
        .expect("Failed to set meeting date");
    let saved = board
        .store()
        .get(SNAPSHOT_KEY)
        .expect("Failed to read store")
        .expect("snapshot saved");
    assert!(saved.contains("Keep me"));
    assert!(saved.contains("Line 7 trial"));
}

#[test]
fn test_bad_step_entries_do_not_drop_the_flow() {
    let stored = r#"{
        "processSteps": [
            {"id": "a", "name": "Reflow", "type": "assembly"},
            {"name": "no id"},
            {"id": "b", "name": "AOI", "type": "qc"}
        ]
    }"#;
    let board = Board::open(
        Box::new(MemoryStore::with_entry(SNAPSHOT_KEY, stored)),
        WeekdayStyle::default(),
    );
    let steps = &board.snapshot().process_steps;
    let ids: Vec<_> = steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
    assert_eq!(steps[0].step_type, StepType::Process);
    assert_eq!(steps[1].step_type, StepType::Qc);
}

#[test]
fn test_rejected_edit_changes_nothing() {
    let (temp_dir, mut board) = create_test_board();
    board
        .apply(Edit::SetAppTitle("Saved".to_string()))
        .expect("Failed to set title");
    let before = board.snapshot().clone();

    let first = before.process_steps[0].id.clone();
    let result = board.apply(Edit::SetStepDates {
        step_ids: vec![first, "missing".to_string()],
        field: DateField::Start,
        value: "2024-01-01".to_string(),
    });
    assert!(matches!(result, Err(BoardError::StepNotFound { .. })));
    assert_eq!(board.snapshot(), &before);
    drop(board);

    let board = reopen(&temp_dir);
    assert_eq!(board.snapshot().process_steps, before.process_steps);
}

#[test]
fn test_failed_save_keeps_committed_state() {
    let mut board = Board::open(Box::new(ReadOnlyStore), WeekdayStyle::default());
    let applied = board
        .apply(Edit::SetProcessFlowTitle("Flow".to_string()))
        .expect("save failures are not reported");
    assert!(applied.message.contains("process flow"));
    assert_eq!(board.snapshot().process_flow_title, "Flow");
}

#[test]
fn test_delete_spec_clears_links() {
    let (_temp_dir, mut board) = create_test_board();
    let linked: Vec<_> = board
        .snapshot()
        .process_steps
        .iter()
        .filter(|s| s.spec_link() == Some("spec-test"))
        .map(|s| s.id.clone())
        .collect();
    assert!(!linked.is_empty());

    board
        .apply(Edit::DeleteSpec {
            spec_id: "spec-test".to_string(),
        })
        .expect("Failed to delete spec");

    assert!(board.find_spec("spec-test").is_none());
    for id in &linked {
        assert_eq!(board.find_step(id).and_then(|s| s.spec_link()), None);
    }
}

#[test]
fn test_link_to_unknown_spec_is_rejected() {
    let (_temp_dir, mut board) = create_test_board();
    let step_id = board.snapshot().process_steps[0].id.clone();
    let result = board.apply(Edit::LinkStepToSpec {
        step_id,
        spec_id: Some("nope".to_string()),
    });
    assert!(matches!(result, Err(BoardError::SpecNotFound { .. })));
}

#[test]
fn test_drop_step_puts_inactive_last() {
    let mut board = empty_board();
    let a = add_dated_step(&mut board, "A", "", "");
    let b = add_dated_step(&mut board, "B", "", "");
    let c = add_dated_step(&mut board, "C", "", "");
    board
        .apply(Edit::ToggleStep { step_id: b.clone() })
        .expect("Failed to toggle");

    board
        .apply(Edit::DropStep {
            dragged: a.clone(),
            target: c.clone(),
        })
        .expect("Failed to drop");

    let order: Vec<_> = board
        .snapshot()
        .process_steps
        .iter()
        .map(|s| s.id.clone())
        .collect();
    assert_eq!(order, [c, a, b]);
}

#[test]
fn test_schedule_through_board() {
    let mut board = empty_board();
    let spec_id = board
        .apply(Edit::AddSpec)
        .expect("Failed to add spec")
        .created_id
        .expect("AddSpec returns the new id");
    board
        .apply(Edit::SetSpecTitle {
            spec_id: spec_id.clone(),
            title: "SMT Spec".to_string(),
        })
        .expect("Failed to rename spec");
    board
        .apply(Edit::AddSpecItem {
            spec_id: spec_id.clone(),
        })
        .expect("Failed to add item");

    let smt = add_dated_step(&mut board, "SMT", "2024-01-01", "2024-01-03");
    board
        .apply(Edit::LinkStepToSpec {
            step_id: smt,
            spec_id: Some(spec_id),
        })
        .expect("Failed to link");
    add_dated_step(&mut board, "QC", "2024-01-02", "");
    board
        .apply(Edit::SetProjectDetail {
            field: ProjectField::TargetShipDate,
            value: "2024-01-05".to_string(),
        })
        .expect("Failed to set ship date");
    board
        .apply(Edit::SetProjectDetail {
            field: ProjectField::Quantity,
            value: "500".to_string(),
        })
        .expect("Failed to set quantity");

    let rows = board.schedule();
    let summary: Vec<_> = rows
        .iter()
        .map(|r| (r.date.as_str(), r.task.as_str()))
        .collect();
    assert_eq!(
        summary,
        [
            ("2024-01-01", "SMT"),
            ("2024-01-02", "SMT"),
            ("2024-01-02", "QC"),
            ("2024-01-03", "SMT"),
            ("2024-01-05", "目標出貨 (Target Ship Date)"),
        ]
    );
    assert_eq!(
        rows[0].notes,
        "Click to edit details for the new step. | Related Spec: SMT Spec | Parameter 1: New Value"
    );
    assert_eq!(rows[0].day, "一");
    assert_eq!(rows[1].notes, "(續)");
    assert_eq!(rows[4].notes, "Final shipment for 500 pcs.");
    assert_eq!(rows[4].gantt_group, ScheduleGroup::Shipment);
    assert_eq!(rows[0].gantt_group, ScheduleGroup::Step(StepType::Process));
}

#[test]
fn test_gantt_and_chart_through_board() {
    let mut board = empty_board();
    add_dated_step(&mut board, "Late", "2024-02-10", "2024-02-12");
    add_dated_step(&mut board, "Early", "2024-02-01T09:00", "2024-02-02T17:00");
    add_dated_step(&mut board, "Open", "2024-02-03", "");

    let bars = board.gantt();
    let names: Vec<_> = bars.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Early", "Late"]);
    assert_eq!(bars[1].end, date(2024, 2, 12).at(23, 59, 59, 999_000_000));

    match board.chart() {
        ChartLayout::Bars { bars, .. } => {
            assert_eq!(bars.len(), 2);
            assert!(bars.iter().all(|b| b.width_pct > 0.0));
            assert!(bars[0].offset_pct < bars[1].offset_pct);
        }
        other => panic!("expected bars, got {other:?}"),
    }
}

#[test]
fn test_number_values_round_trip() {
    let (temp_dir, mut board) = create_test_board();
    let spec = board.snapshot().specs[0].clone();
    let numeric = spec
        .items
        .iter()
        .find(|(_, v)| matches!(v, SpecValue::Number(_)))
        .map(|(k, v)| (k.clone(), v.clone()));
    // any accepted edit persists the whole snapshot
    board
        .apply(Edit::SetAppTitle("x".to_string()))
        .expect("Failed to set title");
    drop(board);

    let board = reopen(&temp_dir);
    let reloaded = board.find_spec(&spec.id).expect("spec persisted");
    assert_eq!(reloaded, &spec);
    if let Some((key, value)) = numeric {
        assert_eq!(reloaded.items[&key], value);
    }
}
