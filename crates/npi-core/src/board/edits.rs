//! State transitions for each [`Edit`].

use uuid::Uuid;

use super::reorder::{drop_onto, move_item};
use crate::{
    error::{BoardError, Result},
    models::{project::parse_quantity, BoardSnapshot, ProcessStep, SpecDetails, SpecValue, StepType},
    params::{Applied, Edit, ProjectField, StepField},
};

const NEW_SPEC_TITLE: &str = "New Spec";
const NEW_ITEM_VALUE: &str = "New Value";
const NEW_STEP_NAME: &str = "New Step";
const NEW_STEP_DETAILS: &str = "Click to edit details for the new step.";

/// Applies `edit` to `state` in place.
///
/// On error `state` may be partially modified; callers apply edits to a
/// scratch copy and only commit on success.
pub(super) fn apply_edit(state: &mut BoardSnapshot, edit: Edit) -> Result<Applied> {
    match edit {
        Edit::SetAppTitle(title) => {
            state.app_title = title;
            Ok(Applied::new("Updated board title"))
        }
        Edit::SetProjectDetail { field, value } => Ok(set_project_detail(state, field, value)),
        Edit::AddSpec => {
            let id = new_id();
            state.specs.push(SpecDetails {
                id: id.clone(),
                title: NEW_SPEC_TITLE.to_string(),
                items: Default::default(),
            });
            Ok(Applied::created(format!("Added spec {id}"), id))
        }
        Edit::SetSpecTitle { spec_id, title } => {
            spec_mut(state, &spec_id)?.title = title;
            Ok(Applied::new(format!("Renamed spec {spec_id}")))
        }
        Edit::SetSpecItem {
            spec_id,
            key,
            value,
        } => {
            if key.is_empty() {
                return Err(BoardError::invalid_input("key").with_reason("must not be empty"));
            }
            spec_mut(state, &spec_id)?
                .items
                .insert(key.clone(), SpecValue::Text(value));
            Ok(Applied::new(format!("Set '{key}' on spec {spec_id}")))
        }
        Edit::RenameSpecItem {
            spec_id,
            old_key,
            new_key,
        } => rename_spec_item(state, &spec_id, &old_key, new_key),
        Edit::AddSpecItem { spec_id } => {
            let spec = spec_mut(state, &spec_id)?;
            let key = spec.next_parameter_key();
            spec.items
                .insert(key.clone(), SpecValue::from(NEW_ITEM_VALUE));
            Ok(Applied::new(format!("Added '{key}' to spec {spec_id}")))
        }
        Edit::DeleteSpecItem { spec_id, key } => {
            spec_mut(state, &spec_id)?
                .items
                .shift_remove(&key)
                .ok_or_else(|| BoardError::SpecItemNotFound {
                    spec_id: spec_id.clone(),
                    key: key.clone(),
                })?;
            Ok(Applied::new(format!("Removed '{key}' from spec {spec_id}")))
        }
        Edit::DeleteSpec { spec_id } => delete_spec(state, &spec_id),
        Edit::MoveSpec { from, to } => {
            move_item(&mut state.specs, from, to)?;
            Ok(Applied::new(format!("Moved spec from {from} to {to}")))
        }
        Edit::SetStepField {
            step_id,
            field,
            value,
        } => {
            set_step_field(step_mut(state, &step_id)?, field, value);
            Ok(Applied::new(format!(
                "Updated {} of step {step_id}",
                field.as_str()
            )))
        }
        Edit::SetStepDates {
            step_ids,
            field,
            value,
        } => {
            for id in &step_ids {
                set_step_field(step_mut(state, id)?, field.into(), value.clone());
            }
            Ok(Applied::new(format!(
                "Updated {} of {} step(s)",
                field.as_str(),
                step_ids.len()
            )))
        }
        Edit::LinkStepToSpec { step_id, spec_id } => link_step(state, &step_id, spec_id),
        Edit::AddStep => {
            let id = new_id();
            state.process_steps.push(ProcessStep::new(
                id.clone(),
                NEW_STEP_NAME,
                NEW_STEP_DETAILS,
                StepType::Process,
            ));
            Ok(Applied::created(format!("Added step {id}"), id))
        }
        Edit::DeleteStep { step_id } => {
            let before = state.process_steps.len();
            state.process_steps.retain(|s| s.id != step_id);
            if state.process_steps.len() == before {
                return Err(BoardError::step_not_found(step_id));
            }
            Ok(Applied::new(format!("Removed step {step_id}")))
        }
        Edit::ToggleStep { step_id } => {
            let step = step_mut(state, &step_id)?;
            step.is_active = !step.is_active;
            let now = if step.is_active { "active" } else { "inactive" };
            Ok(Applied::new(format!("Step {step_id} is now {now}")))
        }
        Edit::MoveStep { from, to } => {
            move_item(&mut state.process_steps, from, to)?;
            Ok(Applied::new(format!("Moved step from {from} to {to}")))
        }
        Edit::DropStep { dragged, target } => {
            drop_onto(&mut state.process_steps, &dragged, &target)?;
            Ok(Applied::new(format!("Moved step {dragged} onto {target}")))
        }
        Edit::SetProcessFlowTitle(title) => {
            state.process_flow_title = title;
            Ok(Applied::new("Updated process flow title"))
        }
        Edit::SetAttendees(text) => {
            state.attendees = text
                .lines()
                .filter(|name| !name.trim().is_empty())
                .map(str::to_string)
                .collect();
            Ok(Applied::new(format!(
                "Recorded {} attendee(s)",
                state.attendees.len()
            )))
        }
        Edit::SetMeetingDate(date) => {
            state.meeting_date = date;
            Ok(Applied::new("Updated meeting date"))
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn spec_mut<'a>(state: &'a mut BoardSnapshot, id: &str) -> Result<&'a mut SpecDetails> {
    state
        .specs
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| BoardError::spec_not_found(id))
}

fn step_mut<'a>(state: &'a mut BoardSnapshot, id: &str) -> Result<&'a mut ProcessStep> {
    state
        .process_steps
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| BoardError::step_not_found(id))
}

fn set_step_field(step: &mut ProcessStep, field: StepField, value: String) {
    match field {
        StepField::Name => step.name = value,
        StepField::Details => step.details = value,
        StepField::StartDate => step.start_date = value,
        StepField::EndDate => step.end_date = value,
    }
}

fn set_project_detail(state: &mut BoardSnapshot, field: ProjectField, value: String) -> Applied {
    let project = &mut state.project_details;
    match field {
        ProjectField::Id => project.id = value,
        ProjectField::Quantity => project.quantity = parse_quantity(&value),
        ProjectField::PcbSize => project.pcb_size = value,
        ProjectField::TargetShipDate => project.target_ship_date = value,
    }
    Applied::new(format!("Updated project {}", field.as_str()))
}

fn rename_spec_item(
    state: &mut BoardSnapshot,
    spec_id: &str,
    old_key: &str,
    new_key: String,
) -> Result<Applied> {
    let spec = spec_mut(state, spec_id)?;
    if new_key.is_empty() || new_key == old_key {
        return Ok(Applied::new("Item name unchanged"));
    }
    let Some(index) = spec.items.get_index_of(old_key) else {
        return Err(BoardError::SpecItemNotFound {
            spec_id: spec_id.to_string(),
            key: old_key.to_string(),
        });
    };
    if spec.items.contains_key(&new_key) {
        return Err(BoardError::invalid_input("key")
            .with_reason(format!("spec {spec_id} already has an item named '{new_key}'")));
    }
    let Some((_, value)) = spec.items.shift_remove_index(index) else {
        return Err(BoardError::SpecItemNotFound {
            spec_id: spec_id.to_string(),
            key: old_key.to_string(),
        });
    };
    spec.items.shift_insert(index, new_key.clone(), value);
    Ok(Applied::new(format!(
        "Renamed '{old_key}' to '{new_key}' in spec {spec_id}"
    )))
}

fn delete_spec(state: &mut BoardSnapshot, spec_id: &str) -> Result<Applied> {
    let before = state.specs.len();
    state.specs.retain(|s| s.id != spec_id);
    if state.specs.len() == before {
        return Err(BoardError::spec_not_found(spec_id));
    }
    let mut unlinked = 0;
    for step in &mut state.process_steps {
        if step.related_spec_id.as_deref() == Some(spec_id) {
            step.related_spec_id = None;
            unlinked += 1;
        }
    }
    Ok(Applied::new(format!(
        "Removed spec {spec_id} and unlinked {unlinked} step(s)"
    )))
}

fn link_step(state: &mut BoardSnapshot, step_id: &str, spec_id: Option<String>) -> Result<Applied> {
    if let Some(id) = &spec_id {
        if !state.specs.iter().any(|s| &s.id == id) {
            return Err(BoardError::spec_not_found(id.as_str()));
        }
    }
    let step = step_mut(state, step_id)?;
    let message = match &spec_id {
        Some(id) => format!("Linked step {step_id} to spec {id}"),
        None => format!("Unlinked step {step_id}"),
    };
    step.related_spec_id = spec_id;
    Ok(Applied::new(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_keeps_position() {
        let mut state = BoardSnapshot::empty();
        state
            .specs
            .push(SpecDetails::new("s", "S", [("a", "1"), ("b", "2"), ("c", "3")]));
        apply_edit(
            &mut state,
            Edit::RenameSpecItem {
                spec_id: "s".into(),
                old_key: "b".into(),
                new_key: "beta".into(),
            },
        )
        .unwrap();
        let keys: Vec<_> = state.specs[0].items.keys().cloned().collect();
        assert_eq!(keys, ["a", "beta", "c"]);
        assert_eq!(state.specs[0].items["beta"], SpecValue::from("2"));
    }

    #[test]
    fn test_rename_to_empty_is_noop() {
        let mut state = BoardSnapshot::empty();
        state.specs.push(SpecDetails::new("s", "S", [("a", "1")]));
        let before = state.clone();
        apply_edit(
            &mut state,
            Edit::RenameSpecItem {
                spec_id: "s".into(),
                old_key: "a".into(),
                new_key: String::new(),
            },
        )
        .unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_attendees_drop_blank_lines() {
        let mut state = BoardSnapshot::empty();
        apply_edit(&mut state, Edit::SetAttendees("Amy\n\n  \nBo Chen\n".into())).unwrap();
        assert_eq!(state.attendees, ["Amy", "Bo Chen"]);
    }

    #[test]
    fn test_add_step_defaults() {
        let mut state = BoardSnapshot::empty();
        let applied = apply_edit(&mut state, Edit::AddStep).unwrap();
        let step = &state.process_steps[0];
        assert_eq!(applied.created_id.as_deref(), Some(step.id.as_str()));
        assert_eq!(step.name, NEW_STEP_NAME);
        assert!(step.is_active);
        assert_eq!(step.step_type, StepType::Process);
        assert!(step.start_date.is_empty());
    }
}
