//! Ordered-sequence moves used by drag-and-drop reordering.

use crate::{
    error::{BoardError, Result},
    models::ProcessStep,
};

/// Moves the element at `from` to index `to`, keeping every other element
/// in its relative order.
///
/// # Errors
///
/// Returns `BoardError::InvalidInput` if either index is out of range.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<()> {
    let len = items.len();
    if from >= len || to >= len {
        return Err(BoardError::invalid_input("index")
            .with_reason(format!("move {from} -> {to} is out of range for {len} items")));
    }
    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}

/// Drops `dragged` onto `target` among the active steps, then places all
/// inactive steps after them in their existing order.
///
/// Dropping a step onto itself leaves the order unchanged.
///
/// # Errors
///
/// Returns `BoardError::StepNotFound` for unknown ids and
/// `BoardError::InvalidInput` when either step is inactive.
pub fn drop_onto(steps: &mut Vec<ProcessStep>, dragged: &str, target: &str) -> Result<()> {
    for id in [dragged, target] {
        let step = steps
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| BoardError::step_not_found(id))?;
        if !step.is_active {
            return Err(BoardError::invalid_input("step")
                .with_reason(format!("step '{id}' is inactive and cannot be reordered")));
        }
    }
    if dragged == target {
        return Ok(());
    }

    let from = active_position(steps, dragged)?;
    let to = active_position(steps, target)?;
    let (mut active, inactive): (Vec<_>, Vec<_>) =
        steps.drain(..).partition(|step| step.is_active);
    move_item(&mut active, from, to)?;

    active.extend(inactive);
    *steps = active;
    Ok(())
}

fn active_position(steps: &[ProcessStep], id: &str) -> Result<usize> {
    steps
        .iter()
        .filter(|s| s.is_active)
        .position(|s| s.id == id)
        .ok_or_else(|| BoardError::step_not_found(id))
}
