//! Confirmation line printed after an edit is applied.

use std::fmt;

use crate::params::Applied;

/// Markdown confirmation for an applied [`Applied`] edit.
///
/// Rejected edits never reach this type; they surface as errors from
/// [`Board::apply`](crate::Board::apply).
pub struct OperationStatus(pub Applied);

impl From<Applied> for OperationStatus {
    fn from(applied: Applied) -> Self {
        Self(applied)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Applied {
            message,
            created_id,
        } = &self.0;
        writeln!(f, "Success: {message}")?;
        if let Some(id) = created_id {
            writeln!(f, "- Created: `{id}`")?;
        }
        Ok(())
    }
}
