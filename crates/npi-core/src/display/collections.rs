//! Collection wrapper types for displaying steps and specs.

use std::fmt;

use crate::models::{ProcessStep, SpecDetails};

/// Newtype wrapper for displaying the process flow, numbered in flow order.
pub struct Steps<'a>(pub &'a [ProcessStep]);

impl<'a> fmt::Display for Steps<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No process steps.");
        }
        for (index, step) in self.0.iter().enumerate() {
            step.fmt_step(f, Some(index + 1))?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the spec list.
pub struct Specs<'a>(pub &'a [SpecDetails]);

impl<'a> fmt::Display for Specs<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No specs.");
        }
        for spec in self.0 {
            write!(f, "{spec}")?;
        }
        Ok(())
    }
}
