//! DateTime display utilities.

use std::fmt;

use jiff::civil::DateTime;

/// Formats a local wall-clock time as `YYYY-MM-DD HH:MM`.
pub struct WallClock<'a>(pub &'a DateTime);

impl<'a> fmt::Display for WallClock<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d %H:%M"))
    }
}
