//! Date parsing and calendar helpers.
//!
//! Step dates are free-form strings typed or picked by the user: a bare date
//! (`2024-01-10`), a local date-time (`2024-01-10T09:00`), or an instant with
//! an offset (`2024-01-10T01:00:00Z`). Everything is resolved to local civil
//! time before the projectors see it, so the rest of the crate never touches
//! time zones.

use jiff::{
    civil::{self, Date, DateTime, Time, Weekday},
    tz::TimeZone,
    Timestamp,
};

/// Placeholder weekday label for dates that do not parse.
pub const NO_DAY: &str = "-";

/// Time written by the calendar picker for start dates.
pub const PICKER_START_TIME: Time = civil::time(9, 0, 0, 0);

/// Time written by the calendar picker for end dates.
pub const PICKER_END_TIME: Time = civil::time(17, 0, 0, 0);

/// Last representable millisecond of a day.
pub const END_OF_DAY: Time = civil::time(23, 59, 59, 999_000_000);

/// Parses a step date string into local wall-clock time.
///
/// Returns `None` for empty or unparseable input. Bare dates resolve to
/// midnight; instants carrying an offset are converted to the system zone.
pub fn parse_local(input: &str) -> Option<DateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(ts) = input.parse::<Timestamp>() {
        return Some(ts.to_zoned(TimeZone::system()).datetime());
    }
    if let Ok(dt) = input.parse::<DateTime>() {
        return Some(dt);
    }
    input
        .parse::<Date>()
        .ok()
        .map(|date| date.to_datetime(Time::midnight()))
}

/// Parses a step date string and drops the time of day.
pub fn parse_local_date(input: &str) -> Option<Date> {
    parse_local(input).map(|dt| dt.date())
}

/// Every calendar day from `start` to `end`, both inclusive.
///
/// Empty when `start > end`.
pub fn days_inclusive(start: Date, end: Date) -> Vec<Date> {
    let mut days = Vec::new();
    let mut day = start;
    while day <= end {
        days.push(day);
        match day.tomorrow() {
            Ok(next) => day = next,
            Err(_) => break,
        }
    }
    days
}

/// Language used for weekday abbreviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekdayStyle {
    /// Traditional Chinese with the `週` prefix stripped: `一` .. `日`
    #[default]
    Chinese,
    /// English three-letter abbreviations: `Mon` .. `Sun`
    English,
}

impl WeekdayStyle {
    /// Short name of a weekday in this style.
    pub fn abbreviate(self, weekday: Weekday) -> &'static str {
        match self {
            WeekdayStyle::Chinese => {
                // the locale formats as `週一`; the prefix is redundant in a
                // weekday column
                let full = match weekday {
                    Weekday::Monday => "週一",
                    Weekday::Tuesday => "週二",
                    Weekday::Wednesday => "週三",
                    Weekday::Thursday => "週四",
                    Weekday::Friday => "週五",
                    Weekday::Saturday => "週六",
                    Weekday::Sunday => "週日",
                };
                full.trim_start_matches('週')
            }
            WeekdayStyle::English => match weekday {
                Weekday::Monday => "Mon",
                Weekday::Tuesday => "Tue",
                Weekday::Wednesday => "Wed",
                Weekday::Thursday => "Thu",
                Weekday::Friday => "Fri",
                Weekday::Saturday => "Sat",
                Weekday::Sunday => "Sun",
            },
        }
    }
}

/// Weekday label for a date string, or [`NO_DAY`] if it does not parse.
pub fn weekday_label(input: &str, style: WeekdayStyle) -> String {
    parse_local_date(input)
        .map(|date| style.abbreviate(date.weekday()).to_string())
        .unwrap_or_else(|| NO_DAY.to_string())
}

/// Which end of a step a picked calendar day is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl DateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateField::Start => "startDate",
            DateField::End => "endDate",
        }
    }
}

/// String stored when a whole day is picked from a calendar: starts at
/// 09:00, ends at 17:00, formatted `YYYY-MM-DDTHH:MM`.
pub fn calendar_date_value(date: Date, field: DateField) -> String {
    let time = match field {
        DateField::Start => PICKER_START_TIME,
        DateField::End => PICKER_END_TIME,
    };
    date.to_datetime(time).strftime("%Y-%m-%dT%H:%M").to_string()
}
