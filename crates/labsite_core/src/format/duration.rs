//! Project period rendering.
//!
//! # Invariants
//! - Formatting never fails; unknown month values render literally.
//! - An open-ended period (start only) renders its end as `present`.

use crate::model::duration::{DurationSpec, MonthValue, YearValue};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Separator placed between the two sides of a period.
pub const RANGE_SEPARATOR: &str = " – ";
/// Label substituted for a missing end of a started period.
pub const OPEN_END_LABEL: &str = "present";

/// Renders a `(start, end)` period, e.g. `Mar 2020 – present`.
///
/// Returns an empty string when neither side renders anything.
pub fn format_duration(start: Option<&DurationSpec>, end: Option<&DurationSpec>) -> String {
    let start = format_endpoint(start);
    let end = format_endpoint(end);
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (true, false) => end,
        (false, true) => format!("{start}{RANGE_SEPARATOR}{OPEN_END_LABEL}"),
        (false, false) => format!("{start}{RANGE_SEPARATOR}{end}"),
    }
}

/// Renders one side of a period: `Mon YYYY`, `YYYY`, `Mon`, or empty.
pub fn format_endpoint(spec: Option<&DurationSpec>) -> String {
    let Some(spec) = spec else {
        return String::new();
    };
    let month = spec.month.as_ref().and_then(month_label);
    let year = spec.year.as_ref().and_then(year_label);
    match (month, year) {
        (Some(month), Some(year)) => format!("{month} {year}"),
        (Some(month), None) => month,
        (None, Some(year)) => year,
        (None, None) => String::new(),
    }
}

/// Maps a month index 1-12 to its abbreviation; other values render as
/// their trimmed literal. `0` and blank labels count as absent.
pub fn month_label(month: &MonthValue) -> Option<String> {
    match month {
        MonthValue::Number(0) => None,
        MonthValue::Number(index) => Some(
            month_abbreviation(*index)
                .map(str::to_string)
                .unwrap_or_else(|| index.to_string()),
        ),
        MonthValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            let abbreviation = trimmed.parse::<i64>().ok().and_then(month_abbreviation);
            Some(abbreviation.unwrap_or(trimmed).to_string())
        }
    }
}

fn month_abbreviation(index: i64) -> Option<&'static str> {
    usize::try_from(index)
        .ok()
        .and_then(|index| index.checked_sub(1))
        .and_then(|offset| MONTH_ABBREVIATIONS.get(offset).copied())
}

fn year_label(year: &YearValue) -> Option<String> {
    let rendered = year.to_string();
    let trimmed = rendered.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
