//! Timestamp normalization.
//!
//! Header dates are always day-first (`DD/MM`), never month-first. The
//! explicit templates are tried in order; when they all fail an optional
//! lenient day-first parse takes over. A timestamp that survives neither is
//! reported as `None` and the row is dropped by the caller.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Number of digits the year field must have for a template to apply.
///
/// chrono's `%Y` happily reads `24` as the year 24, so the width is checked
/// up front instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearDigits {
    Two,
    Four,
}

struct Template {
    year: YearDigits,
    format: &'static str,
}

/// Explicit templates, first match wins.
const TEMPLATES: &[Template] = &[
    Template {
        year: YearDigits::Four,
        format: "%d/%m/%Y %I:%M:%S %p",
    },
    Template {
        year: YearDigits::Four,
        format: "%d/%m/%Y %H:%M:%S",
    },
    Template {
        year: YearDigits::Two,
        format: "%d/%m/%y %H:%M:%S",
    },
    Template {
        year: YearDigits::Four,
        format: "%d/%m/%Y %I:%M %p",
    },
    Template {
        year: YearDigits::Four,
        format: "%d/%m/%Y %H:%M",
    },
];

/// Normalizes a header date and time into a naive local timestamp.
///
/// # Example
///
/// ```
/// use chatstat::parsing::normalize_timestamp;
/// use chrono::Datelike;
///
/// let ts = normalize_timestamp("01/02/2024", "10:00", true).unwrap();
/// assert_eq!((ts.day(), ts.month()), (1, 2));
/// ```
pub fn normalize_timestamp(date: &str, time: &str, lenient: bool) -> Option<NaiveDateTime> {
    let time = normalize_spaces(time);
    parse_with_templates(date.trim(), &time).or_else(|| {
        if lenient {
            parse_day_first(date, &time)
        } else {
            None
        }
    })
}

/// Tries the explicit templates only.
pub fn parse_with_templates(date: &str, time: &str) -> Option<NaiveDateTime> {
    let digits = year_digits(date)?;
    let datetime = format!("{date} {time}");

    TEMPLATES
        .iter()
        .filter(|t| t.year == digits)
        .find_map(|t| NaiveDateTime::parse_from_str(&datetime, t.format).ok())
}

/// Permissive day-first parse.
///
/// Accepts `/`, `.` or `-` date separators, ISO `YYYY-MM-DD` dates, two- or
/// four-digit years, optional seconds and an optional `am`/`pm` suffix in any
/// case (with or without dots).
pub fn parse_day_first(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = parse_date_day_first(date)?;
    let time = parse_time_loose(time)?;
    Some(date.and_time(time))
}

fn parse_date_day_first(date: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = date.trim().split(['/', '.', '-']).collect();
    let [a, b, c] = parts.as_slice() else {
        return None;
    };
    if ![a, b, c].iter().all(|p| !p.is_empty() && p.bytes().all(|ch| ch.is_ascii_digit())) {
        return None;
    }

    // ISO dates are the one year-first shape worth accepting.
    if a.len() == 4 {
        return NaiveDate::from_ymd_opt(a.parse().ok()?, b.parse().ok()?, c.parse().ok()?);
    }

    let day: u32 = a.parse().ok()?;
    let month: u32 = b.parse().ok()?;
    let year: i32 = match c.len() {
        2 => expand_two_digit_year(c.parse().ok()?),
        4 => c.parse().ok()?,
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_time_loose(time: &str) -> Option<NaiveTime> {
    let lower = time.trim().to_ascii_lowercase().replace('.', "");
    let (clock, meridiem) = if let Some(rest) = lower.strip_suffix("am") {
        (rest.trim_end(), Some(false))
    } else if let Some(rest) = lower.strip_suffix("pm") {
        (rest.trim_end(), Some(true))
    } else {
        (lower.as_str(), None)
    };

    let fields: Vec<u32> = clock
        .split(':')
        .map(|f| f.trim().parse().ok())
        .collect::<Option<_>>()?;
    let (hour, minute, second) = match fields.as_slice() {
        [h, m] => (*h, *m, 0),
        [h, m, s] => (*h, *m, *s),
        _ => return None,
    };

    let hour = match meridiem {
        None => hour,
        Some(_) if !(1..=12).contains(&hour) => return None,
        Some(false) => hour % 12,
        Some(true) => hour % 12 + 12,
    };
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Mirrors chrono's `%y` pivot: 00-68 → 20xx, 69-99 → 19xx.
fn expand_two_digit_year(yy: i32) -> i32 {
    if yy < 69 { 2000 + yy } else { 1900 + yy }
}

fn year_digits(date: &str) -> Option<YearDigits> {
    match date.rsplit('/').next()?.len() {
        2 => Some(YearDigits::Two),
        4 => Some(YearDigits::Four),
        _ => None,
    }
}

/// Replaces the no-break spaces iOS puts before AM/PM with plain spaces.
fn normalize_spaces(time: &str) -> String {
    time.trim()
        .chars()
        .map(|c| if c == '\u{00A0}' || c == '\u{202F}' { ' ' } else { c })
        .collect()
}
