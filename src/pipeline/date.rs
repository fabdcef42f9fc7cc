//! Meeting date: find the `[[YYYY-MM-DD` wiki-link and render it in Icelandic.
//!
//! Notes link their daily note as `[[2024-03-07]]` (sometimes with a suffix,
//! `[[2024-03-07 fundur]]`); only the opening brackets and the ISO date are
//! required. The month names are a fixed table, never derived from the host
//! locale.

use crate::error::Note2ClipError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Icelandic month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "janúar",
    "febrúar",
    "mars",
    "apríl",
    "maí",
    "júní",
    "júlí",
    "ágúst",
    "september",
    "október",
    "nóvember",
    "desember",
];

static RE_DATE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([0-9]{4})-([0-9]{2})-([0-9]{2})").unwrap());

/// A calendar date with month and day always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeetingDate {
    year: i32,
    /// 1-indexed.
    month: u32,
    day: u32,
}

impl MeetingDate {
    /// Build a date from raw components, rolling out-of-range values into
    /// the neighbouring month or year (month 13 is January of the next year,
    /// day 0 is the last day of the previous month).
    pub fn from_parts(year: i32, month: u32, day: u32) -> Self {
        let m0 = i64::from(month) - 1;
        let mut year = (i64::from(year) + m0.div_euclid(12)) as i32;
        let mut month = m0.rem_euclid(12) as u32 + 1;
        let mut day = day;

        if day == 0 {
            (year, month) = previous_month(year, month);
            day = days_in_month(year, month);
        }
        while day > days_in_month(year, month) {
            day -= days_in_month(year, month);
            (year, month) = next_month(year, month);
        }

        Self { year, month, day }
    }

    /// First `[[YYYY-MM-DD` link anywhere in `document`.
    pub fn find_in(document: &str) -> Result<Self, Note2ClipError> {
        let caps = RE_DATE_LINK
            .captures(document)
            .ok_or(Note2ClipError::MissingDate)?;
        // The pattern guarantees ASCII digits of bounded width.
        let year: i32 = caps[1].parse().map_err(|_| Note2ClipError::MissingDate)?;
        let month: u32 = caps[2].parse().map_err(|_| Note2ClipError::MissingDate)?;
        let day: u32 = caps[3].parse().map_err(|_| Note2ClipError::MissingDate)?;
        Ok(Self::from_parts(year, month, day))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-indexed.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

/// `D. <month> YYYY`, no leading zero on the day.
impl fmt::Display for MeetingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} {}", self.day, self.month_name(), self.year)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}
