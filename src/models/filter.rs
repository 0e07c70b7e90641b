use chrono::{Datelike, Local, NaiveDate};

use super::category::Category;

/// Calendar-month grouping key. Two dates compare equal iff they fall in the
/// same month of the same year. Renders as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Key of an ISO-8601 date string (`YYYY-MM-DD`). None when the string
    /// is not a valid calendar date.
    pub fn from_iso(date: &str) -> Option<Self> {
        let d = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
        Some(Self {
            year: d.year(),
            month: d.month(),
        })
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// What the list view is looking at: an optional category scope (None means
/// the whole account) and a month/year pair. Year is user-editable and
/// deliberately unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    pub category: Option<Category>,
    pub month: u32,
    pub year: i32,
}

impl FilterState {
    pub fn current_month() -> Self {
        let now = Local::now();
        Self {
            category: None,
            month: now.month(),
            year: now.year(),
        }
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::new(self.year, self.month)
    }

    pub fn next_month(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }

    pub fn prev_month(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
    }
}
