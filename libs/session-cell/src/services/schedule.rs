use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

use crate::models::Session;

/// Granularity of the calendar display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Day,
    Week,
    Month,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Day => write!(f, "day"),
            ViewMode::Week => write!(f, "week"),
            ViewMode::Month => write!(f, "month"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            other => Err(AppError::BadRequest(format!(
                "Unrecognized view mode '{}', expected day, week or month",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl FromStr for Direction {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "next" => Ok(Direction::Next),
            "previous" => Ok(Direction::Previous),
            other => Err(AppError::BadRequest(format!(
                "Unrecognized direction '{}', expected next or previous",
                other
            ))),
        }
    }
}

/// One calendar day and the sessions starting on it, ordered by start time.
#[derive(Debug, Clone, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub sessions: Vec<Session>,
}

/// A month-grid cell. `date` is None for the leading placeholders that pad
/// the grid out to the week-start column of the 1st.
#[derive(Debug, Clone, Serialize)]
pub struct MonthCell {
    pub date: Option<NaiveDate>,
    pub sessions: Vec<Session>,
}

impl MonthCell {
    pub fn is_placeholder(&self) -> bool {
        self.date.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", content = "buckets", rename_all = "snake_case")]
pub enum ScheduleView {
    Day(DayBucket),
    Week(Vec<DayBucket>),
    Month(Vec<MonthCell>),
}

/// Buckets `sessions` around `reference` for the requested view mode.
///
/// Pure: no I/O, no clock reads. A session lands in a bucket when its start
/// falls on that bucket's calendar day; each bucket is sorted ascending by
/// start, and the sort is stable so equal starts keep their input order.
pub fn build_view(
    sessions: &[Session],
    reference: NaiveDate,
    mode: ViewMode,
    week_start: Weekday,
) -> Result<ScheduleView, AppError> {
    match mode {
        ViewMode::Day => Ok(ScheduleView::Day(day_bucket(sessions, reference))),
        ViewMode::Week => {
            let start = week_start_of(reference, week_start);
            let buckets = (0..7)
                .map(|offset| day_bucket(sessions, start + Duration::days(offset)))
                .collect();
            Ok(ScheduleView::Week(buckets))
        }
        ViewMode::Month => {
            let first = reference.with_day(1).ok_or_else(|| {
                AppError::BadRequest(format!("Invalid reference date {}", reference))
            })?;

            let blanks = leading_blanks(first, week_start);
            let mut cells: Vec<MonthCell> = (0..blanks)
                .map(|_| MonthCell {
                    date: None,
                    sessions: Vec::new(),
                })
                .collect();

            for offset in 0..days_in_month(first) {
                let date = first + Duration::days(offset as i64);
                let bucket = day_bucket(sessions, date);
                cells.push(MonthCell {
                    date: Some(date),
                    sessions: bucket.sessions,
                });
            }

            Ok(ScheduleView::Month(cells))
        }
    }
}

/// Moves the reference date by exactly one unit of the view mode. Months use
/// true calendar arithmetic: chrono clamps Jan 31 + 1 month to the last day
/// of February rather than overflowing into March.
pub fn navigate(
    reference: NaiveDate,
    mode: ViewMode,
    direction: Direction,
) -> Result<NaiveDate, AppError> {
    let shifted = match (mode, direction) {
        (ViewMode::Day, Direction::Next) => reference.checked_add_days(Days::new(1)),
        (ViewMode::Day, Direction::Previous) => reference.checked_sub_days(Days::new(1)),
        (ViewMode::Week, Direction::Next) => reference.checked_add_days(Days::new(7)),
        (ViewMode::Week, Direction::Previous) => reference.checked_sub_days(Days::new(7)),
        (ViewMode::Month, Direction::Next) => reference.checked_add_months(Months::new(1)),
        (ViewMode::Month, Direction::Previous) => reference.checked_sub_months(Months::new(1)),
    };

    shifted.ok_or_else(|| {
        AppError::BadRequest(format!(
            "Cannot move one {} from reference date {}",
            mode, reference
        ))
    })
}

/// Number of empty grid cells before day 1 of the month under the given
/// week-start convention.
pub fn leading_blanks(first_of_month: NaiveDate, week_start: Weekday) -> u32 {
    days_past_week_start(first_of_month.weekday(), week_start)
}

fn day_bucket(sessions: &[Session], date: NaiveDate) -> DayBucket {
    let mut items: Vec<Session> = sessions
        .iter()
        .filter(|session| session.start.date() == date)
        .cloned()
        .collect();
    // sort_by_key is stable, preserving input order for identical starts
    items.sort_by_key(|session| session.start);

    DayBucket {
        date,
        sessions: items,
    }
}

fn week_start_of(reference: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = days_past_week_start(reference.weekday(), week_start);
    reference - Duration::days(offset as i64)
}

fn days_past_week_start(weekday: Weekday, week_start: Weekday) -> u32 {
    (weekday.num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7
}

fn days_in_month(first_of_month: NaiveDate) -> u32 {
    match first_of_month.checked_add_months(Months::new(1)) {
        Some(next_first) => next_first.signed_duration_since(first_of_month).num_days() as u32,
        // Only reachable at the far end of chrono's date range.
        None => 31,
    }
}
