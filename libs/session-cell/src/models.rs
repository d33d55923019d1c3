use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_models::validation::Validator;
use shared_store::Entity;

pub const NOTES_MAX_CHARS: usize = 20_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub professional_id: Uuid,
    /// Display name, denormalized at booking time.
    pub patient: String,
    pub price: f64,
    pub notes: String,
    pub status: SessionStatus,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i32,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Session {
    fn id(&self) -> Uuid {
        self.id
    }

    fn kind() -> &'static str {
        "Session"
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Scheduled,
    InProgress,
    Completed,
    Canceled,
}

impl SessionStatus {
    /// Statuses a session is not expected to leave again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Canceled)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Scheduled => write!(f, "scheduled"),
            SessionStatus::InProgress => write!(f, "in_progress"),
            SessionStatus::Completed => write!(f, "completed"),
            SessionStatus::Canceled => write!(f, "canceled"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub patient_id: Uuid,
    pub professional_id: Uuid,
    /// Calendar date, YYYY-MM-DD.
    pub date: String,
    /// Wall-clock time, HH:MM.
    pub time: String,
    pub price: f64,
    pub status: SessionStatus,
    pub duration_minutes: i32,
    pub notes: Option<String>,
    pub location: Option<String>,
}

impl CreateSessionRequest {
    /// Validates the payload and returns the session start on success.
    pub fn validate(&self) -> Result<NaiveDateTime, AppError> {
        let mut v = Validator::new();

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok();
        if date.is_none() {
            v.push("date", "Session date must be a valid YYYY-MM-DD date");
        }

        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M").ok();
        if time.is_none() {
            v.push("time", "Session time must be HH:MM");
        }

        v.require(self.price >= 0.0, "price", "Price must be non-negative");
        v.require(
            self.duration_minutes > 0,
            "duration_minutes",
            "Duration must be a positive number of minutes",
        );

        if let Some(notes) = &self.notes {
            v.require(
                notes.chars().count() <= NOTES_MAX_CHARS,
                "notes",
                "Notes exceed the 20,000 character limit",
            );
        }

        v.finish()?;

        match (date, time) {
            (Some(date), Some(time)) => Ok(date.and_time(time)),
            _ => Err(AppError::Internal("session start missing after validation".into())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSessionRequest {
    pub status: Option<SessionStatus>,
    pub notes: Option<String>,
    pub price: Option<f64>,
    pub reschedule_to: Option<NaiveDateTime>,
    pub reschedule_duration: Option<i32>,
}

impl UpdateSessionRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut v = Validator::new();

        if let Some(price) = self.price {
            v.require(price >= 0.0, "price", "Price must be non-negative");
        }
        if let Some(duration) = self.reschedule_duration {
            v.require(
                duration > 0,
                "reschedule_duration",
                "Duration must be a positive number of minutes",
            );
        }
        if let Some(notes) = &self.notes {
            v.require(
                notes.chars().count() <= NOTES_MAX_CHARS,
                "notes",
                "Notes exceed the 20,000 character limit",
            );
        }

        v.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleQuery {
    pub date: String,
    pub view: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateQuery {
    pub date: String,
    pub view: String,
    pub direction: String,
}
