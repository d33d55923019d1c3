use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_models::validation::Validator;
use shared_store::Entity;

pub const NOTE_MAX_CHARS: usize = 20_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub name: String,
    pub birth_date: NaiveDate,
    pub phone: String,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Patient {
    pub fn age(&self) -> i32 {
        let today = chrono::Utc::now().date_naive();
        today.years_since(self.birth_date).unwrap_or(0) as i32
    }
}

impl Entity for Patient {
    fn id(&self) -> Uuid {
        self.id
    }

    fn kind() -> &'static str {
        "Patient"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub professional_id: Uuid,
    pub name: String,
    pub birth_date: String,
    pub phone: String,
    pub note: Option<String>,
}

impl CreatePatientRequest {
    /// Boundary validation: every problem is reported at once.
    pub fn validate(&self) -> Result<NaiveDate, AppError> {
        let mut v = Validator::new();

        v.require(!self.name.trim().is_empty(), "name", "Patient name is required");
        v.require(!self.phone.trim().is_empty(), "phone", "Phone is required");
        v.require(!self.birth_date.trim().is_empty(), "birth_date", "Birth date is required");

        let birth_date = NaiveDate::parse_from_str(&self.birth_date, "%Y-%m-%d").ok();
        if !self.birth_date.trim().is_empty() && birth_date.is_none() {
            v.push("birth_date", "Birth date must be a valid YYYY-MM-DD date");
        }

        if let Some(note) = &self.note {
            v.require(
                note.chars().count() <= NOTE_MAX_CHARS,
                "note",
                "Note exceeds the 20,000 character limit",
            );
        }

        v.finish()?;

        // Unreachable when empty: the require above already failed.
        birth_date.ok_or_else(|| AppError::Internal("birth date missing after validation".into()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePatientRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub note: Option<String>,
}

impl UpdatePatientRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut v = Validator::new();

        if let Some(name) = &self.name {
            v.require(!name.trim().is_empty(), "name", "Patient name cannot be empty");
        }
        if let Some(phone) = &self.phone {
            v.require(!phone.trim().is_empty(), "phone", "Phone cannot be empty");
        }
        if let Some(note) = &self.note {
            v.require(
                note.chars().count() <= NOTE_MAX_CHARS,
                "note",
                "Note exceeds the 20,000 character limit",
            );
        }

        v.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientListQuery {
    pub name: Option<String>,
}
