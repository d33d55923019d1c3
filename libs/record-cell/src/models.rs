use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_models::validation::Validator;
use shared_store::Entity;

pub const SUMMARY_MAX_CHARS: usize = 20_000;

/// A clinical note attached to a past session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: Uuid,
    pub patient_name: String,
    pub date: NaiveDate,
    /// e.g. "Session #12".
    pub session_label: String,
    pub note_type: RecordNoteType,
    pub summary: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for MedicalRecord {
    fn id(&self) -> Uuid {
        self.id
    }

    fn kind() -> &'static str {
        "MedicalRecord"
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecordNoteType {
    ProgressNote,
    FollowUp,
    TreatmentPlan,
    Evaluation,
    MedicationUpdate,
}

impl fmt::Display for RecordNoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordNoteType::ProgressNote => write!(f, "progress_note"),
            RecordNoteType::FollowUp => write!(f, "follow_up"),
            RecordNoteType::TreatmentPlan => write!(f, "treatment_plan"),
            RecordNoteType::Evaluation => write!(f, "evaluation"),
            RecordNoteType::MedicationUpdate => write!(f, "medication_update"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    pub patient_name: String,
    pub date: String,
    pub session_label: String,
    pub note_type: RecordNoteType,
    pub summary: String,
}

impl CreateRecordRequest {
    pub fn validate(&self) -> Result<NaiveDate, AppError> {
        let mut v = Validator::new();

        v.require(
            !self.patient_name.trim().is_empty(),
            "patient_name",
            "Patient name is required",
        );
        v.require(
            !self.session_label.trim().is_empty(),
            "session_label",
            "Session label is required",
        );
        v.require(!self.summary.trim().is_empty(), "summary", "Summary is required");
        v.require(
            self.summary.chars().count() <= SUMMARY_MAX_CHARS,
            "summary",
            "Summary exceeds the 20,000 character limit",
        );

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok();
        if date.is_none() {
            v.push("date", "Record date must be a valid YYYY-MM-DD date");
        }

        v.finish()?;

        date.ok_or_else(|| AppError::Internal("record date missing after validation".into()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordListQuery {
    /// Case-insensitive patient-name filter.
    pub patient: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordPage {
    pub records: Vec<MedicalRecord>,
    pub total: usize,
    pub page: u32,
    pub page_count: u32,
}
