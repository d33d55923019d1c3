use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_models::validation::Validator;
use shared_store::Entity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Patient display name.
    pub patient: String,
    /// Free-form session label, e.g. "Sessão individual - 50min".
    pub session: String,
    pub amount: f64,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Payment {
    fn id(&self) -> Uuid {
        self.id
    }

    fn kind() -> &'static str {
        "Payment"
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Overdue,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Overdue => write!(f, "overdue"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    pub date: String,
    pub patient: String,
    pub session: String,
    pub amount: f64,
    pub status: PaymentStatus,
}

impl CreatePaymentRequest {
    pub fn validate(&self) -> Result<NaiveDate, AppError> {
        let mut v = Validator::new();

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok();
        if date.is_none() {
            v.push("date", "Payment date must be a valid YYYY-MM-DD date");
        }

        v.require(!self.patient.trim().is_empty(), "patient", "Patient is required");
        v.require(!self.session.trim().is_empty(), "session", "Session is required");
        v.require(self.amount > 0.0, "amount", "Amount must be greater than zero");

        v.finish()?;

        date.ok_or_else(|| AppError::Internal("payment date missing after validation".into()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePaymentRequest {
    pub status: Option<PaymentStatus>,
    pub amount: Option<f64>,
}

impl UpdatePaymentRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut v = Validator::new();

        if let Some(amount) = self.amount {
            v.require(amount > 0.0, "amount", "Amount must be greater than zero");
        }

        v.finish()
    }
}

/// Revenue roll-up shown on the payments screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentSummary {
    pub month: f64,
    pub pending: f64,
    pub received: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryQuery {
    /// Restrict the month total to a given YYYY-MM; all payments otherwise.
    pub month: Option<String>,
}
