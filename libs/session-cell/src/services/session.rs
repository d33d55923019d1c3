use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc, Weekday};
use tracing::{debug, warn};
use uuid::Uuid;

use patient_cell::models::Patient;
use shared_models::error::AppError;
use shared_models::validation::FieldIssue;
use shared_store::Repository;

use crate::models::{CreateSessionRequest, Session, UpdateSessionRequest};
use crate::services::schedule::{self, ScheduleView, ViewMode};

pub struct SessionService {
    sessions: Arc<dyn Repository<Session>>,
    patients: Arc<dyn Repository<Patient>>,
}

impl SessionService {
    pub fn new(
        sessions: Arc<dyn Repository<Session>>,
        patients: Arc<dyn Repository<Patient>>,
    ) -> Self {
        Self { sessions, patients }
    }

    pub async fn create_session(&self, request: CreateSessionRequest) -> Result<Session, AppError> {
        debug!("Booking session for patient: {}", request.patient_id);

        let start = request.validate()?;

        let patient = self
            .patients
            .get(request.patient_id)
            .await
            .map_err(|_| {
                AppError::Validation(vec![FieldIssue {
                    field: "patient_id".to_string(),
                    message: format!("Unknown patient {}", request.patient_id),
                }])
            })?;

        let session = Session {
            id: Uuid::new_v4(),
            patient_id: request.patient_id,
            professional_id: request.professional_id,
            patient: patient.name,
            price: request.price,
            notes: request.notes.unwrap_or_default().trim().to_string(),
            status: request.status,
            start,
            end: start + Duration::minutes(request.duration_minutes as i64),
            duration_minutes: request.duration_minutes,
            location: request.location,
            created_at: Utc::now(),
            updated_at: None,
        };

        let session = self.sessions.create(session).await?;
        debug!("Session booked with ID: {}", session.id);

        Ok(session)
    }

    pub async fn get_session(&self, session_id: Uuid) -> Result<Session, AppError> {
        self.sessions.get(session_id).await
    }

    pub async fn update_session(
        &self,
        session_id: Uuid,
        request: UpdateSessionRequest,
    ) -> Result<Session, AppError> {
        debug!("Updating session: {}", session_id);

        request.validate()?;

        let mut session = self.sessions.get(session_id).await?;

        if let Some(next) = request.status {
            // No enforced transition graph; a terminal session moving back to
            // an active status is accepted but flagged.
            if session.status.is_terminal() && !next.is_terminal() {
                warn!(
                    "Session {} reopened: status {} -> {}",
                    session.id, session.status, next
                );
            }
            session.status = next;
        }

        if let Some(notes) = request.notes {
            session.notes = notes.trim().to_string();
        }
        if let Some(price) = request.price {
            session.price = price;
        }
        if let Some(start) = request.reschedule_to {
            session.start = start;
        }
        if let Some(duration) = request.reschedule_duration {
            session.duration_minutes = duration;
        }
        session.end = session.start + Duration::minutes(session.duration_minutes as i64);
        session.updated_at = Some(Utc::now());

        self.sessions.update(session).await
    }

    pub async fn list_sessions(&self) -> Result<Vec<Session>, AppError> {
        self.sessions.list().await
    }

    /// The calendar view-model: every stored session bucketed around the
    /// reference date for the requested mode.
    pub async fn schedule(
        &self,
        reference: NaiveDate,
        mode: ViewMode,
        week_start: Weekday,
    ) -> Result<ScheduleView, AppError> {
        let sessions = self.sessions.list().await?;
        schedule::build_view(&sessions, reference, mode, week_start)
    }
}
