use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use shared_models::error::AppError;
use shared_store::Repository;

use crate::models::{CreatePatientRequest, Patient, PatientListQuery, UpdatePatientRequest};

pub struct PatientService {
    patients: Arc<dyn Repository<Patient>>,
}

impl PatientService {
    pub fn new(patients: Arc<dyn Repository<Patient>>) -> Self {
        Self { patients }
    }

    pub async fn create_patient(&self, request: CreatePatientRequest) -> Result<Patient, AppError> {
        debug!("Creating new patient record: {}", request.name);

        let birth_date = request.validate()?;

        let patient = Patient {
            id: Uuid::new_v4(),
            professional_id: request.professional_id,
            name: request.name.trim().to_string(),
            birth_date,
            phone: request.phone.trim().to_string(),
            note: request.note.unwrap_or_default().trim().to_string(),
            created_at: Utc::now(),
            updated_at: None,
        };

        let patient = self.patients.create(patient).await?;
        debug!("Patient record created with ID: {}", patient.id);

        Ok(patient)
    }

    pub async fn get_patient(&self, patient_id: Uuid) -> Result<Patient, AppError> {
        debug!("Fetching patient record: {}", patient_id);
        self.patients.get(patient_id).await
    }

    pub async fn update_patient(
        &self,
        patient_id: Uuid,
        request: UpdatePatientRequest,
    ) -> Result<Patient, AppError> {
        debug!("Updating patient record: {}", patient_id);

        request.validate()?;

        let mut patient = self.patients.get(patient_id).await?;

        if let Some(name) = request.name {
            patient.name = name.trim().to_string();
        }
        if let Some(phone) = request.phone {
            patient.phone = phone.trim().to_string();
        }
        if let Some(note) = request.note {
            patient.note = note.trim().to_string();
        }
        patient.updated_at = Some(Utc::now());

        self.patients.update(patient).await
    }

    /// Lists patients, optionally narrowed by a case-insensitive name match.
    pub async fn list_patients(&self, query: PatientListQuery) -> Result<Vec<Patient>, AppError> {
        let patients = self.patients.list().await?;

        match query.name {
            Some(name) if !name.trim().is_empty() => {
                let needle = name.trim().to_lowercase();
                Ok(patients
                    .into_iter()
                    .filter(|patient| patient.name.to_lowercase().contains(&needle))
                    .collect())
            }
            _ => Ok(patients),
        }
    }
}
