use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use shared_models::error::AppError;
use shared_store::Repository;

use crate::models::{CreateRecordRequest, MedicalRecord, RecordListQuery, RecordPage};

/// Records per page, matching the records screen.
pub const PAGE_SIZE: usize = 5;

pub struct RecordService {
    records: Arc<dyn Repository<MedicalRecord>>,
}

impl RecordService {
    pub fn new(records: Arc<dyn Repository<MedicalRecord>>) -> Self {
        Self { records }
    }

    pub async fn create_record(
        &self,
        request: CreateRecordRequest,
    ) -> Result<MedicalRecord, AppError> {
        debug!("Creating medical record for patient: {}", request.patient_name);

        let date = request.validate()?;

        let record = MedicalRecord {
            id: Uuid::new_v4(),
            patient_name: request.patient_name.trim().to_string(),
            date,
            session_label: request.session_label.trim().to_string(),
            note_type: request.note_type,
            summary: request.summary.trim().to_string(),
            created_at: Utc::now(),
            updated_at: None,
        };

        self.records.create(record).await
    }

    /// Newest-first listing, optionally narrowed by patient name, cut into
    /// fixed-size pages. A page past the end comes back empty, not an error.
    pub async fn list_records(&self, query: RecordListQuery) -> Result<RecordPage, AppError> {
        let mut records = self.records.list().await?;

        if let Some(patient) = query.patient.as_deref() {
            let needle = patient.trim().to_lowercase();
            if !needle.is_empty() {
                records.retain(|record| record.patient_name.to_lowercase().contains(&needle));
            }
        }

        records.sort_by(|a, b| b.date.cmp(&a.date));

        let total = records.len();
        let page_count = (total.div_ceil(PAGE_SIZE)).max(1) as u32;
        let page = query.page.unwrap_or(1).max(1);

        let start = (page as usize - 1) * PAGE_SIZE;
        let records = if start < total {
            records.into_iter().skip(start).take(PAGE_SIZE).collect()
        } else {
            Vec::new()
        };

        Ok(RecordPage {
            records,
            total,
            page,
            page_count,
        })
    }
}
