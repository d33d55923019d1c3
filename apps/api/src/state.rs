use std::sync::Arc;

use tracing::info;

use patient_cell::handlers::PatientState;
use patient_cell::models::Patient;
use payment_cell::handlers::PaymentState;
use payment_cell::models::Payment;
use record_cell::handlers::RecordState;
use record_cell::models::MedicalRecord;
use session_cell::handlers::SessionState;
use session_cell::models::Session;
use shared_config::AppConfig;
use shared_store::{InMemoryRepository, Repository};

/// Process-wide repositories handed to each cell's router.
pub struct AppState {
    pub patients: PatientState,
    pub sessions: SessionState,
    pub payments: PaymentState,
    pub records: RecordState,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let seed = config.seed_demo_data;
        if seed {
            info!("Seeding in-memory repositories with demo data");
        }

        let patients: Arc<dyn Repository<Patient>> = Arc::new(seeded(
            seed,
            patient_cell::demo::demo_patients,
        ));
        let sessions: Arc<dyn Repository<Session>> = Arc::new(seeded(
            seed,
            session_cell::demo::demo_sessions,
        ));
        let payments: Arc<dyn Repository<Payment>> = Arc::new(seeded(
            seed,
            payment_cell::demo::demo_payments,
        ));
        let records: Arc<dyn Repository<MedicalRecord>> = Arc::new(seeded(
            seed,
            record_cell::demo::demo_records,
        ));

        Self {
            patients: PatientState {
                patients: patients.clone(),
            },
            sessions: SessionState {
                sessions,
                patients,
                week_start: config.week_start,
            },
            payments: PaymentState { payments },
            records: RecordState { records },
        }
    }
}

fn seeded<T, F>(seed: bool, demo: F) -> InMemoryRepository<T>
where
    T: shared_store::Entity,
    F: FnOnce() -> Vec<T>,
{
    if seed {
        InMemoryRepository::with_items(demo())
    } else {
        InMemoryRepository::new()
    }
}
