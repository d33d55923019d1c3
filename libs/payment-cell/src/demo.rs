use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::models::{Payment, PaymentStatus};

pub fn demo_payments() -> Vec<Payment> {
    let seed = [
        ((2024, 12, 19), "João Santos", "Sessão individual - 50min", 1200.0, PaymentStatus::Pending),
        ((2024, 12, 17), "Maria Oliveira", "Sessão online - 50min", 4200.0, PaymentStatus::Paid),
        ((2024, 12, 14), "Pedro Costa", "Sessão presencial - 50min", 3050.0, PaymentStatus::Paid),
    ];

    seed.into_iter()
        .map(|((y, m, d), patient, session, amount, status)| Payment {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            patient: patient.to_string(),
            session: session.to_string(),
            amount,
            status,
            created_at: Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
            updated_at: None,
        })
        .collect()
}
