use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::models::{Session, SessionStatus};

struct Seed {
    patient: &'static str,
    patient_id: &'static str,
    professional_id: &'static str,
    price: f64,
    notes: &'static str,
    status: SessionStatus,
    start: (i32, u32, u32, u32, u32),
    created_at: (i32, u32, u32, u32, u32),
    updated_at: Option<(i32, u32, u32, u32, u32)>,
    location: &'static str,
}

/// Demo agenda centered on December 2024, loaded when seeding is enabled.
pub fn demo_sessions() -> Vec<Session> {
    let pro_a = "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa";
    let pro_b = "bbbbbbbb-bbbb-bbbb-bbbb-bbbbbbbbbbbb";

    let seeds = [
        Seed {
            patient: "João Santos",
            patient_id: "11111111-1111-1111-1111-111111111111",
            professional_id: pro_a,
            price: 200.0,
            notes: "Sessão de acompanhamento.",
            status: SessionStatus::Scheduled,
            start: (2024, 12, 19, 9, 0),
            created_at: (2024, 12, 10, 10, 0),
            updated_at: None,
            location: "Sala 1",
        },
        Seed {
            patient: "Maria Oliveira",
            patient_id: "22222222-2222-2222-2222-222222222222",
            professional_id: pro_b,
            price: 200.0,
            notes: "Primeira sessão do mês.",
            status: SessionStatus::Scheduled,
            start: (2024, 12, 19, 10, 30),
            created_at: (2024, 12, 10, 10, 10),
            updated_at: None,
            location: "Sala 2",
        },
        Seed {
            patient: "Pedro Costa",
            patient_id: "33333333-3333-3333-3333-333333333333",
            professional_id: pro_a,
            price: 200.0,
            notes: "Retorno sobre ansiedade.",
            status: SessionStatus::Scheduled,
            start: (2024, 12, 19, 14, 0),
            created_at: (2024, 12, 10, 10, 20),
            updated_at: None,
            location: "Sala 1",
        },
        Seed {
            patient: "Ana Silva",
            patient_id: "44444444-4444-4444-4444-444444444444",
            professional_id: pro_b,
            price: 200.0,
            notes: "Avaliação inicial.",
            status: SessionStatus::Scheduled,
            start: (2024, 12, 19, 15, 30),
            created_at: (2024, 12, 10, 10, 30),
            updated_at: None,
            location: "Sala 2",
        },
        Seed {
            patient: "João Santos",
            patient_id: "11111111-1111-1111-1111-111111111111",
            professional_id: pro_a,
            price: 220.0,
            notes: "Sessão extra.",
            status: SessionStatus::InProgress,
            start: (2024, 12, 20, 9, 0),
            created_at: (2024, 12, 10, 10, 40),
            updated_at: None,
            location: "Sala 1",
        },
        Seed {
            patient: "Maria Oliveira",
            patient_id: "22222222-2222-2222-2222-222222222222",
            professional_id: pro_b,
            price: 200.0,
            notes: "Acompanhamento mensal.",
            status: SessionStatus::Scheduled,
            start: (2024, 12, 20, 11, 0),
            created_at: (2024, 12, 10, 10, 50),
            updated_at: None,
            location: "Sala 2",
        },
        Seed {
            patient: "Pedro Costa",
            patient_id: "33333333-3333-3333-3333-333333333333",
            professional_id: pro_a,
            price: 200.0,
            notes: "Sessão concluída.",
            status: SessionStatus::Completed,
            start: (2024, 12, 18, 16, 0),
            created_at: (2024, 12, 10, 11, 0),
            updated_at: Some((2024, 12, 18, 17, 0)),
            location: "Sala 1",
        },
        Seed {
            patient: "Ana Silva",
            patient_id: "44444444-4444-4444-4444-444444444444",
            professional_id: pro_b,
            price: 200.0,
            notes: "Cancelada pelo paciente.",
            status: SessionStatus::Canceled,
            start: (2024, 12, 22, 10, 0),
            created_at: (2024, 12, 10, 11, 10),
            updated_at: Some((2024, 12, 21, 9, 0)),
            location: "Online",
        },
        Seed {
            patient: "Lucas Mendes",
            patient_id: "55555555-5555-5555-5555-555555555555",
            professional_id: pro_a,
            price: 210.0,
            notes: "Sessão de rotina.",
            status: SessionStatus::Scheduled,
            start: (2024, 12, 27, 13, 0),
            created_at: (2024, 12, 10, 11, 20),
            updated_at: None,
            location: "Sala 3",
        },
        Seed {
            patient: "Bruna Rocha",
            patient_id: "66666666-6666-6666-6666-666666666666",
            professional_id: pro_b,
            price: 230.0,
            notes: "Sessão inicial de janeiro.",
            status: SessionStatus::Scheduled,
            start: (2025, 1, 3, 9, 30),
            created_at: (2024, 12, 10, 11, 30),
            updated_at: None,
            location: "Sala 1",
        },
    ];

    seeds.into_iter().map(build).collect()
}

fn build(seed: Seed) -> Session {
    let (y, m, d, h, min) = seed.start;
    let start = NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .unwrap();
    let (cy, cm, cd, ch, cmin) = seed.created_at;

    Session {
        id: Uuid::new_v4(),
        patient_id: Uuid::parse_str(seed.patient_id).unwrap(),
        professional_id: Uuid::parse_str(seed.professional_id).unwrap(),
        patient: seed.patient.to_string(),
        price: seed.price,
        notes: seed.notes.to_string(),
        status: seed.status,
        start,
        end: start + chrono::Duration::minutes(50),
        duration_minutes: 50,
        location: Some(seed.location.to_string()),
        created_at: Utc.with_ymd_and_hms(cy, cm, cd, ch, cmin, 0).unwrap(),
        updated_at: seed
            .updated_at
            .map(|(uy, um, ud, uh, umin)| Utc.with_ymd_and_hms(uy, um, ud, uh, umin, 0).unwrap()),
    }
}
