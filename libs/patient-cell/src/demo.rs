use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::models::Patient;

/// Demo dataset loaded at startup when seeding is enabled. Stands in for a
/// real intake flow so the API is explorable out of the box.
pub fn demo_patients() -> Vec<Patient> {
    let pro_a = Uuid::parse_str("aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa").unwrap();
    let pro_b = Uuid::parse_str("bbbbbbbb-bbbb-bbbb-bbbb-bbbbbbbbbbbb").unwrap();
    let pro_c = Uuid::parse_str("cccccccc-cccc-cccc-cccc-cccccccccccc").unwrap();

    let seed = [
        (pro_a, "Lucas Mendes", (1998, 4, 12), "+55 11 90000-1111", "Ansiedade leve", (2025, 1, 10, 9, 0)),
        (pro_a, "Mariana Silva", (1992, 7, 29), "+55 11 90000-2222", "Insônia recorrente", (2025, 1, 11, 10, 15)),
        (pro_b, "Pedro Rocha", (2000, 2, 5), "+55 21 90000-3333", "Tratamento pós cirúrgico", (2025, 1, 12, 14, 33)),
        (pro_b, "Ana Pereira", (1987, 9, 19), "+55 21 90000-4444", "Fisioterapia de ombro", (2025, 1, 13, 16, 20)),
        (pro_c, "Carlos Alberto", (1975, 12, 1), "+55 41 90000-5555", "Crises de pânico", (2025, 1, 14, 9, 40)),
        (pro_c, "Fernanda Santos", (1995, 6, 18), "+55 41 90000-6666", "Acompanhamento terapêutico", (2025, 1, 15, 11, 0)),
        (pro_a, "Guilherme Costa", (2003, 10, 25), "+55 11 90000-7777", "Sedentarismo e dores nas costas", (2025, 1, 16, 13, 10)),
        (pro_b, "Juliana Andrade", (1990, 3, 8), "+55 21 90000-8888", "Reabilitação pós trauma", (2025, 1, 17, 15, 22)),
        (pro_c, "Roberto Lima", (1984, 11, 14), "+55 41 90000-9999", "Dores lombares crônicas", (2025, 1, 18, 8, 50)),
        (pro_a, "Beatriz Souza", (2001, 1, 30), "+55 11 90000-0000", "Terapia de estresse", (2025, 1, 19, 17, 5)),
    ];

    seed.into_iter()
        .map(|(professional_id, name, (by, bm, bd), phone, note, (y, m, d, h, min))| Patient {
            id: Uuid::new_v4(),
            professional_id,
            name: name.to_string(),
            birth_date: NaiveDate::from_ymd_opt(by, bm, bd).unwrap(),
            phone: phone.to_string(),
            note: note.to_string(),
            created_at: Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap(),
            updated_at: None,
        })
        .collect()
}
