use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::models::{MedicalRecord, RecordNoteType};

pub fn demo_records() -> Vec<MedicalRecord> {
    let seed = [
        ((2024, 12, 18), "João Santos", "Session #12", RecordNoteType::ProgressNote,
         "Patient presented significant improvement in anxiety symptoms. Discussed coping strategies and cognitive restructuring techniques. Homework assigned: daily mood journal. Next session scheduled to review progress."),
        ((2024, 12, 12), "Maria Oliveira", "Session #08", RecordNoteType::FollowUp,
         "Relato de melhor qualidade do sono e menor tensão muscular. Revisamos exercícios de respiração e incluímos 10 minutos de caminhada diária como rotina."),
        ((2024, 12, 5), "Pedro Costa", "Session #06", RecordNoteType::TreatmentPlan,
         "Definido novo plano de tratamento focado em fortalecer adesão às atividades de exposição gradual. Paciente mostrou abertura para ajustes e estabelecemos metas semanais."),
        ((2024, 12, 3), "Ana Silva", "Session #03", RecordNoteType::ProgressNote,
         "Evidências de melhora no humor após introdução de rotina matinal. Discutimos fatores de gatilho e combinamos registrar pensamentos automáticos."),
        ((2024, 11, 28), "Lucas Mendes", "Session #09", RecordNoteType::Evaluation,
         "Avaliação de progresso mostra redução de 30% nos relatos de dor e maior frequência de atividades físicas. Sem efeitos adversos relatados."),
        ((2024, 11, 21), "Bruna Rocha", "Session #02", RecordNoteType::MedicationUpdate,
         "Ajuste de medicação em conjunto com psiquiatria. Monitorar efeitos colaterais de sonolência e registrar padrões de apetite durante a semana."),
        ((2024, 11, 15), "Fernanda Santos", "Session #07", RecordNoteType::FollowUp,
         "Paciente relata maior estabilidade emocional. Prática de diário de gratidão mantida por 10 dias. Próximo passo: introduzir meditação guiada curta."),
        ((2024, 11, 10), "Carlos Alberto", "Session #05", RecordNoteType::TreatmentPlan,
         "Planejamento de rotina de exercícios para fortalecimento lombar. Sugerido acompanhamento semanal para revisão de postura em atividades diárias."),
    ];

    seed.into_iter()
        .map(|((y, m, d), patient_name, session_label, note_type, summary)| MedicalRecord {
            id: Uuid::new_v4(),
            patient_name: patient_name.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            session_label: session_label.to_string(),
            note_type,
            summary: summary.to_string(),
            created_at: Utc.with_ymd_and_hms(y, m, d, 18, 0, 0).unwrap(),
            updated_at: None,
        })
        .collect()
}
