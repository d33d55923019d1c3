use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;

use record_cell::demo::demo_records;
use record_cell::handlers::*;
use record_cell::models::{CreateRecordRequest, MedicalRecord, RecordListQuery, RecordNoteType};
use shared_models::error::AppError;
use shared_store::{InMemoryRepository, Repository};

fn seeded_state() -> RecordState {
    let records: Arc<dyn Repository<MedicalRecord>> =
        Arc::new(InMemoryRepository::with_items(demo_records()));
    RecordState { records }
}

fn list_query(patient: Option<&str>, page: Option<u32>) -> Query<RecordListQuery> {
    Query(RecordListQuery {
        patient: patient.map(str::to_string),
        page,
    })
}

#[tokio::test]
async fn test_first_page_is_newest_first_and_capped_at_five() {
    let state = seeded_state();

    let body = list_records(State(state), list_query(None, None))
        .await
        .unwrap()
        .0;

    assert_eq!(body["total"], 8);
    assert_eq!(body["page"], 1);
    assert_eq!(body["page_count"], 2);

    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0]["patient_name"], "João Santos");
    assert_eq!(records[0]["date"], "2024-12-18");
    assert_eq!(records[4]["date"], "2024-11-28");
}

#[tokio::test]
async fn test_second_page_holds_the_remainder() {
    let state = seeded_state();

    let body = list_records(State(state), list_query(None, Some(2)))
        .await
        .unwrap()
        .0;

    assert_eq!(body["records"].as_array().unwrap().len(), 3);
    assert_eq!(body["page"], 2);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty_not_an_error() {
    let state = seeded_state();

    let body = list_records(State(state), list_query(None, Some(9)))
        .await
        .unwrap()
        .0;

    assert_eq!(body["records"].as_array().unwrap().len(), 0);
    assert_eq!(body["total"], 8);
}

#[tokio::test]
async fn test_patient_filter_is_case_insensitive() {
    let state = seeded_state();

    let body = list_records(State(state), list_query(Some("maria"), None))
        .await
        .unwrap()
        .0;

    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["patient_name"], "Maria Oliveira");
    assert_eq!(body["page_count"], 1);
}

#[tokio::test]
async fn test_create_record_success() {
    let state = seeded_state();

    let request = CreateRecordRequest {
        patient_name: "Roberto Lima".to_string(),
        date: "2024-12-20".to_string(),
        session_label: "Session #04".to_string(),
        note_type: RecordNoteType::Evaluation,
        summary: "Avaliação postural com melhora gradual.".to_string(),
    };

    let body = create_record(State(state.clone()), Json(request))
        .await
        .unwrap()
        .0;

    assert_eq!(body["note_type"], "evaluation");
    assert_eq!(state.records.list().await.unwrap().len(), 9);
}

#[tokio::test]
async fn test_create_record_collects_all_issues() {
    let state = seeded_state();

    let request = CreateRecordRequest {
        patient_name: "".to_string(),
        date: "yesterday".to_string(),
        session_label: "".to_string(),
        note_type: RecordNoteType::ProgressNote,
        summary: "".to_string(),
    };

    let result = create_record(State(state), Json(request)).await;

    match result {
        Err(AppError::Validation(issues)) => {
            let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
            assert_eq!(fields, vec!["patient_name", "session_label", "summary", "date"]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}
