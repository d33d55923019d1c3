use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;

use patient_cell::demo::demo_patients;
use patient_cell::handlers::*;
use patient_cell::models::{
    CreatePatientRequest, Patient, PatientListQuery, UpdatePatientRequest,
};
use shared_models::error::AppError;
use shared_store::{InMemoryRepository, Repository};

fn seeded_state() -> PatientState {
    let patients: Arc<dyn Repository<Patient>> =
        Arc::new(InMemoryRepository::with_items(demo_patients()));
    PatientState { patients }
}

fn create_request() -> CreatePatientRequest {
    CreatePatientRequest {
        professional_id: Uuid::new_v4(),
        name: "Helena Prado".to_string(),
        birth_date: "1994-08-21".to_string(),
        phone: "+55 11 90000-1234".to_string(),
        note: Some("Primeira consulta.".to_string()),
    }
}

#[tokio::test]
async fn test_create_patient_success() {
    let state = seeded_state();

    let result = create_patient(State(state.clone()), Json(create_request())).await;

    let body = result.unwrap().0;
    assert_eq!(body["name"], "Helena Prado");
    assert_eq!(body["birth_date"], "1994-08-21");
    assert!(body["updated_at"].is_null());

    assert_eq!(state.patients.list().await.unwrap().len(), 11);
}

#[tokio::test]
async fn test_create_patient_collects_all_issues() {
    let state = seeded_state();

    let mut request = create_request();
    request.name = "  ".to_string();
    request.birth_date = "21/08/1994".to_string();
    request.phone = "".to_string();

    let result = create_patient(State(state), Json(request)).await;

    match result {
        Err(AppError::Validation(issues)) => {
            let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
            assert_eq!(fields, vec!["name", "phone", "birth_date"]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_patient_round_trips() {
    let state = seeded_state();
    let stored = state.patients.list().await.unwrap().remove(0);

    let body = get_patient(State(state), Path(stored.id)).await.unwrap().0;

    assert_eq!(body["id"], stored.id.to_string());
    assert_eq!(body["name"], stored.name);
}

#[tokio::test]
async fn test_get_unknown_patient_is_not_found() {
    let state = seeded_state();

    let result = get_patient(State(state), Path(Uuid::new_v4())).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_update_patient_touches_updated_at() {
    let state = seeded_state();
    let stored = state.patients.list().await.unwrap().remove(0);

    let request = UpdatePatientRequest {
        name: None,
        phone: Some("+55 11 98888-0000".to_string()),
        note: None,
    };

    let body = update_patient(State(state), Path(stored.id), Json(request))
        .await
        .unwrap()
        .0;

    assert_eq!(body["phone"], "+55 11 98888-0000");
    assert_eq!(body["name"], stored.name);
    assert!(!body["updated_at"].is_null());
}

#[tokio::test]
async fn test_list_patients_filters_by_name() {
    let state = seeded_state();

    let body = list_patients(
        State(state.clone()),
        Query(PatientListQuery {
            name: Some("silva".to_string()),
        }),
    )
    .await
    .unwrap()
    .0;

    assert_eq!(body["total"], 1);
    assert_eq!(body["patients"][0]["name"], "Mariana Silva");

    let unfiltered = list_patients(State(state), Query(PatientListQuery { name: None }))
        .await
        .unwrap()
        .0;
    assert_eq!(unfiltered["total"], 10);
}
