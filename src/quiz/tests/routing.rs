use super::common::*;
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::quiz::catalog::ids;
use crate::quiz::engine::QuizScoringEngine;
use crate::quiz::router::{
    personas_handler, recommendations_handler, result_handler, submit_handler, StyleQuery,
};
use crate::quiz::service::QuizService;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
        .expect("request builds")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn submit_handler_rejects_blank_respondent() {
    let (service, _, _) = build_service();

    let response = submit_handler::<MemoryRepository, MemoryNotifier>(
        State(Arc::new(service)),
        axum::Json(submission(" ")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "respondent_id must not be blank");
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(QuizService::new(
        Arc::new(QuizScoringEngine::standard()),
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotifier::default()),
    ));

    let response = submit_handler::<UnavailableRepository, MemoryNotifier>(
        State(service),
        axum::Json(submission("student-1")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn submit_route_stores_results() {
    let (service, _, notifier) = build_service();
    let router = quiz_router_with_service(service);
    let body = serde_json::to_value(submission("student-42")).expect("serialize submission");

    let response = router
        .oneshot(json_request("POST", "/api/v1/quiz/results", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["respondent_id"], "student-42");
    assert_eq!(payload["attempt"], 1);
    assert_eq!(payload["result"]["topPersonaId"], ids::EXPLORER);
    assert_eq!(payload["result"]["topCharacterId"], "frizzle");
    assert_eq!(payload["recommendations"]["mastery_threshold"], 70);
    assert_eq!(notifier.events().len(), 1);
}

#[tokio::test]
async fn result_handler_returns_stored_attempt() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);
    service
        .submit(submission("student-5"))
        .expect("submission stored");

    let response = result_handler::<MemoryRepository, MemoryNotifier>(
        State(service.clone()),
        Path("student-5".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["summary"],
        "explorer persona featuring frizzle (2 alternatives)"
    );
}

#[tokio::test]
async fn result_route_returns_not_found_for_unknown_respondent() {
    let (service, _, _) = build_service();
    let router = quiz_router_with_service(service);

    let response = router
        .oneshot(get_request("/api/v1/quiz/results/ghost"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["respondent_id"], "ghost");
}

#[tokio::test]
async fn classify_route_scores_without_storing() {
    let (service, repository, _) = build_service();
    let router = quiz_router_with_service(service);
    let body = json!({
        "answers": [
            { "questionId": "mastery-philosophy", "selectedValue": "90" },
            { "questionId": "communication-tone", "selectedValue": "coach" },
            { "questionId": "teaching-energy", "selectedValue": "direct" },
            { "questionId": "communication-approach", "selectedValue": "analytical" }
        ],
        "syllabus": { "grading_policy": "Pass/Fail" }
    });

    let response = router
        .oneshot(json_request("POST", "/api/v1/quiz/classify", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["result"]["topPersonaId"], ids::MASTERY_COACH);
    assert_eq!(payload["result"]["topCharacterId"], "coach_carter");
    assert_eq!(payload["recommendations"]["mastery_threshold"], 70);
    assert!(repository.records.lock().expect("repository mutex").is_empty());
}

#[tokio::test]
async fn personas_handler_lists_catalog_with_characters() {
    let (service, _, _) = build_service();

    let response =
        personas_handler::<MemoryRepository, MemoryNotifier>(State(Arc::new(service))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let personas = payload.as_array().expect("array payload");
    assert_eq!(personas.len(), 9);
    let mentor = personas
        .iter()
        .find(|persona| persona["id"] == ids::MENTOR)
        .expect("mentor listed");
    assert_eq!(mentor["character_ids"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn recommendations_handler_returns_empty_object_for_unknown_persona() {
    let (service, _, _) = build_service();

    let response = recommendations_handler::<MemoryRepository, MemoryNotifier>(
        State(Arc::new(service)),
        Path("the-wizard".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await, json!({}));
}

#[tokio::test]
async fn recommendations_route_returns_persona_defaults() {
    let (service, _, _) = build_service();
    let router = quiz_router_with_service(service);

    let response = router
        .oneshot(get_request("/api/v1/personas/strategist/recommendations"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["mastery_threshold"], 90);
    assert_eq!(payload["message_personality"], "advisor");
    assert_eq!(payload["send_auto_messages"], false);
}

#[tokio::test]
async fn characters_route_ranks_by_query_style() {
    let (service, _, _) = build_service();
    let router = quiz_router_with_service(service);

    let response = router
        .oneshot(get_request(
            "/api/v1/personas/strategist/characters?energy=calm&style=analytical",
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["topCharacterId"], "spock");
    assert_eq!(
        payload["alternativeCharacterIds"],
        json!(["professor_mcgonagall", "mary_poppins"])
    );
}

#[tokio::test]
async fn characters_handler_without_query_uses_sort_order() {
    let (service, _, _) = build_service();

    let response = crate::quiz::router::characters_handler::<MemoryRepository, MemoryNotifier>(
        State(Arc::new(service)),
        Path(ids::NURTURER.to_string()),
        Query(StyleQuery::default()),
    )
    .await;

    let payload = read_json_body(response).await;
    assert_eq!(payload["topCharacterId"], "miss_honey");
}
