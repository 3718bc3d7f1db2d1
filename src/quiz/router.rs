use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::answers::{AnswerSheet, SyllabusData};
use super::catalog::{Energy, PersonaId, Style};
use super::repository::{QuizResultRepository, RepositoryError, RespondentId, ResultNotifier};
use super::service::{QuizService, QuizServiceError, QuizSubmission};

/// Router builder exposing scoring, result lookup, and reference data endpoints.
pub fn quiz_router<R, N>(service: Arc<QuizService<R, N>>) -> Router
where
    R: QuizResultRepository + 'static,
    N: ResultNotifier + 'static,
{
    Router::new()
        .route("/api/v1/quiz/results", post(submit_handler::<R, N>))
        .route(
            "/api/v1/quiz/results/:respondent_id",
            get(result_handler::<R, N>),
        )
        .route("/api/v1/quiz/classify", post(classify_handler::<R, N>))
        .route("/api/v1/personas", get(personas_handler::<R, N>))
        .route(
            "/api/v1/personas/:persona_id/recommendations",
            get(recommendations_handler::<R, N>),
        )
        .route(
            "/api/v1/personas/:persona_id/characters",
            get(characters_handler::<R, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyRequest {
    pub(crate) answers: AnswerSheet,
    #[serde(default)]
    pub(crate) syllabus: Option<SyllabusData>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StyleQuery {
    #[serde(default)]
    pub(crate) energy: Option<String>,
    #[serde(default)]
    pub(crate) style: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PersonaSummary {
    pub(crate) id: PersonaId,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) character_ids: Vec<String>,
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<QuizService<R, N>>>,
    axum::Json(submission): axum::Json<QuizSubmission>,
) -> Response
where
    R: QuizResultRepository + 'static,
    N: ResultNotifier + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(QuizServiceError::MissingRespondent) => {
            let payload = json!({
                "error": QuizServiceError::MissingRespondent.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn result_handler<R, N>(
    State(service): State<Arc<QuizService<R, N>>>,
    Path(respondent_id): Path<String>,
) -> Response
where
    R: QuizResultRepository + 'static,
    N: ResultNotifier + 'static,
{
    let id = RespondentId(respondent_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(QuizServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "respondent_id": id.0,
                "error": "no quiz result recorded",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn classify_handler<R, N>(
    State(service): State<Arc<QuizService<R, N>>>,
    axum::Json(request): axum::Json<ClassifyRequest>,
) -> Response
where
    R: QuizResultRepository + 'static,
    N: ResultNotifier + 'static,
{
    let outcome = service.preview(&request.answers, request.syllabus.as_ref());
    (StatusCode::OK, axum::Json(outcome)).into_response()
}

pub(crate) async fn personas_handler<R, N>(
    State(service): State<Arc<QuizService<R, N>>>,
) -> Response
where
    R: QuizResultRepository + 'static,
    N: ResultNotifier + 'static,
{
    let engine = service.engine();
    let summaries: Vec<PersonaSummary> = engine
        .personas()
        .personas()
        .iter()
        .map(|persona| PersonaSummary {
            id: persona.id.clone(),
            name: persona.name.clone(),
            description: persona.description.clone(),
            character_ids: engine
                .characters()
                .candidates(persona.id.as_str())
                .map(|entry| entry.id.clone())
                .collect(),
        })
        .collect();

    (StatusCode::OK, axum::Json(summaries)).into_response()
}

pub(crate) async fn recommendations_handler<R, N>(
    State(service): State<Arc<QuizService<R, N>>>,
    Path(persona_id): Path<String>,
) -> Response
where
    R: QuizResultRepository + 'static,
    N: ResultNotifier + 'static,
{
    let bundle = service.engine().defaults_for(&persona_id);
    (StatusCode::OK, axum::Json(bundle)).into_response()
}

pub(crate) async fn characters_handler<R, N>(
    State(service): State<Arc<QuizService<R, N>>>,
    Path(persona_id): Path<String>,
    Query(query): Query<StyleQuery>,
) -> Response
where
    R: QuizResultRepository + 'static,
    N: ResultNotifier + 'static,
{
    let energy = query.energy.as_deref().and_then(Energy::from_answer);
    let style = query.style.as_deref().and_then(Style::from_answer);
    let matched = service
        .engine()
        .match_characters(&persona_id, energy, style);
    (StatusCode::OK, axum::Json(matched)).into_response()
}
