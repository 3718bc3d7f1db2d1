use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use persona_quiz::error::AppError;
use persona_quiz::quiz::{
    quiz_router, AnswerSheet, CharacterRoster, ClassifierKind, PersonaCatalog, QuizOutcome,
    QuizResultRepository, QuizScoringEngine, QuizService, ReferenceTables, ResultNotifier,
    SyllabusData,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

/// Scores answers against draft reference data without storing anything.
#[derive(Debug, Deserialize)]
pub(crate) struct PreviewRequest {
    pub(crate) answers: AnswerSheet,
    #[serde(default)]
    pub(crate) syllabus: Option<SyllabusData>,
    #[serde(default)]
    pub(crate) classifier: Option<ClassifierKind>,
    #[serde(default)]
    pub(crate) roster_csv: Option<String>,
    #[serde(default)]
    pub(crate) persona_json: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PreviewResponse {
    pub(crate) classifier: ClassifierKind,
    pub(crate) data_source: ReferenceDataSource,
    #[serde(flatten)]
    pub(crate) outcome: QuizOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ReferenceDataSource {
    Draft,
    Standard,
}

pub(crate) fn with_quiz_routes<R, N>(service: Arc<QuizService<R, N>>) -> axum::Router
where
    R: QuizResultRepository + 'static,
    N: ResultNotifier + 'static,
{
    quiz_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/quiz/preview",
            axum::routing::post(quiz_preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn quiz_preview_endpoint(
    Json(payload): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    let PreviewRequest {
        answers,
        syllabus,
        classifier,
        roster_csv,
        persona_json,
    } = payload;

    let mut tables = ReferenceTables::standard();
    let mut data_source = ReferenceDataSource::Standard;
    if let Some(csv) = roster_csv {
        tables.characters = CharacterRoster::from_reader(Cursor::new(csv.into_bytes()))?;
        data_source = ReferenceDataSource::Draft;
    }
    if let Some(raw) = persona_json {
        tables.personas = PersonaCatalog::from_reader(Cursor::new(raw.into_bytes()))?;
        data_source = ReferenceDataSource::Draft;
    }

    let classifier = classifier.unwrap_or_default();
    let engine = QuizScoringEngine::new(tables, classifier);
    let outcome = engine.evaluate(&answers, syllabus.as_ref());

    Ok(Json(PreviewResponse {
        classifier,
        data_source,
        outcome,
    }))
}
