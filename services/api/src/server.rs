use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryQuizResultRepository, LoggingNotifier};
use crate::routes::with_quiz_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use persona_quiz::config::AppConfig;
use persona_quiz::error::AppError;
use persona_quiz::quiz::{QuizScoringEngine, QuizService, ReferenceTables};
use persona_quiz::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(classifier) = args.classifier.take() {
        config.quiz.classifier = classifier;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let tables = ReferenceTables::load(&config.quiz)?;
    let engine = Arc::new(QuizScoringEngine::new(tables, config.quiz.classifier));
    let quiz_service = Arc::new(QuizService::new(
        engine,
        Arc::new(InMemoryQuizResultRepository::default()),
        Arc::new(LoggingNotifier::default()),
    ));

    let app = with_quiz_routes(quiz_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        classifier = %config.quiz.classifier,
        "persona quiz service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
