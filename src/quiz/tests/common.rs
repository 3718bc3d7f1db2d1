use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::quiz::answers::{questions, AnswerSheet};
use crate::quiz::catalog::{CharacterRoster, CharacterStyleEntry, Energy, PersonaId, Style};
use crate::quiz::engine::QuizScoringEngine;
use crate::quiz::repository::{
    NotifyError, QuizCompletedEvent, QuizResultRecord, QuizResultRepository, RepositoryError,
    RespondentId, ResultNotifier,
};
use crate::quiz::service::{QuizService, QuizSubmission};
use crate::quiz::quiz_router;

pub(super) fn explorer_answers() -> AnswerSheet {
    AnswerSheet::new()
        .with(questions::MASTERY_PHILOSOPHY, "70")
        .with(questions::CLASSROOM_STRUCTURE, "open")
        .with(questions::TEACHING_ENERGY, "high")
        .with(questions::COMMUNICATION_APPROACH, "playful")
}

pub(super) fn tiered_answers(threshold: &str, tone: &str, structure: &str) -> AnswerSheet {
    AnswerSheet::new()
        .with(questions::MASTERY_PHILOSOPHY, threshold)
        .with(questions::COMMUNICATION_TONE, tone)
        .with(questions::CLASSROOM_STRUCTURE, structure)
}

pub(super) fn submission(respondent: &str) -> QuizSubmission {
    QuizSubmission {
        respondent_id: respondent.to_string(),
        answers: explorer_answers(),
        syllabus: None,
    }
}

pub(super) fn character(
    id: &str,
    persona: &str,
    energy: Energy,
    style: Style,
    sort_order: u32,
) -> CharacterStyleEntry {
    CharacterStyleEntry {
        id: id.to_string(),
        persona_id: PersonaId::new(persona),
        name: id.to_string(),
        work: "Synthetic".to_string(),
        tagline: String::new(),
        voice_profile: String::new(),
        energy,
        style,
        sort_order,
    }
}

/// Three `lab` characters where sort order disagrees with declaration order.
pub(super) fn synthetic_roster() -> CharacterRoster {
    CharacterRoster::new(vec![
        character("gamma", "lab", Energy::Calm, Style::Analytical, 3),
        character("alpha", "lab", Energy::High, Style::Personal, 1),
        character("beta", "lab", Energy::Calm, Style::Playful, 2),
        character("outsider", "other", Energy::High, Style::Playful, 1),
    ])
}

pub(super) fn build_service() -> (
    QuizService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = QuizService::new(
        Arc::new(QuizScoringEngine::standard()),
        repository.clone(),
        notifier.clone(),
    );
    (service, repository, notifier)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<RespondentId, QuizResultRecord>>>,
}

impl QuizResultRepository for MemoryRepository {
    fn upsert(&self, mut record: QuizResultRecord) -> Result<u32, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        record.attempt = guard
            .get(&record.respondent_id)
            .map_or(1, |previous| previous.attempt + 1);
        let attempt = record.attempt;
        guard.insert(record.respondent_id.clone(), record);
        Ok(attempt)
    }

    fn fetch(&self, id: &RespondentId) -> Result<Option<QuizResultRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<QuizResultRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().take(limit).cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<QuizCompletedEvent>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<QuizCompletedEvent> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl ResultNotifier for MemoryNotifier {
    fn notify(&self, event: QuizCompletedEvent) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(event);
        Ok(())
    }
}

pub(super) struct OfflineNotifier;

impl ResultNotifier for OfflineNotifier {
    fn notify(&self, _event: QuizCompletedEvent) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("smtp relay offline".to_string()))
    }
}

pub(super) struct UnavailableRepository;

impl QuizResultRepository for UnavailableRepository {
    fn upsert(&self, _record: QuizResultRecord) -> Result<u32, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &RespondentId) -> Result<Option<QuizResultRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<QuizResultRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn quiz_router_with_service(
    service: QuizService<MemoryRepository, MemoryNotifier>,
) -> axum::Router {
    quiz_router(Arc::new(service))
}
