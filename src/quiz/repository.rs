use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::answers::{AnswerSheet, SyllabusData};
use super::catalog::PersonaId;
use super::engine::QuizResult;
use super::recommendations::SettingsBundle;

/// Identifier of the person who took the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RespondentId(pub String);

/// Stored quiz attempt. A retake replaces the previous record and bumps `attempt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResultRecord {
    pub respondent_id: RespondentId,
    pub answers: AnswerSheet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syllabus: Option<SyllabusData>,
    pub result: QuizResult,
    pub recommendations: SettingsBundle,
    pub attempt: u32,
    pub completed_at: DateTime<Utc>,
}

impl QuizResultRecord {
    pub fn summary(&self) -> String {
        let persona = &self.result.top_persona_id;
        if self.result.has_character() {
            let alternatives = self.result.alternative_character_ids.len();
            format!(
                "{} persona featuring {} ({} alternative{})",
                persona,
                self.result.top_character_id,
                alternatives,
                if alternatives == 1 { "" } else { "s" }
            )
        } else {
            format!("{} persona; no character match available", persona)
        }
    }

    pub fn view(&self) -> QuizResultView {
        QuizResultView {
            respondent_id: self.respondent_id.clone(),
            attempt: self.attempt,
            completed_at: self.completed_at,
            summary: self.summary(),
            result: self.result.clone(),
            recommendations: self.recommendations.clone(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait QuizResultRepository: Send + Sync {
    /// Stores `record`, replacing any earlier attempt by the same respondent, and returns the
    /// attempt number it was stored under. Reading the previous attempt and writing the new one
    /// must happen atomically; the incoming `attempt` is ignored.
    fn upsert(&self, record: QuizResultRecord) -> Result<u32, RepositoryError>;
    fn fetch(&self, id: &RespondentId) -> Result<Option<QuizResultRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<QuizResultRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook fired after a quiz is stored (analytics, welcome messaging, and the like).
pub trait ResultNotifier: Send + Sync {
    fn notify(&self, event: QuizCompletedEvent) -> Result<(), NotifyError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCompletedEvent {
    pub respondent_id: RespondentId,
    pub persona_id: PersonaId,
    pub character_id: Option<String>,
    pub attempt: u32,
}

impl QuizCompletedEvent {
    pub fn is_retake(&self) -> bool {
        self.attempt > 1
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Public representation of a stored attempt.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResultView {
    pub respondent_id: RespondentId,
    pub attempt: u32,
    pub completed_at: DateTime<Utc>,
    pub summary: String,
    pub result: QuizResult,
    pub recommendations: SettingsBundle,
}
