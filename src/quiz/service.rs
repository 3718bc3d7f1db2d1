use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::answers::{AnswerSheet, SyllabusData};
use super::engine::{QuizOutcome, QuizScoringEngine};
use super::repository::{
    QuizCompletedEvent, QuizResultRecord, QuizResultRepository, RepositoryError, RespondentId,
    ResultNotifier,
};

/// Answers submitted at the end of a quiz run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub respondent_id: String,
    pub answers: AnswerSheet,
    #[serde(default)]
    pub syllabus: Option<SyllabusData>,
}

/// Service composing the scoring engine, result repository, and completion notifier.
pub struct QuizService<R, N> {
    engine: Arc<QuizScoringEngine>,
    repository: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> QuizService<R, N>
where
    R: QuizResultRepository + 'static,
    N: ResultNotifier + 'static,
{
    pub fn new(engine: Arc<QuizScoringEngine>, repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            engine,
            repository,
            notifier,
        }
    }

    pub fn engine(&self) -> &QuizScoringEngine {
        &self.engine
    }

    /// Score and store a completed quiz. Retakes overwrite the earlier attempt; the repository
    /// numbers the attempt.
    pub fn submit(
        &self,
        submission: QuizSubmission,
    ) -> Result<QuizResultRecord, QuizServiceError> {
        let respondent = submission.respondent_id.trim();
        if respondent.is_empty() {
            return Err(QuizServiceError::MissingRespondent);
        }
        let respondent_id = RespondentId(respondent.to_string());

        let QuizOutcome {
            result,
            recommendations,
        } = self
            .engine
            .evaluate(&submission.answers, submission.syllabus.as_ref());

        let mut record = QuizResultRecord {
            respondent_id: respondent_id.clone(),
            answers: submission.answers,
            syllabus: submission.syllabus,
            result,
            recommendations,
            attempt: 1,
            completed_at: Utc::now(),
        };

        let attempt = self.repository.upsert(record.clone())?;
        record.attempt = attempt;
        info!(
            respondent = %respondent_id.0,
            persona = %record.result.top_persona_id,
            attempt,
            "quiz result stored"
        );

        let event = QuizCompletedEvent {
            respondent_id,
            persona_id: record.result.top_persona_id.clone(),
            character_id: Some(record.result.top_character_id.clone())
                .filter(|id| !id.is_empty()),
            attempt,
        };
        if let Err(err) = self.notifier.notify(event) {
            warn!(error = %err, "quiz completion notification dropped");
        }

        Ok(record)
    }

    /// Fetch the latest stored attempt for a respondent.
    pub fn get(&self, respondent_id: &RespondentId) -> Result<QuizResultRecord, QuizServiceError> {
        let record = self
            .repository
            .fetch(respondent_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Score answers without storing anything.
    pub fn preview(&self, answers: &AnswerSheet, syllabus: Option<&SyllabusData>) -> QuizOutcome {
        self.engine.evaluate(answers, syllabus)
    }
}

/// Error raised by the quiz service.
#[derive(Debug, thiserror::Error)]
pub enum QuizServiceError {
    #[error("respondent_id must not be blank")]
    MissingRespondent,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
