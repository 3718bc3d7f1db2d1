use metrics_exporter_prometheus::PrometheusHandle;
use persona_quiz::quiz::{
    NotifyError, QuizCompletedEvent, QuizResultRecord, QuizResultRepository, RepositoryError,
    RespondentId, ResultNotifier,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryQuizResultRepository {
    records: Arc<Mutex<HashMap<RespondentId, QuizResultRecord>>>,
}

impl QuizResultRepository for InMemoryQuizResultRepository {
    fn upsert(&self, mut record: QuizResultRecord) -> Result<u32, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("result store poisoned".to_string()))?;
        record.attempt = guard
            .get(&record.respondent_id)
            .map_or(1, |previous| previous.attempt + 1);
        let attempt = record.attempt;
        guard.insert(record.respondent_id.clone(), record);
        Ok(attempt)
    }

    fn fetch(&self, id: &RespondentId) -> Result<Option<QuizResultRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("result store poisoned".to_string()))?;
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<QuizResultRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("result store poisoned".to_string()))?;
        let mut records: Vec<QuizResultRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        records.truncate(limit);
        Ok(records)
    }
}

/// Logs completion events and keeps them for the demo transcript.
#[derive(Default, Clone)]
pub(crate) struct LoggingNotifier {
    events: Arc<Mutex<Vec<QuizCompletedEvent>>>,
}

impl ResultNotifier for LoggingNotifier {
    fn notify(&self, event: QuizCompletedEvent) -> Result<(), NotifyError> {
        info!(
            respondent = %event.respondent_id.0,
            persona = %event.persona_id,
            character = event.character_id.as_deref().unwrap_or("none"),
            attempt = event.attempt,
            "quiz completed"
        );
        let mut guard = self
            .events
            .lock()
            .map_err(|_| NotifyError::Transport("event log poisoned".to_string()))?;
        guard.push(event);
        Ok(())
    }
}

impl LoggingNotifier {
    pub(crate) fn events(&self) -> Vec<QuizCompletedEvent> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

/// Parses a `question=value` pair from the command line.
pub(crate) fn parse_answer_pair(raw: &str) -> Result<(String, String), String> {
    let (question, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=VALUE, got '{raw}'"))?;
    let question = question.trim();
    if question.is_empty() {
        return Err(format!("missing question id in '{raw}'"));
    }
    Ok((question.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_quiz::quiz::{AnswerSheet, QuizScoringEngine, QuizService, QuizSubmission};

    #[test]
    fn answer_pairs_split_on_first_equals() {
        assert_eq!(
            parse_answer_pair("teaching-energy = high"),
            Ok(("teaching-energy".to_string(), "high".to_string()))
        );
        assert_eq!(
            parse_answer_pair("note=a=b"),
            Ok(("note".to_string(), "a=b".to_string()))
        );
        assert!(parse_answer_pair("teaching-energy").is_err());
        assert!(parse_answer_pair("=high").is_err());
    }

    #[test]
    fn recent_returns_newest_first() {
        let repository = Arc::new(InMemoryQuizResultRepository::default());
        let notifier = Arc::new(LoggingNotifier::default());
        let service = QuizService::new(
            Arc::new(QuizScoringEngine::standard()),
            repository.clone(),
            notifier.clone(),
        );

        for respondent in ["first", "second", "third"] {
            service
                .submit(QuizSubmission {
                    respondent_id: respondent.to_string(),
                    answers: AnswerSheet::new().with("mastery-philosophy", "80"),
                    syllabus: None,
                })
                .expect("submission stored");
        }

        let recent = repository.recent(2).expect("recent records");
        assert_eq!(recent.len(), 2);
        assert!(recent[0].completed_at >= recent[1].completed_at);
        assert_eq!(notifier.events().len(), 3);
    }

    #[test]
    fn upsert_numbers_attempts_under_the_lock() {
        let repository = Arc::new(InMemoryQuizResultRepository::default());
        let service = Arc::new(QuizService::new(
            Arc::new(QuizScoringEngine::standard()),
            repository.clone(),
            Arc::new(LoggingNotifier::default()),
        ));

        let handles: Vec<_> = (0..6)
            .map(|_| {
                let service = service.clone();
                std::thread::spawn(move || {
                    service
                        .submit(QuizSubmission {
                            respondent_id: "busy-instructor".to_string(),
                            answers: AnswerSheet::new().with("mastery-philosophy", "90"),
                            syllabus: None,
                        })
                        .expect("submission stored")
                        .attempt
                })
            })
            .collect();
        let mut attempts: Vec<u32> = handles
            .into_iter()
            .map(|handle| handle.join().expect("submitter thread"))
            .collect();
        attempts.sort_unstable();

        assert_eq!(attempts, vec![1, 2, 3, 4, 5, 6]);
        let stored = repository
            .fetch(&RespondentId("busy-instructor".to_string()))
            .expect("fetch")
            .expect("record present");
        assert_eq!(stored.attempt, 6);
    }
}
