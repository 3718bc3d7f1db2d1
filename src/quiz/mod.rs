//! Teaching persona quiz scoring.
//!
//! Answers flow through a persona classifier, then a character style matcher, and the chosen
//! persona is projected onto recommended platform settings. Every step is a pure function over
//! injected reference tables; the service and router layers add persistence and HTTP on top.

pub mod answers;
pub mod catalog;
pub mod classifier;
pub mod engine;
pub mod matcher;
pub mod recommendations;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use answers::{
    questions, AnswerSheet, ConstraintAnswers, CourseStart, CustomizationTime, QuizAnswer,
    SyllabusData,
};
pub use catalog::{
    ids, AutoMessageKind, CatalogLoadError, CharacterRoster, CharacterStyleEntry, Energy,
    MessagePersonality, PersonaCatalog, PersonaId, PersonaSettings, ReferenceTables, Style,
    TeachingPersona,
};
pub use classifier::{
    classify_persona, ClassifierKind, PersonaStrategy, TieredDecisionTree, WeightedClassification,
    WeightedSummation,
};
pub use engine::{QuizOutcome, QuizResult, QuizScoringEngine};
pub use matcher::{match_characters, match_characters_by_answer, CharacterMatch};
pub use recommendations::{
    compute_recommendations, compute_recommendations_with_overrides, SettingsBundle,
};
pub use repository::{
    NotifyError, QuizCompletedEvent, QuizResultRecord, QuizResultRepository, QuizResultView,
    RepositoryError, RespondentId, ResultNotifier,
};
pub use router::quiz_router;
pub use service::{QuizService, QuizServiceError, QuizSubmission};
