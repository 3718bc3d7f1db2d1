use serde::{Deserialize, Serialize};
use tracing::debug;

use super::answers::{questions, AnswerSheet, ConstraintAnswers, SyllabusData};
use super::catalog::{
    CharacterRoster, CharacterStyleEntry, Energy, PersonaCatalog, PersonaId, ReferenceTables,
    Style,
};
use super::classifier::{ClassifierKind, PersonaStrategy};
use super::matcher::{match_characters, CharacterMatch};
use super::recommendations::{
    compute_recommendations, compute_recommendations_with_overrides, SettingsBundle,
};

/// Outcome of a completed quiz. Recomputed from scratch on every retake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub top_persona_id: PersonaId,
    pub top_character_id: String,
    pub alternative_character_ids: Vec<String>,
}

impl QuizResult {
    fn new(top_persona_id: PersonaId, matched: CharacterMatch) -> Self {
        Self {
            top_persona_id,
            top_character_id: matched.top_character_id,
            alternative_character_ids: matched.alternative_character_ids,
        }
    }

    pub fn has_character(&self) -> bool {
        !self.top_character_id.is_empty()
    }
}

/// Result and recommended settings computed together for one answer sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub result: QuizResult,
    pub recommendations: SettingsBundle,
}

/// Stateless scorer combining a classification strategy with the reference tables.
pub struct QuizScoringEngine {
    personas: PersonaCatalog,
    characters: CharacterRoster,
    strategy: Box<dyn PersonaStrategy>,
}

impl QuizScoringEngine {
    pub fn new(tables: ReferenceTables, kind: ClassifierKind) -> Self {
        Self::with_strategy(tables, kind.strategy())
    }

    pub fn with_strategy(tables: ReferenceTables, strategy: Box<dyn PersonaStrategy>) -> Self {
        Self {
            personas: tables.personas,
            characters: tables.characters,
            strategy,
        }
    }

    pub fn standard() -> Self {
        Self::new(ReferenceTables::standard(), ClassifierKind::Tiered)
    }

    pub fn kind(&self) -> ClassifierKind {
        self.strategy.kind()
    }

    pub fn personas(&self) -> &PersonaCatalog {
        &self.personas
    }

    pub fn characters(&self) -> &CharacterRoster {
        &self.characters
    }

    pub fn classify(&self, answers: &AnswerSheet) -> PersonaId {
        self.strategy.classify(answers)
    }

    pub fn match_characters(
        &self,
        persona_id: &str,
        energy: Option<Energy>,
        style: Option<Style>,
    ) -> CharacterMatch {
        match_characters(&self.characters, persona_id, energy, style)
    }

    /// Classifies the persona, then ranks its characters on the two style answers.
    pub fn score(&self, answers: &AnswerSheet) -> QuizResult {
        let persona_id = self.classify(answers);
        let energy = answers.get(questions::TEACHING_ENERGY).and_then(Energy::from_answer);
        let style = answers
            .get(questions::COMMUNICATION_APPROACH)
            .and_then(Style::from_answer);
        let matched = self.match_characters(persona_id.as_str(), energy, style);

        debug!(
            classifier = self.kind().label(),
            persona = %persona_id,
            character = %matched.top_character_id,
            "scored quiz answers"
        );

        QuizResult::new(persona_id, matched)
    }

    /// The roster entry behind a result's top character, looked up within the result's persona.
    pub fn featured_character(&self, result: &QuizResult) -> Option<&CharacterStyleEntry> {
        self.characters
            .candidates(result.top_persona_id.as_str())
            .find(|entry| entry.id == result.top_character_id)
    }

    pub fn defaults_for(&self, persona_id: &str) -> SettingsBundle {
        compute_recommendations(&self.personas, persona_id)
    }

    pub fn recommend(
        &self,
        persona_id: &str,
        constraints: &ConstraintAnswers,
        syllabus: Option<&SyllabusData>,
    ) -> SettingsBundle {
        compute_recommendations_with_overrides(&self.personas, persona_id, constraints, syllabus)
    }

    /// Scores the sheet and projects settings, reading constraint answers from the same sheet.
    pub fn evaluate(&self, answers: &AnswerSheet, syllabus: Option<&SyllabusData>) -> QuizOutcome {
        let result = self.score(answers);
        let constraints = ConstraintAnswers::from_sheet(answers);
        let recommendations =
            self.recommend(result.top_persona_id.as_str(), &constraints, syllabus);

        QuizOutcome {
            result,
            recommendations,
        }
    }
}

impl Default for QuizScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}
