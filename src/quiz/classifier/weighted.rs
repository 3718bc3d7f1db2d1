use super::{ClassifierKind, PersonaStrategy};
use crate::quiz::answers::AnswerSheet;
use crate::quiz::catalog::{ids, PersonaId};
use serde::{Deserialize, Serialize};

/// Weights contributed when a question is answered with a particular value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedOption {
    pub question_id: String,
    pub value: String,
    pub weights: Vec<(PersonaId, u32)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaScore {
    pub persona_id: PersonaId,
    pub score: u32,
}

/// Winner plus the full tally, in persona declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedClassification {
    pub persona_id: PersonaId,
    pub scores: Vec<PersonaScore>,
}

/// Sums option weights per persona; the highest total wins and ties go to the earlier persona.
#[derive(Debug, Clone)]
pub struct WeightedSummation {
    personas: Vec<PersonaId>,
    options: Vec<WeightedOption>,
}

impl WeightedSummation {
    pub fn new(personas: Vec<PersonaId>, options: Vec<WeightedOption>) -> Self {
        Self { personas, options }
    }

    /// Weight table for the four legacy archetypes.
    pub fn legacy() -> Self {
        let personas = [
            ids::LEGACY_ARCHITECT,
            ids::LEGACY_COACH,
            ids::LEGACY_EXPLORER,
            ids::LEGACY_SAGE,
        ]
        .into_iter()
        .map(PersonaId::new)
        .collect();

        let options = LEGACY_WEIGHTS
            .iter()
            .map(|(question_id, value, weights)| WeightedOption {
                question_id: question_id.to_string(),
                value: value.to_string(),
                weights: weights
                    .iter()
                    .map(|(persona, weight)| (PersonaId::new(*persona), *weight))
                    .collect(),
            })
            .collect();

        Self::new(personas, options)
    }

    pub fn personas(&self) -> &[PersonaId] {
        &self.personas
    }

    /// Scores every answer once per question (first answer wins). Unknown answers add nothing.
    /// An empty persona list yields an empty persona id.
    pub fn score(&self, answers: &AnswerSheet) -> WeightedClassification {
        let mut scores: Vec<PersonaScore> = self
            .personas
            .iter()
            .map(|persona_id| PersonaScore {
                persona_id: persona_id.clone(),
                score: 0,
            })
            .collect();

        let mut seen: Vec<&str> = Vec::new();
        for answer in answers.answers() {
            if seen.contains(&answer.question_id.as_str()) {
                continue;
            }
            seen.push(&answer.question_id);

            let Some(option) = self.options.iter().find(|option| {
                option.question_id == answer.question_id && option.value == answer.selected_value
            }) else {
                continue;
            };

            for (persona_id, weight) in &option.weights {
                if let Some(entry) = scores
                    .iter_mut()
                    .find(|entry| &entry.persona_id == persona_id)
                {
                    entry.score += weight;
                }
            }
        }

        let mut winner: Option<&PersonaScore> = None;
        for entry in &scores {
            if winner.map_or(true, |best| entry.score > best.score) {
                winner = Some(entry);
            }
        }
        let persona_id = winner
            .map(|entry| entry.persona_id.clone())
            .unwrap_or_else(|| PersonaId::new(""));

        WeightedClassification { persona_id, scores }
    }
}

impl PersonaStrategy for WeightedSummation {
    fn kind(&self) -> ClassifierKind {
        ClassifierKind::Weighted
    }

    fn classify(&self, answers: &AnswerSheet) -> PersonaId {
        self.score(answers).persona_id
    }
}

type WeightRow = (&'static str, &'static str, &'static [(&'static str, u32)]);

const LEGACY_WEIGHTS: &[WeightRow] = &[
    (
        "planning-style",
        "blueprint",
        &[(ids::LEGACY_ARCHITECT, 3), (ids::LEGACY_SAGE, 1)],
    ),
    (
        "planning-style",
        "adaptive",
        &[(ids::LEGACY_COACH, 2), (ids::LEGACY_EXPLORER, 2)],
    ),
    ("planning-style", "student-led", &[(ids::LEGACY_EXPLORER, 3)]),
    (
        "planning-style",
        "reflective",
        &[(ids::LEGACY_SAGE, 3), (ids::LEGACY_ARCHITECT, 1)],
    ),
    ("feedback-style", "rubric", &[(ids::LEGACY_ARCHITECT, 2)]),
    ("feedback-style", "encouraging", &[(ids::LEGACY_COACH, 3)]),
    (
        "feedback-style",
        "socratic",
        &[(ids::LEGACY_SAGE, 2), (ids::LEGACY_EXPLORER, 1)],
    ),
    ("feedback-style", "discovery", &[(ids::LEGACY_EXPLORER, 2)]),
    (
        "class-energy",
        "structured",
        &[(ids::LEGACY_ARCHITECT, 2), (ids::LEGACY_SAGE, 1)],
    ),
    (
        "class-energy",
        "high-energy",
        &[(ids::LEGACY_COACH, 2), (ids::LEGACY_EXPLORER, 1)],
    ),
    (
        "class-energy",
        "curious",
        &[(ids::LEGACY_EXPLORER, 2), (ids::LEGACY_SAGE, 1)],
    ),
    ("class-energy", "calm", &[(ids::LEGACY_SAGE, 2)]),
    (
        "success-metric",
        "outcomes",
        &[(ids::LEGACY_ARCHITECT, 2), (ids::LEGACY_COACH, 1)],
    ),
    ("success-metric", "growth", &[(ids::LEGACY_COACH, 2)]),
    ("success-metric", "curiosity", &[(ids::LEGACY_EXPLORER, 2)]),
    ("success-metric", "understanding", &[(ids::LEGACY_SAGE, 2)]),
];
