use super::{ClassifierKind, PersonaStrategy};
use crate::quiz::answers::{questions, AnswerSheet};
use crate::quiz::catalog::{ids, PersonaId};

const DEFAULT_THRESHOLD: &str = "80";
const DEFAULT_PERSONALITY: &str = "coach";
const DEFAULT_STRUCTURE: &str = "guided";

/// Three-answer decision tree over mastery threshold, tone, and classroom structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredDecisionTree;

impl PersonaStrategy for TieredDecisionTree {
    fn kind(&self) -> ClassifierKind {
        ClassifierKind::Tiered
    }

    fn classify(&self, answers: &AnswerSheet) -> PersonaId {
        classify_persona(answers)
    }
}

/// Classifies answers into one of the five tiered personas. Never fails.
pub fn classify_persona(answers: &AnswerSheet) -> PersonaId {
    let threshold = answers.value_or(questions::MASTERY_PHILOSOPHY, DEFAULT_THRESHOLD);
    let personality = answers.value_or(questions::COMMUNICATION_TONE, DEFAULT_PERSONALITY);
    let structure = answers.value_or(questions::CLASSROOM_STRUCTURE, DEFAULT_STRUCTURE);

    let persona = match (threshold, personality, structure) {
        ("70", _, "open") => ids::EXPLORER,
        ("70", _, _) => ids::NURTURER,
        ("80", _, _) => ids::MENTOR,
        ("90", "coach", _) => ids::MASTERY_COACH,
        // Also catches unrecognized thresholds; kept for compatibility with stored results.
        _ => ids::STRATEGIST,
    };

    PersonaId::new(persona)
}
