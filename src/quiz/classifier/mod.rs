//! Persona classification strategies.
//!
//! Two independent algorithms ship side by side: the tiered decision tree used by the current
//! quiz, and the weighted summation that scored the legacy archetype quiz. They weigh answers
//! differently and break ties differently, so they stay separate strategies behind one trait.

mod tiered;
mod weighted;

pub use tiered::{classify_persona, TieredDecisionTree};
pub use weighted::{PersonaScore, WeightedClassification, WeightedOption, WeightedSummation};

use serde::{Deserialize, Serialize};

use super::answers::AnswerSheet;
use super::catalog::PersonaId;

/// A pure mapping from a completed answer sheet to a persona.
pub trait PersonaStrategy: Send + Sync {
    fn kind(&self) -> ClassifierKind;
    fn classify(&self, answers: &AnswerSheet) -> PersonaId;
}

/// Selects which strategy the scoring engine runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    #[default]
    Tiered,
    Weighted,
}

impl ClassifierKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tiered" | "decision_tree" => Some(Self::Tiered),
            "weighted" | "legacy" => Some(Self::Weighted),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ClassifierKind::Tiered => "tiered",
            ClassifierKind::Weighted => "weighted",
        }
    }

    pub fn strategy(self) -> Box<dyn PersonaStrategy> {
        match self {
            ClassifierKind::Tiered => Box::new(TieredDecisionTree),
            ClassifierKind::Weighted => Box::new(WeightedSummation::legacy()),
        }
    }
}

impl std::fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ClassifierKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| format!("unknown classifier '{value}'"))
    }
}
