//! Reference tables consumed by the scoring core.
//!
//! Both tables are plain values handed to the classifier, matcher, and recommendation projector,
//! so tests can swap in synthetic data and deployments can load curated files at startup.

mod characters;
mod loader;
mod personas;

pub use characters::{CharacterRoster, CharacterStyleEntry, Energy, Style};
pub use loader::{CatalogLoadError, ReferenceTables};
pub use personas::ids;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for teaching personas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonaId(pub String);

impl PersonaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tone used by automated messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessagePersonality {
    Coach,
    Advisor,
}

impl MessagePersonality {
    pub const fn label(self) -> &'static str {
        match self {
            MessagePersonality::Coach => "coach",
            MessagePersonality::Advisor => "advisor",
        }
    }
}

/// Automated message types an instructor can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoMessageKind {
    Welcome,
    WeeklyRecap,
    MissedAssignment,
    LowMastery,
    Celebration,
    InactivityNudge,
    DiscussionReminder,
}

impl AutoMessageKind {
    pub const fn label(self) -> &'static str {
        match self {
            AutoMessageKind::Welcome => "welcome",
            AutoMessageKind::WeeklyRecap => "weekly_recap",
            AutoMessageKind::MissedAssignment => "missed_assignment",
            AutoMessageKind::LowMastery => "low_mastery",
            AutoMessageKind::Celebration => "celebration",
            AutoMessageKind::InactivityNudge => "inactivity_nudge",
            AutoMessageKind::DiscussionReminder => "discussion_reminder",
        }
    }
}

/// Default platform configuration recommended for a persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaSettings {
    pub mastery_threshold: u8,
    pub message_personality: MessagePersonality,
    pub send_auto_messages: bool,
    pub enabled_auto_messages: Vec<AutoMessageKind>,
    pub show_study_plan_rollup: bool,
    pub graded_participation_enabled: bool,
}

/// A teaching-style archetype and its recommended defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeachingPersona {
    pub id: PersonaId,
    pub name: String,
    pub description: String,
    pub defaults: PersonaSettings,
}

/// Lookup table of every persona a quiz can land on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonaCatalog {
    personas: Vec<TeachingPersona>,
}

impl PersonaCatalog {
    pub fn new(personas: Vec<TeachingPersona>) -> Self {
        Self { personas }
    }

    /// Tiered personas followed by the legacy archetypes.
    pub fn standard() -> Self {
        Self::new(personas::standard_personas())
    }

    pub fn get(&self, persona_id: &str) -> Option<&TeachingPersona> {
        self.personas
            .iter()
            .find(|persona| persona.id.as_str() == persona_id)
    }

    pub fn personas(&self) -> &[TeachingPersona] {
        &self.personas
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}
