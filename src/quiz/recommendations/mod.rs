mod overrides;

use serde::{Deserialize, Serialize};

use super::answers::{ConstraintAnswers, SyllabusData};
use super::catalog::{AutoMessageKind, MessagePersonality, PersonaCatalog, PersonaSettings};

/// Recommended platform settings. Every field is absent when the persona is unknown, which
/// serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mastery_threshold: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_personality: Option<MessagePersonality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_auto_messages: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_auto_messages: Option<Vec<AutoMessageKind>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_study_plan_rollup: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graded_participation_enabled: Option<bool>,
}

impl SettingsBundle {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl From<&PersonaSettings> for SettingsBundle {
    fn from(settings: &PersonaSettings) -> Self {
        Self {
            mastery_threshold: Some(settings.mastery_threshold),
            message_personality: Some(settings.message_personality),
            send_auto_messages: Some(settings.send_auto_messages),
            enabled_auto_messages: Some(settings.enabled_auto_messages.clone()),
            show_study_plan_rollup: Some(settings.show_study_plan_rollup),
            graded_participation_enabled: Some(settings.graded_participation_enabled),
        }
    }
}

/// Persona defaults, or an empty bundle for an unknown persona id.
pub fn compute_recommendations(catalog: &PersonaCatalog, persona_id: &str) -> SettingsBundle {
    catalog
        .get(persona_id)
        .map(|persona| SettingsBundle::from(&persona.defaults))
        .unwrap_or_default()
}

/// Persona defaults with constraint and syllabus overrides applied per setting.
/// Unknown personas still yield an empty bundle; overrides never invent a baseline.
pub fn compute_recommendations_with_overrides(
    catalog: &PersonaCatalog,
    persona_id: &str,
    constraints: &ConstraintAnswers,
    syllabus: Option<&SyllabusData>,
) -> SettingsBundle {
    match catalog.get(persona_id) {
        Some(persona) => overrides::apply(&persona.defaults, constraints, syllabus),
        None => SettingsBundle::default(),
    }
}
