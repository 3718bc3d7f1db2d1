use serde::{Deserialize, Serialize};

use super::catalog::{CharacterRoster, CharacterStyleEntry, Energy, Style};

/// Ranked characters for a persona. An empty `top_character_id` means no character is available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterMatch {
    pub top_character_id: String,
    pub alternative_character_ids: Vec<String>,
}

impl CharacterMatch {
    pub fn has_match(&self) -> bool {
        !self.top_character_id.is_empty()
    }
}

/// One point per matching style dimension, so scores range over 0..=2.
pub fn style_score(entry: &CharacterStyleEntry, energy: Option<Energy>, style: Option<Style>) -> u8 {
    u8::from(energy == Some(entry.energy)) + u8::from(style == Some(entry.style))
}

/// Ranks the persona's characters by style score, breaking ties by ascending sort order.
pub fn match_characters(
    roster: &CharacterRoster,
    persona_id: &str,
    energy: Option<Energy>,
    style: Option<Style>,
) -> CharacterMatch {
    let mut ranked: Vec<(u8, &CharacterStyleEntry)> = roster
        .candidates(persona_id)
        .map(|entry| (style_score(entry, energy, style), entry))
        .collect();

    ranked.sort_by(|(left_score, left), (right_score, right)| {
        right_score
            .cmp(left_score)
            .then_with(|| left.sort_order.cmp(&right.sort_order))
    });

    let mut ids = ranked.into_iter().map(|(_, entry)| entry.id.clone());
    let top_character_id = ids.next().unwrap_or_default();
    let alternative_character_ids = ids.collect();

    CharacterMatch {
        top_character_id,
        alternative_character_ids,
    }
}

/// Same as [`match_characters`] but takes raw answer values. Values are compared exactly, so
/// unrecognized or differently-cased values never match.
pub fn match_characters_by_answer(
    roster: &CharacterRoster,
    persona_id: &str,
    energy: &str,
    style: &str,
) -> CharacterMatch {
    match_characters(
        roster,
        persona_id,
        Energy::from_answer(energy),
        Style::from_answer(style),
    )
}
