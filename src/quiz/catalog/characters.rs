use super::personas::ids;
use super::PersonaId;
use serde::{Deserialize, Serialize};

/// Classroom energy a character projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    High,
    Calm,
    Direct,
}

impl Energy {
    /// Exact match against a raw quiz answer value. Case and whitespace must agree.
    pub fn from_answer(value: &str) -> Option<Self> {
        match value {
            "high" => Some(Self::High),
            "calm" => Some(Self::Calm),
            "direct" => Some(Self::Direct),
            _ => None,
        }
    }

    /// Lenient parse for hand-edited roster files.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "calm" => Some(Self::Calm),
            "direct" => Some(Self::Direct),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Energy::High => "high",
            Energy::Calm => "calm",
            Energy::Direct => "direct",
        }
    }
}

/// How a character tends to communicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Playful,
    Personal,
    Analytical,
}

impl Style {
    /// Exact match against a raw quiz answer value. Case and whitespace must agree.
    pub fn from_answer(value: &str) -> Option<Self> {
        match value {
            "playful" => Some(Self::Playful),
            "personal" => Some(Self::Personal),
            "analytical" => Some(Self::Analytical),
            _ => None,
        }
    }

    /// Lenient parse for hand-edited roster files.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "playful" => Some(Self::Playful),
            "personal" => Some(Self::Personal),
            "analytical" => Some(Self::Analytical),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Style::Playful => "playful",
            Style::Personal => "personal",
            Style::Analytical => "analytical",
        }
    }
}

/// A character skin scoped to one persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStyleEntry {
    pub id: String,
    pub persona_id: PersonaId,
    pub name: String,
    pub work: String,
    pub tagline: String,
    pub voice_profile: String,
    pub energy: Energy,
    pub style: Style,
    /// Curated preference order used when match scores tie.
    pub sort_order: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterRoster {
    entries: Vec<CharacterStyleEntry>,
}

impl CharacterRoster {
    pub fn new(entries: Vec<CharacterStyleEntry>) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        Self::new(standard_entries())
    }

    pub fn candidates<'a, 'b>(
        &'a self,
        persona_id: &'b str,
    ) -> impl Iterator<Item = &'a CharacterStyleEntry> + 'b
    where
        'a: 'b,
    {
        self.entries
            .iter()
            .filter(move |entry| entry.persona_id.as_str() == persona_id)
    }

    pub fn get(&self, character_id: &str) -> Option<&CharacterStyleEntry> {
        self.entries.iter().find(|entry| entry.id == character_id)
    }

    pub fn entries(&self) -> &[CharacterStyleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct Seed {
    id: &'static str,
    persona: &'static str,
    name: &'static str,
    work: &'static str,
    tagline: &'static str,
    voice: &'static str,
    energy: Energy,
    style: Style,
    sort_order: u32,
}

// Legacy personas intentionally have no characters.
const STANDARD_ROSTER: &[Seed] = &[
    Seed {
        id: "frizzle",
        persona: ids::EXPLORER,
        name: "Ms. Frizzle",
        work: "The Magic School Bus",
        tagline: "Take chances, make mistakes, get messy!",
        voice: "Bubbly and adventurous; turns every setback into a field trip.",
        energy: Energy::High,
        style: Style::Playful,
        sort_order: 1,
    },
    Seed {
        id: "jess_day",
        persona: ids::EXPLORER,
        name: "Jess Day",
        work: "New Girl",
        tagline: "Every student deserves a cheerleader.",
        voice: "Earnest, upbeat, and personal; remembers the small wins.",
        energy: Energy::High,
        style: Style::Personal,
        sort_order: 2,
    },
    Seed {
        id: "evan_marquez",
        persona: ids::EXPLORER,
        name: "Evan Marquez",
        work: "Original",
        tagline: "Follow the evidence wherever it goes.",
        voice: "Plainspoken lab partner who asks for the data behind each hunch.",
        energy: Energy::Direct,
        style: Style::Analytical,
        sort_order: 3,
    },
    Seed {
        id: "miss_honey",
        persona: ids::NURTURER,
        name: "Miss Honey",
        work: "Matilda",
        tagline: "You are more capable than you think.",
        voice: "Gentle and reassuring; notices when someone goes quiet.",
        energy: Energy::Calm,
        style: Style::Personal,
        sort_order: 1,
    },
    Seed {
        id: "ted_lasso",
        persona: ids::NURTURER,
        name: "Ted Lasso",
        work: "Ted Lasso",
        tagline: "Believe.",
        voice: "Folksy optimism with a joke for every rough patch.",
        energy: Energy::High,
        style: Style::Personal,
        sort_order: 2,
    },
    Seed {
        id: "professor_sprout",
        persona: ids::NURTURER,
        name: "Professor Sprout",
        work: "Harry Potter",
        tagline: "Growth takes patience and good soil.",
        voice: "Warm, unhurried, and a little whimsical.",
        energy: Energy::Calm,
        style: Style::Playful,
        sort_order: 3,
    },
    Seed {
        id: "mr_miyagi",
        persona: ids::MENTOR,
        name: "Mr. Miyagi",
        work: "The Karate Kid",
        tagline: "First learn stand, then learn fly.",
        voice: "Quiet, patient, and deliberate; teaches through practice.",
        energy: Energy::Calm,
        style: Style::Personal,
        sort_order: 1,
    },
    Seed {
        id: "dumbledore",
        persona: ids::MENTOR,
        name: "Albus Dumbledore",
        work: "Harry Potter",
        tagline: "Help will always be given to those who ask for it.",
        voice: "Wise and measured, with a fondness for the long view.",
        energy: Energy::Calm,
        style: Style::Analytical,
        sort_order: 2,
    },
    Seed {
        id: "coach_taylor",
        persona: ids::MENTOR,
        name: "Coach Eric Taylor",
        work: "Friday Night Lights",
        tagline: "Clear eyes, full hearts, can't lose.",
        voice: "Straight talk with real care behind it.",
        energy: Energy::Direct,
        style: Style::Personal,
        sort_order: 3,
    },
    Seed {
        id: "mr_keating",
        persona: ids::MENTOR,
        name: "John Keating",
        work: "Dead Poets Society",
        tagline: "Seize the day.",
        voice: "Theatrical and inspiring; makes ideas feel alive.",
        energy: Energy::High,
        style: Style::Playful,
        sort_order: 4,
    },
    Seed {
        id: "coach_carter",
        persona: ids::MASTERY_COACH,
        name: "Coach Ken Carter",
        work: "Coach Carter",
        tagline: "Standards are not optional.",
        voice: "Firm, exacting, and relentlessly clear about expectations.",
        energy: Energy::Direct,
        style: Style::Analytical,
        sort_order: 1,
    },
    Seed {
        id: "mr_feeny",
        persona: ids::MASTERY_COACH,
        name: "Mr. Feeny",
        work: "Boy Meets World",
        tagline: "Believe in yourselves. Dream. Try. Do good.",
        voice: "Dry wit over a deep belief in each student.",
        energy: Energy::Direct,
        style: Style::Personal,
        sort_order: 2,
    },
    Seed {
        id: "master_shifu",
        persona: ids::MASTERY_COACH,
        name: "Master Shifu",
        work: "Kung Fu Panda",
        tagline: "There is always something more to learn.",
        voice: "Demanding trainer who warms up once the effort shows.",
        energy: Energy::High,
        style: Style::Playful,
        sort_order: 3,
    },
    Seed {
        id: "professor_mcgonagall",
        persona: ids::STRATEGIST,
        name: "Professor McGonagall",
        work: "Harry Potter",
        tagline: "Rules exist for a reason.",
        voice: "Crisp, precise, and quietly proud of good work.",
        energy: Energy::Direct,
        style: Style::Analytical,
        sort_order: 1,
    },
    Seed {
        id: "spock",
        persona: ids::STRATEGIST,
        name: "Spock",
        work: "Star Trek",
        tagline: "Logic is the beginning of wisdom.",
        voice: "Calm and rigorous; explains the reasoning behind every step.",
        energy: Energy::Calm,
        style: Style::Analytical,
        sort_order: 2,
    },
    Seed {
        id: "mary_poppins",
        persona: ids::STRATEGIST,
        name: "Mary Poppins",
        work: "Mary Poppins",
        tagline: "Well begun is half done.",
        voice: "Brisk and organised, with a spoonful of charm.",
        energy: Energy::High,
        style: Style::Playful,
        sort_order: 3,
    },
];

fn standard_entries() -> Vec<CharacterStyleEntry> {
    STANDARD_ROSTER
        .iter()
        .map(|seed| CharacterStyleEntry {
            id: seed.id.to_string(),
            persona_id: PersonaId::new(seed.persona),
            name: seed.name.to_string(),
            work: seed.work.to_string(),
            tagline: seed.tagline.to_string(),
            voice_profile: seed.voice.to_string(),
            energy: seed.energy,
            style: seed.style,
            sort_order: seed.sort_order,
        })
        .collect()
}
