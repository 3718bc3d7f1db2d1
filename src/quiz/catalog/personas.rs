use super::{AutoMessageKind, MessagePersonality, PersonaId, PersonaSettings, TeachingPersona};

/// Persona identifiers produced by the bundled classifiers.
pub mod ids {
    pub const EXPLORER: &str = "explorer";
    pub const NURTURER: &str = "nurturer";
    pub const MENTOR: &str = "mentor";
    pub const MASTERY_COACH: &str = "mastery_coach";
    pub const STRATEGIST: &str = "strategist";

    pub const LEGACY_ARCHITECT: &str = "the-architect";
    pub const LEGACY_COACH: &str = "the-coach";
    pub const LEGACY_EXPLORER: &str = "the-explorer";
    pub const LEGACY_SAGE: &str = "the-sage";
}

pub(super) fn standard_personas() -> Vec<TeachingPersona> {
    use AutoMessageKind::*;

    vec![
        persona(
            ids::EXPLORER,
            "The Explorer",
            "Lets curiosity lead. Keeps the bar approachable and celebrates experimentation in open, student-driven classrooms.",
            PersonaSettings {
                mastery_threshold: 70,
                message_personality: MessagePersonality::Coach,
                send_auto_messages: true,
                enabled_auto_messages: vec![Welcome, Celebration, InactivityNudge],
                show_study_plan_rollup: false,
                graded_participation_enabled: false,
            },
        ),
        persona(
            ids::NURTURER,
            "The Nurturer",
            "Builds confidence first. Uses a forgiving mastery bar with steady, warm check-ins inside a guided structure.",
            PersonaSettings {
                mastery_threshold: 70,
                message_personality: MessagePersonality::Coach,
                send_auto_messages: true,
                enabled_auto_messages: vec![Welcome, MissedAssignment, Celebration, InactivityNudge],
                show_study_plan_rollup: true,
                graded_participation_enabled: false,
            },
        ),
        persona(
            ids::MENTOR,
            "The Mentor",
            "Balances challenge and support. Expects solid understanding and offers measured advice along the way.",
            PersonaSettings {
                mastery_threshold: 80,
                message_personality: MessagePersonality::Advisor,
                send_auto_messages: true,
                enabled_auto_messages: vec![Welcome, WeeklyRecap, LowMastery],
                show_study_plan_rollup: true,
                graded_participation_enabled: true,
            },
        ),
        persona(
            ids::MASTERY_COACH,
            "The Mastery Coach",
            "Holds a high bar and pushes students to reach it with energetic, hands-on encouragement.",
            PersonaSettings {
                mastery_threshold: 90,
                message_personality: MessagePersonality::Coach,
                send_auto_messages: true,
                enabled_auto_messages: vec![Welcome, LowMastery, MissedAssignment, Celebration],
                show_study_plan_rollup: true,
                graded_participation_enabled: true,
            },
        ),
        persona(
            ids::STRATEGIST,
            "The Strategist",
            "Sets rigorous targets and plans the route to them. Prefers concise, data-informed guidance over frequent nudges.",
            PersonaSettings {
                mastery_threshold: 90,
                message_personality: MessagePersonality::Advisor,
                send_auto_messages: false,
                enabled_auto_messages: vec![WeeklyRecap, LowMastery],
                show_study_plan_rollup: true,
                graded_participation_enabled: true,
            },
        ),
        persona(
            ids::LEGACY_ARCHITECT,
            "The Architect",
            "Designs every unit up front and measures progress against a clear blueprint.",
            PersonaSettings {
                mastery_threshold: 85,
                message_personality: MessagePersonality::Advisor,
                send_auto_messages: true,
                enabled_auto_messages: vec![WeeklyRecap, MissedAssignment],
                show_study_plan_rollup: true,
                graded_participation_enabled: true,
            },
        ),
        persona(
            ids::LEGACY_COACH,
            "The Coach",
            "Motivates from the sidelines with high energy and frequent feedback.",
            PersonaSettings {
                mastery_threshold: 80,
                message_personality: MessagePersonality::Coach,
                send_auto_messages: true,
                enabled_auto_messages: vec![Welcome, Celebration, InactivityNudge],
                show_study_plan_rollup: false,
                graded_participation_enabled: true,
            },
        ),
        persona(
            ids::LEGACY_EXPLORER,
            "The Explorer",
            "Turns the syllabus into an expedition and rewards curiosity over completion.",
            PersonaSettings {
                mastery_threshold: 70,
                message_personality: MessagePersonality::Coach,
                send_auto_messages: true,
                enabled_auto_messages: vec![Welcome, Celebration],
                show_study_plan_rollup: false,
                graded_participation_enabled: false,
            },
        ),
        persona(
            ids::LEGACY_SAGE,
            "The Sage",
            "Guides through questions and reflection, stepping in only when students ask.",
            PersonaSettings {
                mastery_threshold: 80,
                message_personality: MessagePersonality::Advisor,
                send_auto_messages: false,
                enabled_auto_messages: vec![WeeklyRecap],
                show_study_plan_rollup: true,
                graded_participation_enabled: false,
            },
        ),
    ]
}

fn persona(id: &str, name: &str, description: &str, defaults: PersonaSettings) -> TeachingPersona {
    TeachingPersona {
        id: PersonaId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        defaults,
    }
}
