use super::common::*;
use crate::quiz::answers::{questions, AnswerSheet};
use crate::quiz::catalog::{ids, PersonaId};
use crate::quiz::classifier::{
    classify_persona, ClassifierKind, PersonaStrategy, WeightedOption, WeightedSummation,
};

#[test]
fn low_threshold_with_open_classroom_is_explorer() {
    for tone in ["coach", "advisor", "cheerleader"] {
        let persona = classify_persona(&tiered_answers("70", tone, "open"));
        assert_eq!(persona.as_str(), ids::EXPLORER);
    }
}

#[test]
fn low_threshold_with_any_other_structure_is_nurturer() {
    for structure in ["guided", "structured", "", "Open"] {
        let persona = classify_persona(&tiered_answers("70", "coach", structure));
        assert_eq!(persona.as_str(), ids::NURTURER, "structure {structure:?}");
    }
}

#[test]
fn middle_threshold_is_always_mentor() {
    for (tone, structure) in [("coach", "open"), ("advisor", "guided"), ("x", "y")] {
        let persona = classify_persona(&tiered_answers("80", tone, structure));
        assert_eq!(persona.as_str(), ids::MENTOR);
    }
}

#[test]
fn high_threshold_splits_on_tone() {
    let coach = classify_persona(&tiered_answers("90", "coach", "open"));
    assert_eq!(coach.as_str(), ids::MASTERY_COACH);

    for tone in ["advisor", "Coach", ""] {
        let persona = classify_persona(&tiered_answers("90", tone, "guided"));
        assert_eq!(persona.as_str(), ids::STRATEGIST, "tone {tone:?}");
    }
}

#[test]
fn unrecognized_threshold_falls_through_to_strategist() {
    let persona = classify_persona(&tiered_answers("85", "coach", "open"));
    assert_eq!(persona.as_str(), ids::STRATEGIST);
}

#[test]
fn missing_answers_take_the_default_path() {
    assert_eq!(classify_persona(&AnswerSheet::new()).as_str(), ids::MENTOR);

    let only_tone = AnswerSheet::new().with(questions::COMMUNICATION_TONE, "advisor");
    assert_eq!(classify_persona(&only_tone).as_str(), ids::MENTOR);
}

#[test]
fn tiered_strategy_delegates_to_decision_tree() {
    let strategy = ClassifierKind::Tiered.strategy();
    assert_eq!(strategy.kind(), ClassifierKind::Tiered);
    assert_eq!(
        strategy.classify(&explorer_answers()),
        classify_persona(&explorer_answers())
    );
}

#[test]
fn weighted_summation_picks_highest_total() {
    let legacy = WeightedSummation::legacy();
    let answers = AnswerSheet::new()
        .with("planning-style", "student-led")
        .with("feedback-style", "discovery")
        .with("class-energy", "structured")
        .with("success-metric", "curiosity");

    let classification = legacy.score(&answers);

    assert_eq!(classification.persona_id.as_str(), ids::LEGACY_EXPLORER);
    let explorer = classification
        .scores
        .iter()
        .find(|entry| entry.persona_id.as_str() == ids::LEGACY_EXPLORER)
        .expect("explorer tallied");
    assert_eq!(explorer.score, 7);
    assert_eq!(classification.scores.len(), 4);
}

#[test]
fn weighted_ties_go_to_the_earlier_persona() {
    let legacy = WeightedSummation::legacy();
    // Coach and explorer both collect 2 points.
    let answers = AnswerSheet::new().with("planning-style", "adaptive");

    assert_eq!(legacy.classify(&answers).as_str(), ids::LEGACY_COACH);
    assert_eq!(
        legacy.classify(&AnswerSheet::new()).as_str(),
        ids::LEGACY_ARCHITECT
    );
}

#[test]
fn weighted_counts_each_question_once_and_ignores_unknown_options() {
    let strategy = WeightedSummation::new(
        vec![PersonaId::new("a"), PersonaId::new("b")],
        vec![
            WeightedOption {
                question_id: "q1".to_string(),
                value: "yes".to_string(),
                weights: vec![(PersonaId::new("b"), 2)],
            },
            WeightedOption {
                question_id: "q1".to_string(),
                value: "no".to_string(),
                weights: vec![(PersonaId::new("a"), 5)],
            },
        ],
    );
    let answers = AnswerSheet::from(vec![
        crate::quiz::answers::QuizAnswer::new("q1", "yes"),
        crate::quiz::answers::QuizAnswer::new("q1", "no"),
        crate::quiz::answers::QuizAnswer::new("q2", "maybe"),
    ]);

    let classification = strategy.score(&answers);
    assert_eq!(classification.persona_id.as_str(), "b");
    assert_eq!(classification.scores[0].score, 0);
    assert_eq!(classification.scores[1].score, 2);
}

#[test]
fn weighted_without_personas_degrades_to_empty_id() {
    let strategy = WeightedSummation::new(Vec::new(), Vec::new());
    let classification = strategy.score(&explorer_answers());
    assert_eq!(classification.persona_id.as_str(), "");
    assert!(classification.scores.is_empty());
}

#[test]
fn classifier_kind_parses_aliases() {
    assert_eq!(ClassifierKind::parse("TIERED"), Some(ClassifierKind::Tiered));
    assert_eq!(ClassifierKind::parse("legacy"), Some(ClassifierKind::Weighted));
    assert_eq!(ClassifierKind::parse("coin-flip"), None);
    assert_eq!(ClassifierKind::Weighted.to_string(), "weighted");
}
