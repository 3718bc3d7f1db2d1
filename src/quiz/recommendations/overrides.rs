use super::SettingsBundle;
use crate::quiz::answers::{ConstraintAnswers, CourseStart, CustomizationTime, SyllabusData};
use crate::quiz::catalog::{AutoMessageKind, PersonaSettings};

const PASS_FAIL_TERMS: &[&str] = &["pass/fail", "pass-fail", "credit/no credit"];
const MASTERY_TERMS: &[&str] = &["mastery", "competency"];
const PARTICIPATION_TERMS: &[&str] = &["participation"];

const LARGE_COURSE_MODULES: u32 = 10;
const SMALL_COURSE_MODULES: u32 = 4;

pub(super) fn apply(
    defaults: &PersonaSettings,
    constraints: &ConstraintAnswers,
    syllabus: Option<&SyllabusData>,
) -> SettingsBundle {
    SettingsBundle {
        mastery_threshold: Some(mastery_threshold(defaults, syllabus)),
        message_personality: Some(defaults.message_personality),
        send_auto_messages: Some(send_auto_messages(defaults, constraints)),
        enabled_auto_messages: Some(enabled_auto_messages(defaults, constraints, syllabus)),
        show_study_plan_rollup: Some(show_study_plan_rollup(defaults, syllabus)),
        graded_participation_enabled: Some(graded_participation(defaults, syllabus)),
    }
}

fn mastery_threshold(defaults: &PersonaSettings, syllabus: Option<&SyllabusData>) -> u8 {
    match syllabus {
        Some(s) if s.grading_mentions(PASS_FAIL_TERMS) => 70,
        Some(s) if s.grading_mentions(MASTERY_TERMS) => 90,
        _ => defaults.mastery_threshold,
    }
}

fn send_auto_messages(defaults: &PersonaSettings, constraints: &ConstraintAnswers) -> bool {
    match (constraints.course_start, constraints.customization_time) {
        (Some(CourseStart::AlreadyStarted), _) => true,
        (_, Some(CustomizationTime::Minimal)) => true,
        _ => defaults.send_auto_messages,
    }
}

fn enabled_auto_messages(
    defaults: &PersonaSettings,
    constraints: &ConstraintAnswers,
    syllabus: Option<&SyllabusData>,
) -> Vec<AutoMessageKind> {
    let mut messages = defaults.enabled_auto_messages.clone();

    if constraints.course_start == Some(CourseStart::AlreadyStarted) {
        messages.retain(|kind| *kind != AutoMessageKind::Welcome);
    }

    if syllabus.is_some_and(SyllabusData::has_discussion_expectations)
        && !messages.contains(&AutoMessageKind::DiscussionReminder)
    {
        messages.push(AutoMessageKind::DiscussionReminder);
    }

    messages
}

fn show_study_plan_rollup(defaults: &PersonaSettings, syllabus: Option<&SyllabusData>) -> bool {
    match syllabus.and_then(|s| s.module_count) {
        Some(count) if count >= LARGE_COURSE_MODULES => true,
        Some(count) if count <= SMALL_COURSE_MODULES => false,
        _ => defaults.show_study_plan_rollup,
    }
}

fn graded_participation(defaults: &PersonaSettings, syllabus: Option<&SyllabusData>) -> bool {
    match syllabus {
        Some(s) if s.grading_mentions(PARTICIPATION_TERMS) => true,
        Some(s) if s.has_discussion_expectations() => true,
        _ => defaults.graded_participation_enabled,
    }
}
