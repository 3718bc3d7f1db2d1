use serde::{Deserialize, Serialize};

/// Question identifiers read by the scoring core.
pub mod questions {
    pub const MASTERY_PHILOSOPHY: &str = "mastery-philosophy";
    pub const COMMUNICATION_TONE: &str = "communication-tone";
    pub const CLASSROOM_STRUCTURE: &str = "classroom-structure";
    pub const TEACHING_ENERGY: &str = "teaching-energy";
    pub const COMMUNICATION_APPROACH: &str = "communication-approach";

    pub const COURSE_START: &str = "course-start";
    pub const CUSTOMIZATION_TIME: &str = "customization-time";
}

/// A single answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub question_id: String,
    pub selected_value: String,
}

impl QuizAnswer {
    pub fn new(question_id: impl Into<String>, selected_value: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            selected_value: selected_value.into(),
        }
    }
}

/// Answers accumulated over a quiz run. Lookups return the first answer recorded for a question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: Vec<QuizAnswer>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing an earlier answer to the same question in place.
    pub fn record(&mut self, question_id: impl Into<String>, selected_value: impl Into<String>) {
        let answer = QuizAnswer::new(question_id, selected_value);
        match self
            .answers
            .iter_mut()
            .find(|existing| existing.question_id == answer.question_id)
        {
            Some(existing) => existing.selected_value = answer.selected_value,
            None => self.answers.push(answer),
        }
    }

    pub fn with(mut self, question_id: &str, selected_value: &str) -> Self {
        self.record(question_id, selected_value);
        self
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.answers
            .iter()
            .find(|answer| answer.question_id == question_id)
            .map(|answer| answer.selected_value.as_str())
    }

    pub fn value_or<'a>(&'a self, question_id: &str, default: &'a str) -> &'a str {
        self.get(question_id).unwrap_or(default)
    }

    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl From<Vec<QuizAnswer>> for AnswerSheet {
    fn from(answers: Vec<QuizAnswer>) -> Self {
        Self { answers }
    }
}

impl FromIterator<QuizAnswer> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = QuizAnswer>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// When the course begins relative to quiz completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStart {
    AlreadyStarted,
    WithinTwoWeeks,
    NextTerm,
}

impl CourseStart {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "already_started" => Some(Self::AlreadyStarted),
            "within_two_weeks" => Some(Self::WithinTwoWeeks),
            "next_term" => Some(Self::NextTerm),
            _ => None,
        }
    }
}

/// How much time the instructor has for tuning the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomizationTime {
    Minimal,
    Moderate,
    Extensive,
}

impl CustomizationTime {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "minimal" => Some(Self::Minimal),
            "moderate" => Some(Self::Moderate),
            "extensive" => Some(Self::Extensive),
            _ => None,
        }
    }
}

/// Course logistics answers. Unrecognized values are treated as unanswered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintAnswers {
    pub course_start: Option<CourseStart>,
    pub customization_time: Option<CustomizationTime>,
}

impl ConstraintAnswers {
    pub fn from_sheet(sheet: &AnswerSheet) -> Self {
        Self {
            course_start: sheet
                .get(questions::COURSE_START)
                .and_then(CourseStart::parse),
            customization_time: sheet
                .get(questions::CUSTOMIZATION_TIME)
                .and_then(CustomizationTime::parse),
        }
    }
}

/// Fields extracted from an uploaded syllabus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusData {
    #[serde(default)]
    pub course_title: Option<String>,
    #[serde(default)]
    pub duration_weeks: Option<u32>,
    #[serde(default)]
    pub module_count: Option<u32>,
    #[serde(default)]
    pub grading_policy: Option<String>,
    #[serde(default)]
    pub discussion_expectations: Option<String>,
}

impl SyllabusData {
    pub(crate) fn grading_mentions(&self, needles: &[&str]) -> bool {
        mentions(self.grading_policy.as_deref(), needles)
    }

    pub(crate) fn has_discussion_expectations(&self) -> bool {
        self.discussion_expectations
            .as_deref()
            .map(|text| !text.trim().is_empty())
            .unwrap_or(false)
    }
}

fn mentions(text: Option<&str>, needles: &[&str]) -> bool {
    let Some(text) = text else {
        return false;
    };
    let haystack = text.to_lowercase();
    needles.iter().any(|needle| haystack.contains(needle))
}
