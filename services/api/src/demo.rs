use crate::infra::{parse_answer_pair, InMemoryQuizResultRepository, LoggingNotifier};
use clap::Args;
use persona_quiz::config::AppConfig;
use persona_quiz::error::AppError;
use persona_quiz::quiz::{
    questions, AnswerSheet, ClassifierKind, QuizAnswer, QuizOutcome, QuizScoringEngine,
    QuizService, QuizSubmission, ReferenceTables, SettingsBundle, SyllabusData,
};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct QuizScoreArgs {
    /// Quiz answer as QUESTION=VALUE (repeatable)
    #[arg(long = "answer", value_parser = parse_answer_pair)]
    pub(crate) answers: Vec<(String, String)>,
    /// Constraint answer as QUESTION=VALUE, e.g. course-start=already_started (repeatable)
    #[arg(long = "constraint", value_parser = parse_answer_pair)]
    pub(crate) constraints: Vec<(String, String)>,
    /// Parsed syllabus JSON used to adjust the recommended settings
    #[arg(long)]
    pub(crate) syllabus: Option<PathBuf>,
    /// Override the configured classifier (tiered or weighted)
    #[arg(long)]
    pub(crate) classifier: Option<ClassifierKind>,
    /// Print the outcome as JSON instead of a readable summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct PersonaShowArgs {
    /// Persona identifier, e.g. mentor or the-sage
    pub(crate) persona_id: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Classifier used for the walkthrough (defaults to tiered)
    #[arg(long)]
    pub(crate) classifier: Option<ClassifierKind>,
    /// Skip the retake portion of the demo.
    #[arg(long)]
    pub(crate) skip_retake: bool,
}

pub(crate) fn run_quiz_score(args: QuizScoreArgs) -> Result<(), AppError> {
    let QuizScoreArgs {
        answers,
        constraints,
        syllabus,
        classifier,
        json,
    } = args;

    let engine = load_engine(classifier)?;
    let sheet: AnswerSheet = answers
        .into_iter()
        .chain(constraints)
        .map(|(question, value)| QuizAnswer::new(question, value))
        .collect();
    let syllabus = syllabus.map(load_syllabus).transpose()?;

    let outcome = engine.evaluate(&sheet, syllabus.as_ref());

    if json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Outcome payload unavailable: {err}"),
        }
    } else {
        render_outcome(&engine, &outcome);
    }

    Ok(())
}

pub(crate) fn run_persona_list() -> Result<(), AppError> {
    let engine = load_engine(None)?;

    println!("Teaching personas");
    for persona in engine.personas().personas() {
        let characters: Vec<&str> = engine
            .characters()
            .candidates(persona.id.as_str())
            .map(|entry| entry.id.as_str())
            .collect();
        println!(
            "- {} ({}): mastery {}% | {} characters",
            persona.id,
            persona.name,
            persona.defaults.mastery_threshold,
            characters.len()
        );
    }

    Ok(())
}

pub(crate) fn run_persona_show(args: PersonaShowArgs) -> Result<(), AppError> {
    let engine = load_engine(None)?;
    let Some(persona) = engine.personas().get(&args.persona_id) else {
        println!("No persona named '{}'", args.persona_id);
        return Ok(());
    };

    println!("{} ({})", persona.name, persona.id);
    println!("{}", persona.description);
    println!("\nDefault settings");
    render_settings(&engine.defaults_for(persona.id.as_str()));

    let mut characters: Vec<_> = engine.characters().candidates(persona.id.as_str()).collect();
    characters.sort_by_key(|entry| entry.sort_order);
    if characters.is_empty() {
        println!("\nCharacters: none");
    } else {
        println!("\nCharacters");
        for entry in characters {
            println!(
                "- {} ({}) [{} / {}]",
                entry.name,
                entry.work,
                entry.energy.as_str(),
                entry.style.as_str()
            );
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        classifier,
        skip_retake,
    } = args;

    let engine = Arc::new(QuizScoringEngine::new(
        ReferenceTables::standard(),
        classifier.unwrap_or_default(),
    ));
    let repository = Arc::new(InMemoryQuizResultRepository::default());
    let notifier = Arc::new(LoggingNotifier::default());
    let service = QuizService::new(engine.clone(), repository, notifier.clone());

    println!("Teaching persona quiz demo ({} classifier)", engine.kind());
    let first = QuizSubmission {
        respondent_id: "demo-instructor".to_string(),
        answers: AnswerSheet::new()
            .with(questions::MASTERY_PHILOSOPHY, "70")
            .with(questions::CLASSROOM_STRUCTURE, "open")
            .with(questions::TEACHING_ENERGY, "high")
            .with(questions::COMMUNICATION_APPROACH, "playful"),
        syllabus: None,
    };
    let record = match service.submit(first) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };
    println!(
        "\nAttempt {} at {}: {}",
        record.attempt,
        record
            .completed_at
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        record.summary()
    );
    render_outcome(
        &engine,
        &QuizOutcome {
            result: record.result.clone(),
            recommendations: record.recommendations.clone(),
        },
    );

    if !skip_retake {
        let retake = QuizSubmission {
            respondent_id: "demo-instructor".to_string(),
            answers: AnswerSheet::new()
                .with(questions::MASTERY_PHILOSOPHY, "90")
                .with(questions::COMMUNICATION_TONE, "advisor")
                .with(questions::TEACHING_ENERGY, "calm")
                .with(questions::COMMUNICATION_APPROACH, "analytical")
                .with(questions::COURSE_START, "already_started"),
            syllabus: Some(SyllabusData {
                course_title: Some("Intro to Statistics".to_string()),
                duration_weeks: Some(15),
                module_count: Some(12),
                grading_policy: Some("Pass/Fail with weekly participation".to_string()),
                discussion_expectations: Some("Reply to two classmates each week".to_string()),
            }),
        };
        match service.submit(retake) {
            Ok(record) => {
                println!("\nAttempt {}: {}", record.attempt, record.summary());
                render_outcome(
                    &engine,
                    &QuizOutcome {
                        result: record.result.clone(),
                        recommendations: record.recommendations.clone(),
                    },
                );
            }
            Err(err) => println!("  Retake rejected: {}", err),
        }
    }

    let events = notifier.events();
    if events.is_empty() {
        println!("\nCompletion events: none dispatched");
    } else {
        println!("\nCompletion events");
        for event in events {
            println!(
                "  - {} -> {} (attempt {}{})",
                event.respondent_id.0,
                event.persona_id,
                event.attempt,
                if event.is_retake() { ", retake" } else { "" }
            );
        }
    }

    Ok(())
}

fn load_engine(classifier: Option<ClassifierKind>) -> Result<QuizScoringEngine, AppError> {
    let mut quiz = AppConfig::load()?.quiz;
    if let Some(classifier) = classifier {
        quiz.classifier = classifier;
    }
    let tables = ReferenceTables::load(&quiz)?;
    Ok(QuizScoringEngine::new(tables, quiz.classifier))
}

fn load_syllabus(path: PathBuf) -> Result<SyllabusData, AppError> {
    let file = File::open(path)?;
    let syllabus = serde_json::from_reader(file).map_err(std::io::Error::from)?;
    Ok(syllabus)
}

fn render_outcome(engine: &QuizScoringEngine, outcome: &QuizOutcome) {
    let result = &outcome.result;
    let persona_name = engine
        .personas()
        .get(result.top_persona_id.as_str())
        .map(|persona| persona.name.as_str())
        .unwrap_or("unknown persona");
    println!("Persona: {} ({})", persona_name, result.top_persona_id);

    match engine.featured_character(result) {
        Some(entry) => println!(
            "Character: {} from {}: \"{}\"",
            entry.name, entry.work, entry.tagline
        ),
        None => println!("Character: no match available"),
    }
    if !result.alternative_character_ids.is_empty() {
        println!(
            "Alternatives: {}",
            result.alternative_character_ids.join(", ")
        );
    }

    println!("Recommended settings");
    render_settings(&outcome.recommendations);
}

fn render_settings(bundle: &SettingsBundle) {
    if bundle.is_empty() {
        println!("- none (persona not in catalog)");
        return;
    }
    if let Some(threshold) = bundle.mastery_threshold {
        println!("- mastery threshold: {}%", threshold);
    }
    if let Some(personality) = bundle.message_personality {
        println!("- message personality: {}", personality.label());
    }
    if let Some(send) = bundle.send_auto_messages {
        println!("- send auto messages: {}", if send { "yes" } else { "no" });
    }
    if let Some(messages) = &bundle.enabled_auto_messages {
        let labels: Vec<&str> = messages.iter().map(|kind| kind.label()).collect();
        println!("- enabled messages: {}", labels.join(", "));
    }
    if let Some(rollup) = bundle.show_study_plan_rollup {
        println!("- study plan rollup: {}", if rollup { "shown" } else { "hidden" });
    }
    if let Some(graded) = bundle.graded_participation_enabled {
        println!(
            "- graded participation: {}",
            if graded { "enabled" } else { "disabled" }
        );
    }
}
