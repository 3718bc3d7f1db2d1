use crate::demo::{
    run_demo, run_persona_list, run_persona_show, run_quiz_score, DemoArgs, PersonaShowArgs,
    QuizScoreArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use persona_quiz::error::AppError;
use persona_quiz::quiz::ClassifierKind;

#[derive(Parser, Debug)]
#[command(
    name = "Teaching Persona Quiz",
    about = "Score teaching-style quizzes and serve persona recommendations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a set of quiz answers from the command line
    Quiz {
        #[command(subcommand)]
        command: QuizCommand,
    },
    /// Inspect the persona catalog
    Personas {
        #[command(subcommand)]
        command: PersonaCommand,
    },
    /// Walk through a full quiz submission and retake
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum QuizCommand {
    /// Classify answers, match a character, and print recommended settings
    Score(QuizScoreArgs),
}

#[derive(Subcommand, Debug)]
enum PersonaCommand {
    /// List every persona with its default threshold and characters
    List,
    /// Show default settings and characters for one persona
    Show(PersonaShowArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured classifier (tiered or weighted)
    #[arg(long)]
    pub(crate) classifier: Option<ClassifierKind>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quiz {
            command: QuizCommand::Score(args),
        } => run_quiz_score(args),
        Command::Personas {
            command: PersonaCommand::List,
        } => run_persona_list(),
        Command::Personas {
            command: PersonaCommand::Show(args),
        } => run_persona_show(args),
        Command::Demo(args) => run_demo(args),
    }
}
