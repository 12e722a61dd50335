//! quizrun CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizrun", version, about = "Multiple-choice quiz runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the question banks that load from the configured sources
    List {
        /// Bank locators (file paths or URLs); overrides the config
        #[arg(long = "source", value_delimiter = ',')]
        sources: Vec<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check question bank files for data problems
    Validate {
        /// Bank file or directory of .json banks
        #[arg(long = "source", required = true, value_delimiter = ',')]
        sources: Vec<PathBuf>,
    },

    /// Take a quiz, reading answers from stdin
    Run {
        /// Bank locators (file paths or URLs); overrides the config
        #[arg(long = "source", value_delimiter = ',')]
        sources: Vec<String>,

        /// Bank indices to include, in order (default: all)
        #[arg(long)]
        select: Option<String>,

        /// Write the result report as JSON
        #[arg(long)]
        report: Option<PathBuf>,

        /// Write the result report as HTML
        #[arg(long)]
        html: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Convert an extracted question dump into a JSON bank
    Import {
        /// Text file extracted from a question PDF
        #[arg(long)]
        input: PathBuf,

        /// Output bank path (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Name of the generated bank
        #[arg(long, default_value = "Imported Questions")]
        set_name: String,
    },

    /// Create a starter config and sample question bank
    Init,
}

#[tokio::main]
async fn main() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "quizrun=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { sources, config } => commands::list::execute(sources, config).await,
        Commands::Validate { sources } => commands::validate::execute(sources),
        Commands::Run {
            sources,
            select,
            report,
            html,
            config,
        } => commands::run::execute(sources, select, report, html, config).await,
        Commands::Import {
            input,
            output,
            set_name,
        } => commands::import::execute(input, output, set_name),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
