//! examdesk CLI: run the exam server and inspect the exam directory.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "examdesk", version, about = "Timed exam delivery server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve exams over HTTP
    Serve {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory holding the exam documents
        #[arg(long)]
        exams_dir: Option<PathBuf>,

        /// Address to listen on (e.g. "0.0.0.0:5000")
        #[arg(long)]
        bind: Option<String>,
    },

    /// List the exams that would be offered
    List {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory holding the exam documents
        #[arg(long)]
        exams_dir: Option<PathBuf>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Check exam documents for common problems
    Validate {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory holding the exam documents
        #[arg(long)]
        exams_dir: Option<PathBuf>,
    },

    /// Create a starter config and a sample exam
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("examdesk=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            config,
            exams_dir,
            bind,
        } => commands::serve::execute(config, exams_dir, bind).await,
        Commands::List {
            config,
            exams_dir,
            format,
        } => commands::list::execute(config, exams_dir, format),
        Commands::Validate { config, exams_dir } => commands::validate::execute(config, exams_dir),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
