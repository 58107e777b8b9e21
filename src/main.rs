use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use stdlib_tour::config::TourConfig;
use stdlib_tour::defrag::SAMPLE_URL;

mod commands;

#[derive(Parser)]
#[command(name = "stdlib-tour")]
#[command(about = "Small demonstrations of threads, URL defragmentation and SQLite user functions")]
#[command(version)]
struct Cli {
    /// Path to config file (default: ~/.config/stdlib-tour/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch worker threads that each print one line
    Threads {
        /// Number of workers (default: 5)
        #[arg(long)]
        count: Option<usize>,

        /// Line each worker prints (default: "Worker")
        #[arg(long)]
        message: Option<String>,

        /// Exit without waiting for workers (some lines may never print)
        #[arg(long, default_value = "false")]
        detach: bool,
    },

    /// Split a URL into its base and fragment
    Defrag {
        /// URL to split
        #[arg(default_value = SAMPLE_URL)]
        url: String,

        /// Require an absolute URL and normalise it
        #[arg(long, default_value = "false")]
        strict: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// To-do database subcommands
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Subcommand)]
enum DbCommands {
    /// Create the database and its tables
    Init {
        /// Database file (default: ~/.local/share/stdlib-tour/todo.db)
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Insert the demo project and tasks
    Seed {
        /// Database file (default: ~/.local/share/stdlib-tour/todo.db)
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// List tasks whose details match a regex
    Search {
        /// Database file (default: ~/.local/share/stdlib-tour/todo.db)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Pattern matched from the start of the details column
        #[arg(long)]
        pattern: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<u8> {
    let cli = Cli::parse();
    let config = TourConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Commands::Threads {
            count,
            message,
            detach,
        } => {
            let count = count.unwrap_or(config.worker_count);
            let message = message.unwrap_or(config.worker_message);
            commands::threads::run(count, &message, detach)
        }

        Commands::Defrag {
            url,
            strict,
            format,
        } => commands::defrag::run(&url, strict, format == OutputFormat::Json),

        Commands::Db { command } => match command {
            DbCommands::Init { db } => commands::db::init(&db.unwrap_or(config.db_path)),

            DbCommands::Seed { db } => commands::db::seed(&db.unwrap_or(config.db_path)),

            DbCommands::Search {
                db,
                pattern,
                format,
            } => commands::db::search(
                &db.unwrap_or(config.db_path),
                &pattern.unwrap_or(config.pattern),
                format == OutputFormat::Json,
            ),
        },
    }
}
