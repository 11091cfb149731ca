//! Probex CLI
//!
//! Command-line interface for launching and steering probes

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod output;

use config::{LogMode, Settings};

#[derive(Debug, Parser)]
#[command(name = "probex")]
#[command(about = "Probex - grid-bounded probe control", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "PROBEX_DB", default_value = config::DEFAULT_DB_PATH)]
    db: std::path::PathBuf,

    /// Log output on stderr
    #[arg(long, global = true, env = "PROBEX_LOG", value_enum, default_value_t = LogMode::Quiet)]
    log: LogMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Launch a probe at (0, 0) of a new grid
    Create(commands::probe::CreateArgs),
    /// List all probes
    List,
    /// Apply a command string (M, L, R) to a probe
    Move(commands::probe::MoveArgs),
}

fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let settings = Settings::new(cli.db, cli.log);
    settings.init_logging();

    let result = settings.open_db().and_then(|mut conn| {
        let ctx = probex_core_types::RequestContext::new();
        match cli.command {
            Commands::Create(args) => commands::probe::create(args, &mut conn, &ctx),
            Commands::List => commands::probe::list(&mut conn, &ctx),
            Commands::Move(args) => commands::probe::move_probe(args, &mut conn, &ctx),
        }
    });

    let code = match result {
        Ok(value) => output::print_success(&value),
        Err(err) => output::print_error(&err),
    };
    std::process::exit(code);
}
