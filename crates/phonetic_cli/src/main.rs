//! `phonetic-names` command-line entry point.
//!
//! # Responsibility
//! - Parse the run switches and reject `--force` with `--clean` up front.
//! - Wire the SQLite address book into the core service and print progress.

mod report;

use clap::Parser;
use phonetic_core::config::{resolve_db_path, resolve_log_dir};
use phonetic_core::db::open_db;
use phonetic_core::{
    core_version, default_log_level, init_logging, PhoneticService, RunOptions,
    SqliteContactStore,
};
use report::ConsoleReporter;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "phonetic-names",
    about = "Fill contacts' phonetic name fields with pinyin of their Chinese names.",
    version
)]
struct Cli {
    /// Dry run without modifying the contacts.
    #[arg(short = 'd', long = "dry")]
    dry_run: bool,
    /// Force update all phonetic names, even if the phonetic names already exist.
    #[arg(short, long)]
    force: bool,
    /// Clean all contact's phonetic names.
    #[arg(short, long)]
    clean: bool,
    /// Address book database, default: $PHONETIC_NAMES_DB_PATH or a temp-dir file
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,
    /// File log level (trace|debug|info|warn|error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = match RunOptions::from_flags(cli.dry_run, cli.force, cli.clean) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, &resolve_log_dir()) {
        eprintln!("file logging disabled: {err}");
    }
    log::info!(
        "event=cli_start module=cli status=ok core_version={}",
        core_version()
    );

    let mut reporter = ConsoleReporter::stdout();
    reporter.notices(&options);

    let db_path = resolve_db_path(cli.db);
    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("cannot open address book `{}`: {err}", db_path.display());
            return ExitCode::FAILURE;
        }
    };

    let service = PhoneticService::new(SqliteContactStore::new(&conn), options);
    match service.run(&mut reporter) {
        Ok(_) => {
            reporter.finished(service.options());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
