//! Student records console.
//!
//! # Responsibility
//! - Open the record store once and hold it for the process lifetime.
//! - Run the interactive menu on stdin/stdout.
//! - Report fatal failures on stderr with a failure exit status.

mod config;
mod console;
mod error;
mod menu;

use config::AppConfig;
use console::Console;
use error::CliError;
use log::{error, info};
use std::io;
use std::process::ExitCode;
use student_core::db::open_db;
use student_core::{
    core_version, flush_logging, init_logging, logging_status, SqliteStudentRepository,
    StudentService,
};

fn main() -> ExitCode {
    let config = match AppConfig::resolve() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("fatal: cannot resolve working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }

    info!(
        "event=cli_start module=cli status=ok core_version={}",
        core_version()
    );

    let exit_code = match run(&config) {
        Ok(()) => {
            info!("event=app_exit module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("fatal: {err}");
            if let Some((_, log_dir)) = logging_status() {
                eprintln!("details: {}", log_dir.display());
            }
            ExitCode::FAILURE
        }
    };

    flush_logging();
    exit_code
}

fn run(config: &AppConfig) -> Result<(), CliError> {
    let conn = open_db(&config.db_path)?;
    let service = StudentService::new(SqliteStudentRepository::new(&conn));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    console.say("Connected to database!")?;

    menu::run_menu(&service, &mut console)
}
