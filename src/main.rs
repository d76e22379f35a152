//! `stamplog` command line tool.
//!
//! ```text
//! stamplog log --since 1700000000 warning disk almost full
//! stamplog timestamp --since 1700000000
//! stamplog run -- make test
//! ```

use std::path::PathBuf;
use std::process::{Command, ExitCode};

use clap::{Parser, Subcommand};
use stamplog::config::{load_config, LoggerConfig};
use stamplog::observability::logging;
use stamplog::{log_to, Level, Logger};

#[derive(Parser)]
#[command(name = "stamplog")]
#[command(about = "Leveled log lines stamped with elapsed time", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit a single log line
    Log {
        /// Reference point in Unix seconds (default: the epoch).
        #[arg(long, allow_negative_numbers = true)]
        since: Option<f64>,

        /// Source file reported in the line.
        #[arg(long, default_value = "stamplog")]
        file: String,

        /// Source line reported in the line.
        #[arg(long, default_value_t = 0)]
        line: u32,

        /// debug, status, warning or error.
        level: Level,

        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Print seconds elapsed since a reference point
    Timestamp {
        /// Reference point in Unix seconds (default: the epoch).
        #[arg(long, allow_negative_numbers = true)]
        since: Option<f64>,
    },
    /// Run a program, then print how long it took
    Run {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        argv: Vec<String>,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::default(),
    };
    tracing::debug!(
        path = ?cli.config,
        resolution = ?config.clock.resolution,
        "Configuration loaded"
    );

    let logger = Logger::from_config(&config);

    match cli.command {
        Commands::Log {
            since,
            file,
            line,
            level,
            message,
        } => {
            if let Some(since) = since {
                logger.reset_timer_at(since);
            }
            logger.log_message(&file, line, level, format_args!("{}", message.join(" ")));
        }
        Commands::Timestamp { since } => {
            if let Some(since) = since {
                logger.reset_timer_at(since);
            }
            logger.print_timestamp();
        }
        Commands::Run { argv } => return Ok(run_program(&logger, &argv)),
    }

    Ok(ExitCode::SUCCESS)
}

/// Reset the timer, run `argv` to completion and report on it.
///
/// Exits with the program's own status code, or 1 if it has none.
fn run_program(logger: &Logger, argv: &[String]) -> ExitCode {
    let Some((program, args)) = argv.split_first() else {
        return ExitCode::FAILURE;
    };

    logger.reset_timer();
    log_to!(logger, Level::Status, "running {}", argv.join(" "));

    let code = match Command::new(program).args(args).status() {
        Ok(status) if status.success() => {
            log_to!(logger, Level::Status, "{} finished", program);
            0
        }
        Ok(status) => {
            log_to!(logger, Level::Error, "{} failed: {}", program, status);
            status.code().unwrap_or(1)
        }
        Err(e) => {
            tracing::debug!(program = %program, error = %e, "Spawn failed");
            log_to!(logger, Level::Error, "could not start {}: {}", program, e);
            1
        }
    };

    logger.print_timestamp();
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
