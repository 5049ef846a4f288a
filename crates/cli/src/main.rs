mod parser;
mod render;
mod session;

use clap::{Parser, Subcommand};
use clinic_core::config::data_file_from_env_value;
use clinic_core::constants::DATA_FILE_ENV_VAR;
use clinic_core::ClinicConfig;
use session::{Outcome, Session};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Clinic patient and appointment records")]
struct Cli {
    /// Roster data file (overrides CLINIC_DATA_FILE)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session
    Shell,
    /// Run a single command, e.g. `clinic run view S1234567A`
    Run {
        /// The command line to run
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        input: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let data_file = cli
        .data_file
        .unwrap_or_else(|| data_file_from_env_value(std::env::var(DATA_FILE_ENV_VAR).ok()));
    let config = ClinicConfig::new(data_file)?;
    tracing::debug!("using data file {}", config.data_file().display());

    let mut session = Session::open(&config)?;

    match cli.command {
        Some(Commands::Run { input }) => {
            if let Outcome::Output(text) = session.handle_line(&input.join(" "))? {
                println!("{text}");
            }
        }
        Some(Commands::Shell) | None => run_shell(
            &mut session,
            std::io::stdin().lock(),
            &mut std::io::stdout().lock(),
            &mut std::io::stderr().lock(),
        )?,
    }

    Ok(())
}

/// Reads commands from `input` until `exit` or end of input.
///
/// Command output goes to `out`, errors to `err`. A line that cannot be read as UTF-8 is
/// reported and skipped.
fn run_shell(
    session: &mut Session,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(
        out,
        "Clinic records: {} patients loaded. Type `help` for commands, `exit` to quit.",
        session.roster().len()
    )?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                writeln!(err, "Could not read input: {e}")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if line.trim().is_empty() {
            continue;
        }

        match session.handle_line(&line) {
            Ok(Outcome::Output(text)) => writeln!(out, "{text}")?,
            Ok(Outcome::Exit) => break,
            Err(e) => writeln!(err, "{e}")?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_in(dir: &TempDir) -> Session {
        let config = ClinicConfig::new(dir.path().join("clinic.yaml")).expect("valid config");
        Session::open(&config).expect("missing file loads as empty roster")
    }

    #[test]
    fn shell_skips_undecodable_line_and_keeps_going() {
        let dir = TempDir::new().expect("tempdir");
        let mut session = open_in(&dir);
        let input: &[u8] = b"list\n\xff\xfe\nhome\nexit\nlist\n";
        let mut out = Vec::new();
        let mut err = Vec::new();

        run_shell(&mut session, input, &mut out, &mut err).expect("shell should finish");

        let out = String::from_utf8(out).expect("utf-8 output");
        let err = String::from_utf8(err).expect("utf-8 errors");
        assert_eq!(out.matches("Listed all patients").count(), 2);
        assert!(err.contains("Could not read input"), "unexpected errors: {err}");
    }

    #[test]
    fn shell_reports_command_errors_and_continues() {
        let dir = TempDir::new().expect("tempdir");
        let mut session = open_in(&dir);
        let input: &[u8] = b"view S1234567A\nlist\n";
        let mut out = Vec::new();
        let mut err = Vec::new();

        run_shell(&mut session, input, &mut out, &mut err).expect("shell should finish");

        let out = String::from_utf8(out).expect("utf-8 output");
        let err = String::from_utf8(err).expect("utf-8 errors");
        assert!(err.contains("Patient not found"), "unexpected errors: {err}");
        assert!(out.contains("Listed all patients"));
    }
}
