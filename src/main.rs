use std::io::{self, BufRead};
use std::process::ExitCode;
use std::time::Duration;

use clap::{CommandFactory, Parser};

use lonker::cli::Cli;
use lonker::{Lonker, LonkerError, config, demo};

/// Pause between the two timer lines of the demo.
const DEMO_PAUSE: Duration = Duration::from_millis(50);

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so `lonker ... | head` exits quietly.
    reset_sigpipe();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "lonker", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let partial = match config::load_or_default(cli.config.as_deref()) {
        Ok(file) => file.overlay(cli.partial_options()),
        Err(e) => {
            eprintln!("lonker: {e}");
            return ExitCode::from(1);
        }
    };

    let mut out = Lonker::with_options(partial);

    let result = if cli.demo {
        demo::run(&mut out, DEMO_PAUSE)
    } else {
        pipe_stdin(&cli, &mut out)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lonker: {e}");
            ExitCode::from(exit_code(&e))
        }
    }
}

/// Emit every stdin line through the configured labels and groups.
fn pipe_stdin(cli: &Cli, out: &mut Lonker) -> Result<(), LonkerError> {
    cli.open_scopes(out)?;

    let stdin = io::stdin();
    for line_result in stdin.lock().lines() {
        let line = match line_result {
            Ok(l) => l,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => continue,
            Err(e) => return Err(e.into()),
        };
        cli.emit_line(out, &line)?;
    }
    Ok(())
}

const fn exit_code(e: &LonkerError) -> u8 {
    match e {
        LonkerError::Io(_) => 2,
        LonkerError::Config(_) | LonkerError::Toml(_) | LonkerError::TimeFormat { .. } => 1,
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// Restoring `SIG_DFL` lets the OS end the process when the reader of a
/// pipeline goes away.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
