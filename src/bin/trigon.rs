use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use trigon::{logging, Outcome, Shell, ShellConfig};

#[derive(Parser)]
#[command(author, version, about = "Classify a triangle from three side lengths", long_about = None)]
struct Cli {
    /// JSON config file for the shell
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Emit logs as JSON on stderr
    #[arg(long)]
    json_logs: bool,
    /// Skip the introduction line
    #[arg(long)]
    quiet: bool,
    /// Give up on a side after this many invalid entries
    #[arg(long)]
    max_attempts: Option<usize>,
}

impl Cli {
    fn shell_config(&self) -> Result<ShellConfig> {
        let mut config = match &self.config {
            Some(path) => ShellConfig::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => ShellConfig::default(),
        };
        config.quiet |= self.quiet;
        config.json_logs |= self.json_logs;
        if self.max_attempts.is_some() {
            config.max_attempts = self.max_attempts;
        }
        Ok(config)
    }
}

fn run(cli: Cli) -> Result<Outcome> {
    let config = cli.shell_config()?;
    logging::init(config.json_logs);

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), config);
    shell.run().context("shell session failed")
}

/// 0 for a classification or abort, 1 for a rejected triangle, 2 when the
/// session itself failed.
fn exit_status(result: &Result<Outcome>) -> u8 {
    match result {
        Ok(Outcome::Classified(_) | Outcome::Aborted) => 0,
        Ok(Outcome::Rejected(_)) => 1,
        Err(_) => 2,
    }
}

fn main() -> ExitCode {
    let result = run(Cli::parse());
    if let Err(err) = &result {
        eprintln!("error: {:#}", err);
    }
    ExitCode::from(exit_status(&result))
}
