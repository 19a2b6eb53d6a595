//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;

/// Resolve settings for this invocation: file and env layers, then flags.
pub fn resolve_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = match &cli.config {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::Usage(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Settings::load_from(Some(path.as_path()), crate::config::env_overrides())?
        }
        None => Settings::load()?,
    };
    Ok(cli.apply_to(settings))
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = resolve_settings(cli)?;
    show(settings)
}

#[instrument(skip_all, fields(output = %settings.output))]
fn show(settings: Settings) -> CliResult<()> {
    debug!("settings: {:?}", settings);
    let format = settings.output;
    let container = ServiceContainer::new(settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    container.namespace_tree().show(format, &mut out)?;
    Ok(())
}
