// Terminal front end - stands in for the popup text box
// Each input line is queried against the LookupService and the result printed.

use crate::config::{ConfigError, Settings};
use crate::dictionary::{Lookup, LookupService};
use crate::startup::{Notice, Notifier};
use crate::target::{TargetApp, HOTKEY};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Printed when a term has no transliteration
pub const NO_MATCH: &str = "(no match)";

#[derive(Parser, Debug)]
#[command(name = "katakana", version, about = "English to Katakana dictionary lookup")]
pub struct Cli {
    /// Local dictionary file (overrides settings)
    #[arg(long, env = "KATAKANA_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Remote dictionary URL (overrides settings)
    #[arg(long, env = "KATAKANA_URL")]
    pub url: Option<String>,

    /// Skip the startup download
    #[arg(long)]
    pub offline: bool,

    /// Settings file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Look up one or more terms and exit
    Lookup {
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Show which application a window title routes to
    Route {
        /// Foreground window title, e.g. "Report.docx - Word"
        title: String,
    },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to load settings: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background refresh failed: {0}")]
    Refresh(String),
}

impl Cli {
    /// Merge CLI flags over the settings file over defaults
    pub fn resolve_settings(&self) -> Result<Settings, CliError> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from(path)?,
            None => Settings::load()?,
        };

        if let Some(path) = &self.dictionary {
            settings.dictionary_path = Some(path.clone());
        }
        if let Some(url) = &self.url {
            settings.remote_url = url.clone();
        }
        if self.offline {
            settings.remote_refresh = false;
        }
        Ok(settings)
    }
}

/// Notifier that writes notices to stderr, in place of message boxes
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notice: Notice) {
        crate::debug!("Notice: {:?}", notice);
        eprintln!("{}", notice);
    }
}

/// Render a lookup result for display
pub fn render(result: &Lookup) -> &str {
    match result {
        Lookup::Found(value) => value.as_str(),
        Lookup::NotFound => NO_MATCH,
    }
}

/// Print `term<TAB>result` for each term
pub fn run_lookup<W: Write>(
    lookup: &LookupService,
    terms: &[String],
    out: &mut W,
) -> Result<(), CliError> {
    for term in terms {
        let result = lookup.query(term).into_option();
        writeln!(
            out,
            "{}\t{}",
            term.trim(),
            result.as_deref().unwrap_or(NO_MATCH)
        )?;
    }
    Ok(())
}

/// Print `title<TAB>target` for a foreground window title
pub fn run_route<W: Write>(title: &str, out: &mut W) -> Result<TargetApp, CliError> {
    let target = TargetApp::from_window_title(title);
    if !target.is_office() {
        crate::debug!("{} in {:?} has no Office target", HOTKEY, title);
    }
    writeln!(out, "{}\t{}", title, target)?;
    Ok(target)
}

/// Interactive prompt: query each line until an empty line or EOF
///
/// Returns the number of queries answered.
pub fn run_repl<R: BufRead, W: Write>(
    lookup: &LookupService,
    input: R,
    out: &mut W,
) -> Result<usize, CliError> {
    let mut answered = 0;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        let result = lookup.query(&line);
        crate::trace!("{:?} found: {}", line.trim(), result.is_found());
        writeln!(out, "{}", render(&result))?;
        answered += 1;

        write!(out, "> ")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(answered)
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
