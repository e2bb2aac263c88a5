//! One-shot commands that share the checker with the interactive session.

use crate::checker::{resolve_message, SymptomChecker, EMPTY_INPUT_WARNING};
use crate::config::Config;
use anyhow::{bail, Result};
use std::io::Write;
use std::path::Path;

const WRAP_WIDTH: usize = 100;

/// Submit `symptoms` once and print the resolved message.
///
/// Returns whether the backend produced an answer, so the caller can pick
/// an exit status.
pub async fn check_once(
    checker: &dyn SymptomChecker,
    symptoms: &str,
    out: &mut impl Write,
) -> Result<bool> {
    let symptoms = symptoms.trim();
    if symptoms.is_empty() {
        bail!(EMPTY_INPUT_WARNING);
    }

    let outcome = checker.check(symptoms).await;
    let answered = outcome
        .as_ref()
        .is_ok_and(|reply| reply.answer().is_some());
    let message = resolve_message(&outcome);

    for line in message.lines() {
        if line.is_empty() {
            writeln!(out)?;
            continue;
        }
        for wrapped in textwrap::wrap(line, WRAP_WIDTH) {
            writeln!(out, "{}", wrapped)?;
        }
    }
    Ok(answered)
}

pub async fn status(checker: &dyn SymptomChecker, out: &mut impl Write) -> Result<bool> {
    match checker.health().await {
        Ok(report) => {
            let mode = if report.use_mock { "mock" } else { "live" };
            writeln!(out, "online ({}): {}", mode, report.message)?;
            Ok(true)
        }
        Err(e) => {
            tracing::warn!(error = %e, "health probe failed");
            writeln!(out, "unreachable: {}", e)?;
            Ok(false)
        }
    }
}

pub async fn history(
    checker: &dyn SymptomChecker,
    limit: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let entries = checker.history().await?;
    if entries.is_empty() {
        writeln!(out, "No checks recorded")?;
        return Ok(());
    }

    for entry in entries.iter().take(limit.unwrap_or(usize::MAX)) {
        writeln!(out, "#{} {}", entry.id, entry.symptoms)?;
        if let Some(ref suggestion) = entry.suggestion {
            for line in suggestion.lines().filter(|l| !l.trim().is_empty()) {
                for wrapped in textwrap::wrap(line, WRAP_WIDTH - 4) {
                    writeln!(out, "    {}", wrapped)?;
                }
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn init_config(path: &Path, force: bool, out: &mut impl Write) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save(path)?;
    writeln!(out, "Wrote {}", path.display())?;
    Ok(())
}
