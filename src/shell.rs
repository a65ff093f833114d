// 🖥️ Interactive shell - read a number, print the verdict, repeat

use crate::config::ShellConfig;
use crate::validator::validate_card;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Counts for one interactive session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub checked: usize,
    pub valid: usize,
}

/// Run the loop until EOF, an empty line, or an exit token.
pub fn run_session<R, W>(config: &ShellConfig, input: R, mut output: W) -> Result<SessionStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = SessionStats::default();

    writeln!(output, "Card Validator")?;
    writeln!(
        output,
        "Enter a card number (or '{}' to quit):",
        config.exit_tokens.first().map(String::as_str).unwrap_or("")
    )?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line.context("Failed to read input line")?,
            None => break,
        };

        if config.is_exit(&line) {
            break;
        }

        let result = validate_card(line.trim());
        stats.checked += 1;
        if result.valid {
            stats.valid += 1;
        }
        writeln!(output, "{}", result.message())?;
    }

    tracing::info!(checked = stats.checked, valid = stats.valid, "session finished");
    Ok(stats)
}

// ============================================================================
// TESTS
// ============================================================================
