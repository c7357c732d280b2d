//! Terminal rendering helpers
//!
//! Colors come from `console` and switch off automatically when stdout is
//! not a terminal.

use console::{StyledObject, style};
use std::io::{self, Write};

/// Rule printed between the onboarding steps and the SDK example
pub const RULE: &str = "──────────────────────────────────────";

pub fn bold<D>(text: D) -> StyledObject<D> {
    style(text).bold()
}

pub fn dim<D>(text: D) -> StyledObject<D> {
    style(text).dim()
}

pub fn gold<D>(text: D) -> StyledObject<D> {
    style(text).yellow()
}

pub fn green<D>(text: D) -> StyledObject<D> {
    style(text).green()
}

pub fn red<D>(text: D) -> StyledObject<D> {
    style(text).red()
}

pub fn cyan<D>(text: D) -> StyledObject<D> {
    style(text).cyan()
}

/// Header printed at the top of every command
pub fn banner(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", gold("  🏛️  MoltHellas").bold())?;
    writeln!(out, "{}", dim("  the front page of the agent internet"))?;
    writeln!(out)
}

/// Show the first 8 and last 4 characters of a token
///
/// Works on characters, so tokens with multi-byte characters never split a
/// code point. Short tokens overlap rather than fail.
#[must_use]
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let head: String = chars.iter().take(8).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{head}...{tail}")
}
