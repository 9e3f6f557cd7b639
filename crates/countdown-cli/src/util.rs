use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use countdown_core::date::CalendarDate;
use tracing::debug;

use crate::config::Config;

/// Read the whole input, from stdin when `file` is `None` or `-`.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading input file");
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))
        }
        _ => {
            debug!("reading input from stdin");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read from stdin")?;
            Ok(text)
        }
    }
}

/// The date labels count from: the flag, then the configured date, then today.
pub fn resolve_today(flag: Option<&str>, config: &Config) -> Result<CalendarDate> {
    match flag.or(config.today.as_deref()) {
        Some(literal) => Ok(literal.parse::<CalendarDate>()?),
        None => Ok(CalendarDate::from_current_moment()),
    }
}

/// 1-based line and character column of a byte offset.
pub fn line_column(text: &str, byte_offset: usize) -> (usize, usize) {
    let before = text.get(..byte_offset).unwrap_or(text);
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line = before.matches('\n').count() + 1;
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
