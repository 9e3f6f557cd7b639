//! Finds inline date references in free-form note text.
//!
//! Three syntaxes are recognized, tried in this order at every position:
//!
//! | Syntax | Example | Role |
//! |---|---|---|
//! | Bracketed link | `[[2025-06-20]]`, `[[2025-06-20|Friday]]` | [`DateRole::Reference`] |
//! | Due-date marker | `📅 2025-06-20` | [`DateRole::DueDate`] |
//! | Start-date marker | `🛫 2025-06-20` | [`DateRole::Reference`] |
//!
//! An occurrence whose date literal does not parse (see
//! [`CalendarDate::parse`]) is skipped and scanning resumes after it.

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::date::CalendarDate;

/// Marks a task's due date.
pub const DUE_DATE_MARKER: char = '\u{1F4C5}';
/// Marks a task's start date.
pub const START_DATE_MARKER: char = '\u{1F6EB}';

// ASCII digits only; `\d` would also accept other Unicode digits.
const DATE: &str = "[0-9]{4}-[0-9]{2}-[0-9]{2}";

lazy_static! {
    static ref DATE_PATTERN: Regex = Regex::new(&format!(
        r"\[\[(?P<reference>{DATE})(?:\|[^\]]+)?\]\]|{DUE_DATE_MARKER}\s*(?P<due>{DATE})|{START_DATE_MARKER}\s*(?P<start>{DATE})",
    ))
    .expect("date reference pattern must compile");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRole {
    /// A plain mention, or a task start date.
    Reference,
    /// A task due date; drives urgency classification.
    DueDate,
}

/// One recognized date reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateMatch {
    /// Character offset of the first character of the syntax.
    pub start_offset: usize,
    /// Character offset one past the end of the syntax. Labels go here.
    pub end_offset: usize,
    /// Byte range of the syntax, for slicing the scanned `&str`.
    #[serde(skip)]
    pub byte_range: Range<usize>,
    /// The `YYYY-MM-DD` literal as written.
    pub literal_text: String,
    pub date: CalendarDate,
    pub role: DateRole,
}

impl DateMatch {
    pub fn is_due(&self) -> bool {
        self.role == DateRole::DueDate
    }
}

/// Scan `text` for date references, in order of appearance.
pub fn scan(text: &str) -> Vec<DateMatch> {
    let mut matches = Vec::new();
    // Characters in text[..cursor], so offsets are counted incrementally.
    let mut cursor = 0;
    let mut chars_before_cursor = 0;

    for captures in DATE_PATTERN.captures_iter(text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };

        let (literal, role) = if let Some(due) = captures.name("due") {
            (due.as_str(), DateRole::DueDate)
        } else if let Some(reference) = captures
            .name("reference")
            .or_else(|| captures.name("start"))
        {
            (reference.as_str(), DateRole::Reference)
        } else {
            continue;
        };

        let Some(date) = CalendarDate::parse(literal) else {
            debug!(
                literal,
                byte_offset = whole.start(),
                "skipping date reference with invalid date"
            );
            continue;
        };

        let start_offset = chars_before_cursor + text[cursor..whole.start()].chars().count();
        let end_offset = start_offset + whole.as_str().chars().count();
        cursor = whole.end();
        chars_before_cursor = end_offset;

        matches.push(DateMatch {
            start_offset,
            end_offset,
            byte_range: whole.range(),
            literal_text: literal.to_string(),
            date,
            role,
        });
    }

    matches
}
