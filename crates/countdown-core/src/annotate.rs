//! One rendering pass: scanned matches paired with their countdown labels.
//!
//! Editors re-annotate on every keystroke. [`reconcile`] tells an adapter which
//! labels from the previous pass can stay on screen and which must be redrawn,
//! keyed by the end offset the label is anchored at.

use std::collections::HashMap;

use serde::Serialize;

use crate::date::CalendarDate;
use crate::format::{
    classify_due_date_within, format_duration, UrgencyTier, NEARLY_DUE_WINDOW_DAYS,
};
use crate::scanner::{scan, DateMatch};

/// A date reference with the label to show after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    #[serde(flatten)]
    pub date_match: DateMatch,
    pub label: String,
    /// Only set for due dates.
    pub urgency: Option<UrgencyTier>,
}

impl Annotation {
    pub fn end_offset(&self) -> usize {
        self.date_match.end_offset
    }

    fn renders_like(&self, other: &Annotation) -> bool {
        self.label == other.label && self.urgency == other.urgency
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotateOptions {
    pub nearly_due_days: u32,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            nearly_due_days: NEARLY_DUE_WINDOW_DAYS,
        }
    }
}

/// Scan `text` and label every match relative to `today`.
pub fn annotate(text: &str, today: CalendarDate) -> Vec<Annotation> {
    annotate_with(text, today, &AnnotateOptions::default())
}

pub fn annotate_with(
    text: &str,
    today: CalendarDate,
    options: &AnnotateOptions,
) -> Vec<Annotation> {
    scan(text)
        .into_iter()
        .map(|date_match| {
            let label = format_duration(date_match.date, today);
            let urgency = date_match
                .is_due()
                .then(|| classify_due_date_within(date_match.date, today, options.nearly_due_days));
            Annotation {
                date_match,
                label,
                urgency,
            }
        })
        .collect()
}

/// Copy of `text` with ` (label)` inserted after each annotated syntax.
///
/// `annotations` must come from scanning this same `text`.
pub fn render(text: &str, annotations: &[Annotation]) -> String {
    render_with(text, annotations, |annotation| format!(" ({})", annotation.label))
}

/// Like [`render`], with the inserted text produced by `decorate`.
pub fn render_with<F>(text: &str, annotations: &[Annotation], mut decorate: F) -> String
where
    F: FnMut(&Annotation) -> String,
{
    let mut rendered = String::with_capacity(text.len() + annotations.len() * 16);
    let mut cursor = 0;

    for annotation in annotations {
        let end = annotation.date_match.byte_range.end;
        let Some(chunk) = text.get(cursor..end) else {
            continue;
        };
        rendered.push_str(chunk);
        rendered.push_str(&decorate(annotation));
        cursor = end;
    }
    rendered.push_str(text.get(cursor..).unwrap_or_default());

    rendered
}

/// Outcome of reconciling a new pass against the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// The new pass's annotations, in scan order. Positions always refer to the
    /// new text.
    pub annotations: Vec<Annotation>,
    /// Labels whose anchor, text and urgency are unchanged.
    pub reused: usize,
    /// New or changed since the previous pass.
    pub rebuilt: usize,
    /// End offsets of the rebuilt annotations, in scan order.
    pub redraw: Vec<usize>,
    /// End offsets of previous annotations with no counterpart now.
    pub stale: Vec<usize>,
}

/// Compare a new pass against the previous one.
///
/// A previous label is reused when one in the new pass has the same end
/// offset, label and urgency. Only that decision carries over: the returned
/// annotations are always the ones from `next`, since the text before an
/// anchor may have changed width without moving it.
pub fn reconcile(previous: Vec<Annotation>, next: Vec<Annotation>) -> Reconciliation {
    let mut by_end: HashMap<usize, Annotation> = previous
        .into_iter()
        .map(|annotation| (annotation.end_offset(), annotation))
        .collect();

    let mut reused = 0;
    let mut redraw = Vec::new();

    for annotation in &next {
        match by_end.remove(&annotation.end_offset()) {
            Some(existing) if existing.renders_like(annotation) => reused += 1,
            _ => redraw.push(annotation.end_offset()),
        }
    }

    let mut stale: Vec<usize> = by_end.into_keys().collect();
    stale.sort_unstable();

    Reconciliation {
        annotations: next,
        reused,
        rebuilt: redraw.len(),
        redraw,
        stale,
    }
}
