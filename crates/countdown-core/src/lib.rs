//! # Countdown Core Library
//!
//! Pure logic behind inline date countdowns in note documents: find date
//! references in text, measure how far away they are in calendar terms, and
//! classify task due dates by urgency.
//!
//! ## Core Modules
//!
//! - [`date`]: Timezone-free civil dates and Gregorian arithmetic
//! - [`scanner`]: Recognizes `[[YYYY-MM-DD]]` links and task date markers
//! - [`format`]: Countdown labels and due-date urgency tiers
//! - [`annotate`]: Labelled rendering passes and reconciliation between passes
//! - [`error`]: Error types for parsing at API boundaries
//!
//! ## Example Usage
//!
//! ```rust
//! use countdown_core::{annotate, render, CalendarDate, UrgencyTier};
//!
//! let text = "- [ ] Submit report 📅 2025-06-22, see [[2025-07-20|review]]";
//! let today = CalendarDate::from_components(2025, 6, 20);
//!
//! let annotations = annotate(text, today);
//! assert_eq!(annotations[0].urgency, Some(UrgencyTier::NearlyDue));
//! assert_eq!(
//!     render(text, &annotations),
//!     "- [ ] Submit report 📅 2025-06-22 (2 days), see [[2025-07-20|review]] (1 month)"
//! );
//! ```

pub mod annotate;
pub mod date;
pub mod error;
pub mod format;
pub mod scanner;

pub use annotate::{
    annotate, annotate_with, reconcile, render, AnnotateOptions, Annotation, Reconciliation,
};
pub use date::CalendarDate;
pub use error::CoreError;
pub use format::{calendar_gap, classify_due_date, format_duration, CalendarGap, UrgencyTier};
pub use scanner::{scan, DateMatch, DateRole};
