use countdown_core::annotate::Annotation;
use countdown_core::format::UrgencyTier;
use owo_colors::{OwoColorize, Style};

use crate::config::LabelStyle;

/// Terminal style for a label; reference dates are dimmed.
pub fn urgency_style(urgency: Option<UrgencyTier>) -> Style {
    match urgency {
        Some(UrgencyTier::Overdue) => Style::new().red().bold(),
        Some(UrgencyTier::Due) => Style::new().yellow().bold(),
        Some(UrgencyTier::NearlyDue) => Style::new().magenta(),
        Some(UrgencyTier::Future) => Style::new().green(),
        None => Style::new().dimmed(),
    }
}

/// Text inserted after a date reference, leading space included.
pub fn label_text(annotation: &Annotation, style: LabelStyle, color: bool) -> String {
    let wrapped = style.wrap(&annotation.label);
    if color {
        format!(" {}", wrapped.style(urgency_style(annotation.urgency)))
    } else {
        format!(" {wrapped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countdown_core::annotate::annotate;
    use countdown_core::date::CalendarDate;

    #[test]
    fn test_plain_label() {
        let annotations = annotate("📅 2025-06-19", CalendarDate::from_components(2025, 6, 20));
        assert_eq!(
            label_text(&annotations[0], LabelStyle::Brackets, false),
            " [←1 day]"
        );
    }

    #[test]
    fn test_colored_label_keeps_text() {
        let annotations = annotate("📅 2025-06-19", CalendarDate::from_components(2025, 6, 20));
        let colored = label_text(&annotations[0], LabelStyle::Parens, true);
        assert!(colored.contains("(←1 day)"));
        assert!(colored.contains("\u{1b}["));
    }
}
