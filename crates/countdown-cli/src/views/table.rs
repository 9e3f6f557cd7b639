use comfy_table::{Attribute, Cell, Color, Row, Table};
use countdown_core::annotate::Annotation;
use countdown_core::format::UrgencyTier;
use countdown_core::scanner::DateRole;

use crate::util::line_column;

#[derive(Debug, Clone)]
pub struct ViewAnnotation {
    pub line: usize,
    pub column: usize,
    pub date: String,
    pub role: DateRole,
    pub label: String,
    pub urgency: Option<UrgencyTier>,
}

impl ViewAnnotation {
    pub fn new(text: &str, annotation: &Annotation) -> Self {
        let (line, column) = line_column(text, annotation.date_match.byte_range.start);
        Self {
            line,
            column,
            date: annotation.date_match.literal_text.clone(),
            role: annotation.date_match.role,
            label: annotation.label.clone(),
            urgency: annotation.urgency,
        }
    }
}

pub fn display_annotations(annotations: &[ViewAnnotation]) {
    if annotations.is_empty() {
        println!("No dates found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Position", "Date", "Role", "Label", "Urgency"]);

    for annotation in annotations {
        let mut row = Row::new();
        row.add_cell(Cell::new(format!("{}:{}", annotation.line, annotation.column)));
        row.add_cell(Cell::new(&annotation.date));
        row.add_cell(Cell::new(match annotation.role {
            DateRole::Reference => "reference",
            DateRole::DueDate => "due date",
        }));

        let label_cell = Cell::new(&annotation.label);
        row.add_cell(match annotation.urgency {
            Some(UrgencyTier::Overdue) => label_cell.fg(Color::Red).add_attribute(Attribute::Bold),
            Some(UrgencyTier::Due) => label_cell.fg(Color::Yellow).add_attribute(Attribute::Bold),
            _ => label_cell,
        });

        let urgency_cell = match annotation.urgency {
            Some(tier) => {
                let cell = Cell::new(tier.as_str());
                match tier {
                    UrgencyTier::Overdue => cell.fg(Color::Red),
                    UrgencyTier::Due => cell.fg(Color::Yellow),
                    UrgencyTier::NearlyDue => cell.fg(Color::Magenta),
                    UrgencyTier::Future => cell.fg(Color::Green),
                }
            }
            None => Cell::new("-").fg(Color::DarkGrey),
        };
        row.add_cell(urgency_cell);

        table.add_row(row);
    }

    println!("{table}");
}
