use anyhow::Result;
use countdown_core::annotate::{annotate_with, AnnotateOptions, Annotation};
use tracing::info;

use crate::cli::ListCommand;
use crate::config::Config;
use crate::util::{read_input, resolve_today};
use crate::views::table::{display_annotations, ViewAnnotation};

pub fn list_dates(command: ListCommand, config: &Config) -> Result<()> {
    let text = read_input(command.file.as_deref())?;
    let today = resolve_today(command.today.as_deref(), config)?;

    let options = AnnotateOptions {
        nearly_due_days: config.nearly_due_days,
    };
    let annotations: Vec<Annotation> = annotate_with(&text, today, &options)
        .into_iter()
        .filter(|annotation| {
            command
                .urgency
                .map_or(true, |tier| annotation.urgency == Some(tier))
        })
        .collect();
    info!(count = annotations.len(), %today, "listing date references");

    if command.json {
        println!("{}", serde_json::to_string_pretty(&annotations)?);
        return Ok(());
    }

    let view_annotations: Vec<ViewAnnotation> = annotations
        .iter()
        .map(|annotation| ViewAnnotation::new(&text, annotation))
        .collect();

    display_annotations(&view_annotations);

    Ok(())
}
