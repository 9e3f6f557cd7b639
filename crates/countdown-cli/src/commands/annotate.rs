use std::io::IsTerminal;

use anyhow::Result;
use countdown_core::annotate::{annotate_with, render_with, AnnotateOptions};
use tracing::info;

use crate::cli::AnnotateCommand;
use crate::config::Config;
use crate::util::{read_input, resolve_today};
use crate::views::label::label_text;

pub fn annotate_text(command: AnnotateCommand, config: &Config) -> Result<()> {
    let text = read_input(command.file.as_deref())?;
    let today = resolve_today(command.today.as_deref(), config)?;

    let options = AnnotateOptions {
        nearly_due_days: config.nearly_due_days,
    };
    let annotations = annotate_with(&text, today, &options);
    info!(count = annotations.len(), %today, "annotated input");

    let color = config.color && !command.no_color && std::io::stdout().is_terminal();
    let rendered = render_with(&text, &annotations, |annotation| {
        label_text(annotation, config.label_style, color)
    });

    print!("{rendered}");
    Ok(())
}
