//! Implementation of the `deploygo list` command.

use deploygo_core::application::{TemplateInfo, TemplateService};

use crate::{
    cli::{ListArgs, ListFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let templates = TemplateService::new().list()?;

    match args.format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for line in table_lines(&templates) {
                output.print(&line)?;
            }
        }
        ListFormat::Json => {
            // JSON must stay parseable in pipes, so it bypasses --quiet.
            let json = serde_json::to_string_pretty(&templates).map_err(|e| {
                CliError::IoError {
                    message: "failed to serialise template list".into(),
                    source: e.into(),
                }
            })?;
            output.data(&json)?;
        }
    }

    Ok(())
}

fn table_lines(templates: &[TemplateInfo]) -> Vec<String> {
    let width = templates
        .iter()
        .map(|t| t.selector.len())
        .max()
        .unwrap_or_default();

    let mut lines = Vec::with_capacity(templates.len() * 2);
    for t in templates {
        lines.push(format!(
            "  {:<width$}  {} ({})",
            t.selector, t.description, t.language
        ));
        lines.push(format!("  {:<width$}  files: {}", "", t.files.join(", ")));
    }
    lines
}
