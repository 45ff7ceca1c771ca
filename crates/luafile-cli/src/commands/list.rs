//! Implementation of the `luafile list` command.

use luafile_core::application::{SharedSettings, TemplateInfo, TemplateService};

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = TemplateService::new(SharedSettings::new(config.settings()));
    let templates = service.list()?;

    // `--output-format json` wins over `--format`
    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for line in table_rows(&templates) {
                output.print(&line)?;
            }
        }
        ListFormat::Json => {
            output.json(&templates)?;
        }
        ListFormat::List => {
            for t in &templates {
                output.print(t.id.as_str())?;
            }
        }
        ListFormat::Csv => {
            output.print("id,kind,default_name,enabled")?;
            for t in &templates {
                output.print(&format!(
                    "{},{},{},{}",
                    t.id, t.kind, t.default_name, t.enabled
                ))?;
            }
        }
    }

    Ok(())
}

fn table_rows(templates: &[TemplateInfo]) -> Vec<String> {
    templates
        .iter()
        .map(|t| {
            let state = if t.enabled { "" } else { "  (disabled)" };
            format!(
                "  {:<16} {:<24} {}{}",
                t.id.as_str(),
                t.default_name,
                t.description,
                state
            )
        })
        .collect()
}
