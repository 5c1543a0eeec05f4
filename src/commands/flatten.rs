//! Flatten command implementation

use crate::cli::FlattenArgs;
use crate::config::Config;
use crate::error::Result;
use crate::mapper::{
    format_json, format_text, ColumnDecorator, DisplayRow, JsonFileSource, TextOptions,
    TreeMapper,
};

/// Settings for one run, CLI flags layered over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenSettings {
    pub spacer: String,
    pub branch: String,
    pub columns: Vec<String>,
    pub json: bool,
    pub pretty: bool,
    pub raw: bool,
    pub show_ids: bool,
}

impl FlattenSettings {
    pub fn resolve(args: &FlattenArgs, config: &Config) -> Self {
        Self {
            spacer: args
                .spacer
                .clone()
                .unwrap_or_else(|| config.padding.spacer.clone()),
            branch: args
                .branch
                .clone()
                .unwrap_or_else(|| config.padding.branch.clone()),
            columns: args
                .columns
                .clone()
                .unwrap_or_else(|| config.output.columns.clone()),
            json: args.json || config.output.format == "json",
            pretty: config.output.pretty,
            raw: args.raw || config.output.raw,
            show_ids: !args.no_ids,
        }
    }
}

/// Load, flatten and render a tree file
pub fn render(args: &FlattenArgs, config: &Config) -> Result<String> {
    let settings = FlattenSettings::resolve(args, config);
    let rows = flatten_file(args, &settings)?;

    if settings.json {
        format_json(&rows, settings.pretty)
    } else {
        let options = TextOptions::new()
            .with_raw(settings.raw)
            .with_ids(settings.show_ids)
            .with_extra(!settings.columns.is_empty());
        Ok(format_text(&rows, &options))
    }
}

fn flatten_file(args: &FlattenArgs, settings: &FlattenSettings) -> Result<Vec<DisplayRow>> {
    tracing::info!(path = %args.path.display(), "Flattening tree");

    let mapper = TreeMapper::new(JsonFileSource::new(&args.path));
    let decorator = ColumnDecorator::new(settings.columns.iter().cloned());

    mapper.run(&settings.spacer, &settings.branch, &decorator)
}

/// Run the flatten command
pub fn run(args: FlattenArgs, config: &Config) -> Result<()> {
    let output = render(&args, config)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
