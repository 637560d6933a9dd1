use anyhow::{Context, Result};
use jsonfetch_api::Document;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Compact,
}

pub fn render(doc: &Document, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(doc),
        OutputFormat::Compact => serde_json::to_string(doc),
    };
    text.context("Failed to serialize to JSON")
}

pub fn print_json(doc: &Document, format: OutputFormat) -> Result<()> {
    println!("{}", render(doc, format)?);
    Ok(())
}
