use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Flag wins; otherwise the config's `output.pretty` decides.
pub const fn resolve_format(flag: Option<OutputFormat>, pretty: bool) -> OutputFormat {
    match flag {
        Some(format) => format,
        None if pretty => OutputFormat::Json,
        None => OutputFormat::Raw,
    }
}
