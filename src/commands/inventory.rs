use std::path::Path;

use tracing::info;

use cisco_clerk::config::ClerkConfig;
use cisco_clerk::error::CollateError;
use cisco_clerk::inventory::{collect_inventory, parse_show_file, read_show_file};
use cisco_clerk::output::output_data;

pub fn handle_inventory_command(
    directory: &Path,
    format: Option<&str>,
    config: &ClerkConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = format.unwrap_or(config.default_format.as_str());
    let records = collect_inventory(directory)?;
    output_data(&records, format)?;
    Ok(())
}

pub fn handle_parse_command(
    file: &Path,
    format: Option<&str>,
    config: &ClerkConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = format.unwrap_or(config.default_format.as_str());
    let text = read_show_file(file)?;

    let records = parse_show_file(&text).map_err(|source| CollateError {
        file: file.display().to_string(),
        source,
    })?;
    info!(file = %file.display(), devices = records.len(), "parsed show file");

    output_data(&records, format)?;
    Ok(())
}
