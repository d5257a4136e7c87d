pub mod csv;
pub mod table;
pub mod save;

pub use csv::render_csv;
pub use table::render_table;
pub use save::{inventory_file_name, save_csv_inventory};

use crate::error::ClerkError;
use crate::inventory::DeviceRecord;

/// Renders `records` in the named format: csv, json, yaml or table.
pub fn render(records: &[DeviceRecord], format: &str) -> Result<String, ClerkError> {
    let rendered = match format {
        "csv" => render_csv(records),
        "json" => serde_json::to_string_pretty(records)?,
        "yaml" => serde_yaml::to_string(records)?,
        "table" => render_table(records),
        other => return Err(ClerkError::UnknownFormat(other.to_string())),
    };
    Ok(rendered)
}

pub fn output_data(records: &[DeviceRecord], format: &str) -> Result<(), ClerkError> {
    let rendered = render(records, format)?;
    println!("{}", rendered.trim_end_matches('\n'));
    Ok(())
}

pub fn print_success(message: &str) {
    println!("✅ {}", message);
}

pub fn print_error(message: &str) {
    eprintln!("\x1b[31m❌ Error: {}\x1b[0m", message);
}
