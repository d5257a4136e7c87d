use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::ClerkError;
use crate::inventory::DeviceRecord;
use crate::output::csv::render_csv;

/// `INVENTORY-2024-01-31-235959.csv`
pub fn inventory_file_name(timestamp: DateTime<Utc>) -> String {
    format!("INVENTORY-{}.csv", timestamp.format("%Y-%m-%d-%H%M%S"))
}

/// Writes the csv inventory into `directory`, named after `timestamp`.
///
/// Never overwrites: an existing file of the same name is an error.
pub fn save_csv_inventory(
    records: &[DeviceRecord],
    directory: &Path,
    timestamp: DateTime<Utc>,
) -> Result<PathBuf, ClerkError> {
    let path = directory.join(inventory_file_name(timestamp));
    let io_err = |source: std::io::Error| ClerkError::Io {
        path: path.clone(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(io_err)?;

    let mut content = render_csv(records);
    content.push('\n');
    file.write_all(content.as_bytes()).map_err(io_err)?;

    Ok(path)
}
