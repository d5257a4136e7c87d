use std::path::Path;

use tracing::{debug, info};

use crate::error::{ClerkError, CollateError, ExtractError};
use crate::inventory::source::read_show_files;
use crate::inventory::types::{DeviceRecord, ShowFile};
use crate::inventory::{align, extract_hostname, extract_model_software, extract_serial_numbers};

/// Device records for a single show file.
pub fn parse_show_file(text: &str) -> Result<Vec<DeviceRecord>, ExtractError> {
    let hostname = extract_hostname(text)?;
    let serial_numbers = extract_serial_numbers(text);
    let model_software = extract_model_software(text);

    debug!(
        hostname = %hostname,
        serial_numbers = serial_numbers.len(),
        model_software = model_software.len(),
        "extracted show file fields"
    );

    align(&hostname, &serial_numbers, &model_software)
}

/// Concatenates the records of every file, in the order given.
///
/// `files` must already be sorted by name. The first file that fails to parse
/// aborts the run; no partial inventory is returned.
pub fn collate(files: &[ShowFile]) -> Result<Vec<DeviceRecord>, CollateError> {
    let mut records = Vec::new();

    for file in files {
        let mut file_records = parse_show_file(&file.text).map_err(|source| CollateError {
            file: file.name.clone(),
            source,
        })?;
        debug!(file = %file.name, records = file_records.len(), "collated show file");
        records.append(&mut file_records);
    }

    Ok(records)
}

/// Reads every show file in `directory` and collates them.
pub fn collect_inventory(directory: &Path) -> Result<Vec<DeviceRecord>, ClerkError> {
    let files = read_show_files(directory)?;
    let records = collate(&files)?;
    info!(
        directory = %directory.display(),
        files = files.len(),
        devices = records.len(),
        "collated inventory"
    );
    Ok(records)
}
