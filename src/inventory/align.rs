use tracing::debug;

use crate::error::ExtractError;
use crate::inventory::types::{DeviceRecord, ModelSoftware};

/// Pairs each serial number with the model/software row at the same index.
///
/// One record per serial number, all sharing `hostname`. Fewer rows than
/// serial numbers is an error; surplus rows are dropped.
pub fn align(
    hostname: &str,
    serial_numbers: &[String],
    model_software: &[ModelSoftware],
) -> Result<Vec<DeviceRecord>, ExtractError> {
    if model_software.len() < serial_numbers.len() {
        return Err(ExtractError::Alignment {
            serial_numbers: serial_numbers.len(),
            model_software: model_software.len(),
        });
    }

    if model_software.len() > serial_numbers.len() {
        debug!(
            hostname,
            surplus = model_software.len() - serial_numbers.len(),
            "dropping unmatched model/software rows"
        );
    }

    let records = serial_numbers
        .iter()
        .zip(model_software)
        .map(|(serial_number, row)| DeviceRecord {
            hostname: hostname.to_string(),
            serial_number: serial_number.clone(),
            model_number: row.model_number.clone(),
            software_version: row.software_version.clone(),
            software_image: row.software_image.clone(),
        })
        .collect();

    Ok(records)
}
