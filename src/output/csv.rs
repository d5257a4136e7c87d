use crate::inventory::DeviceRecord;

/// Comma-joined header and rows, newline separated.
///
/// Values are written as-is: no quoting, so a value containing a comma
/// shifts the columns of its row.
pub fn render_csv(records: &[DeviceRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(DeviceRecord::FIELD_NAMES.join(","));
    for record in records {
        lines.push(record.fields().join(","));
    }
    lines.join("\n")
}
