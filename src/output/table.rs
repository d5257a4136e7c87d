use crate::inventory::DeviceRecord;

const HEADERS: [&str; 5] = [
    "Hostname",
    "Serial Number",
    "Model Number",
    "Software Image",
    "Software Version",
];

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
}

const ALIGNMENT: [Align; 5] = [
    Align::Left,
    Align::Center,
    Align::Left,
    Align::Left,
    Align::Center,
];

// Table column order differs from the record field order: image before version.
fn columns(record: &DeviceRecord) -> [&str; 5] {
    [
        record.hostname.as_str(),
        record.serial_number.as_str(),
        record.model_number.as_str(),
        record.software_image.as_str(),
        record.software_version.as_str(),
    ]
}

/// Each column is as wide as its longest value, and never narrower than its
/// header.
fn column_widths(records: &[DeviceRecord]) -> [usize; 5] {
    let mut widths = HEADERS.map(|header| header.chars().count());
    for record in records {
        for (width, value) in widths.iter_mut().zip(columns(record)) {
            *width = (*width).max(value.chars().count());
        }
    }
    widths
}

fn divider(widths: &[usize; 5]) -> String {
    let cells: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    format!("+-{}-+", cells.join("-+-"))
}

fn row(values: [&str; 5], widths: &[usize; 5]) -> String {
    let cells: Vec<String> = values
        .iter()
        .zip(widths)
        .zip(ALIGNMENT)
        .map(|((value, width), align)| match align {
            Align::Left => format!("{:<width$}", value, width = *width),
            Align::Center => format!("{:^width$}", value, width = *width),
        })
        .collect();
    format!("| {} |", cells.join(" | "))
}

/// Bordered fixed-width table, one line per record.
pub fn render_table(records: &[DeviceRecord]) -> String {
    let widths = column_widths(records);
    let divider = divider(&widths);

    let mut out = String::new();
    out.push_str(&divider);
    out.push('\n');
    out.push_str(&row(HEADERS, &widths));
    out.push('\n');
    out.push_str(&divider);
    out.push('\n');
    for record in records {
        out.push_str(&row(columns(record), &widths));
        out.push('\n');
    }
    out.push_str(&divider);
    out.push('\n');
    out
}
