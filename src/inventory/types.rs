use serde::{Deserialize, Serialize};

/// One physical switch: a stack member or a standalone unit.
///
/// Field order is the column order of every rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub hostname: String,
    pub serial_number: String,
    pub model_number: String,
    pub software_version: String,
    pub software_image: String,
}

impl DeviceRecord {
    pub const FIELD_NAMES: [&'static str; 5] = [
        "hostname",
        "serial_number",
        "model_number",
        "software_version",
        "software_image",
    ];

    /// Field values in `FIELD_NAMES` order.
    pub fn fields(&self) -> [&str; 5] {
        [
            self.hostname.as_str(),
            self.serial_number.as_str(),
            self.model_number.as_str(),
            self.software_version.as_str(),
            self.software_image.as_str(),
        ]
    }
}

/// A row of the `show version` switch table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSoftware {
    pub model_number: String,
    pub software_version: String,
    pub software_image: String,
}

impl ModelSoftware {
    pub fn new(model_number: &str, software_version: &str, software_image: &str) -> Self {
        Self {
            model_number: model_number.to_string(),
            software_version: software_version.to_string(),
            software_image: software_image.to_string(),
        }
    }
}

/// The full text of one show file together with its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowFile {
    pub name: String,
    pub text: String,
}

impl ShowFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}
