// Show file parsing and inventory collation
pub mod types;
pub mod patterns;
pub mod ordered_set;
pub mod extract_hostname;
pub mod extract_serial;
pub mod extract_model_sw;
pub mod align;
pub mod source;
pub mod collator;

// Re-export main entry points
pub use types::{DeviceRecord, ModelSoftware, ShowFile};
pub use ordered_set::OrderedSet;
pub use extract_hostname::extract_hostname;
pub use extract_serial::extract_serial_numbers;
pub use extract_model_sw::extract_model_software;
pub use align::align;
pub use source::{read_show_file, read_show_files};
pub use collator::{collate, collect_inventory, parse_show_file};
