pub mod inventory;
pub mod export;

pub use inventory::{handle_inventory_command, handle_parse_command};
pub use export::handle_export_command;
