//! Cisco Clerk
//!
//! Extracts device inventory records (hostname, serial number, model number,
//! software version and software image) from a directory of Cisco switch
//! `show` files, and renders them as csv, json, yaml or a fixed-width table.
//!
//! A stacked switch contributes one record per member: every member shares
//! the hostname of the prompt, and is paired with its row of the `show
//! version` switch table by position.

pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod output;

pub use error::{ClerkError, CollateError, ExtractError};
pub use inventory::{collate, collect_inventory, parse_show_file, DeviceRecord, ShowFile};
