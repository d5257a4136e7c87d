use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "clerk")]
#[command(about = "Filing your Cisco inventory records from a folder of `show` files")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a YAML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collate every show file in a directory and print the inventory
    Inventory {
        /// Directory containing the show files
        directory: PathBuf,

        /// Output format (csv, json, yaml, or table)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Extract the device records of a single show file
    Parse {
        /// Show file to parse
        file: PathBuf,

        /// Output format (csv, json, yaml, or table)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Collate a directory and save it as INVENTORY-<timestamp>.csv
    Export {
        /// Directory containing the show files
        directory: PathBuf,

        /// Directory to write the csv file to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}
