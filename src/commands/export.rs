use std::path::Path;

use chrono::Utc;
use tracing::info;

use cisco_clerk::config::ClerkConfig;
use cisco_clerk::inventory::collect_inventory;
use cisco_clerk::output::{print_success, save_csv_inventory};

/// Collates first and only then writes, so a failing show file never leaves
/// a partial csv behind.
pub fn handle_export_command(
    directory: &Path,
    output_dir: Option<&Path>,
    config: &ClerkConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = collect_inventory(directory)?;

    let target = config.export_dir(output_dir);
    let path = save_csv_inventory(&records, &target, Utc::now())?;
    info!(path = %path.display(), devices = records.len(), "saved inventory");

    print_success(&format!(
        "Saved {} device record(s) to {}",
        records.len(),
        path.display()
    ));
    Ok(())
}
