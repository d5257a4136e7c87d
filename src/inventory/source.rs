use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::ClerkError;
use crate::inventory::types::ShowFile;

/// Reads every show file directly inside `directory`, sorted by file name.
///
/// Hidden entries and sub-directories are skipped. Symlinks are read through,
/// and a dangling one fails the whole read, as does a file that is not UTF-8
/// text.
pub fn read_show_files(directory: &Path) -> Result<Vec<ShowFile>, ClerkError> {
    if !directory.is_dir() {
        return Err(ClerkError::NotADirectory(directory.to_path_buf()));
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();

        if name.starts_with('.') {
            debug!(entry = %name, "skipping hidden entry");
            continue;
        }
        if !entry.file_type().is_file() {
            warn!(entry = %name, "skipping non-file entry");
            continue;
        }

        let text = read_show_file(entry.path())?;
        files.push(ShowFile::new(name, text));
    }

    // walkdir sorts by OsStr; re-sort on the names the records will carry
    files.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(directory = %directory.display(), files = files.len(), "read show files");
    Ok(files)
}

/// Text of one show file; invalid UTF-8 is `MalformedInput`, not `Io`.
pub fn read_show_file(path: &Path) -> Result<String, ClerkError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::InvalidData {
            ClerkError::MalformedInput {
                path: path.to_path_buf(),
            }
        } else {
            ClerkError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
