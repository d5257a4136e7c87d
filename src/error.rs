use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn one show file into device records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("hostname not found (no `<hostname>#show version` prompt line)")]
    NotFound,
    #[error(
        "cannot align {serial_numbers} serial number(s) with {model_software} model/software row(s)"
    )]
    Alignment {
        serial_numbers: usize,
        model_software: usize,
    },
}

/// The show file that aborted a collation run, and why.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{file}: {source}")]
pub struct CollateError {
    pub file: String,
    #[source]
    pub source: ExtractError,
}

#[derive(Error, Debug)]
pub enum ClerkError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8 text", .path.display())]
    MalformedInput { path: PathBuf },
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error(transparent)]
    Collate(#[from] CollateError),
    #[error("unknown output format `{0}` (expected csv, json, yaml or table)")]
    UnknownFormat(String),
    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("cannot walk directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
