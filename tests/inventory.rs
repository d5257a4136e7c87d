//! Collation of the show files in `tests/data`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use cisco_clerk::inventory::{read_show_files, ShowFile};
use cisco_clerk::output::{render, render_csv, save_csv_inventory};
use cisco_clerk::{collate, collect_inventory, parse_show_file, ClerkError, DeviceRecord, ExtractError};
use tempfile::TempDir;

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn record(hostname: &str, serial: &str, model: &str, version: &str, image: &str) -> DeviceRecord {
    DeviceRecord {
        hostname: hostname.to_string(),
        serial_number: serial.to_string(),
        model_number: model.to_string(),
        software_version: version.to_string(),
        software_image: image.to_string(),
    }
}

fn expected_inventory() -> Vec<DeviceRecord> {
    vec![
        record("elizabeth_cotton", "ANC1111A1AB", "WS-C2960C-8PC-L", "15.0(2)SE5", "C2960c405-UNIVERSALK9-M"),
        record("howlin_wolf", "ABC2222A2AB", "WS-C2960C-8PC-L", "15.0(2)SE5", "C2960c405-UNIVERSALK9-M"),
        record("lightning_hopkins", "ABC3333A33A", "WS-C2960X-48FPD-L", "15.0(2)EX5", "C2960X-UNIVERSALK9-M"),
        record("lightning_hopkins", "ABC4444A44A", "WS-C2960X-48FPD-L", "15.0(2)EX5", "C2960X-UNIVERSALK9-M"),
        record("lightning_hopkins", "ABC5555A555", "WS-C2960X-24PD-L", "15.0(2)EX5", "C2960X-UNIVERSALK9-M"),
        record("sister_rosetta_tharpe", "ABC6666A6AB", "WS-C3650-24TD", "03.03.03SE", "cat3k_caa-universalk9"),
    ]
}

#[test]
fn test_collect_inventory_from_directory() {
    let records = collect_inventory(&data_dir()).unwrap();
    assert_eq!(records, expected_inventory());
}

#[test]
fn test_collate_is_concatenation_of_files() {
    let files = read_show_files(&data_dir()).unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "elizabeth_cotton.txt",
            "howlin_wolf.txt",
            "lightning_hopkins.txt",
            "sister_rosetta_tharpe.txt",
        ]
    );

    let per_file: Vec<DeviceRecord> = files
        .iter()
        .flat_map(|f| parse_show_file(&f.text).unwrap())
        .collect();
    assert_eq!(collate(&files).unwrap(), per_file);

    // splitting the file list anywhere gives the same concatenation
    let (head, tail) = files.split_at(2);
    let mut joined = collate(head).unwrap();
    joined.extend(collate(tail).unwrap());
    assert_eq!(joined, per_file);
}

#[test]
fn test_stack_shares_hostname() {
    let text = fs::read_to_string(data_dir().join("lightning_hopkins.txt")).unwrap();
    let records = parse_show_file(&text).unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.hostname == "lightning_hopkins"));
    assert_eq!(records[2].model_number, "WS-C2960X-24PD-L");
}

#[test]
fn test_failing_file_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    for name in ["elizabeth_cotton.txt", "howlin_wolf.txt"] {
        fs::copy(data_dir().join(name), dir.path().join(name)).unwrap();
    }
    fs::write(
        dir.path().join("broken_stack.txt"),
        "broken_stack#sh ver\n\
         System serial number : ABC1111A1AA\n\
         System serial number : ABC2222A2AA\n\
         *    1 10    WS-C2960C-8PC-L    15.0(2)SE5            C2960c405-UNIVERSALK9-M\n",
    )
    .unwrap();

    match collect_inventory(dir.path()) {
        Err(ClerkError::Collate(err)) => {
            assert_eq!(err.file, "broken_stack.txt");
            assert_eq!(
                err.source,
                ExtractError::Alignment {
                    serial_numbers: 2,
                    model_software: 1,
                }
            );
        }
        other => panic!("expected collate error, got {other:?}"),
    }
}

#[test]
fn test_missing_hostname_names_file() {
    let files = vec![ShowFile::new("no_prompt.txt", "System serial number : ABC1\n")];
    let err = collate(&files).unwrap_err();
    assert_eq!(err.to_string(), format!("no_prompt.txt: {}", ExtractError::NotFound));
}

#[test]
fn test_export_round_trip() {
    let records = collect_inventory(&data_dir()).unwrap();
    let out = TempDir::new().unwrap();
    let timestamp = Utc.with_ymd_and_hms(2017, 11, 30, 23, 59, 1).unwrap();

    let path = save_csv_inventory(&records, out.path(), timestamp).unwrap();
    assert_eq!(path.file_name().unwrap(), "INVENTORY-2017-11-30-235901.csv");

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.trim_end(), render_csv(&records));

    let mut lines = content.lines();
    assert_eq!(lines.next().unwrap().split(',').collect::<Vec<_>>(), DeviceRecord::FIELD_NAMES);
    let reparsed: Vec<DeviceRecord> = lines
        .map(|line| {
            let f: Vec<&str> = line.split(',').collect();
            record(f[0], f[1], f[2], f[3], f[4])
        })
        .collect();
    assert_eq!(reparsed, records);
}

#[test]
fn test_render_json_inventory() {
    let records = collect_inventory(&data_dir()).unwrap();
    let json = render(&records, "json").unwrap();
    let parsed: Vec<DeviceRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, records);
}
