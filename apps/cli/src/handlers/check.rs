use crate::args::RecordKind;
use anyhow::{Context, Result, bail};
use fedhub_directory::{validate_group, validate_repository, validate_user};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Validates a JSON array of raw records of a single kind.
pub fn check_records(file: &Path, kind: RecordKind, fail_fast: bool) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let records: Vec<Value> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of records", file.display()))?;

    let mut failures = 0usize;
    for (index, record) in records.iter().enumerate() {
        let verdict = match kind {
            RecordKind::Repository => validate_repository(record).map(drop),
            RecordKind::Group => validate_group(record).map(drop),
            RecordKind::User => validate_user(record).map(drop),
        };
        if let Err(error) = verdict {
            failures += 1;
            println!("record {index}: {error}");
            if fail_fast {
                break;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} invalid record(s) in {}", file.display());
    }

    println!("{} record(s) OK", records.len());
    Ok(())
}
