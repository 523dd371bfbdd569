use anyhow::{Context, Result, bail};
use fedhub_directory::{DirectorySnapshot, active_repositories, validate_directory};
use std::fs;
use std::path::Path;

/// Validates a whole directory snapshot, including cross-record checks.
pub fn check_snapshot(file: &Path, strict: bool) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let snapshot: DirectorySnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a directory snapshot", file.display()))?;

    let report = validate_directory(&snapshot);

    for error in &report.errors {
        println!("error: {error}");
    }
    for warning in &report.warnings {
        println!("warning: {warning}");
    }

    let active = active_repositories(&report.repositories).count();
    println!(
        "{} repositories ({active} active), {} groups, {} users",
        report.repositories.len(),
        report.groups.len(),
        report.users.len(),
    );

    if !report.is_ok() {
        bail!("{} validation error(s) in {}", report.errors.len(), file.display());
    }
    if strict && !report.warnings.is_empty() {
        bail!("{} referential warning(s) in strict mode", report.warnings.len());
    }

    println!("snapshot OK");
    Ok(())
}
