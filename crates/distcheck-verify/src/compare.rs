use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::archive::DistributionArchive;

pub(crate) fn compare_init_d_entries(
    expected_dir: &Path,
    archive: &mut DistributionArchive,
    archive_init_d: &str,
) -> Result<()> {
    let expected = expected_entries(expected_dir)?;
    let actual: BTreeMap<String, bool> = archive
        .child_entries(archive_init_d)?
        .into_iter()
        .map(|entry| (entry.name, entry.is_dir))
        .collect();

    let unmatched: Vec<&str> = expected
        .keys()
        .filter(|key| !actual.contains_key(*key))
        .map(String::as_str)
        .collect();
    let unexpected: Vec<&str> = actual
        .keys()
        .filter(|key| !expected.contains_key(*key))
        .map(String::as_str)
        .collect();
    if !unmatched.is_empty() || !unexpected.is_empty() {
        anyhow::bail!(
            "init-d-mismatch: {} entries under {} differ from {}: unmatched expected [{}], unexpected [{}]",
            archive_init_d,
            archive.path().display(),
            expected_dir.display(),
            unmatched.join(", "),
            unexpected.join(", ")
        );
    }

    for (key, expected_path) in &expected {
        if !expected_path.is_file() {
            continue;
        }

        let expected_text = fs::read_to_string(expected_path).with_context(|| {
            format!(
                "failed reading expected template {}",
                expected_path.display()
            )
        })?;
        let actual_text = archive.read_text(&format!("{archive_init_d}/{key}"))?;
        if actual_text != expected_text {
            anyhow::bail!(
                "content-mismatch: init.d entry '{}' in {} differs from {}",
                key,
                archive.path().display(),
                expected_path.display()
            );
        }
    }

    Ok(())
}

fn expected_entries(expected_dir: &Path) -> Result<BTreeMap<String, PathBuf>> {
    let mut entries = BTreeMap::new();
    if !expected_dir.is_dir() {
        return Ok(entries);
    }

    for entry in fs::read_dir(expected_dir).with_context(|| {
        format!(
            "failed reading expected directory {}",
            expected_dir.display()
        )
    })? {
        let entry = entry?;
        let key = entry.file_name().to_string_lossy().into_owned();
        entries.insert(key, entry.path());
    }
    Ok(entries)
}
