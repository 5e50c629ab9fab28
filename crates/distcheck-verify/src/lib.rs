use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use distcheck_core::{DistributionDescriptor, ProjectLayout};

mod archive;
mod compare;


pub use archive::{ArchiveEntry, DistributionArchive};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedDistribution {
    pub variant: Option<String>,
    pub archive_path: PathBuf,
}

pub fn verify_packaged_distributions(
    layout: &ProjectLayout,
    descriptor: &DistributionDescriptor,
    expected_root: &Path,
) -> Result<Vec<VerifiedDistribution>> {
    let variants = expected_variants(expected_root)?;

    if variants.is_empty() {
        require_single_archive(&layout.distributions_dir())?;
        let archive_path = layout.distribution_archive_path(descriptor, None);
        verify_archive(&archive_path, descriptor, expected_root)?;
        return Ok(vec![VerifiedDistribution {
            variant: None,
            archive_path,
        }]);
    }

    let mut verified = Vec::new();
    for variant in variants {
        let archive_path = layout.distribution_archive_path(descriptor, Some(&variant));
        verify_archive(&archive_path, descriptor, &expected_root.join(&variant))?;
        verified.push(VerifiedDistribution {
            variant: Some(variant),
            archive_path,
        });
    }
    Ok(verified)
}

fn verify_archive(
    archive_path: &Path,
    descriptor: &DistributionDescriptor,
    expected_dir: &Path,
) -> Result<()> {
    let mut archive = DistributionArchive::open(archive_path)?;
    compare::compare_init_d_entries(expected_dir, &mut archive, &descriptor.init_d_dir())
}

fn expected_variants(expected_root: &Path) -> Result<Vec<String>> {
    let mut variants = Vec::new();
    if !expected_root.is_dir() {
        return Ok(variants);
    }

    for entry in fs::read_dir(expected_root).with_context(|| {
        format!(
            "failed reading expected directory {}",
            expected_root.display()
        )
    })? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            variants.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    variants.sort();
    Ok(variants)
}

fn require_single_archive(distributions_dir: &Path) -> Result<()> {
    if !distributions_dir.is_dir() {
        anyhow::bail!(
            "distributions-missing: output directory does not exist: {}",
            distributions_dir.display()
        );
    }

    let mut produced = Vec::new();
    for entry in fs::read_dir(distributions_dir).with_context(|| {
        format!(
            "failed reading output directory {}",
            distributions_dir.display()
        )
    })? {
        let entry = entry?;
        produced.push(entry.file_name().to_string_lossy().into_owned());
    }

    if produced.len() != 1 {
        produced.sort();
        anyhow::bail!(
            "distributions-count-mismatch: expected exactly one archive in {}, found {} [{}]",
            distributions_dir.display(),
            produced.len(),
            produced.join(", ")
        );
    }
    Ok(())
}
