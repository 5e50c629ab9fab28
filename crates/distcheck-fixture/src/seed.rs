use std::fs;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use distcheck_core::DistributionDescriptor;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub(crate) fn write_seed_distribution(
    path: &Path,
    descriptor: &DistributionDescriptor,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("failed creating seed distribution archive {}", path.display()))?;
    let mut archive = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    archive
        .add_directory(format!("{}/", descriptor.tool_root_dir()), options)
        .with_context(|| {
            format!(
                "failed adding '{}/' entry to {}",
                descriptor.tool_root_dir(),
                path.display()
            )
        })?;
    archive
        .finish()
        .with_context(|| format!("failed finishing seed distribution archive {}", path.display()))?;

    Ok(())
}
