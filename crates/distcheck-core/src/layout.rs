use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::descriptor::DistributionDescriptor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.root.join("src").join("main").join("resources")
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.root.join("distribution.toml")
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root.join("build")
    }

    pub fn download_dir(&self) -> PathBuf {
        self.build_dir().join("download")
    }

    pub fn download_archive_path(&self, descriptor: &DistributionDescriptor) -> PathBuf {
        self.download_dir()
            .join(descriptor.download_archive_file_name())
    }

    pub fn distributions_dir(&self) -> PathBuf {
        self.build_dir().join("distributions")
    }

    pub fn distribution_archive_path(
        &self,
        descriptor: &DistributionDescriptor,
        variant: Option<&str>,
    ) -> PathBuf {
        self.distributions_dir()
            .join(descriptor.archive_file_name(variant))
    }

    pub fn ensure_base_dirs(&self) -> Result<()> {
        for dir in [self.resources_dir(), self.download_dir()] {
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        Ok(())
    }
}
