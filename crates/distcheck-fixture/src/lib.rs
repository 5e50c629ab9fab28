use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use distcheck_core::{DistributionDescriptor, ProjectLayout};

mod fs_ops;
mod seed;

#[cfg(test)]
mod tests;

pub const INPUT_DIR_NAME: &str = "input";
pub const EXPECTED_DIR_NAME: &str = "expected-init.d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFiles {
    pub project_root: PathBuf,
    pub expected_root: PathBuf,
}

#[derive(Debug, Clone)]
pub struct FixtureStore {
    fixtures_root: PathBuf,
}

impl FixtureStore {
    pub fn new(fixtures_root: impl Into<PathBuf>) -> Self {
        Self {
            fixtures_root: fixtures_root.into(),
        }
    }

    pub fn fixtures_root(&self) -> &Path {
        &self.fixtures_root
    }

    pub fn case_dir(&self, case: &str) -> Result<PathBuf> {
        let dir = self.fixtures_root.join(case);
        if !dir.is_dir() {
            anyhow::bail!(
                "fixture-missing: test case '{}' not found under {}",
                case,
                self.fixtures_root.display()
            );
        }
        Ok(dir)
    }

    pub fn list_cases(&self) -> Result<Vec<String>> {
        if !self.fixtures_root.is_dir() {
            anyhow::bail!(
                "fixture-missing: fixtures root does not exist: {}",
                self.fixtures_root.display()
            );
        }

        let mut cases = Vec::new();
        for entry in fs::read_dir(&self.fixtures_root).with_context(|| {
            format!(
                "failed reading fixtures root {}",
                self.fixtures_root.display()
            )
        })? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                cases.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        cases.sort();
        Ok(cases)
    }

    pub fn prepare(&self, case: &str, descriptor: &DistributionDescriptor) -> Result<TestFiles> {
        let case_dir = self.case_dir(case)?;
        let input_dir = case_dir.join(INPUT_DIR_NAME);
        if !input_dir.is_dir() {
            anyhow::bail!(
                "fixture-missing: test case '{}' has no {}/ directory in {}",
                case,
                INPUT_DIR_NAME,
                case_dir.display()
            );
        }

        let project_root = fs_ops::create_project_root(case)?;
        let layout = ProjectLayout::new(&project_root);
        layout.ensure_base_dirs()?;

        fs_ops::copy_fixture_tree(&input_dir, &layout.resources_dir())
            .with_context(|| format!("failed copying fixture input for test case '{case}'"))?;

        let descriptor_text = descriptor.to_toml_string()?;
        fs::write(layout.descriptor_path(), descriptor_text)
            .with_context(|| format!("failed writing {}", layout.descriptor_path().display()))?;

        seed::write_seed_distribution(&layout.download_archive_path(descriptor), descriptor)?;

        Ok(TestFiles {
            project_root,
            expected_root: case_dir.join(EXPECTED_DIR_NAME),
        })
    }
}
