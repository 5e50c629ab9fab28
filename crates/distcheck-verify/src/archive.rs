use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use zip::ZipArchive;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub is_dir: bool,
}

#[derive(Debug)]
pub struct DistributionArchive {
    path: PathBuf,
    archive: ZipArchive<File>,
}

impl DistributionArchive {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            anyhow::bail!(
                "archive-missing: expected distribution archive at {}",
                path.display()
            );
        }

        let file = File::open(path)
            .with_context(|| format!("failed opening distribution archive {}", path.display()))?;
        let archive = ZipArchive::new(file)
            .with_context(|| format!("failed reading distribution archive {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn child_entries(&self, dir: &str) -> Result<Vec<ArchiveEntry>> {
        let prefix = normalized_dir_prefix(dir);
        let mut children: BTreeMap<String, bool> = BTreeMap::new();

        for name in self.archive.file_names() {
            let Some(remainder) = name.strip_prefix(&prefix) else {
                continue;
            };
            if remainder.is_empty() {
                continue;
            }
            match remainder.split_once('/') {
                Some((child, _)) => {
                    children.insert(child.to_string(), true);
                }
                None => {
                    children.entry(remainder.to_string()).or_insert(false);
                }
            }
        }

        Ok(children
            .into_iter()
            .map(|(name, is_dir)| ArchiveEntry { name, is_dir })
            .collect())
    }

    pub fn read_text(&mut self, entry_path: &str) -> Result<String> {
        let mut entry = self.archive.by_name(entry_path).with_context(|| {
            format!(
                "failed locating archive entry '{}' in {}",
                entry_path,
                self.path.display()
            )
        })?;

        let mut text = String::new();
        entry.read_to_string(&mut text).with_context(|| {
            format!(
                "failed reading archive entry '{}' from {}",
                entry_path,
                self.path.display()
            )
        })?;
        Ok(text)
    }
}

fn normalized_dir_prefix(dir: &str) -> String {
    let trimmed = dir.trim_end_matches('/');
    format!("{trimmed}/")
}
