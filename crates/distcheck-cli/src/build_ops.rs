use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

pub(crate) trait BuildRunner {
    fn run_build(&self, project_root: &Path) -> Result<()>;
}

pub(crate) struct GradleBuildRunner {
    program: String,
}

impl GradleBuildRunner {
    pub(crate) fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn base_build_command(&self, project_root: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("build").current_dir(project_root);
        command
    }
}

impl BuildRunner for GradleBuildRunner {
    fn run_build(&self, project_root: &Path) -> Result<()> {
        let output = self
            .base_build_command(project_root)
            .output()
            .with_context(|| {
                format!(
                    "build-failed: failed launching {} build in {}",
                    self.program,
                    project_root.display()
                )
            })?;
        if !output.status.success() {
            anyhow::bail!(
                "build-failed: {} build failed in {}: {}",
                self.program,
                project_root.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}
