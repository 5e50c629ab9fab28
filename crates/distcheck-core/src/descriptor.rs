use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DistributionDescriptor {
    pub gradle_version: String,
    pub distribution_name: String,
    pub distribution_version: String,
}

impl DistributionDescriptor {
    pub fn new(
        gradle_version: impl Into<String>,
        distribution_name: impl Into<String>,
        distribution_version: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let descriptor = Self {
            gradle_version: gradle_version.into(),
            distribution_name: distribution_name.into(),
            distribution_version: distribution_version.into(),
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    pub fn from_toml_str(input: &str) -> anyhow::Result<Self> {
        let descriptor: Self =
            toml::from_str(input).context("failed to parse distribution descriptor")?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        toml::to_string(self).context("failed to serialize distribution descriptor")
    }

    fn validate(&self) -> anyhow::Result<()> {
        validate_name_token("gradle_version", &self.gradle_version)?;
        validate_name_token("distribution_name", &self.distribution_name)?;
        validate_name_token("distribution_version", &self.distribution_version)
    }

    pub fn archive_file_name(&self, variant: Option<&str>) -> String {
        match variant {
            Some(variant) => format!(
                "gradle-{}-{}-{}-{}.zip",
                self.gradle_version, self.distribution_name, self.distribution_version, variant
            ),
            None => format!(
                "gradle-{}-{}-{}.zip",
                self.gradle_version, self.distribution_name, self.distribution_version
            ),
        }
    }

    pub fn download_archive_file_name(&self) -> String {
        format!("gradle-{}-bin.zip", self.gradle_version)
    }

    pub fn tool_root_dir(&self) -> String {
        format!("gradle-{}", self.gradle_version)
    }

    pub fn init_d_dir(&self) -> String {
        format!("gradle-{}/init.d", self.gradle_version)
    }
}

fn validate_name_token(field: &str, value: &str) -> anyhow::Result<()> {
    if value.is_empty() {
        return Err(anyhow!(
            "distribution descriptor field '{field}' must not be empty"
        ));
    }
    if value
        .chars()
        .any(|ch| ch.is_whitespace() || ch == '/' || ch == '\\' || ch.is_control())
    {
        return Err(anyhow!(
            "distribution descriptor field '{field}' must not contain whitespace or path separators: '{value}'"
        ));
    }

    Ok(())
}
