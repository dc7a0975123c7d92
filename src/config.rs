use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub aws: AwsConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Overrides for the ambient AWS SDK environment. Unset fields defer to it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AwsConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// Default sort key when `--sort-by-mem` is not given.
    #[serde(default)]
    pub sort_by_mem: bool,
}

impl AppConfig {
    /// Load from `path` when given; defaults otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let s = std::fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;
                Self::load_from_str(&s)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if let Some(region) = &self.aws.region {
            anyhow::ensure!(!region.trim().is_empty(), "aws.region must be non-empty");
        }
        if let Some(profile) = &self.aws.profile {
            anyhow::ensure!(
                !profile.trim().is_empty(),
                "aws.profile must be non-empty"
            );
        }
        Ok(())
    }
}
