use crate::error::CommonResult;
use crate::filesystem::FileSystem;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_NAME: &str = "xyfy.config.json";

/// What the flattener does when it meets a `null` raw child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullChildPolicy {
    /// `null` is an ordinary child and passes through unchanged
    #[default]
    Preserve,
    /// `null` children abort the invocation with an error
    Reject,
}

/// Factory configuration file format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactoryConfig {
    #[serde(default)]
    pub null_children: NullChildPolicy,
}

impl FactoryConfig {
    pub fn from_json(source: &str) -> CommonResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load config from a directory, or the default when none exists
    pub fn load(fs: &impl FileSystem, dir: &Path) -> CommonResult<Self> {
        let config_path = dir.join(DEFAULT_CONFIG_NAME);

        if fs.exists(&config_path) {
            let content = fs.read_to_string(&config_path)?;
            Self::from_json(&content)
        } else {
            Ok(Self::default())
        }
    }
}
