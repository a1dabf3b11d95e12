use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::convert::ConvertConfig;
use crate::resample::Interpolation;

/// On-disk job settings. Every field is optional; present fields override the
/// built-in defaults and are in turn overridden by command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wav: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interp: Option<String>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Settings> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("invalid settings file {}", path.display()))
    }

    pub fn apply(&self, config: &mut ConvertConfig) -> Result<()> {
        if let Some(wav) = &self.wav {
            config.wav_path = wav.clone();
        }
        if let Some(out) = &self.out {
            config.output_path = out.clone();
        }
        if let Some(name) = &self.name {
            config.array_name = name.clone();
        }
        if let Some(interp) = &self.interp {
            config.interpolation = interp.parse::<Interpolation>()?;
        }
        Ok(())
    }
}
