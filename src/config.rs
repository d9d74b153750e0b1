// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generator configuration.
//!
//! Without a config file the historical layout is used: country artwork in
//! `all/`, state artwork in `states/`, output in `dist/`. A YAML file can
//! replace any of it; relative paths in the file are taken relative to the
//! file's own directory.

use crate::region::DatasetKind;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ASSET_FILE: &str = "vector.svg";
pub const DEFAULT_MODULE_FILE: &str = "index.tsx";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatasetConfig {
    /// Also the name of the dataset's output subdirectory.
    pub name: String,
    pub kind: DatasetKind,
    /// Directory holding one two-letter folder per region.
    pub input_dir: PathBuf,
    /// Reference JSON for code lookups.
    pub reference: PathBuf,
    /// Exported component name.
    pub component: String,
    pub symbol_prefix: String,
    #[serde(default = "default_asset_file")]
    pub asset_file: String,
    #[serde(default = "default_module_file")]
    pub module_file: String,
}

fn default_asset_file() -> String {
    DEFAULT_ASSET_FILE.to_string()
}

fn default_module_file() -> String {
    DEFAULT_MODULE_FILE.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_datasets() -> Vec<DatasetConfig> {
    vec![
        DatasetConfig {
            name: "countries".to_string(),
            kind: DatasetKind::Countries,
            input_dir: PathBuf::from("all"),
            reference: PathBuf::from("all-countries.json"),
            component: "CountryMapIcon".to_string(),
            symbol_prefix: "Country".to_string(),
            asset_file: default_asset_file(),
            module_file: default_module_file(),
        },
        DatasetConfig {
            name: "states".to_string(),
            kind: DatasetKind::States,
            input_dir: PathBuf::from("states"),
            reference: PathBuf::from("us-states.json"),
            component: "StateMapIcon".to_string(),
            symbol_prefix: "State".to_string(),
            asset_file: default_asset_file(),
            module_file: default_module_file(),
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_datasets")]
    pub datasets: Vec<DatasetConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            datasets: default_datasets(),
        }
    }
}

impl GeneratorConfig {
    /// Load a YAML config and rebase its relative paths onto the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let mut config = Self::from_yaml(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Prefix every relative path with `base`.
    pub fn rebase(&mut self, base: &Path) {
        let join = |p: &Path| {
            if p.is_relative() {
                base.join(p)
            } else {
                p.to_path_buf()
            }
        };
        self.output_dir = join(self.output_dir.as_path());
        for dataset in &mut self.datasets {
            dataset.input_dir = join(dataset.input_dir.as_path());
            dataset.reference = join(dataset.reference.as_path());
        }
    }

    pub fn dataset(&self, name: &str) -> Option<&DatasetConfig> {
        self.datasets.iter().find(|d| d.name == name)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for dataset in &self.datasets {
            let plain = !dataset.name.is_empty()
                && dataset
                    .name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
            if !plain {
                bail!("dataset name '{}' must be a plain directory name", dataset.name);
            }
            if !seen.insert(dataset.name.as_str()) {
                bail!("dataset '{}' is configured twice", dataset.name);
            }
            if dataset.component.is_empty() {
                bail!("dataset '{}' has an empty component name", dataset.name);
            }
        }
        Ok(())
    }
}
