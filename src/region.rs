// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reference datasets and folder-code resolution.
//!
//! Two dataset shapes are understood:
//!
//! - **countries**: the ISO-3166 "all" JSON array, one object per country with
//!   `name`, `alpha-2` and assorted metadata. Every folder must resolve.
//! - **states**: a JSON object of upper-case abbreviation to full name. The
//!   input tree may contain folders the table does not know; those are skipped.

use crate::error::GenerateError;
use crate::overrides::name_override;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Countries,
    States,
}

/// What to do with a folder whose code is not in the reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    Abort,
    Skip,
}

impl DatasetKind {
    pub fn missing_policy(self) -> MissingPolicy {
        match self {
            DatasetKind::Countries => MissingPolicy::Abort,
            DatasetKind::States => MissingPolicy::Skip,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DatasetKind::Countries => "countries",
            DatasetKind::States => "states",
        }
    }
}

/// Canonical record for one input folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionRecord {
    /// Folder code as found on disk.
    pub code: String,
    pub display_name: String,
    pub override_name: Option<String>,
}

impl RegionRecord {
    /// Name every derivation works from.
    pub fn name(&self) -> &str {
        self.override_name.as_deref().unwrap_or(&self.display_name)
    }
}

/// One row of the ISO-3166 country dataset; other columns are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryEntry {
    pub name: String,
    #[serde(rename = "alpha-2")]
    pub alpha2: String,
}

#[derive(Debug, Clone)]
pub enum ReferenceData {
    Countries(Vec<CountryEntry>),
    States(BTreeMap<String, String>),
}

impl ReferenceData {
    pub fn load(kind: DatasetKind, path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Ok(Self::from_json(kind, &content, path)?)
    }

    pub fn from_json(kind: DatasetKind, json: &str, path: &Path) -> Result<Self, GenerateError> {
        let invalid = |err: serde_json::Error| GenerateError::InvalidDataset {
            path: path.to_path_buf(),
            reason: err.to_string(),
        };
        match kind {
            DatasetKind::Countries => serde_json::from_str(json)
                .map(ReferenceData::Countries)
                .map_err(invalid),
            DatasetKind::States => serde_json::from_str(json)
                .map(ReferenceData::States)
                .map_err(invalid),
        }
    }

    pub fn kind(&self) -> DatasetKind {
        match self {
            ReferenceData::Countries(_) => DatasetKind::Countries,
            ReferenceData::States(_) => DatasetKind::States,
        }
    }

    /// Look `code` up without applying any missing-record policy.
    pub fn lookup(&self, code: &str) -> Option<RegionRecord> {
        match self {
            ReferenceData::Countries(rows) => rows
                .iter()
                .find(|row| row.alpha2.eq_ignore_ascii_case(code))
                .map(|row| RegionRecord {
                    code: code.to_string(),
                    display_name: row.name.clone(),
                    override_name: name_override(&row.alpha2).map(str::to_string),
                }),
            ReferenceData::States(map) => {
                map.get(&code.to_ascii_uppercase())
                    .map(|name| RegionRecord {
                        code: code.to_string(),
                        display_name: name.clone(),
                        override_name: None,
                    })
            }
        }
    }
}

/// Resolve a folder code, honouring the dataset's missing-record policy.
///
/// `Ok(None)` means the folder should be skipped.
pub fn resolve(
    code: &str,
    data: &ReferenceData,
    dataset: &str,
) -> Result<Option<RegionRecord>, GenerateError> {
    match data.lookup(code) {
        Some(record) => Ok(Some(record)),
        None => match data.kind().missing_policy() {
            MissingPolicy::Skip => Ok(None),
            MissingPolicy::Abort => Err(GenerateError::UnknownRegion {
                dataset: dataset.to_string(),
                code: code.to_string(),
            }),
        },
    }
}
