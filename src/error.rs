// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fatal generator errors.
//!
//! Plain I/O failures travel as `anyhow` errors with path context; the
//! variants here are the conditions that abort a dataset on purpose.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// A folder code has no record in a dataset that requires one.
    #[error("no region named '{code}' in the {dataset} reference dataset")]
    UnknownRegion { dataset: String, code: String },

    /// Two folders produced the same slug.
    #[error("slug '{slug}' is produced by both '{first}' and '{second}'")]
    SlugCollision {
        slug: String,
        first: String,
        second: String,
    },

    /// Two folders produced the same import symbol.
    #[error("symbol '{symbol}' is produced by both '{first}' and '{second}'")]
    SymbolCollision {
        symbol: String,
        first: String,
        second: String,
    },

    /// A derived slug or symbol is unusable.
    #[error("region '{code}' ({name}) yields an invalid {what}: '{value}'")]
    InvalidName {
        code: String,
        name: String,
        what: &'static str,
        value: String,
    },

    /// The reference dataset could not be interpreted.
    #[error("invalid reference dataset {}: {reason}", path.display())]
    InvalidDataset { path: PathBuf, reason: String },

    /// `--only` or `resolve` named a dataset that is not configured.
    #[error("no dataset named '{0}' is configured")]
    UnknownDataset(String),
}
