// SPDX-License-Identifier: PMPL-1.0-or-later

//! Driver: scan region folders, resolve them, and write one dataset's output.
//!
//! A dataset is planned completely before anything is written. Every folder is
//! resolved, every asset read and recoloured, and the module assembled. Any
//! failure in that phase leaves the dataset's output directory untouched.
//! Datasets are independent; one that fails does not roll back those already
//! written.

use crate::asset::{load_asset, write_asset};
use crate::assemble::{GeneratedModule, ModuleEntry};
use crate::config::{DatasetConfig, GeneratorConfig};
use crate::error::GenerateError;
use crate::region::{resolve, DatasetKind, ReferenceData};
use crate::report::Reporter;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "manifest.json";
const ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Also write `manifest.json` next to the module.
    pub manifest: bool,
}

/// One region ready to be written.
#[derive(Debug, Clone)]
pub struct PlannedAsset {
    pub entry: ModuleEntry,
    pub svg: String,
}

/// Fully resolved dataset, nothing written yet.
#[derive(Debug, Clone)]
pub struct DatasetPlan {
    pub assets: Vec<PlannedAsset>,
    /// Folder codes the reference data did not know (tolerant datasets only).
    pub skipped: Vec<String>,
    pub module: GeneratedModule,
}

#[derive(Debug, Clone)]
pub struct DatasetOutcome {
    pub dataset: String,
    pub kind: DatasetKind,
    pub module_path: PathBuf,
    pub assets_dir: PathBuf,
    pub manifest_path: Option<PathBuf>,
    pub entries: Vec<ModuleEntry>,
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
struct ManifestRow<'a> {
    code: &'a str,
    name: &'a str,
    slug: &'a str,
    symbol: &'a str,
    asset: String,
}

/// Two-character directory names under `input_dir`, sorted.
pub fn discover_region_folders(input_dir: &Path) -> Result<Vec<String>> {
    if !input_dir.is_dir() {
        anyhow::bail!("Not a directory: {}", input_dir.display());
    }

    let entries =
        fs::read_dir(input_dir).with_context(|| format!("reading {}", input_dir.display()))?;
    region_codes(entries.map(|entry| entry.map(|e| e.path())), input_dir)
}

/// Listing errors abort discovery.
fn region_codes<I>(paths: I, input_dir: &Path) -> Result<Vec<String>>
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
{
    let mut codes = Vec::new();
    for path in paths {
        let path = path.with_context(|| format!("listing {}", input_dir.display()))?;
        if !path.is_dir() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.chars().count() == 2 {
                codes.push(name.to_string());
            }
        }
    }

    codes.sort();
    Ok(codes)
}

/// Resolve and load everything for `dataset` without touching the output tree.
pub fn plan_dataset(dataset: &DatasetConfig) -> Result<DatasetPlan> {
    let data = ReferenceData::load(dataset.kind, &dataset.reference)?;
    plan_with_reference(dataset, &data)
}

pub fn plan_with_reference(dataset: &DatasetConfig, data: &ReferenceData) -> Result<DatasetPlan> {
    let codes = discover_region_folders(&dataset.input_dir)?;
    let mut assets = Vec::new();
    let mut skipped = Vec::new();

    for code in codes {
        let record = match resolve(&code, data, &dataset.name)? {
            Some(record) => record,
            None => {
                skipped.push(code);
                continue;
            }
        };
        let entry = ModuleEntry::from_record(&record, &dataset.symbol_prefix)?;
        let source = dataset.input_dir.join(&code).join(&dataset.asset_file);
        let svg = load_asset(&source)?;
        assets.push(PlannedAsset { entry, svg });
    }

    // Stable output regardless of folder naming; ties are caught by the collision check.
    assets.sort_by(|a, b| a.entry.slug.cmp(&b.entry.slug));

    let entries: Vec<ModuleEntry> = assets.iter().map(|a| a.entry.clone()).collect();
    let module = GeneratedModule::assemble(&dataset.component, &entries)?;

    Ok(DatasetPlan {
        assets,
        skipped,
        module,
    })
}

/// Write a planned dataset under `<output_dir>/<dataset.name>/`, replacing what was there.
pub fn write_dataset(
    plan: &DatasetPlan,
    dataset: &DatasetConfig,
    output_dir: &Path,
    options: GenerateOptions,
) -> Result<DatasetOutcome> {
    let out = output_dir.join(&dataset.name);
    let assets_dir = out.join(ASSETS_DIR);

    if assets_dir.exists() {
        fs::remove_dir_all(&assets_dir)
            .with_context(|| format!("clearing {}", assets_dir.display()))?;
    }
    fs::create_dir_all(&assets_dir)
        .with_context(|| format!("creating {}", assets_dir.display()))?;

    for asset in &plan.assets {
        write_asset(&assets_dir, &asset.entry.slug, &asset.svg)?;
    }

    let module_path = out.join(&dataset.module_file);
    fs::write(&module_path, plan.module.render())
        .with_context(|| format!("writing {}", module_path.display()))?;

    let manifest = out.join(MANIFEST_FILE);
    let manifest_path = if options.manifest {
        let rows: Vec<ManifestRow<'_>> = plan
            .assets
            .iter()
            .map(|a| ManifestRow {
                code: &a.entry.code,
                name: &a.entry.name,
                slug: &a.entry.slug,
                symbol: &a.entry.symbol,
                asset: format!("{}/{}", ASSETS_DIR, a.entry.asset_file()),
            })
            .collect();
        let mut json = serde_json::to_string_pretty(&rows)?;
        json.push('\n');
        fs::write(&manifest, json).with_context(|| format!("writing {}", manifest.display()))?;
        Some(manifest)
    } else {
        if manifest.exists() {
            fs::remove_file(&manifest)
                .with_context(|| format!("removing stale {}", manifest.display()))?;
        }
        None
    };

    Ok(DatasetOutcome {
        dataset: dataset.name.clone(),
        kind: dataset.kind,
        module_path,
        assets_dir,
        manifest_path,
        entries: plan.assets.iter().map(|a| a.entry.clone()).collect(),
        skipped: plan.skipped.clone(),
    })
}

/// Plan and write one dataset.
pub fn run_dataset(
    dataset: &DatasetConfig,
    output_dir: &Path,
    options: GenerateOptions,
) -> Result<DatasetOutcome> {
    let plan = plan_dataset(dataset).with_context(|| format!("dataset '{}'", dataset.name))?;
    write_dataset(&plan, dataset, output_dir, options)
}

/// Every configured dataset in order, or just the one named `only`.
pub fn select_datasets<'a>(
    config: &'a GeneratorConfig,
    only: Option<&str>,
) -> Result<Vec<&'a DatasetConfig>, GenerateError> {
    match only {
        Some(name) => config
            .dataset(name)
            .map(|d| vec![d])
            .ok_or_else(|| GenerateError::UnknownDataset(name.to_string())),
        None => Ok(config.datasets.iter().collect()),
    }
}

/// Run the selected datasets in order, reporting progress as each one finishes.
///
/// Stops at the first failing dataset; earlier datasets stay written.
pub fn run(
    config: &GeneratorConfig,
    only: Option<&str>,
    options: GenerateOptions,
    reporter: &Reporter,
) -> Result<Vec<DatasetOutcome>> {
    let selected = select_datasets(config, only)?;

    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;

    let mut outcomes = Vec::new();
    for dataset in selected {
        reporter.dataset_started(&dataset.name);
        let outcome = run_dataset(dataset, &config.output_dir, options)?;
        reporter.dataset_done(&outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
