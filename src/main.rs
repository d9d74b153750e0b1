// SPDX-License-Identifier: PMPL-1.0-or-later

//! region-icons: generate slug-dispatched map icon components
//!
//! Reads per-region SVG folders and an ISO-3166 / US-state reference table,
//! writes recoloured assets and a TSX module that renders them by slug.

use anyhow::Result;
use clap::{Parser, Subcommand};
use region_icons::assemble::ModuleEntry;
use region_icons::config::GeneratorConfig;
use region_icons::error::GenerateError;
use region_icons::generate::{self, GenerateOptions};
use region_icons::identifier::to_identifier_fragment;
use region_icons::region::{resolve, ReferenceData};
use region_icons::report::{self, Reporter};
use region_icons::slug::slugify;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "region-icons")]
#[command(version)]
#[command(about = "Generate slug-dispatched map icon components from region SVGs")]
#[command(long_about = None)]
struct Cli {
    /// YAML config file (defaults to the built-in layout)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate assets and modules for every dataset
    Generate {
        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only regenerate the named dataset
        #[arg(long, value_name = "DATASET")]
        only: Option<String>,

        /// Also write manifest.json per dataset
        #[arg(long)]
        manifest: bool,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show the slug and identifier fragment derived from display names
    Slug {
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },

    /// Look a folder code up in a dataset's reference table
    Resolve {
        #[arg(value_name = "DATASET")]
        dataset: String,

        #[arg(value_name = "CODE")]
        code: String,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::load(path),
        None => Ok(GeneratorConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Generate {
            output,
            only,
            manifest,
            quiet,
        } => {
            if let Some(output) = output {
                config.output_dir = output;
            }
            let reporter = Reporter::new(quiet);
            let options = GenerateOptions { manifest };

            reporter.banner();
            let outcomes = generate::run(&config, only.as_deref(), options, &reporter)?;
            reporter.summary(&outcomes);
        }

        Commands::Slug { names } => {
            for name in &names {
                report::print_derivation(name, &slugify(name), &to_identifier_fragment(name));
            }
        }

        Commands::Resolve { dataset, code } => {
            let dataset = config
                .dataset(&dataset)
                .ok_or_else(|| GenerateError::UnknownDataset(dataset.clone()))?;
            let data = ReferenceData::load(dataset.kind, &dataset.reference)?;
            match resolve(&code, &data, &dataset.name)? {
                Some(record) => {
                    let entry = ModuleEntry::from_record(&record, &dataset.symbol_prefix)?;
                    report::print_record(&dataset.name, &record, &entry);
                }
                None => report::print_skipped(&dataset.name, &code),
            }
        }
    }

    Ok(())
}
