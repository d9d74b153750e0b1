// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal output for generation runs.

use crate::assemble::ModuleEntry;
use crate::generate::DatasetOutcome;
use crate::region::RegionRecord;
use colored::*;

pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn banner(&self) {
        if self.quiet {
            return;
        }
        println!("{}", "=== REGION ICON GENERATOR ===".bold().cyan());
    }

    pub fn dataset_started(&self, name: &str) {
        if self.quiet {
            return;
        }
        println!("\n{} {}", "Dataset:".bold().yellow(), name);
    }

    pub fn dataset_done(&self, outcome: &DatasetOutcome) {
        if self.quiet {
            return;
        }
        for code in &outcome.skipped {
            eprintln!(
                "  {} no reference entry for '{}', folder skipped",
                "warning:".yellow().bold(),
                code
            );
        }
        println!(
            "  {} {} {} -> {}",
            "OK".green().bold(),
            outcome.entries.len(),
            outcome.kind.as_str(),
            outcome.module_path.display()
        );
        println!("  Assets: {}", outcome.assets_dir.display());
        if let Some(path) = &outcome.manifest_path {
            println!("  Manifest: {}", path.display());
        }
    }

    pub fn summary(&self, outcomes: &[DatasetOutcome]) {
        if self.quiet {
            return;
        }
        println!("\n{}", "SUMMARY".bold());
        println!("  {:<16} {:>8} {:>8}", "Dataset", "Regions", "Skipped");
        println!("  {}", "-".repeat(34));
        for outcome in outcomes {
            println!(
                "  {:<16} {:>8} {:>8}",
                outcome.dataset,
                outcome.entries.len(),
                outcome.skipped.len()
            );
        }
    }
}

/// One line per name: slug and identifier fragment.
pub fn print_derivation(name: &str, slug: &str, fragment: &str) {
    println!(
        "{}\n  slug:       {}\n  identifier: {}",
        name.bold(),
        slug,
        fragment
    );
}

pub fn print_record(dataset: &str, record: &RegionRecord, entry: &ModuleEntry) {
    println!("{} {}", dataset.bold().yellow(), record.code);
    println!("  name:   {}", record.display_name);
    if let Some(name) = &record.override_name {
        println!("  override: {}", name.cyan());
    }
    println!("  slug:   {}", entry.slug);
    println!("  symbol: {}", entry.symbol);
}

pub fn print_skipped(dataset: &str, code: &str) {
    println!(
        "{} {}: {}",
        dataset.bold().yellow(),
        code,
        "not in reference data, folder would be skipped".yellow()
    );
}
