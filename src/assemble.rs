// SPDX-License-Identifier: PMPL-1.0-or-later

//! Assembly of the generated TSX dispatch module.
//!
//! Each entry contributes one default import of its recoloured SVG and one
//! `case` in the component's `switch`. Entries are emitted in the order given;
//! the driver sorts them by slug beforehand.

use crate::asset::asset_file_name;
use crate::error::GenerateError;
use crate::identifier::symbol_name;
use crate::region::RegionRecord;
use crate::slug::{is_valid_slug, slugify};
use std::collections::HashMap;

/// Everything derived from one resolved region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    pub code: String,
    pub name: String,
    pub slug: String,
    pub symbol: String,
}

impl ModuleEntry {
    /// Derive slug and symbol for `record`, rejecting unusable results.
    pub fn from_record(record: &RegionRecord, symbol_prefix: &str) -> Result<Self, GenerateError> {
        let name = record.name();
        let slug = slugify(name);
        if !is_valid_slug(&slug) {
            return Err(GenerateError::InvalidName {
                code: record.code.clone(),
                name: name.to_string(),
                what: "slug",
                value: slug,
            });
        }

        let symbol = symbol_name(symbol_prefix, name);
        if !is_valid_symbol(&symbol) {
            return Err(GenerateError::InvalidName {
                code: record.code.clone(),
                name: name.to_string(),
                what: "symbol",
                value: symbol,
            });
        }

        Ok(Self {
            code: record.code.clone(),
            name: name.to_string(),
            slug,
            symbol,
        })
    }

    pub fn asset_file(&self) -> String {
        asset_file_name(&self.slug)
    }

    fn import_line(&self) -> String {
        format!(
            "import {} from \"./assets/{}\";",
            self.symbol,
            self.asset_file()
        )
    }

    fn case_line(&self) -> String {
        format!(
            "    case \"{}\":\n      return <{} {{...props}} />;",
            self.slug, self.symbol
        )
    }
}

/// Non-empty, no leading digit, only alphanumerics, `_` and `$`.
pub fn is_valid_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Fail if two entries share a slug or a symbol.
pub fn check_unique(entries: &[ModuleEntry]) -> Result<(), GenerateError> {
    let mut slugs: HashMap<&str, &str> = HashMap::new();
    let mut symbols: HashMap<&str, &str> = HashMap::new();

    for entry in entries {
        if let Some(first) = slugs.insert(&entry.slug, &entry.code) {
            return Err(GenerateError::SlugCollision {
                slug: entry.slug.clone(),
                first: first.to_string(),
                second: entry.code.clone(),
            });
        }
        if let Some(first) = symbols.insert(&entry.symbol, &entry.code) {
            return Err(GenerateError::SymbolCollision {
                symbol: entry.symbol.clone(),
                first: first.to_string(),
                second: entry.code.clone(),
            });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    pub component: String,
    pub import_lines: Vec<String>,
    pub case_lines: Vec<String>,
}

impl GeneratedModule {
    /// Build the module for `entries` after checking they are unambiguous.
    pub fn assemble(component: &str, entries: &[ModuleEntry]) -> Result<Self, GenerateError> {
        check_unique(entries)?;
        Ok(Self {
            component: component.to_string(),
            import_lines: entries.iter().map(ModuleEntry::import_line).collect(),
            case_lines: entries.iter().map(ModuleEntry::case_line).collect(),
        })
    }

    /// Render the final source text, newline terminated.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        lines.push("import { type ComponentPropsWithoutRef } from \"react\";".to_string());
        lines.push(String::new());
        if !self.import_lines.is_empty() {
            lines.extend(self.import_lines.iter().cloned());
            lines.push(String::new());
        }
        lines.push(format!("export default function {}({{", self.component));
        lines.push("  slug,".to_string());
        lines.push("  ...props".to_string());
        lines.push("}: ComponentPropsWithoutRef<\"svg\"> & { slug: string }) {".to_string());
        lines.push("  switch (slug) {".to_string());
        lines.extend(self.case_lines.iter().cloned());
        lines.push("    default:".to_string());
        lines.push("      return null;".to_string());
        lines.push("  }".to_string());
        lines.push("}".to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
