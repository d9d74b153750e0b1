// SPDX-License-Identifier: PMPL-1.0-or-later

//! SVG recolouring so icons inherit the surrounding text colour.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Hardcoded black fill emitted by the source artwork.
pub const BLACK_FILL: &str = r##"fill="#000000""##;
/// Replacement that follows CSS `color`.
pub const CURRENT_COLOR_FILL: &str = r#"fill="currentColor""#;

/// Swap the black fill for `currentColor`; everything else is left as is.
///
/// Input without the literal comes back unchanged.
pub fn transform(svg: &str) -> String {
    svg.replace(BLACK_FILL, CURRENT_COLOR_FILL)
}

/// File name of the transformed asset for `slug`.
pub fn asset_file_name(slug: &str) -> String {
    format!("{}.svg", slug)
}

/// Read `source` and recolour it.
pub fn load_asset(source: &Path) -> Result<String> {
    let svg = fs::read_to_string(source)
        .with_context(|| format!("reading {}", source.display()))?;
    Ok(transform(&svg))
}

/// Write recoloured markup to `<assets_dir>/<slug>.svg`.
pub fn write_asset(assets_dir: &Path, slug: &str, svg: &str) -> Result<PathBuf> {
    let path = assets_dir.join(asset_file_name(slug));
    fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
