// SPDX-License-Identifier: PMPL-1.0-or-later

//! URL-safe slugs for region display names.

use crate::normalize::normalize;
use crate::overrides::slug_override;
use regex::Regex;
use std::sync::OnceLock;

struct SlugPatterns {
    /// Anything that is not an ASCII word character, whitespace or hyphen.
    disallowed: Regex,
    /// Runs of separators that collapse into a single hyphen.
    separators: Regex,
    /// Hyphens left dangling at either end.
    edges: Regex,
}

fn patterns() -> &'static SlugPatterns {
    static PATTERNS: OnceLock<SlugPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| SlugPatterns {
        disallowed: Regex::new(r"[^a-z0-9_\s-]").expect("static slug pattern"),
        separators: Regex::new(r"[\s_-]+").expect("static slug pattern"),
        edges: Regex::new(r"^-+|-+$").expect("static slug pattern"),
    })
}

/// Derive the slug for a display name, before any override is consulted.
pub fn slugify_raw(name: &str) -> String {
    let p = patterns();
    let folded = normalize(name.trim().to_lowercase().as_str());
    let cleaned = p.disallowed.replace_all(&folded, "");
    let hyphenated = p.separators.replace_all(&cleaned, "-");
    p.edges.replace_all(&hyphenated, "").into_owned()
}

/// Derive the slug for a display name.
///
/// Lowercases, folds accents, drops punctuation, hyphenates whitespace and
/// finally swaps in any registered short alias.
///
/// ```
/// use region_icons::slug::slugify;
/// assert_eq!(slugify("Côte d'Ivoire"), "cote-divoire");
/// assert_eq!(slugify("United States of America"), "united-states");
/// ```
pub fn slugify(name: &str) -> String {
    let slug = slugify_raw(name);
    match slug_override(&slug) {
        Some(alias) => alias.to_string(),
        None => slug,
    }
}

/// True when `s` has the shape `^[a-z0-9]+(-[a-z0-9]+)*$`.
pub fn is_valid_slug(s: &str) -> bool {
    !s.is_empty()
        && s.split('-').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}
