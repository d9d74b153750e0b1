// SPDX-License-Identifier: PMPL-1.0-or-later

//! Identifier fragments for generated import symbols.

use crate::normalize::normalize;

/// Characters removed from a display name before it is used in a symbol.
const STRIPPED: &[char] = &[' ', '(', ')', ',', '\'', '\u{2019}', '-', '.'];

/// Turn a display name into a fragment that can be glued onto a symbol prefix.
///
/// Case and all other characters are preserved; only whitespace and the
/// punctuation in `STRIPPED` are removed after accent folding.
///
/// ```
/// use region_icons::identifier::to_identifier_fragment;
/// assert_eq!(to_identifier_fragment("Côte d'Ivoire"), "CotedIvoire");
/// ```
pub fn to_identifier_fragment(name: &str) -> String {
    normalize(name)
        .chars()
        .filter(|c| !c.is_whitespace() && !STRIPPED.contains(c))
        .collect()
}

/// Full symbol name: fixed prefix followed by the fragment for `name`.
pub fn symbol_name(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, to_identifier_fragment(name))
}
