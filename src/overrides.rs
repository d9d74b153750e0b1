// SPDX-License-Identifier: PMPL-1.0-or-later

//! Hand-maintained exceptions to the generic name and slug derivation.
//!
//! Every special case in name derivation lives here.

/// Display names replaced before any derivation, keyed by upper-case region code.
pub const NAME_OVERRIDES: &[(&str, &str)] = &[("TW", "Taiwan")];

/// Generated slugs replaced by a shorter canonical alias.
pub const SLUG_OVERRIDES: &[(&str, &str)] = &[("united-states-of-america", "united-states")];

/// Override display name for `code`, if one is registered.
pub fn name_override(code: &str) -> Option<&'static str> {
    NAME_OVERRIDES
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Canonical alias for a generated slug, if one is registered.
pub fn slug_override(slug: &str) -> Option<&'static str> {
    SLUG_OVERRIDES
        .iter()
        .find(|(long, _)| *long == slug)
        .map(|(_, short)| *short)
}
