// SPDX-License-Identifier: PMPL-1.0-or-later

//! Accent folding for region display names.
//!
//! This is a literal substitution table, not Unicode decomposition. Only the
//! letters that actually occur in the reference datasets are listed; anything
//! else passes through untouched and is dealt with by the slug and identifier
//! filters downstream.

/// Accented letter and its ASCII replacement.
pub const FOLD_TABLE: &[(char, char)] = &[
    ('å', 'a'),
    ('Å', 'A'),
    ('ô', 'o'),
    ('Ô', 'O'),
    ('ç', 'c'),
    ('Ç', 'C'),
    ('é', 'e'),
    ('É', 'E'),
    ('ü', 'u'),
    ('Ü', 'U'),
];

fn fold_char(c: char) -> char {
    FOLD_TABLE
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}

/// Replace every character found in [`FOLD_TABLE`] with its ASCII equivalent.
///
/// ```
/// assert_eq!(region_icons::normalize::normalize("Curaçao"), "Curacao");
/// assert_eq!(region_icons::normalize::normalize("Åland"), "Aland");
/// ```
pub fn normalize(s: &str) -> String {
    s.chars().map(fold_char).collect()
}
