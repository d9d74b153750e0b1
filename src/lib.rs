// SPDX-License-Identifier: PMPL-1.0-or-later

//! Region Icons: React map-icon components generated from per-region SVG artwork.
//!
//! Takes a directory of `<code>/vector.svg` folders plus a reference dataset
//! (ISO-3166 countries or US states) and writes, per dataset:
//!
//! 1. **Assets**: each SVG recoloured to `currentColor`, stored as `<slug>.svg`.
//! 2. **Module**: one TSX file whose default export switches on a `slug` prop
//!    and renders the matching imported asset.
//!
//! The interesting part is name derivation. Display names with accents,
//! apostrophes and parentheses become URL-safe slugs (`slug`) and symbol-safe
//! identifier fragments (`identifier`), with hand-maintained exceptions in
//! `overrides`.

pub mod asset;
pub mod assemble;
pub mod config;
pub mod error;
pub mod generate;
pub mod identifier;
pub mod normalize;
pub mod overrides;
pub mod region;
pub mod report;
pub mod slug;
