// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests for dataset generation

use region_icons::config::{DatasetConfig, GeneratorConfig};
use region_icons::error::GenerateError;
use region_icons::generate::{self, GenerateOptions};
use region_icons::region::DatasetKind;
use region_icons::report::Reporter;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const COUNTRIES_JSON: &str = r#"[
    {"name": "Canada", "alpha-2": "CA", "alpha-3": "CAN", "country-code": "124"},
    {"name": "United States of America", "alpha-2": "US", "alpha-3": "USA"},
    {"name": "Côte d'Ivoire", "alpha-2": "CI"},
    {"name": "Taiwan, Province of China", "alpha-2": "TW"},
    {"name": "Georgia", "alpha-2": "GE"}
]"#;

const STATES_JSON: &str = r#"{
    "CA": "California",
    "NY": "New York",
    "GA": "Georgia"
}"#;

const BLACK_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg"><path fill="#000000" d="M0 0h1v1z"/></svg>"##;

fn make_region(input: &Path, code: &str) {
    let dir = input.join(code);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("vector.svg"), BLACK_SVG).unwrap();
}

/// Config rooted in `root` with the given country and state folders on disk.
fn setup(root: &Path, countries: &[&str], states: &[&str]) -> GeneratorConfig {
    fs::write(root.join("all-countries.json"), COUNTRIES_JSON).unwrap();
    fs::write(root.join("us-states.json"), STATES_JSON).unwrap();
    fs::create_dir_all(root.join("all")).unwrap();
    fs::create_dir_all(root.join("states")).unwrap();
    for code in countries {
        make_region(&root.join("all"), code);
    }
    for code in states {
        make_region(&root.join("states"), code);
    }

    let mut config = GeneratorConfig::default();
    config.rebase(root);
    config
}

fn quiet() -> Reporter {
    Reporter::new(true)
}

fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut files = BTreeMap::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in fs::read_dir(&current).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let rel = path.strip_prefix(dir).unwrap().to_path_buf();
                files.insert(rel, fs::read(&path).unwrap());
            }
        }
    }
    files
}

#[test]
fn test_generates_both_datasets() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path(), &["ca", "us"], &["ca"]);

    let outcomes = generate::run(&config, None, GenerateOptions::default(), &quiet()).unwrap();
    assert_eq!(outcomes.len(), 2);

    let out = dir.path().join("dist");
    let countries = fs::read_to_string(out.join("countries/index.tsx")).unwrap();
    let states = fs::read_to_string(out.join("states/index.tsx")).unwrap();

    assert!(countries.contains(r#"import CountryCanada from "./assets/canada.svg";"#));
    assert!(countries.contains(
        r#"import CountryUnitedStatesofAmerica from "./assets/united-states.svg";"#
    ));
    assert!(countries.contains("export default function CountryMapIcon({"));
    assert_eq!(countries.matches("    case \"").count(), 2);

    assert!(states.contains(r#"import StateCalifornia from "./assets/california.svg";"#));
    assert!(states.contains("case \"california\":\n      return <StateCalifornia {...props} />;"));
    assert_eq!(states.matches("    case \"").count(), 1);

    let asset = fs::read_to_string(out.join("countries/assets/canada.svg")).unwrap();
    assert!(asset.contains(r#"fill="currentColor""#));
    assert!(!asset.contains("#000000"));
    assert!(out.join("countries/assets/united-states.svg").is_file());
    assert!(out.join("states/assets/california.svg").is_file());
}

#[test]
fn test_overrides_and_accents() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path(), &["tw", "ci"], &[]);

    let outcomes = generate::run(&config, Some("countries"), GenerateOptions::default(), &quiet()).unwrap();
    let slugs: Vec<&str> = outcomes[0].entries.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(slugs, vec!["cote-divoire", "taiwan"]);

    let module = fs::read_to_string(dir.path().join("dist/countries/index.tsx")).unwrap();
    assert!(module.contains("import CountryTaiwan from \"./assets/taiwan.svg\";"));
    assert!(module.contains("import CountryCotedIvoire from \"./assets/cote-divoire.svg\";"));
    assert!(module.is_ascii());
}

#[test]
fn test_unknown_country_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path(), &["ca", "zz"], &[]);

    let err = generate::run(&config, Some("countries"), GenerateOptions::default(), &quiet()).unwrap_err();
    match err.downcast_ref::<GenerateError>() {
        Some(GenerateError::UnknownRegion { code, .. }) => assert_eq!(code, "zz"),
        other => panic!("expected UnknownRegion, got {:?}", other),
    }

    let countries_out = dir.path().join("dist/countries");
    assert!(!countries_out.join("index.tsx").exists());
    assert!(!countries_out.join("assets").exists());
}

#[test]
fn test_unknown_state_is_skipped() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path(), &[], &["ca", "ny", "pr"]);

    let outcomes = generate::run(&config, Some("states"), GenerateOptions::default(), &quiet()).unwrap();
    assert_eq!(outcomes[0].skipped, vec!["pr".to_string()]);
    assert_eq!(outcomes[0].entries.len(), 2);

    let module = fs::read_to_string(dir.path().join("dist/states/index.tsx")).unwrap();
    assert!(module.contains("case \"california\""));
    assert!(module.contains("case \"new-york\""));
    assert_eq!(module.matches("    case \"").count(), 2);
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path(), &["us", "ca", "ci", "tw"], &["ny", "ca"]);
    let options = GenerateOptions { manifest: true };

    generate::run(&config, None, options, &quiet()).unwrap();
    let first = snapshot(&dir.path().join("dist"));
    generate::run(&config, None, options, &quiet()).unwrap();
    let second = snapshot(&dir.path().join("dist"));

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_stale_assets_are_removed() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path(), &["ca", "us"], &[]);
    generate::run(&config, Some("countries"), GenerateOptions { manifest: true }, &quiet()).unwrap();

    fs::remove_dir_all(dir.path().join("all/us")).unwrap();
    generate::run(&config, Some("countries"), GenerateOptions::default(), &quiet()).unwrap();

    let out = dir.path().join("dist/countries");
    assert!(out.join("assets/canada.svg").exists());
    assert!(!out.join("assets/united-states.svg").exists());
    assert!(!out.join("manifest.json").exists());
}

#[test]
fn test_slug_collision_fails_before_writing() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    let mut config = setup(root, &[], &[]);

    fs::write(
        root.join("dupes.json"),
        r#"{"GE": "Georgia", "GA": "Georgia"}"#,
    )
    .unwrap();
    make_region(&root.join("dupes"), "ge");
    make_region(&root.join("dupes"), "ga");
    config.datasets.push(DatasetConfig {
        name: "dupes".to_string(),
        kind: DatasetKind::States,
        input_dir: root.join("dupes"),
        reference: root.join("dupes.json"),
        component: "DupeMapIcon".to_string(),
        symbol_prefix: "Dupe".to_string(),
        asset_file: "vector.svg".to_string(),
        module_file: "index.tsx".to_string(),
    });

    let err = generate::run(&config, Some("dupes"), GenerateOptions::default(), &quiet()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<GenerateError>(),
        Some(GenerateError::SlugCollision { slug, .. }) if slug == "georgia"
    ));
    assert!(!root.join("dist/dupes/index.tsx").exists());
}

#[test]
fn test_manifest_lists_entries() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path(), &["ca"], &[]);

    let outcomes =
        generate::run(&config, Some("countries"), GenerateOptions { manifest: true }, &quiet()).unwrap();
    let path = outcomes[0].manifest_path.clone().unwrap();
    let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

    assert_eq!(rows[0]["code"], "ca");
    assert_eq!(rows[0]["name"], "Canada");
    assert_eq!(rows[0]["slug"], "canada");
    assert_eq!(rows[0]["symbol"], "CountryCanada");
    assert_eq!(rows[0]["asset"], "assets/canada.svg");
}

#[test]
fn test_missing_asset_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path(), &["ca"], &[]);
    fs::create_dir_all(dir.path().join("all/us")).unwrap();

    let err = generate::run(&config, Some("countries"), GenerateOptions::default(), &quiet()).unwrap_err();
    assert!(format!("{:#}", err).contains("vector.svg"));
    assert!(!dir.path().join("dist/countries/index.tsx").exists());
}

#[test]
fn test_unknown_dataset_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path(), &[], &[]);
    let err = generate::run(&config, Some("provinces"), GenerateOptions::default(), &quiet()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<GenerateError>(),
        Some(GenerateError::UnknownDataset(name)) if name == "provinces"
    ));
}

#[test]
fn test_output_dir_creation_failure_names_the_path() {
    let dir = TempDir::new().unwrap();
    let mut config = setup(dir.path(), &["ca"], &[]);
    let blocker = dir.path().join("occupied");
    fs::write(&blocker, "a file, not a directory").unwrap();
    config.output_dir = blocker.join("dist");

    let err = generate::run(&config, None, GenerateOptions::default(), &quiet()).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("creating"));
    assert!(msg.contains("occupied"));
}

#[test]
fn test_run_with_progress_output() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path(), &["ca"], &["ca", "pr"]);
    let reporter = Reporter::new(false);

    reporter.banner();
    let outcomes = generate::run(&config, None, GenerateOptions::default(), &reporter).unwrap();
    reporter.summary(&outcomes);

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[1].skipped, vec!["pr".to_string()]);
}
