//! Runs against a project laid out on disk.

use std::fs;

use dtsgen_codegen::{ProjectModel, UnitOutcome};
use dtsgen_codegen_typescript::Generator;
use dtsgen_config::{NamingConfig, OverrideLoad, Settings, load_overrides};
use dtsgen_core::FsSink;
use dtsgen_ir::UnitId;
use tempfile::TempDir;

const MODEL: &str = r#"{
  "units": [{ "path": "Models/UserProfile.cs" }],
  "types": [
    {
      "fullName": "Accounts.UserProfile",
      "name": "UserProfile",
      "namespace": "Accounts",
      "unit": "Models/UserProfile.cs",
      "members": [
        { "name": "DisplayName", "type": "string" },
        { "name": "Friends", "type": "System.Collections.Generic.List<UserProfile>" }
      ]
    }
  ]
}"#;

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("Models")).unwrap();
    fs::write(
        temp.path().join("Models/UserProfile.cs"),
        "public class UserProfile { }",
    )
    .unwrap();
    fs::write(temp.path().join("project.json"), MODEL).unwrap();
    temp
}

fn output(temp: &TempDir) -> String {
    fs::read_to_string(temp.path().join("Models/UserProfile.cs.d.ts")).unwrap()
}

fn run(temp: &TempDir, config: &NamingConfig) -> Vec<UnitOutcome> {
    let model = ProjectModel::from_file(temp.path().join("project.json")).unwrap();
    let mut sink = FsSink::new(model.root());
    Generator::new(&model, config)
        .run(&mut sink, &[UnitId::new("Models/UserProfile.cs")])
        .units
        .into_iter()
        .map(|r| r.outcome)
        .collect()
}

#[test]
fn test_generates_next_to_source_and_skips_rerun() {
    let temp = project();
    let config = NamingConfig::default();

    let first = run(&temp, &config);
    assert!(matches!(first[0], UnitOutcome::Written { types: 1, .. }));
    let text = output(&temp);
    assert!(text.starts_with("//#hash:"));
    assert!(text.contains("\texport interface userProfile {"));
    assert!(text.contains("\t\tfriends: userProfile[];"));

    let second = run(&temp, &config);
    assert_eq!(second, vec![UnitOutcome::Unchanged]);
    assert_eq!(output(&temp), text);

    fs::write(
        temp.path().join("Models/UserProfile.cs"),
        "public class UserProfile { } ",
    )
    .unwrap();
    let third = run(&temp, &config);
    assert!(matches!(third[0], UnitOutcome::Written { .. }));
    assert_ne!(output(&temp).lines().next(), text.lines().next());
}

#[test]
fn test_project_overrides_apply() {
    let temp = project();
    fs::write(
        temp.path().join("TsDefGen.json"),
        r#"{ "CamelCaseTypeNames": false, "DefaultModuleName": "accounts" }"#,
    )
    .unwrap();

    let load = load_overrides(temp.path());
    assert!(matches!(load, OverrideLoad::Loaded { .. }));
    let config = NamingConfig::resolve(&Settings::default(), load.overrides());

    run(&temp, &config);
    let text = output(&temp);
    assert!(text.contains("declare module accounts {"));
    assert!(text.contains("\texport interface UserProfile {"));
}

#[test]
fn test_malformed_overrides_fall_back() {
    let temp = project();
    fs::write(temp.path().join("tsdefgen.json"), "{ \"GlobalScope\": tru }").unwrap();

    let load = load_overrides(temp.path());
    assert!(matches!(load, OverrideLoad::Malformed { .. }));
    let config = NamingConfig::resolve(&Settings::default(), load.overrides());

    run(&temp, &config);
    assert!(output(&temp).contains("declare module server {"));
}
