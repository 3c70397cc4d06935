//! End-to-end runs of the dtsgen binary against a project on disk.

use std::{fs, path::Path};

use assert_cmd::Command;
use serde_json::json;
use tempfile::TempDir;

fn dtsgen(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dtsgen").unwrap();
    cmd.env_remove("DTSGEN_LOG");
    cmd.current_dir(project);
    cmd
}

fn stdout(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let model = json!({
        "units": [
            { "path": "Models/Order.cs" },
            { "path": "Models/Empty.cs", "content": "// nothing here" }
        ],
        "types": [
            {
                "fullName": "Shop.Order",
                "name": "Order",
                "namespace": "Shop",
                "unit": "Models/Order.cs",
                "members": [
                    { "name": "Id", "type": "int" },
                    { "name": "PlacedAt", "type": "System.DateTime" }
                ]
            }
        ]
    });
    fs::create_dir_all(temp.path().join("Models")).unwrap();
    fs::write(temp.path().join("Models/Order.cs"), "public class Order { }").unwrap();
    fs::write(
        temp.path().join("dtsgen.model.json"),
        serde_json::to_string_pretty(&model).unwrap(),
    )
    .unwrap();
    temp
}

#[test]
fn test_generate_then_rerun_is_unchanged() {
    let temp = project();

    let first = stdout(dtsgen(temp.path()).arg("generate"));
    assert!(first.contains("+ Models/Order.cs.d.ts (1 type)"));
    assert!(first.contains("1 written, 0 unchanged, 1 empty, 0 failed"));

    let text = fs::read_to_string(temp.path().join("Models/Order.cs.d.ts")).unwrap();
    assert!(text.starts_with("//#hash:"));
    assert!(text.contains("declare module server {"));
    assert!(text.contains("\t\tplacedAt: Date;"));

    let second = stdout(dtsgen(temp.path()).arg("generate"));
    assert!(second.contains("0 written, 2 unchanged, 0 empty, 0 failed"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = project();

    let preview = stdout(dtsgen(temp.path()).args(["generate", "--dry-run"]));
    assert!(preview.contains("── Models/Order.cs.d.ts ──"));
    assert!(preview.contains("1 files would be generated"));
    assert!(!temp.path().join("Models/Order.cs.d.ts").exists());
}

#[test]
fn test_check_reports_stale_until_generated() {
    let temp = project();

    dtsgen(temp.path()).arg("check").assert().failure();
    dtsgen(temp.path()).arg("generate").assert().success();
    let assert = dtsgen(temp.path()).arg("check").assert().success();
    let check = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(check.contains("✓ 2 units up to date"));
}

#[test]
fn test_clean_removes_generated_files() {
    let temp = project();
    dtsgen(temp.path()).arg("generate").assert().success();

    let dry = stdout(dtsgen(temp.path()).args(["clean", "--dry-run"]));
    assert!(dry.contains("Would delete:"));
    assert!(temp.path().join("Models/Order.cs.d.ts").exists());

    let cleaned = stdout(dtsgen(temp.path()).arg("clean"));
    assert!(cleaned.contains("  - Models/Order.cs.d.ts"));
    assert!(!temp.path().join("Models/Order.cs.d.ts").exists());
}

#[test]
fn test_project_overrides_apply() {
    let temp = project();
    fs::write(
        temp.path().join("tsdefgen.json"),
        r#"{ "DefaultModuleName": "api", "GlobalScope": false }"#,
    )
    .unwrap();

    dtsgen(temp.path())
        .args(["generate", "Models/Order.cs"])
        .assert()
        .success();
    let text = fs::read_to_string(temp.path().join("Models/Order.cs.d.ts")).unwrap();
    assert!(text.contains("declare module api {"));

    let info = stdout(dtsgen(temp.path()).arg("info"));
    assert!(info.contains("  default_module_name: api"));
    assert!(info.contains("  ownership: declaring-unit"));
    assert!(info.contains("tsdefgen.json"));
}

#[test]
fn test_malformed_settings_fail() {
    let temp = project();
    fs::write(temp.path().join("dtsgen.toml"), "global_scope = maybe\n").unwrap();

    dtsgen(temp.path()).arg("generate").assert().failure();
}
