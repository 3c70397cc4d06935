//! Snapshot tests for declaration output.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use dtsgen_codegen::ProjectModel;
use dtsgen_codegen_typescript::Generator;
use dtsgen_config::{NamingConfig, Ownership};
use dtsgen_ir::UnitId;

const SHOP: &str = include_str!("shop.json");

fn shop() -> ProjectModel {
    ProjectModel::from_json_str(SHOP, "/shop").expect("Failed to parse project model")
}

fn roots() -> Vec<UnitId> {
    [
        "Models/Order.cs",
        "Models/OrderLine.cs",
        "Models/Status.cs",
        "Billing/Invoice.cs",
    ]
    .into_iter()
    .map(UnitId::new)
    .collect()
}

/// Preview the shop project and return files sorted by path.
fn generate_files(config: &NamingConfig) -> Vec<(String, String)> {
    let model = shop();
    let generator = Generator::new(&model, config);
    let mut files: Vec<(String, String)> = generator
        .preview(&roots())
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect();
    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}

/// Layout where dependencies live in the unit that first reaches them.
fn first_discoverer() -> NamingConfig {
    NamingConfig {
        ownership: Ownership::FirstDiscoverer,
        ..NamingConfig::default().without_incremental()
    }
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_only_owning_units_produce_files() {
    let files = generate_files(&first_discoverer());
    let paths: Vec<&str> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(paths, vec!["Billing/Invoice.cs.d.ts", "Models/Order.cs.d.ts"]);
}

#[test]
fn test_every_declaring_unit_produces_a_file() {
    let files = generate_files(&NamingConfig::default().without_incremental());
    let paths: Vec<&str> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "Billing/Invoice.cs.d.ts",
            "Models/Order.cs.d.ts",
            "Models/OrderLine.cs.d.ts",
            "Models/Status.cs.d.ts",
        ]
    );

    let order = get_file(&files, "Models/Order.cs.d.ts").unwrap();
    assert!(order.contains("import { status } from \"./Status.cs\";"));
    assert!(order.contains("import { orderLine } from \"./OrderLine.cs\";"));
    assert!(!order.contains("interface orderLine"));
    assert!(!order.contains("enum status"));
    let line = get_file(&files, "Models/OrderLine.cs.d.ts").unwrap();
    assert!(line.contains("\texport interface orderLine {"));
}

#[test]
fn test_order_unit() {
    let files = generate_files(&first_discoverer());
    let order = get_file(&files, "Models/Order.cs.d.ts").expect("Order file not found");
    insta::assert_snapshot!("order_unit", order);
}

#[test]
fn test_invoice_unit() {
    let files = generate_files(&first_discoverer());
    let invoice = get_file(&files, "Billing/Invoice.cs.d.ts").expect("Invoice file not found");
    insta::assert_snapshot!("invoice_unit", invoice);
}

#[test]
fn test_order_unit_alternate_style() {
    let config = NamingConfig {
        camel_case_type_names: false,
        class_instead_of_interface: true,
        string_instead_of_enum: true,
        global_scope: true,
        ..first_discoverer()
    };
    let files = generate_files(&config);
    let order = get_file(&files, "Models/Order.cs.d.ts").expect("Order file not found");
    insta::assert_snapshot!("order_unit_alternate_style", order);
}

#[test]
fn test_output_template() {
    let config = NamingConfig {
        output_path_template: Some("typings/{dir}/{stem}.d.ts".into()),
        ..first_discoverer()
    };
    let files = generate_files(&config);
    let invoice = get_file(&files, "typings/Billing/Invoice.d.ts").expect("Invoice file not found");
    assert!(invoice.starts_with("import { order } from \"../Models/Order\";\n"));
}

#[test]
fn test_incremental_marker_leads() {
    let files = generate_files(&NamingConfig::default());
    for (path, content) in &files {
        assert!(content.starts_with("//#hash:"), "{} has no marker", path);
    }
}
