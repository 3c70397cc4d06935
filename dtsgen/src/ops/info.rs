//! Info operation - project and configuration information.

use std::path::Path;

use dtsgen_codegen::TypeSource;
use dtsgen_codegen_typescript::Generator;

use crate::{
    ops::{OverrideStatus, Project},
    reports::InfoReport,
};

/// Execute the info operation.
///
/// Collects project information from the model and the effective
/// configuration.
pub fn info(project: &Project) -> InfoReport {
    let config = &project.config;
    let generator = Generator::new(&project.model, config);
    let layout = generator.layout();

    let overrides = match &project.overrides {
        OverrideStatus::Missing => "none".to_string(),
        OverrideStatus::Applied(path) => canonical(path),
        OverrideStatus::Ignored(path) => format!("{} (malformed, ignored)", canonical(path)),
    };

    let settings = vec![
        ("camel_case_type_names", config.camel_case_type_names.to_string()),
        (
            "camel_case_property_names",
            config.camel_case_property_names.to_string(),
        ),
        ("camel_case_enum_values", config.camel_case_enum_values.to_string()),
        (
            "class_instead_of_interface",
            config.class_instead_of_interface.to_string(),
        ),
        ("string_instead_of_enum", config.string_instead_of_enum.to_string()),
        ("global_scope", config.global_scope.to_string()),
        ("default_module_name", config.default_module_name.clone()),
        ("use_declared_namespace", config.use_declared_namespace.to_string()),
        (
            "output_path_template",
            config
                .output_path_template
                .clone()
                .unwrap_or_else(|| "(next to source)".to_string()),
        ),
        ("incremental", config.incremental.to_string()),
        ("ownership", config.ownership.as_str().to_string()),
    ];

    let outputs = project
        .model
        .units()
        .iter()
        .map(|unit| {
            (
                unit.to_string(),
                layout
                    .output_path(unit)
                    .to_string_lossy()
                    .replace('\\', "/"),
            )
        })
        .collect();

    InfoReport {
        root: canonical(project.model.root()),
        model_path: canonical(&project.model_path),
        settings_path: project.settings_path.as_deref().map(canonical),
        overrides,
        type_count: project.model.type_count(),
        settings: settings
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect(),
        outputs,
    }
}

fn canonical(path: &Path) -> String {
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
