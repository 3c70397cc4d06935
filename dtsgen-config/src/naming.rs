use crate::{DEFAULT_MODULE_NAME, Ownership, Overrides, Settings};

/// Effective configuration for one generation run.
///
/// Built once at run start by merging global [`Settings`] with the
/// project's [`Overrides`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConfig {
    pub camel_case_type_names: bool,
    pub camel_case_property_names: bool,
    pub camel_case_enum_values: bool,
    pub class_instead_of_interface: bool,
    pub string_instead_of_enum: bool,
    pub global_scope: bool,
    /// Never blank.
    pub default_module_name: String,
    pub use_declared_namespace: bool,
    pub output_path_template: Option<String>,
    pub incremental: bool,
    pub ownership: Ownership,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self::resolve(&Settings::default(), None)
    }
}

impl NamingConfig {
    /// Merge settings with overrides. Override values win when present.
    pub fn resolve(settings: &Settings, overrides: Option<&Overrides>) -> Self {
        let o = overrides.cloned().unwrap_or_default();
        let module = o
            .default_module_name
            .unwrap_or_else(|| settings.default_module_name.clone());
        let module = if module.trim().is_empty() {
            DEFAULT_MODULE_NAME.to_string()
        } else {
            module.trim().to_string()
        };

        Self {
            camel_case_type_names: o
                .camel_case_type_names
                .unwrap_or(settings.camel_case_type_names),
            camel_case_property_names: o
                .camel_case_property_names
                .unwrap_or(settings.camel_case_property_names),
            camel_case_enum_values: o
                .camel_case_enum_values
                .unwrap_or(settings.camel_case_enum_values),
            class_instead_of_interface: o
                .class_instead_of_interface
                .unwrap_or(settings.class_instead_of_interface),
            string_instead_of_enum: o
                .string_instead_of_enum
                .unwrap_or(settings.string_instead_of_enum),
            global_scope: o.global_scope.unwrap_or(settings.global_scope),
            default_module_name: module,
            use_declared_namespace: o
                .use_declared_namespace
                .unwrap_or(settings.use_declared_namespace),
            output_path_template: o
                .output_path_template
                .or_else(|| settings.output_path_template.clone()),
            incremental: settings.incremental,
            ownership: settings.ownership,
        }
    }

    /// Same configuration with incremental skipping turned off.
    pub fn without_incremental(mut self) -> Self {
        self.incremental = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NamingConfig::default();
        assert!(config.camel_case_type_names);
        assert!(config.camel_case_property_names);
        assert!(config.camel_case_enum_values);
        assert!(!config.class_instead_of_interface);
        assert!(!config.global_scope);
        assert_eq!(config.default_module_name, "server");
        assert_eq!(config.ownership, Ownership::DeclaringUnit);
    }

    #[test]
    fn test_override_wins() {
        let settings = Settings {
            global_scope: true,
            ..Settings::default()
        };
        let overrides = Overrides {
            camel_case_type_names: Some(false),
            global_scope: Some(false),
            ..Overrides::default()
        };
        let config = NamingConfig::resolve(&settings, Some(&overrides));
        assert!(!config.camel_case_type_names);
        assert!(!config.global_scope);
        assert!(config.camel_case_property_names);
    }

    #[test]
    fn test_blank_module_name_resets() {
        let overrides = Overrides {
            default_module_name: Some("   ".into()),
            ..Overrides::default()
        };
        let config = NamingConfig::resolve(&Settings::default(), Some(&overrides));
        assert_eq!(config.default_module_name, "server");
    }
}
