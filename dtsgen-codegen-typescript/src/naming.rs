//! TypeScript naming and declaration-shape policy.
//!
//! The object model keeps source names untouched; everything here is
//! applied while writing.

use dtsgen_config::NamingConfig;
use dtsgen_core::to_camel_case;

fn keep(name: &str) -> String {
    name.to_string()
}

fn casing(enabled: bool) -> fn(&str) -> String {
    if enabled {
        to_camel_case as fn(&str) -> String
    } else {
        keep
    }
}

/// Casing transforms for emitted names.
#[derive(Debug, Clone, Copy)]
pub struct NamingPolicy {
    type_name: fn(&str) -> String,
    property_name: fn(&str) -> String,
    enum_member: fn(&str) -> String,
}

impl NamingPolicy {
    pub fn from_config(config: &NamingConfig) -> Self {
        Self {
            type_name: casing(config.camel_case_type_names),
            property_name: casing(config.camel_case_property_names),
            enum_member: casing(config.camel_case_enum_values),
        }
    }

    pub fn type_name(&self, name: &str) -> String {
        (self.type_name)(name)
    }

    pub fn property_name(&self, name: &str) -> String {
        (self.property_name)(name)
    }

    pub fn enum_member(&self, name: &str) -> String {
        (self.enum_member)(name)
    }
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self::from_config(&NamingConfig::default())
    }
}

/// Keyword used for object declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKeyword {
    Interface,
    Class,
}

impl ObjectKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Class => "class",
        }
    }
}

/// How enums are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumStyle {
    /// `const enum name { a = 1, b }`
    ConstEnum,
    /// `type name = 'a' | 'b';`
    StringUnion,
}

/// Structural toggles for the written declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationStyle {
    pub object_keyword: ObjectKeyword,
    pub enum_style: EnumStyle,
    /// Emit declarations at top level instead of inside `declare module` blocks.
    pub global_scope: bool,
}

impl DeclarationStyle {
    pub fn from_config(config: &NamingConfig) -> Self {
        Self {
            object_keyword: if config.class_instead_of_interface {
                ObjectKeyword::Class
            } else {
                ObjectKeyword::Interface
            },
            enum_style: if config.string_instead_of_enum {
                EnumStyle::StringUnion
            } else {
                EnumStyle::ConstEnum
            },
            global_scope: config.global_scope,
        }
    }
}

impl Default for DeclarationStyle {
    fn default() -> Self {
        Self::from_config(&NamingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_type_names_toggle() {
        let mut config = NamingConfig::default();
        assert_eq!(
            NamingPolicy::from_config(&config).type_name("UserProfile"),
            "userProfile"
        );

        config.camel_case_type_names = false;
        assert_eq!(
            NamingPolicy::from_config(&config).type_name("UserProfile"),
            "UserProfile"
        );
    }

    #[test]
    fn test_toggles_are_independent() {
        let config = NamingConfig {
            camel_case_property_names: false,
            ..NamingConfig::default()
        };
        let policy = NamingPolicy::from_config(&config);
        assert_eq!(policy.type_name("Order"), "order");
        assert_eq!(policy.property_name("OrderId"), "OrderId");
        assert_eq!(policy.enum_member("Pending"), "pending");
    }

    #[test]
    fn test_declaration_style() {
        assert_eq!(
            DeclarationStyle::default(),
            DeclarationStyle {
                object_keyword: ObjectKeyword::Interface,
                enum_style: EnumStyle::ConstEnum,
                global_scope: false,
            }
        );

        let config = NamingConfig {
            class_instead_of_interface: true,
            string_instead_of_enum: true,
            global_scope: true,
            ..NamingConfig::default()
        };
        let style = DeclarationStyle::from_config(&config);
        assert_eq!(style.object_keyword.as_str(), "class");
        assert_eq!(style.enum_style, EnumStyle::StringUnion);
        assert!(style.global_scope);
    }
}
