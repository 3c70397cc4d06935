//! TypeScript type mapper implementation.

use dtsgen_codegen::TypeMapper;
use dtsgen_ir::{MapKey, Primitive};

/// TypeScript type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::Number => "number",
            Primitive::String => "string",
            Primitive::Boolean => "boolean",
            Primitive::Date => "Date",
            Primitive::Any => "any",
        }
    }

    fn any_type(&self) -> &'static str {
        "any"
    }

    fn map_key(&self, key: MapKey) -> &'static str {
        match key {
            MapKey::String => "string",
            MapKey::Number => "number",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typescript_primitives() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.map_primitive(Primitive::Number), "number");
        assert_eq!(mapper.map_primitive(Primitive::String), "string");
        assert_eq!(mapper.map_primitive(Primitive::Boolean), "boolean");
        assert_eq!(mapper.map_primitive(Primitive::Date), "Date");
        assert_eq!(mapper.map_primitive(Primitive::Any), "any");
    }

    #[test]
    fn test_typescript_keys() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.map_key(MapKey::String), "string");
        assert_eq!(mapper.map_key(MapKey::Number), "number");
        assert_eq!(mapper.any_type(), "any");
    }
}
