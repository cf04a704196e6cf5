//! DTO struct rendering.

use crate::generator::DtoField;
use std::fmt::Write as _;

/// Renders a DTO struct definition with JSON serialization tags.
///
/// Field types keep the wire schema's type text verbatim; struct references
/// resolve to the generated DTO types, which share their wire names.
#[must_use]
pub fn render_struct(type_name: &str, fields: &[DtoField]) -> String {
    if fields.is_empty() {
        return format!("type {type_name} struct{{}}\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "type {type_name} struct {{");
    for field in fields {
        let _ = writeln!(
            out,
            "\t{} {} `json:\"{}\"`",
            field.name, field.go_type, field.json_tag
        );
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_struct_renders_on_one_line() {
        assert_eq!(render_struct("PingRequest", &[]), "type PingRequest struct{}\n");
    }

    #[test]
    fn test_fields_render_with_json_tags() {
        let fields = vec![
            DtoField {
                name: "AString".to_string(),
                go_type: "string".to_string(),
                json_tag: "aString".to_string(),
            },
            DtoField {
                name: "Items".to_string(),
                go_type: "[]*Item".to_string(),
                json_tag: "items".to_string(),
            },
        ];

        let out = render_struct("StructVal", &fields);
        assert_eq!(
            out,
            "type StructVal struct {\n\
             \tAString string `json:\"aString\"`\n\
             \tItems []*Item `json:\"items\"`\n\
             }\n"
        );
    }
}
