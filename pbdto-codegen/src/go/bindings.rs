//! Conversion function synthesis.
//!
//! Both directions are rendered by the same routine: they are structurally
//! symmetric and differ only in parameter naming and in which side of the
//! conversion carries the `pb.` package qualifier. Constructor assignments
//! are kept as an ordered list in source field order so output is
//! deterministic.

use crate::generator::FieldShape;
use crate::go::to_lower_camel;
use pbdto_schema::FieldDef;
use std::fmt::Write as _;

/// Direction of a conversion function.
#[derive(Debug, Clone, Copy)]
enum Direction {
    /// Wire struct to DTO.
    FromPb,
    /// DTO to wire struct.
    ToPb,
}

impl Direction {
    /// Source parameter name.
    const fn src(self) -> &'static str {
        match self {
            Self::FromPb => "pb",
            Self::ToPb => "orig",
        }
    }

    /// Generated function name suffix; also the suffix of the same-direction
    /// conversion called for struct-typed fields.
    const fn func_suffix(self) -> &'static str {
        match self {
            Self::FromPb => "FromPB",
            Self::ToPb => "ToPB",
        }
    }

    /// Package qualifier of the source parameter type.
    const fn source_qualifier(self) -> &'static str {
        match self {
            Self::FromPb => "pb.",
            Self::ToPb => "",
        }
    }

    /// Package qualifier of the constructed target type.
    const fn target_qualifier(self) -> &'static str {
        match self {
            Self::FromPb => "",
            Self::ToPb => "pb.",
        }
    }
}

/// Synthesizes the wire-to-DTO conversion function for one struct.
#[must_use]
pub fn from_pb(struct_name: &str, fields: &[(FieldDef, FieldShape)]) -> String {
    render(Direction::FromPb, struct_name, fields)
}

/// Synthesizes the DTO-to-wire conversion function for one struct.
#[must_use]
pub fn to_pb(struct_name: &str, fields: &[(FieldDef, FieldShape)]) -> String {
    render(Direction::ToPb, struct_name, fields)
}

fn render(dir: Direction, struct_name: &str, fields: &[(FieldDef, FieldShape)]) -> String {
    let src = dir.src();
    let suffix = dir.func_suffix();
    let target_q = dir.target_qualifier();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "func {struct_name}{suffix}({src} *{}{struct_name}) *{}{struct_name} {{",
        dir.source_qualifier(),
        target_q,
    );

    // Absence guard: never build a partial value from a nil source.
    let _ = writeln!(out, "\tif {src} == nil {{");
    let _ = writeln!(out, "\t\treturn nil");
    let _ = writeln!(out, "\t}}");

    let mut assignments: Vec<(String, String)> = Vec::with_capacity(fields.len());

    for (field, shape) in fields {
        let name = &field.name;
        match shape {
            FieldShape::Scalar => {
                assignments.push((name.clone(), format!("{src}.{name}")));
            }
            FieldShape::StructRef(elem) => {
                assignments.push((name.clone(), format!("{elem}{suffix}({src}.{name})")));
            }
            FieldShape::Sequence(elem) => {
                let local = to_lower_camel(name);
                let _ = writeln!(
                    out,
                    "\t{local} := make([]*{target_q}{elem}, 0, len({src}.{name}))"
                );
                let _ = writeln!(out, "\tfor _, v := range {src}.{name} {{");
                let _ = writeln!(out, "\t\t{local} = append({local}, {elem}{suffix}(v))");
                let _ = writeln!(out, "\t}}");
                assignments.push((name.clone(), local));
            }
            FieldShape::Associative { key, elem } => {
                let local = to_lower_camel(name);
                let _ = writeln!(
                    out,
                    "\t{local} := make(map[{key}]*{target_q}{elem}, len({src}.{name}))"
                );
                let _ = writeln!(out, "\tfor k, v := range {src}.{name} {{");
                let _ = writeln!(out, "\t\t{local}[k] = {elem}{suffix}(v)");
                let _ = writeln!(out, "\t}}");
                assignments.push((name.clone(), local));
            }
        }
    }

    if assignments.is_empty() {
        let _ = writeln!(out, "\treturn &{target_q}{struct_name}{{}}");
    } else {
        let _ = writeln!(out, "\treturn &{target_q}{struct_name}{{");
        for (name, expr) in &assignments {
            let _ = writeln!(out, "\t\t{name}: {expr},");
        }
        let _ = writeln!(out, "\t}}");
    }
    out.push_str("}\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_struct_guard_then_construct() {
        let out = from_pb("PingRequest", &[]);
        assert_eq!(
            out,
            "func PingRequestFromPB(pb *pb.PingRequest) *PingRequest {\n\
             \tif pb == nil {\n\
             \t\treturn nil\n\
             \t}\n\
             \treturn &PingRequest{}\n\
             }\n"
        );
    }

    #[test]
    fn test_scalar_field_direct_copy() {
        let bound = vec![(FieldDef::new("Name", "string"), FieldShape::Scalar)];
        let out = from_pb("Item", &bound);
        assert!(out.contains("\t\tName: pb.Name,\n"));

        let out = to_pb("Item", &bound);
        assert!(out.contains("\t\tName: orig.Name,\n"));
        assert!(out.contains("return &pb.Item{"));
    }

    #[test]
    fn test_single_struct_field_recursive_call() {
        let bound = vec![(
            FieldDef::new("Address", "*Address"),
            FieldShape::StructRef("Address".to_string()),
        )];

        let out = from_pb("Person", &bound);
        assert!(out.contains("\t\tAddress: AddressFromPB(pb.Address),\n"));

        let out = to_pb("Person", &bound);
        assert!(out.contains("\t\tAddress: AddressToPB(orig.Address),\n"));
    }

    #[test]
    fn test_sequence_field_allocates_and_appends() {
        let bound = vec![(
            FieldDef::new("Items", "[]*Item"),
            FieldShape::Sequence("Item".to_string()),
        )];

        let out = from_pb("Envelope", &bound);
        assert!(out.contains("\titems := make([]*Item, 0, len(pb.Items))\n"));
        assert!(out.contains("\tfor _, v := range pb.Items {\n"));
        assert!(out.contains("\t\titems = append(items, ItemFromPB(v))\n"));
        assert!(out.contains("\t\tItems: items,\n"));

        let out = to_pb("Envelope", &bound);
        assert!(out.contains("\titems := make([]*pb.Item, 0, len(orig.Items))\n"));
        assert!(out.contains("\t\titems = append(items, ItemToPB(v))\n"));
    }

    #[test]
    fn test_associative_field_allocates_and_inserts() {
        let bound = vec![(
            FieldDef::new("Tags", "map[string]*Tag"),
            FieldShape::Associative {
                key: "string".to_string(),
                elem: "Tag".to_string(),
            },
        )];

        let out = to_pb("Box", &bound);
        assert!(out.contains("\ttags := make(map[string]*pb.Tag, len(orig.Tags))\n"));
        assert!(out.contains("\tfor k, v := range orig.Tags {\n"));
        assert!(out.contains("\t\ttags[k] = TagToPB(v)\n"));
        assert!(out.contains("\t\tTags: tags,\n"));
    }

    #[test]
    fn test_two_collection_fields_get_distinct_locals() {
        let bound = vec![
            (
                FieldDef::new("StructMap", "map[string]*StructVal"),
                FieldShape::Associative {
                    key: "string".to_string(),
                    elem: "StructVal".to_string(),
                },
            ),
            (
                FieldDef::new("StructSlice", "[]*StructVal"),
                FieldShape::Sequence("StructVal".to_string()),
            ),
        ];

        let out = from_pb("Something", &bound);
        assert!(out.contains("structMap := make(map[string]*StructVal, len(pb.StructMap))"));
        assert!(out.contains("structSlice := make([]*StructVal, 0, len(pb.StructSlice))"));
        assert!(out.contains("\t\tStructMap: structMap,\n"));
        assert!(out.contains("\t\tStructSlice: structSlice,\n"));
    }

    #[test]
    fn test_assignments_preserve_source_field_order() {
        let bound = vec![
            (FieldDef::new("B", "string"), FieldShape::Scalar),
            (FieldDef::new("A", "string"), FieldShape::Scalar),
        ];
        let out = from_pb("Ordered", &bound);

        let b_pos = out.find("B: pb.B,").expect("B assignment missing");
        let a_pos = out.find("A: pb.A,").expect("A assignment missing");
        assert!(b_pos < a_pos);
    }
}
