//! Final file assembly.
//!
//! Takes the generated units in emission order and produces the complete
//! dto file text. The wire package is imported under a fixed `pb` alias;
//! that alias is what keeps wire names and generated DTO names apart, since
//! both schemas use the same struct names.

use crate::GenerateConfig;
use crate::generator::GeneratedUnit;
use crate::go::structs;
use std::fmt::Write as _;

/// Header marking the output as generated and not hand-editable.
pub const GENERATED_HEADER: &str = "// THIS FILE IS AUTO GENERATED, DO NOT EDIT!!";

/// Renders the complete dto file.
///
/// With no units the output is the header and package clause only, which is
/// valid Go. Output is deterministic: identical input produces identical
/// bytes.
#[must_use]
pub fn render(units: &[GeneratedUnit], config: &GenerateConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{GENERATED_HEADER}");
    let _ = writeln!(out, "package {}", config.package_name);

    if units.is_empty() {
        return out;
    }

    out.push('\n');
    let _ = writeln!(out, "import pb \"{}\"", config.pb_import_path);

    for unit in units {
        out.push('\n');
        out.push_str(&structs::render_struct(&unit.type_name, &unit.fields));
        out.push('\n');
        out.push_str(&unit.from_pb);
        out.push('\n');
        out.push_str(&unit.to_pb);
    }

    out
}
