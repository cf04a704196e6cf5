//! pb.go wire-schema parser.
//!
//! This module extracts `type X struct { ... }` blocks and their field
//! name/type pairs from a protoc-generated Go source file. Everything else
//! in the file (imports, methods, interfaces, descriptor tables) is
//! ignored. Struct tags are stripped; the raw type text is kept verbatim
//! for the classifier.
//!
//! Anonymous nested struct types do not occur in protoc output and are not
//! supported.

use crate::error::ParseError;
use crate::types::{FieldDef, StructDef};
use tracing::{debug, trace};

/// Parses the struct definitions out of pb.go source text.
///
/// # Arguments
/// * `src` - pb.go file content
///
/// # Returns
/// All struct definitions, in source order.
///
/// # Errors
/// Returns `ParseError` if a struct block is unterminated or a line inside
/// a struct block cannot be read as a field.
pub fn parse_pb_go(src: &str) -> Result<Vec<StructDef>, ParseError> {
    let mut structs = Vec::new();
    let mut current: Option<StructDef> = None;

    for raw_line in src.lines() {
        let line = raw_line.trim();

        if current.is_some() {
            if line.starts_with('}') {
                if let Some(done) = current.take() {
                    debug!(name = %done.name, fields = done.fields.len(), "parsed struct");
                    structs.push(done);
                }
                continue;
            }
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            if let Some(def) = current.as_mut() {
                let field = parse_field_line(&def.name, line)?;
                trace!(name = %field.name, raw_type = %field.raw_type, "parsed field");
                def.add_field(field);
            }
            continue;
        }

        if let Some((name, closed)) = match_struct_start(line) {
            let def = StructDef::new(name);
            if closed {
                debug!(name = %def.name, "parsed empty struct");
                structs.push(def);
            } else {
                current = Some(def);
            }
        }
    }

    if let Some(def) = current {
        return Err(ParseError::UnterminatedStruct { name: def.name });
    }

    Ok(structs)
}

/// Matches a `type <Name> struct {` line.
///
/// Returns the struct name and whether the block closed on the same line
/// (`type X struct{}`).
fn match_struct_start(line: &str) -> Option<(String, bool)> {
    let rest = line.strip_prefix("type ")?;
    let (name, rest) = rest.split_once(char::is_whitespace)?;
    if !is_identifier(name) {
        return None;
    }
    let rest = rest.trim_start().strip_prefix("struct")?;
    let rest = rest.trim_start().strip_prefix('{')?;
    let rest = rest.trim();
    if rest == "}" {
        return Some((name.to_string(), true));
    }
    if rest.is_empty() {
        return Some((name.to_string(), false));
    }
    // Struct with an inline body is not something protoc emits.
    None
}

/// Parses a `Name Type` field line, dropping any trailing struct tag.
fn parse_field_line(struct_name: &str, line: &str) -> Result<FieldDef, ParseError> {
    let line = match line.find('`') {
        Some(idx) => line[..idx].trim_end(),
        None => line,
    };

    let mut parts = line.split_whitespace();
    let (Some(name), Some(raw_type)) = (parts.next(), parts.next()) else {
        return Err(ParseError::malformed_field(struct_name, line));
    };
    if !is_identifier(name) {
        return Err(ParseError::malformed_field(struct_name, line));
    }

    Ok(FieldDef::new(name, raw_type))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
