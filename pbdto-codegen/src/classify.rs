//! Field type classification.
//!
//! A raw Go type string is classified once into a [`TypeShape`] so the
//! generator switches on a closed tag set instead of re-inspecting the
//! string. Whether the extracted name denotes a struct is not decided here;
//! that needs the registry and is resolved by the caller.
//!
//! Nested collections (`[]map[string]T`, `map[string][]T`) are out of
//! scope: classification does not crash on them but the resulting shape is
//! not meaningful.

use crate::error::MalformedType;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the first bracket pair, capturing the key type of a map.
static BETWEEN_BRACKETS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]").expect("bracket regex"));

/// Shape of a raw field type, before struct-ness resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// A plain scalar-or-struct name, indirection stripped.
    Single {
        /// Bare type name.
        elem: String,
    },
    /// A slice of elements, keyed by index.
    Sequence {
        /// Bare element type name.
        elem: String,
    },
    /// A map of elements, keyed by a scalar.
    Associative {
        /// Key type text.
        key: String,
        /// Bare element type name.
        elem: String,
    },
}

impl TypeShape {
    /// Returns the referenced element type name.
    #[must_use]
    pub fn elem(&self) -> &str {
        match self {
            Self::Single { elem } | Self::Sequence { elem } | Self::Associative { elem, .. } => {
                elem
            }
        }
    }
}

/// Classifies a raw Go type string.
///
/// # Errors
/// Returns [`MalformedType`] for map syntax with no matching closing
/// bracket. This is a programmer or schema error and fails the run; it is
/// never silently defaulted.
pub fn classify(raw_type: &str) -> Result<TypeShape, MalformedType> {
    let raw = raw_type.trim();

    if let Some(rest) = raw.strip_prefix("[]") {
        return Ok(TypeShape::Sequence {
            elem: strip_pointer(rest).to_string(),
        });
    }

    if raw.starts_with("map[") {
        let key = BETWEEN_BRACKETS
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| MalformedType {
                raw_type: raw.to_string(),
            })?
            .as_str()
            .to_string();
        // Value type starts after the key's closing bracket.
        let close = raw.find(']').unwrap_or(raw.len() - 1);
        return Ok(TypeShape::Associative {
            key,
            elem: strip_pointer(&raw[close + 1..]).to_string(),
        });
    }

    Ok(TypeShape::Single {
        elem: strip_pointer(raw).to_string(),
    })
}

fn strip_pointer(s: &str) -> &str {
    s.trim_start_matches('*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar() {
        assert_eq!(
            classify("string").unwrap(),
            TypeShape::Single {
                elem: "string".to_string()
            }
        );
    }

    #[test]
    fn test_pointer_struct() {
        assert_eq!(
            classify("*Address").unwrap(),
            TypeShape::Single {
                elem: "Address".to_string()
            }
        );
    }

    #[test]
    fn test_slice_of_struct_pointers() {
        assert_eq!(
            classify("[]*Item").unwrap(),
            TypeShape::Sequence {
                elem: "Item".to_string()
            }
        );
    }

    #[test]
    fn test_slice_of_scalars() {
        assert_eq!(
            classify("[]string").unwrap(),
            TypeShape::Sequence {
                elem: "string".to_string()
            }
        );
    }

    #[test]
    fn test_map_of_struct_pointers() {
        assert_eq!(
            classify("map[string]*Tag").unwrap(),
            TypeShape::Associative {
                key: "string".to_string(),
                elem: "Tag".to_string()
            }
        );
    }

    #[test]
    fn test_map_key_extraction() {
        let shape = classify("map[int64]*Entry").unwrap();
        assert_eq!(
            shape,
            TypeShape::Associative {
                key: "int64".to_string(),
                elem: "Entry".to_string()
            }
        );
    }

    #[test]
    fn test_map_of_scalars() {
        assert_eq!(
            classify("map[string]string").unwrap(),
            TypeShape::Associative {
                key: "string".to_string(),
                elem: "string".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_map_is_fatal() {
        let err = classify("map[string*Tag").unwrap_err();
        assert_eq!(err.raw_type, "map[string*Tag");
    }

    #[test]
    fn test_nested_collection_does_not_crash() {
        // Not supported; shape is nonsensical but classification must not panic.
        let shape = classify("[]map[string]*Item").unwrap();
        assert!(matches!(shape, TypeShape::Sequence { .. }));
    }
}
