//! Go source emission modules.

pub mod assembly;
pub mod bindings;
pub mod structs;

/// Converts an exported Go field name to its lower-camel serialization tag.
///
/// Pure transform with no collision handling; two fields differing only in
/// case produce the same tag.
#[must_use]
pub fn to_lower_camel(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(s.len());
            result.push(first.to_ascii_lowercase());
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_lower_camel() {
        assert_eq!(to_lower_camel("Name"), "name");
        assert_eq!(to_lower_camel("StructMap"), "structMap");
        assert_eq!(to_lower_camel("AString"), "aString");
        assert_eq!(to_lower_camel(""), "");
    }
}
