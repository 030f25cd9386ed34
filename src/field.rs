//! Field semantic types and values
//!
//! Every tuple column declares one of four semantic types. Values are kept
//! in a generic box ([`FieldValue`]) so the generic [`Tuple`](crate::Tuple)
//! row can hold any shape; the generated wrappers cast in and out of it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Semantic type of a tuple field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// UTF-8 text, including symbolic references to other tuples
    String,
    /// 64-bit signed integer
    Number,
    /// Filesystem path, resolved by the binder at layout time
    Path,
    /// Boolean flag
    Bool,
}

impl FieldType {
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Path => "path",
            FieldType::Bool => "bool",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Static metadata describing one column of a tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    /// Column name, unique within its tuple
    pub name: &'static str,
    /// Declared semantic type
    pub ty: FieldType,
    /// Whether the field may stay unset in a complete row
    pub nullable: bool,
}

impl FieldDefinition {
    pub const fn new(name: &'static str, ty: FieldType, nullable: bool) -> Self {
        Self { name, ty, nullable }
    }
}

/// A concrete field value
///
/// Serialized externally tagged so `Path` and `String` stay distinct on
/// disk and round-trip exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    String(String),
    Number(i64),
    Path(PathBuf),
    Bool(bool),
}

impl FieldValue {
    /// The semantic type this value satisfies
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::String(_) => FieldType::String,
            FieldValue::Number(_) => FieldType::Number,
            FieldValue::Path(_) => FieldType::Path,
            FieldValue::Bool(_) => FieldType::Bool,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            FieldValue::Path(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Like [`as_string`](Self::as_string) but panics on a type mismatch.
    ///
    /// # Panics
    /// Panics if the value is not a string. A mismatch here means a caller
    /// stored the wrong shape through the untyped API.
    #[track_caller]
    pub fn expect_string(&self) -> &str {
        match self {
            FieldValue::String(s) => s,
            other => panic!("expected string field, got {}", other.field_type()),
        }
    }

    /// # Panics
    /// Panics if the value is not a number.
    #[track_caller]
    pub fn expect_number(&self) -> i64 {
        match self {
            FieldValue::Number(n) => *n,
            other => panic!("expected number field, got {}", other.field_type()),
        }
    }

    /// # Panics
    /// Panics if the value is not a path.
    #[track_caller]
    pub fn expect_path(&self) -> &Path {
        match self {
            FieldValue::Path(p) => p,
            other => panic!("expected path field, got {}", other.field_type()),
        }
    }

    /// # Panics
    /// Panics if the value is not a bool.
    #[track_caller]
    pub fn expect_bool(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            other => panic!("expected bool field, got {}", other.field_type()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Path(p) => write!(f, "{}", p.display()),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as i64)
    }
}

impl From<PathBuf> for FieldValue {
    fn from(p: PathBuf) -> Self {
        FieldValue::Path(p)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_of_value() {
        assert_eq!(FieldValue::from("x").field_type(), FieldType::String);
        assert_eq!(FieldValue::from(7i64).field_type(), FieldType::Number);
        assert_eq!(
            FieldValue::from(PathBuf::from("a/b")).field_type(),
            FieldType::Path
        );
        assert_eq!(FieldValue::from(true).field_type(), FieldType::Bool);
    }

    #[test]
    fn test_typed_accessors() {
        let v = FieldValue::from("hello");
        assert_eq!(v.as_string(), Some("hello"));
        assert_eq!(v.as_number(), None);
        assert_eq!(v.expect_string(), "hello");
    }

    #[test]
    #[should_panic(expected = "expected number field")]
    fn test_expect_wrong_type_panics() {
        FieldValue::from("not a number").expect_number();
    }

    #[test]
    fn test_serde_keeps_path_and_string_distinct() {
        let path = FieldValue::Path(PathBuf::from("bin/setup.exe"));
        let json = serde_json::to_string(&path).unwrap();
        let back: FieldValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back.field_type(), FieldType::Path);
        assert_eq!(back, path);
    }
}
