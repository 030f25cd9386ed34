//! Row identity: identifiers and source-line markers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visibility of an identifier across sections and libraries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessModifier {
    /// Visible everywhere; duplicate global identifiers are a link error
    Global,
    /// Visible to everything linked into the same library
    Library,
    /// Visible within the defining source file
    File,
    /// Visible within the defining section only
    Section,
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessModifier::Global => "global",
            AccessModifier::Library => "library",
            AccessModifier::File => "file",
            AccessModifier::Section => "section",
        };
        write!(f, "{}", name)
    }
}

/// Identifier attached to a tuple row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub access: AccessModifier,
    pub id: String,
}

impl Identifier {
    pub fn new(access: AccessModifier, id: impl Into<String>) -> Self {
        Self {
            access,
            id: id.into(),
        }
    }

    /// Shorthand for the common globally-visible case
    pub fn global(id: impl Into<String>) -> Self {
        Self::new(AccessModifier::Global, id)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Marker pointing back at the authored source that produced a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLineNumber {
    /// Source file path as authored
    pub file: String,
    /// 1-based line, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl SourceLineNumber {
    pub fn new(file: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file, line),
            None => write!(f, "{}", self.file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_display() {
        let id = Identifier::global("MainExecutable");
        assert_eq!(id.to_string(), "MainExecutable");
        assert_eq!(id.access, AccessModifier::Global);
    }

    #[test]
    fn test_source_line_display() {
        let s = SourceLineNumber::new("product.fxs", Some(42));
        assert_eq!(s.to_string(), "product.fxs:42");
        let s = SourceLineNumber::new("product.fxs", None);
        assert_eq!(s.to_string(), "product.fxs");
    }
}
