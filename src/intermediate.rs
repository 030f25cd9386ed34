//! Intermediate files
//!
//! The serialized form the compiler hands to the linker/binder: a
//! versioned JSON document of sections, each holding tuple rows. Loading
//! verifies the format version, the content checksum, and every row
//! against its static definition, so downstream consumers never see a
//! malformed tuple.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use semver::Version;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::checksum::Checksum;
use crate::definition::TupleKind;
use crate::error::{Result, TupleError};
use crate::tuple::Tuple;

/// Current intermediate format version; loads require a matching major
pub fn format_version() -> Version {
    Version::new(4, 0, 0)
}

/// What a section contributes to the final package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Reusable unit, linked in when referenced
    Fragment,
    /// Entry section for a product package
    Product,
    /// Entry section for a merge module
    Module,
    /// Entry section for a patch
    Patch,
}

/// A group of tuples linked as a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub kind: SectionKind,
    pub tuples: Vec<Tuple>,
}

impl Section {
    pub fn new(id: Option<String>, kind: SectionKind) -> Self {
        Self {
            id,
            kind,
            tuples: Vec::new(),
        }
    }

    pub fn add_tuple(&mut self, tuple: impl Into<Tuple>) {
        self.tuples.push(tuple.into());
    }

    /// All rows of one kind, in insertion order
    pub fn tuples_of_kind(&self, kind: TupleKind) -> impl Iterator<Item = &Tuple> {
        self.tuples.iter().filter(move |t| t.kind() == kind)
    }
}

/// One compiled source file's worth of sections
#[derive(Debug, Clone, PartialEq)]
pub struct Intermediate {
    /// Stable identifier, usually derived from the source file name
    pub id: String,
    /// When the intermediate was produced
    pub created_at: DateTime<Utc>,
    pub sections: Vec<Section>,
}

/// On-disk layout of an intermediate file
#[derive(Serialize, Deserialize)]
struct IntermediateFile {
    version: Version,
    id: String,
    created_at: DateTime<Utc>,
    /// SHA256 over the compact JSON serialization of `sections`
    checksum: Checksum,
    sections: Vec<Section>,
}

impl Intermediate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: Utc::now(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// All rows across all sections
    pub fn tuples(&self) -> impl Iterator<Item = &Tuple> {
        self.sections.iter().flat_map(|s| s.tuples.iter())
    }

    /// Find a row by identifier
    pub fn find_tuple(&self, id: &str) -> Option<&Tuple> {
        self.tuples()
            .find(|t| t.id.as_ref().map(|i| i.id.as_str()) == Some(id))
    }

    /// Row count per kind, for reporting
    pub fn kind_counts(&self) -> BTreeMap<TupleKind, usize> {
        let mut counts = BTreeMap::new();
        for tuple in self.tuples() {
            *counts.entry(tuple.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Verify every row against its static definition
    pub fn validate(&self) -> Result<()> {
        for section in &self.sections {
            debug!(
                section = section.id.as_deref().unwrap_or("<anonymous>"),
                tuples = section.tuples.len(),
                "validating section"
            );
            for tuple in &section.tuples {
                tuple.validate()?;
            }
        }
        Ok(())
    }

    /// Strict variant of [`validate`](Self::validate): every row must
    /// also have all of its non-nullable fields set
    pub fn validate_complete(&self) -> Result<()> {
        for tuple in self.tuples() {
            tuple.validate_complete()?;
        }
        Ok(())
    }

    /// Write the intermediate to disk as checksummed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let payload = serde_json::to_string(&self.sections)?;
        let file = IntermediateFile {
            version: format_version(),
            id: self.id.clone(),
            created_at: self.created_at,
            checksum: Checksum::of(&payload),
            sections: self.sections.clone(),
        };

        let content = serde_json::to_string_pretty(&file)?;
        fs::write(path.as_ref(), content)?;

        info!(
            id = %self.id,
            sections = self.sections.len(),
            path = %path.as_ref().display(),
            "wrote intermediate"
        );
        Ok(())
    }

    /// Read an intermediate back, verifying version, checksum, and rows
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let file: IntermediateFile = serde_json::from_str(&content)?;

        let supported = format_version();
        if file.version.major != supported.major {
            return Err(TupleError::UnsupportedFormatVersion {
                found: file.version.to_string(),
                supported: supported.to_string(),
            });
        }

        // Recomputed over the same compact serialization save() hashed
        let payload = serde_json::to_string(&file.sections)?;
        let computed = Checksum::of(&payload);
        if computed != file.checksum {
            return Err(TupleError::ChecksumMismatch {
                expected: file.checksum.to_string(),
                actual: computed.to_string(),
            });
        }

        let intermediate = Self {
            id: file.id,
            created_at: file.created_at,
            sections: file.sections,
        };
        intermediate.validate()?;

        info!(
            id = %intermediate.id,
            sections = intermediate.sections.len(),
            "loaded intermediate"
        );
        Ok(intermediate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Identifier;
    use crate::tuples::core::PropertyTuple;

    fn sample() -> Intermediate {
        let mut section = Section::new(Some("ProductSection".into()), SectionKind::Product);
        let mut property = PropertyTuple::new(Some(Identifier::global("Manufacturer")));
        property.set_value(Some("Example Corp".into()));
        section.add_tuple(property);

        let mut intermediate = Intermediate::new("product.fxobj");
        intermediate.add_section(section);
        intermediate
    }

    #[test]
    fn test_find_tuple_by_id() {
        let intermediate = sample();
        assert!(intermediate.find_tuple("Manufacturer").is_some());
        assert!(intermediate.find_tuple("Missing").is_none());
    }

    #[test]
    fn test_kind_counts() {
        let intermediate = sample();
        let counts = intermediate.kind_counts();
        assert_eq!(counts.get(&TupleKind::Property), Some(&1));
    }

    #[test]
    fn test_validate_fresh_intermediate() {
        sample().validate().unwrap();
    }
}
