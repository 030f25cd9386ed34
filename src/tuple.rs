//! The generic tuple row
//!
//! A [`Tuple`] is one row of the intermediate representation: a kind, an
//! optional identifier, an optional source marker, and a fixed-size array
//! of typed field slots matching the kind's static definition. Every slot
//! starts unset. The untyped `set`/`field` surface here is what the
//! generated wrappers in [`tuples`](crate::tuples) build their accessors
//! on.

use serde::{Deserialize, Serialize};

use crate::definition::{TupleDefinition, TupleKind};
use crate::error::{Result, TupleError};
use crate::field::FieldValue;
use crate::source::{Identifier, SourceLineNumber};

/// One row of the intermediate representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuple {
    kind: TupleKind,
    /// Identifier, when the row is addressable by symbolic reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    /// Where in the authored source this row came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceLineNumber>,
    fields: Vec<Option<FieldValue>>,
}

impl Tuple {
    /// Create a row of the given kind with every field slot unset
    pub fn new(kind: TupleKind) -> Self {
        Self {
            kind,
            id: None,
            source: None,
            fields: vec![None; kind.definition().fields.len()],
        }
    }

    /// Create a row carrying an identifier
    pub fn with_id(kind: TupleKind, id: Identifier) -> Self {
        let mut tuple = Self::new(kind);
        tuple.id = Some(id);
        tuple
    }

    /// Attach a source marker, builder style
    pub fn at(mut self, source: SourceLineNumber) -> Self {
        self.source = Some(source);
        self
    }

    pub fn kind(&self) -> TupleKind {
        self.kind
    }

    /// The static definition this row conforms to
    pub fn definition(&self) -> &'static TupleDefinition {
        self.kind.definition()
    }

    /// Number of field slots
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Read a field slot; `None` means the field is unset
    ///
    /// # Panics
    /// Panics if `index` is past the end of the definition. An enum-derived
    /// index can never be out of range.
    #[track_caller]
    pub fn field(&self, index: usize) -> Option<&FieldValue> {
        match self.fields.get(index) {
            Some(slot) => slot.as_ref(),
            None => panic!(
                "field index {} out of range for {} ({} fields)",
                index,
                self.kind,
                self.fields.len()
            ),
        }
    }

    /// Set a field slot, checking the index and the declared semantic type
    pub fn set(&mut self, index: usize, value: impl Into<FieldValue>) -> Result<()> {
        let definition = self.definition();
        let field = definition.fields.get(index).ok_or(TupleError::FieldIndexOutOfRange {
            tuple: self.kind,
            index,
            count: definition.fields.len(),
        })?;

        let value = value.into();
        if value.field_type() != field.ty {
            return Err(TupleError::FieldTypeMismatch {
                tuple: self.kind,
                field: field.name,
                expected: field.ty,
                actual: value.field_type(),
            });
        }

        self.fields[index] = Some(value);
        Ok(())
    }

    /// Unset a field slot
    ///
    /// # Panics
    /// Panics if `index` is out of range, like [`field`](Self::field).
    #[track_caller]
    pub fn clear(&mut self, index: usize) {
        // range check shares field()'s panic message
        let _ = self.field(index);
        self.fields[index] = None;
    }

    /// Verify this row against its static definition
    ///
    /// Rows built through [`new`](Self::new) and [`set`](Self::set) always
    /// pass; deserialized rows may not.
    pub fn validate(&self) -> Result<()> {
        let definition = self.definition();
        if self.fields.len() != definition.fields.len() {
            return Err(TupleError::FieldCountMismatch {
                tuple: self.kind,
                expected: definition.fields.len(),
                actual: self.fields.len(),
            });
        }

        for (field, slot) in definition.fields.iter().zip(&self.fields) {
            if let Some(value) = slot {
                if value.field_type() != field.ty {
                    return Err(TupleError::FieldTypeMismatch {
                        tuple: self.kind,
                        field: field.name,
                        expected: field.ty,
                        actual: value.field_type(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Like [`validate`](Self::validate), but also require every
    /// non-nullable field to be set
    ///
    /// A row fresh out of the compiler may legitimately be incomplete; a
    /// row handed to the binder may not.
    pub fn validate_complete(&self) -> Result<()> {
        self.validate()?;
        for (field, slot) in self.definition().fields.iter().zip(&self.fields) {
            if slot.is_none() && !field.nullable {
                return Err(TupleError::RequiredFieldUnset {
                    tuple: self.kind,
                    field: field.name,
                });
            }
        }
        Ok(())
    }

    // Typed slot readers used by the generated wrappers. A mismatch means
    // the row was mutated through the untyped surface with the wrong shape.

    /// # Panics
    /// Panics if the slot is unset or holds a non-string value.
    #[track_caller]
    pub fn expect_string(&self, index: usize) -> &str {
        self.expect_field(index).expect_string()
    }

    /// # Panics
    /// Panics if the slot is unset or holds a non-number value.
    #[track_caller]
    pub fn expect_number(&self, index: usize) -> i64 {
        self.expect_field(index).expect_number()
    }

    /// # Panics
    /// Panics if the slot is unset or holds a non-path value.
    #[track_caller]
    pub fn expect_path(&self, index: usize) -> &std::path::Path {
        self.expect_field(index).expect_path()
    }

    /// # Panics
    /// Panics if the slot is unset or holds a non-bool value.
    #[track_caller]
    pub fn expect_bool(&self, index: usize) -> bool {
        self.expect_field(index).expect_bool()
    }

    /// # Panics
    /// Panics on a set slot holding a non-string value.
    #[track_caller]
    pub fn opt_string(&self, index: usize) -> Option<&str> {
        self.field(index).map(FieldValue::expect_string)
    }

    /// # Panics
    /// Panics on a set slot holding a non-number value.
    #[track_caller]
    pub fn opt_number(&self, index: usize) -> Option<i64> {
        self.field(index).map(FieldValue::expect_number)
    }

    /// # Panics
    /// Panics on a set slot holding a non-path value.
    #[track_caller]
    pub fn opt_path(&self, index: usize) -> Option<&std::path::Path> {
        self.field(index).map(FieldValue::expect_path)
    }

    /// # Panics
    /// Panics on a set slot holding a non-bool value.
    #[track_caller]
    pub fn opt_bool(&self, index: usize) -> Option<bool> {
        self.field(index).map(FieldValue::expect_bool)
    }

    #[track_caller]
    fn expect_field(&self, index: usize) -> &FieldValue {
        match self.field(index) {
            Some(value) => value,
            None => panic!(
                "field '{}' of {} is unset",
                self.definition().fields[index].name,
                self.kind
            ),
        }
    }

    /// Store a value the wrappers have already type-checked by construction
    #[track_caller]
    pub(crate) fn put(&mut self, index: usize, value: FieldValue) {
        debug_assert_eq!(
            value.field_type(),
            self.definition().fields[index].ty,
            "wrapper stored the wrong shape in '{}' of {}",
            self.definition().fields[index].name,
            self.kind
        );
        let _ = self.field(index);
        self.fields[index] = Some(value);
    }

    /// Unset a slot from a wrapper's nullable setter
    #[track_caller]
    pub(crate) fn unset(&mut self, index: usize) {
        self.clear(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldType;

    #[test]
    fn test_new_tuple_has_all_slots_unset() {
        let tuple = Tuple::new(TupleKind::Property);
        assert_eq!(tuple.field_count(), TupleKind::Property.definition().fields.len());
        for index in 0..tuple.field_count() {
            assert!(tuple.field(index).is_none());
        }
    }

    #[test]
    fn test_set_and_read_back() {
        let mut tuple = Tuple::new(TupleKind::Property);
        tuple.set(0, "INSTALLDIR").unwrap();
        assert_eq!(tuple.field(0).unwrap().as_string(), Some("INSTALLDIR"));
    }

    #[test]
    fn test_set_rejects_wrong_type() {
        let mut tuple = Tuple::new(TupleKind::Property);
        // Property field 0 is a string
        let err = tuple.set(0, 5i64).unwrap_err();
        match err {
            TupleError::FieldTypeMismatch { expected, actual, .. } => {
                assert_eq!(expected, FieldType::String);
                assert_eq!(actual, FieldType::Number);
            }
            other => panic!("expected FieldTypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_set_rejects_out_of_range_index() {
        let mut tuple = Tuple::new(TupleKind::Property);
        let count = tuple.field_count();
        let err = tuple.set(count, "x").unwrap_err();
        assert!(matches!(err, TupleError::FieldIndexOutOfRange { .. }));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_field_panics_out_of_range() {
        let tuple = Tuple::new(TupleKind::Property);
        let count = tuple.field_count();
        let _ = tuple.field(count);
    }

    #[test]
    fn test_clear_unsets_slot() {
        let mut tuple = Tuple::new(TupleKind::Property);
        tuple.set(0, "NAME").unwrap();
        tuple.clear(0);
        assert!(tuple.field(0).is_none());
    }

    #[test]
    fn test_validate_catches_short_row() {
        let mut tuple = Tuple::new(TupleKind::File);
        tuple.fields.pop();
        assert!(matches!(
            tuple.validate(),
            Err(TupleError::FieldCountMismatch { .. })
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut tuple = Tuple::with_id(TupleKind::Property, Identifier::global("VERSIONCHECK"));
        tuple.set(0, "VERSIONCHECK").unwrap();
        let json = serde_json::to_string(&tuple).unwrap();
        let back: Tuple = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tuple);
        back.validate().unwrap();
    }
}
