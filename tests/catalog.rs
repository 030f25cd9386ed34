//! Catalog Shape Tests
//!
//! Tests the invariants every kind in the catalog must hold: definition
//! and field-enum arity match, typed round-trips, and unset defaults.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use msi_tuples::tuples::actions::{CustomActionTuple, CustomActionTupleFields, CUSTOM_ACTION};
use msi_tuples::tuples::com::{ClassTupleFields, CLASS};
use msi_tuples::tuples::core::{
    ComponentTuple, ComponentTupleFields, FileTuple, FileTupleFields, PropertyTuple,
    PropertyTupleFields, ShortcutTupleFields, COMPONENT, FILE, PROPERTY, SHORTCUT,
};
use msi_tuples::tuples::registry::{RegistryTuple, RegistryTupleFields, REGISTRY};
use msi_tuples::tuples::ui::{DialogTuple, DialogTupleFields, DIALOG};
use msi_tuples::tuples::wix::{WixActionTupleFields, WIX_ACTION};
use msi_tuples::{
    FieldType, Identifier, SourceLineNumber, Tuple, TupleDefinition, TupleError, TupleKind,
};

// =============================================================================
// Definition / enum arity (one assertion per catalog group)
// =============================================================================

#[test]
fn test_field_enum_count_matches_definition() {
    assert_eq!(ComponentTupleFields::COUNT, COMPONENT.fields.len());
    assert_eq!(FileTupleFields::COUNT, FILE.fields.len());
    assert_eq!(PropertyTupleFields::COUNT, PROPERTY.fields.len());
    assert_eq!(ShortcutTupleFields::COUNT, SHORTCUT.fields.len());
    assert_eq!(RegistryTupleFields::COUNT, REGISTRY.fields.len());
    assert_eq!(DialogTupleFields::COUNT, DIALOG.fields.len());
    assert_eq!(CustomActionTupleFields::COUNT, CUSTOM_ACTION.fields.len());
    assert_eq!(ClassTupleFields::COUNT, CLASS.fields.len());
    assert_eq!(WixActionTupleFields::COUNT, WIX_ACTION.fields.len());
}

#[test]
fn test_enum_ordinals_match_definition_order() {
    assert_eq!(
        COMPONENT.fields[ComponentTupleFields::ComponentId as usize].name,
        "ComponentId"
    );
    assert_eq!(
        FILE.fields[FileTupleFields::Source as usize].name,
        "Source"
    );
    assert_eq!(
        DIALOG.fields[DialogTupleFields::CancelControlRef as usize].name,
        "CancelControlRef"
    );
}

#[test]
fn test_every_definition_is_consistent() {
    for kind in TupleKind::ALL {
        let def = TupleDefinition::of(*kind);
        assert_eq!(def.kind, *kind);
        assert_eq!(def.name, kind.name());

        let mut names = HashSet::new();
        for field in def.fields {
            assert!(
                names.insert(field.name),
                "{} declares field '{}' twice",
                def.name,
                field.name
            );
        }
    }
}

#[test]
fn test_kind_names_are_unique() {
    let names: HashSet<&str> = TupleKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(names.len(), TupleKind::ALL.len());
}

// =============================================================================
// Typed round-trips through generated wrappers
// =============================================================================

#[test]
fn test_string_round_trip() {
    let mut component = ComponentTuple::new(Some(Identifier::global("MainExe")));
    component.set_component_id("{11111111-2222-3333-4444-555555555555}");
    component.set_directory_ref("INSTALLDIR");
    assert_eq!(
        component.component_id(),
        "{11111111-2222-3333-4444-555555555555}"
    );
    assert_eq!(component.directory_ref(), "INSTALLDIR");
}

#[test]
fn test_number_round_trip() {
    let mut file = FileTuple::new(Some(Identifier::global("ReadmeTxt")));
    file.set_file_size(Some(18_432));
    assert_eq!(file.file_size(), Some(18_432));
    file.set_file_size(None);
    assert_eq!(file.file_size(), None);
}

#[test]
fn test_path_round_trip() {
    let mut file = FileTuple::new(None);
    file.set_source_path(PathBuf::from("payload/readme.txt"));
    assert_eq!(file.source_path(), Path::new("payload/readme.txt"));
}

#[test]
fn test_bool_round_trip() {
    let mut file = FileTuple::new(None);
    file.set_vital(true);
    assert!(file.vital());
    file.set_hidden(Some(false));
    assert_eq!(file.hidden(), Some(false));
}

#[test]
fn test_nullable_fields_default_to_unset() {
    let file = FileTuple::new(None);
    assert_eq!(file.short_name(), None);
    assert_eq!(file.file_size(), None);
    assert_eq!(file.hidden(), None);

    let registry = RegistryTuple::new(None);
    assert_eq!(registry.name(), None);
    assert_eq!(registry.value(), None);
}

#[test]
fn test_nullable_setter_clears_with_none() {
    let mut property = PropertyTuple::new(Some(Identifier::global("ARPCOMMENTS")));
    property.set_value(Some("A sample product".into()));
    assert_eq!(property.value(), Some("A sample product"));
    property.set_value(None);
    assert_eq!(property.value(), None);
}

#[test]
#[should_panic(expected = "unset")]
fn test_required_getter_panics_when_unset() {
    let dialog = DialogTuple::new(None);
    let _ = dialog.width();
}

// =============================================================================
// Wrapper / generic row conversions
// =============================================================================

#[test]
fn test_wrapper_into_tuple_and_back() {
    let mut action = CustomActionTuple::new(Some(Identifier::global("LaunchApp")));
    action.set_source("WixCA");
    action.set_execution_type(1i64);

    let tuple: Tuple = action.into_tuple();
    assert_eq!(tuple.kind(), TupleKind::CustomAction);

    let action = CustomActionTuple::try_from(tuple).unwrap();
    assert_eq!(action.source(), "WixCA");
    assert_eq!(action.execution_type(), 1);
}

#[test]
fn test_try_from_rejects_wrong_kind() {
    let tuple = Tuple::new(TupleKind::Property);
    let err = ComponentTuple::try_from(tuple).unwrap_err();
    match err {
        TupleError::KindMismatch { expected, actual } => {
            assert_eq!(expected, TupleKind::Component);
            assert_eq!(actual, TupleKind::Property);
        }
        other => panic!("expected KindMismatch, got {:?}", other),
    }
}

#[test]
fn test_wrapper_derefs_to_generic_row() {
    let file = FileTuple::new(Some(Identifier::global("ReadmeTxt")))
        .at(SourceLineNumber::new("files.fxs", Some(12)));
    assert_eq!(file.kind(), TupleKind::File);
    assert_eq!(file.field_count(), FILE.fields.len());
    assert_eq!(file.source.as_ref().unwrap().to_string(), "files.fxs:12");
}

// =============================================================================
// Generic surface type checks
// =============================================================================

#[test]
fn test_generic_set_enforces_declared_type() {
    let mut tuple = Tuple::new(TupleKind::Registry);
    let root = RegistryTupleFields::Root as usize;
    // Root is a number
    assert!(tuple.set(root, 2i64).is_ok());
    let err = tuple.set(root, "HKLM").unwrap_err();
    match err {
        TupleError::FieldTypeMismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, FieldType::Number);
            assert_eq!(actual, FieldType::String);
        }
        other => panic!("expected FieldTypeMismatch, got {:?}", other),
    }
}

#[test]
fn test_validate_complete_requires_non_nullable_fields() {
    let mut file = FileTuple::new(Some(Identifier::global("ReadmeTxt")));
    file.set_component_ref("MainComponent");
    file.set_name("readme.txt");
    file.set_vital(false);
    file.set_source_path(PathBuf::from("payload/readme.txt"));
    file.into_tuple().validate_complete().unwrap();

    let incomplete = FileTuple::new(None).into_tuple();
    let err = incomplete.validate_complete().unwrap_err();
    assert!(matches!(err, TupleError::RequiredFieldUnset { .. }));
}
