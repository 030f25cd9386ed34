//! The tuple catalog
//!
//! Each kind in the catalog is declared once with `tuple_definition!`,
//! which emits the three artifacts the rest of the toolchain relies on:
//!
//! - the static [`TupleDefinition`](crate::TupleDefinition) (ordered
//!   field name/type metadata),
//! - a field-index enum (one variant per column, declaration order),
//! - a strongly-typed wrapper over [`Tuple`](crate::Tuple) with per-field
//!   getters and setters.
//!
//! Because all three come from a single declaration, the field count and
//! order can never drift between the definition and the enum.
//!
//! Declaration syntax, per field:
//! `ColumnName / getter / setter : [opt] String|Number|Path|Bool`.
//! `opt` marks a nullable field; its accessors use `Option`.

/// Map a declared field type to its [`FieldType`](crate::FieldType)
macro_rules! field_ty {
    (String) => {
        crate::field::FieldType::String
    };
    (Number) => {
        crate::field::FieldType::Number
    };
    (Path) => {
        crate::field::FieldType::Path
    };
    (Bool) => {
        crate::field::FieldType::Bool
    };
    (opt $ty:ident) => {
        crate::tuples::field_ty!($ty)
    };
}

/// Whether a declared field is nullable
macro_rules! field_nullable {
    (opt $ty:ident) => {
        true
    };
    ($ty:ident) => {
        false
    };
}

/// Emit one field's typed getter/setter pair inside a wrapper impl
macro_rules! field_accessors {
    ($fields:ident, $variant:ident, $getter:ident, $setter:ident, [$(#[$fdoc:meta])*], String) => {
        $(#[$fdoc])*
        /// # Panics
        /// Panics if the field is unset.
        #[track_caller]
        pub fn $getter(&self) -> &str {
            self.0.expect_string($fields::$variant as usize)
        }

        pub fn $setter(&mut self, value: impl Into<String>) {
            self.0.put(
                $fields::$variant as usize,
                crate::field::FieldValue::String(value.into()),
            );
        }
    };
    ($fields:ident, $variant:ident, $getter:ident, $setter:ident, [$(#[$fdoc:meta])*], opt String) => {
        $(#[$fdoc])*
        pub fn $getter(&self) -> Option<&str> {
            self.0.opt_string($fields::$variant as usize)
        }

        pub fn $setter(&mut self, value: Option<String>) {
            match value {
                Some(v) => self.0.put(
                    $fields::$variant as usize,
                    crate::field::FieldValue::String(v),
                ),
                None => self.0.unset($fields::$variant as usize),
            }
        }
    };
    ($fields:ident, $variant:ident, $getter:ident, $setter:ident, [$(#[$fdoc:meta])*], Number) => {
        $(#[$fdoc])*
        /// # Panics
        /// Panics if the field is unset.
        #[track_caller]
        pub fn $getter(&self) -> i64 {
            self.0.expect_number($fields::$variant as usize)
        }

        pub fn $setter(&mut self, value: impl Into<i64>) {
            self.0.put(
                $fields::$variant as usize,
                crate::field::FieldValue::Number(value.into()),
            );
        }
    };
    ($fields:ident, $variant:ident, $getter:ident, $setter:ident, [$(#[$fdoc:meta])*], opt Number) => {
        $(#[$fdoc])*
        pub fn $getter(&self) -> Option<i64> {
            self.0.opt_number($fields::$variant as usize)
        }

        pub fn $setter(&mut self, value: Option<i64>) {
            match value {
                Some(v) => self.0.put(
                    $fields::$variant as usize,
                    crate::field::FieldValue::Number(v),
                ),
                None => self.0.unset($fields::$variant as usize),
            }
        }
    };
    ($fields:ident, $variant:ident, $getter:ident, $setter:ident, [$(#[$fdoc:meta])*], Path) => {
        $(#[$fdoc])*
        /// # Panics
        /// Panics if the field is unset.
        #[track_caller]
        pub fn $getter(&self) -> &std::path::Path {
            self.0.expect_path($fields::$variant as usize)
        }

        pub fn $setter(&mut self, value: impl Into<std::path::PathBuf>) {
            self.0.put(
                $fields::$variant as usize,
                crate::field::FieldValue::Path(value.into()),
            );
        }
    };
    ($fields:ident, $variant:ident, $getter:ident, $setter:ident, [$(#[$fdoc:meta])*], opt Path) => {
        $(#[$fdoc])*
        pub fn $getter(&self) -> Option<&std::path::Path> {
            self.0.opt_path($fields::$variant as usize)
        }

        pub fn $setter(&mut self, value: Option<std::path::PathBuf>) {
            match value {
                Some(v) => self.0.put(
                    $fields::$variant as usize,
                    crate::field::FieldValue::Path(v),
                ),
                None => self.0.unset($fields::$variant as usize),
            }
        }
    };
    ($fields:ident, $variant:ident, $getter:ident, $setter:ident, [$(#[$fdoc:meta])*], Bool) => {
        $(#[$fdoc])*
        /// # Panics
        /// Panics if the field is unset.
        #[track_caller]
        pub fn $getter(&self) -> bool {
            self.0.expect_bool($fields::$variant as usize)
        }

        pub fn $setter(&mut self, value: bool) {
            self.0.put(
                $fields::$variant as usize,
                crate::field::FieldValue::Bool(value),
            );
        }
    };
    ($fields:ident, $variant:ident, $getter:ident, $setter:ident, [$(#[$fdoc:meta])*], opt Bool) => {
        $(#[$fdoc])*
        pub fn $getter(&self) -> Option<bool> {
            self.0.opt_bool($fields::$variant as usize)
        }

        pub fn $setter(&mut self, value: Option<bool>) {
            match value {
                Some(v) => self.0.put(
                    $fields::$variant as usize,
                    crate::field::FieldValue::Bool(v),
                ),
                None => self.0.unset($fields::$variant as usize),
            }
        }
    };
}

/// Declare one tuple kind: static definition, field-index enum, wrapper
macro_rules! tuple_definition {
    (
        $(#[$doc:meta])*
        $kind:ident => $def:ident, $fields:ident, $wrapper:ident {
            $(
                $(#[$fdoc:meta])*
                $variant:ident / $getter:ident / $setter:ident : $($ftok:ident)+
            ),* $(,)?
        }
    ) => {
        /// Static field-definition list for this kind
        pub static $def: crate::definition::TupleDefinition =
            crate::definition::TupleDefinition {
                kind: crate::definition::TupleKind::$kind,
                name: stringify!($kind),
                fields: &[
                    $(crate::field::FieldDefinition::new(
                        stringify!($variant),
                        crate::tuples::field_ty!($($ftok)+),
                        crate::tuples::field_nullable!($($ftok)+),
                    )),*
                ],
            };

        /// Field ordinals, in definition order
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(usize)]
        pub enum $fields {
            $($variant),*
        }

        impl $fields {
            /// Member count; always equals the definition's field count
            pub const COUNT: usize = [$(stringify!($variant)),*].len();
        }

        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $wrapper(crate::tuple::Tuple);

        impl $wrapper {
            /// Create a row of this kind with every field unset
            pub fn new(id: Option<crate::source::Identifier>) -> Self {
                let mut tuple =
                    crate::tuple::Tuple::new(crate::definition::TupleKind::$kind);
                tuple.id = id;
                Self(tuple)
            }

            /// Attach a source marker, builder style
            pub fn at(mut self, source: crate::source::SourceLineNumber) -> Self {
                self.0 = self.0.at(source);
                self
            }

            /// Consume the wrapper, yielding the generic row
            pub fn into_tuple(self) -> crate::tuple::Tuple {
                self.0
            }

            $(
                crate::tuples::field_accessors!(
                    $fields, $variant, $getter, $setter,
                    [$(#[$fdoc])*],
                    $($ftok)+
                );
            )*
        }

        impl TryFrom<crate::tuple::Tuple> for $wrapper {
            type Error = crate::error::TupleError;

            /// Fails with `KindMismatch` when the row is of another kind
            fn try_from(tuple: crate::tuple::Tuple) -> Result<Self, Self::Error> {
                if tuple.kind() == crate::definition::TupleKind::$kind {
                    Ok(Self(tuple))
                } else {
                    Err(crate::error::TupleError::KindMismatch {
                        expected: crate::definition::TupleKind::$kind,
                        actual: tuple.kind(),
                    })
                }
            }
        }

        impl From<$wrapper> for crate::tuple::Tuple {
            fn from(wrapper: $wrapper) -> Self {
                wrapper.0
            }
        }

        impl std::ops::Deref for $wrapper {
            type Target = crate::tuple::Tuple;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

pub(crate) use {field_accessors, field_nullable, field_ty};

pub mod actions;
pub mod com;
pub mod core;
pub mod registry;
pub mod ui;
pub mod wix;

pub use self::actions::*;
pub use self::com::*;
pub use self::core::*;
pub use self::registry::*;
pub use self::ui::*;
pub use self::wix::*;
