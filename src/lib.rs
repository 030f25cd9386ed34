//! Typed tuple catalog for the Forge installer toolchain
//!
//! The intermediate representation between the Forge compiler and its
//! linker/binder is a flat stream of "tuples": typed rows, one per
//! authored resource, analogous to rows in the final installer database.
//! This crate is the catalog of those row shapes plus their container
//! format. For every kind it carries:
//!
//! - a process-wide, immutable [`TupleDefinition`] describing the ordered
//!   field list (name and semantic type: string, number, path, or bool),
//! - a field-index enum whose member count always matches the definition,
//! - a strongly-typed wrapper over the generic [`Tuple`] row with per-field
//!   getters and setters.
//!
//! All three are emitted from a single [`tuple_definition!`] declaration
//! in [`tuples`], so the definition and its enum cannot drift apart.
//!
//! ## Layout
//!
//! ```text
//! product.fxobj                      (one Intermediate per source file)
//! ├── version: "4.0.0"               semver format version
//! ├── checksum: sha256(sections)
//! └── sections
//!     ├── Product section
//!     │   ├── Property { Value }
//!     │   ├── Directory { ParentDirectoryRef, Name, ... }
//!     │   └── ...
//!     └── Fragment sections
//! ```
//!
//! Linking, sequencing, and binding the final package happen downstream;
//! this crate only guarantees the shape of what those stages consume.
//!
//! [`tuple_definition!`]: crate::tuples

pub mod checksum;
pub mod config;
pub mod definition;
pub mod error;
pub mod field;
pub mod intermediate;
pub mod source;
pub mod tuple;
pub mod tuples;

pub use checksum::Checksum;
pub use definition::{TupleDefinition, TupleKind};
pub use error::{Result, TupleError};
pub use field::{FieldDefinition, FieldType, FieldValue};
pub use intermediate::{Intermediate, Section, SectionKind};
pub use source::{AccessModifier, Identifier, SourceLineNumber};
pub use tuple::Tuple;
