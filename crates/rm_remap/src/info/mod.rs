//! Static type descriptions: type paths, fields and struct layouts.
//!
//! A destination type describes its writable attributes with a
//! [`StructInfo`], a declaration-ordered table of [`NamedField`]s.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod struct_info;
mod type_path;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use struct_info::StructInfo;
pub use type_path::{DynamicTypePath, TypePath};
