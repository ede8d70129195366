//! Parsing of the derive input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod reflect_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, FieldDefault, TypeAttributes};
pub(crate) use reflect_struct::ReflectStruct;
