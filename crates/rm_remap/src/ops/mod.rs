//! Data access interfaces and the dynamic struct container.
//!
//! - [`Struct`]: named fields of a struct (e.g. `A { .. }`).
//! - [`Map`]: string-keyed entries of a map (e.g. `BTreeMap<String, V>`).
//! - [`DynamicStruct`]: an ordered name→value mapping. Used for overrides,
//!   attribute sets and as a mapping source.
//!
//! [`ReflectRef`] is the view handed out by [`Reflect::reflect_ref`].
//!
//! [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref

// -----------------------------------------------------------------------------
// Modules

mod clone_error;
mod kind;
mod map_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use clone_error::ReflectCloneError;
pub use kind::{ReflectKind, ReflectRef};
pub use map_ops::{Map, MapEntryIter};
pub use struct_ops::{DynamicStruct, Struct, StructFieldIter};
