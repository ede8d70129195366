//! Destination descriptors and the process-wide signature cache.
//!
//! - [`Constructible`]: a type that describes its writable attributes and
//!   builds itself from a name→value argument set.
//! - [`SignatureRegistry`]: caches each destination's [`StructInfo`] for the
//!   process lifetime.
//! - [`specifiable_attributes`]: the cached lookup used by every remap call.
//!
//! ## auto_register
//!
//! Types annotated with `#[reflect(auto_register)]` submit themselves through
//! the [`inventory`] crate, and [`SignatureRegistry::auto_register`] fills the
//! cache with all of them at once. Not every platform supports static
//! registration; when it is unsupported (or the `auto_register` feature is
//! disabled) the call returns `false` and lookups fall back to lazy caching.
//!
//! [`StructInfo`]: crate::info::StructInfo
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod constructible;
mod signature_registry;

// -----------------------------------------------------------------------------
// Exports

pub use constructible::Constructible;
pub use signature_registry::{SignatureRegistry, specifiable_attributes};
