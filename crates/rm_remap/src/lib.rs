#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Derived code names this crate `rm_remap`; inside the crate itself (and in
// unit tests) that name must resolve to `crate`.
extern crate self as rm_remap;

// -----------------------------------------------------------------------------
// alloc

// Containers are named through `alloc`; the signature cache needs
// `std::sync::RwLock`, so the crate is not `no_std`.
extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod error;
pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;
pub mod remap;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::{FromReflect, Reflect};
pub use remap::{Remapper, remap, remap_with};
pub use rm_remap_derive as derive;
