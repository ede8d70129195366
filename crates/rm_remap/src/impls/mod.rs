//! Utilities for implementing reflection traits, plus the built-in impls.
//!
//! - [`concat`]: string concatenation for generic type paths.
//! - [`GenericTypePathCell`]: static storage for generic type paths.
//! - `xxx_debug` / `xxx_partial_eq`: bodies for [`Reflect::reflect_debug`]
//!   and [`Reflect::reflect_partial_eq`].
//! - [`clone_value`], [`clone_field`] and [`construct_field`]: used by the
//!   derive macro.
//!
//! ## Implemented Menu
//!
//! - `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//! - `String`, `&'static str`
//! - `Option<T>`, `Vec<T>`
//! - `BTreeMap<String, V>`, `std::collections::HashMap<String, V, S>`
//!
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
//! [`Reflect::reflect_partial_eq`]: crate::Reflect::reflect_partial_eq

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod common;

mod collections;
mod option;
mod primitive;

// -----------------------------------------------------------------------------
// Exports

pub use cell::GenericTypePathCell;
pub use common::{clone_field, clone_value, construct_field};
pub use common::{map_debug, map_partial_eq, struct_debug, struct_partial_eq};

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use rm_remap::impls;
///
/// let s = impls::concat(&["module", "::", "name", "<", "T" , ">"]);
///
/// assert_eq!(s, "module::name<T>");
/// assert_eq!(s.capacity(), 15);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
