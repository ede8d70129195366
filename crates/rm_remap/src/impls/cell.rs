//! Static storage of generic type paths.
//!
//! A `static CELL` inside a generic function is shared by every
//! instantiation, so the cell is keyed by [`TypeId`] and guarded by an
//! [`RwLock`].

use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{PoisonError, RwLock};

use rm_utils::TypeIdMap;

/// Container for static storage of type paths with generics.
///
/// Every stored string is leaked, so the returned reference is `'static`.
///
/// ## Example
///
/// ```
/// use rm_remap::impls::{concat, GenericTypePathCell};
/// use rm_remap::info::TypePath;
///
/// fn vec_path<T: TypePath>() -> &'static str {
///     static CELL: GenericTypePathCell = GenericTypePathCell::new();
///     CELL.get_or_insert::<Vec<T>>(|| concat(&["Vec<", T::type_name(), ">"]))
/// }
///
/// assert_eq!(vec_path::<u8>(), "Vec<u8>");
/// assert_eq!(vec_path::<bool>(), "Vec<bool>");
/// assert!(core::ptr::eq(vec_path::<u8>(), vec_path::<u8>()));
/// ```
pub struct GenericTypePathCell(RwLock<TypeIdMap<&'static str>>);

impl GenericTypePathCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the path stored for the type `G`.
    ///
    /// If there is no entry found, a new one will be generated from the given function.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> String) -> &'static str {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> String) -> &'static str {
        let cached = self
            .0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied();

        match cached {
            Some(path) => path,
            None => {
                let path = f();
                *self
                    .0
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .get_or_insert(type_id, || String::leak(path))
            }
        }
    }
}
