use alloc::boxed::Box;

use crate::Reflect;
use crate::ops::{DynamicStruct, ReflectCloneError};

// -----------------------------------------------------------------------------
// Map

/// A string-keyed map of reflected values.
///
/// Maps are *mapping sources*: their keys are taken as attribute names
/// verbatim, private-looking keys included.
///
/// Implemented for `BTreeMap<String, V>` and `HashMap<String, V, S>`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use rm_remap::{Reflect, ops::Map};
///
/// let mut map = BTreeMap::<String, i32>::new();
/// map.insert("a".into(), 0);
/// map.insert("_b".into(), 1);
///
/// let map_ref: &dyn Map = &map;
/// assert_eq!(map_ref.entry_len(), 2);
/// assert!(map_ref.get("_b").unwrap().is::<i32>());
/// ```
pub trait Map: Reflect {
    /// Returns the value stored for `key`.
    fn get(&self, key: &str) -> Option<&dyn Reflect>;

    /// Returns the number of entries.
    fn entry_len(&self) -> usize;

    /// Returns an iterator over the entries.
    ///
    /// The order is the iteration order of the underlying map.
    fn iter_entries(&self) -> MapEntryIter<'_>;

    /// Copies every entry into a [`DynamicStruct`].
    ///
    /// Fails on the first entry whose value cannot be cloned.
    fn to_dynamic_struct(&self) -> Result<DynamicStruct, ReflectCloneError> {
        let mut dynamic = DynamicStruct::with_capacity(self.entry_len());
        for (key, value) in self.iter_entries() {
            dynamic.extend_boxed(alloc::string::String::from(key), value.reflect_clone()?);
        }
        Ok(dynamic)
    }
}

/// An iterator over the entries of a [`Map`].
pub type MapEntryIter<'a> = Box<dyn Iterator<Item = (&'a str, &'a dyn Reflect)> + 'a>;
