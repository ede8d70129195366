use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt;
use core::hash::BuildHasher;
use std::collections::HashMap;
use std::collections::hash_map::RandomState;

use crate::impls::{GenericTypePathCell, clone_value, concat, map_debug, map_partial_eq};
use crate::info::TypePath;
use crate::ops::{Map, MapEntryIter, ReflectCloneError, ReflectRef};
use crate::reflection::impl_reflect_cast_fn;
use crate::{FromReflect, Reflect};

/// Feeds every entry of a mapping (a [`Map`] or a dynamic struct) to `insert`.
///
/// Returns `None` if `reflect` is not a mapping or an entry cannot be built.
fn from_mapping<V: FromReflect>(reflect: &dyn Reflect, mut insert: impl FnMut(String, V)) -> Option<()> {
    match reflect.reflect_ref() {
        ReflectRef::Map(map) => {
            for (key, value) in map.iter_entries() {
                insert(String::from(key), V::from_reflect(value)?);
            }
        }
        ReflectRef::Struct(dynamic) if reflect.is_dynamic() => {
            for (key, value) in dynamic.iter_fields() {
                insert(String::from(key), V::from_reflect(value)?);
            }
        }
        _ => return None,
    }
    Some(())
}

// -----------------------------------------------------------------------------
// BTreeMap

impl<V: TypePath> TypePath for BTreeMap<String, V> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&[
                "alloc::collections::BTreeMap<alloc::string::String, ",
                V::type_path(),
                ">",
            ])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["BTreeMap<String, ", V::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "BTreeMap"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::collections")
    }
}

impl<V: Reflect + TypePath> Map for BTreeMap<String, V> {
    #[inline]
    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        BTreeMap::get(self, key).map(Reflect::as_reflect)
    }

    #[inline]
    fn entry_len(&self) -> usize {
        self.len()
    }

    fn iter_entries(&self) -> MapEntryIter<'_> {
        Box::new(self.iter().map(|(key, value)| (key.as_str(), value.as_reflect())))
    }
}

impl<V: Reflect + TypePath> Reflect for BTreeMap<String, V> {
    impl_reflect_cast_fn!(Map);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let mut cloned = BTreeMap::new();
        for (key, value) in self {
            cloned.insert(key.clone(), clone_value(value)?);
        }
        Ok(Box::new(cloned))
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        map_partial_eq(self, other)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        map_debug(self, f)
    }
}

impl<V: FromReflect + TypePath> FromReflect for BTreeMap<String, V> {
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
        if reflect.is::<Self>() {
            return reflect.reflect_clone().ok()?.take::<Self>().ok();
        }
        let mut map = BTreeMap::new();
        from_mapping(reflect, |key, value: V| {
            map.insert(key, value);
        })?;
        Some(map)
    }
}

// -----------------------------------------------------------------------------
// HashMap

impl TypePath for RandomState {
    #[inline]
    fn type_path() -> &'static str {
        "std::hash::RandomState"
    }

    #[inline]
    fn type_name() -> &'static str {
        "RandomState"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "RandomState"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("std::hash")
    }
}

impl<V: TypePath, S: TypePath> TypePath for HashMap<String, V, S> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&[
                "std::collections::HashMap<alloc::string::String, ",
                V::type_path(),
                ", ",
                S::type_path(),
                ">",
            ])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["HashMap<String, ", V::type_name(), ", ", S::type_name(), ">"])
        })
    }

    #[inline]
    fn type_ident() -> &'static str {
        "HashMap"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("std::collections")
    }
}

impl<V, S> Map for HashMap<String, V, S>
where
    V: Reflect + TypePath,
    S: BuildHasher + Default + Send + Sync + TypePath,
{
    #[inline]
    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        HashMap::get(self, key).map(Reflect::as_reflect)
    }

    #[inline]
    fn entry_len(&self) -> usize {
        self.len()
    }

    fn iter_entries(&self) -> MapEntryIter<'_> {
        Box::new(self.iter().map(|(key, value)| (key.as_str(), value.as_reflect())))
    }
}

impl<V, S> Reflect for HashMap<String, V, S>
where
    V: Reflect + TypePath,
    S: BuildHasher + Default + Send + Sync + TypePath,
{
    impl_reflect_cast_fn!(Map);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let mut cloned = HashMap::with_capacity_and_hasher(self.len(), S::default());
        for (key, value) in self {
            cloned.insert(key.clone(), clone_value(value)?);
        }
        Ok(Box::new(cloned))
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        map_partial_eq(self, other)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        map_debug(self, f)
    }
}

impl<V, S> FromReflect for HashMap<String, V, S>
where
    V: FromReflect + TypePath,
    S: BuildHasher + Default + Send + Sync + TypePath,
{
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
        if reflect.is::<Self>() {
            return reflect.reflect_clone().ok()?.take::<Self>().ok();
        }
        let mut map = HashMap::with_hasher(S::default());
        from_mapping(reflect, |key, value: V| {
            map.insert(key, value);
        })?;
        Some(map)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use std::collections::HashMap;

    use crate::info::TypePath;
    use crate::ops::{DynamicStruct, Map, ReflectKind};
    use crate::{FromReflect, Reflect};

    #[test]
    fn btree_map_as_mapping() {
        let mut map = BTreeMap::<String, i32>::new();
        map.insert("a".into(), 0);
        map.insert("_hidden".into(), 1);

        assert_eq!(map.reflect_kind(), ReflectKind::Map);
        assert_eq!(Map::get(&map, "_hidden").unwrap().downcast_ref::<i32>(), Some(&1));

        let cloned = map.reflect_clone().unwrap();
        assert_eq!(map.reflect_partial_eq(cloned.as_ref()), Some(true));
        assert_eq!(<BTreeMap<String, i32>>::type_name(), "BTreeMap<String, i32>");
    }

    #[test]
    fn hash_map_from_dynamic_struct() {
        let mut dynamic = DynamicStruct::new();
        dynamic.extend("x", 1_u8);
        dynamic.extend("y", 2_u8);

        let map = <HashMap<String, u8>>::from_reflect(&dynamic).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["y"], 2);

        dynamic.extend("z", "not a number");
        assert!(<HashMap<String, u8>>::from_reflect(&dynamic).is_none());
        assert_eq!(
            <HashMap<String, u8>>::type_path(),
            "std::collections::HashMap<alloc::string::String, u8, std::hash::RandomState>"
        );
    }
}
