use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::fmt;

use rm_utils::hash::{FixedHashState, HashMap};

use crate::Reflect;
use crate::error::RemapError;
use crate::info::TypePath;
use crate::registry::Constructible;

// -----------------------------------------------------------------------------
// NestedType

/// A destination type chosen for one nested attribute.
///
/// The attribute's value is remapped into this type instead of being
/// forwarded as is.
#[derive(Clone, Copy)]
pub struct NestedType {
    type_path: fn() -> &'static str,
    remap: fn(&dyn Reflect) -> Result<Box<dyn Reflect>, RemapError>,
}

fn remap_boxed<D: Constructible>(source: &dyn Reflect) -> Result<Box<dyn Reflect>, RemapError> {
    Ok(Box::new(super::remap::<D>(source)?))
}

impl NestedType {
    /// Creates the handle of destination type `D`.
    #[inline]
    pub const fn of<D: Constructible>() -> Self {
        Self {
            type_path: D::type_path,
            remap: remap_boxed::<D>,
        }
    }

    /// Returns the type path of the destination type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        (self.type_path)()
    }

    /// Remaps `source` into the destination type, with no overrides and no
    /// nested types of its own.
    #[inline]
    pub fn remap(&self, source: &dyn Reflect) -> Result<Box<dyn Reflect>, RemapError> {
        (self.remap)(source)
    }
}

impl fmt::Debug for NestedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NestedType").field(&self.type_path()).finish()
    }
}

// -----------------------------------------------------------------------------
// NestedTypes

/// A map from attribute name to the [`NestedType`] its value is remapped into.
///
/// # Examples
///
/// ```
/// use rm_remap::{derive::Reflect, info::TypePath, remap::NestedTypes};
///
/// #[derive(Reflect)]
/// struct Inner { a: i32 }
///
/// let nested = NestedTypes::new().with::<Inner>("obj");
///
/// assert!(nested.contains("obj"));
/// assert_eq!(nested.get("obj").unwrap().type_path(), Inner::type_path());
/// ```
#[derive(Clone, Default)]
pub struct NestedTypes {
    types: HashMap<Cow<'static, str>, NestedType>,
}

impl NestedTypes {
    /// Creates an empty map.
    #[inline]
    pub const fn new() -> Self {
        Self {
            types: HashMap::with_hasher(FixedHashState),
        }
    }

    /// Adds `D` for the attribute `name`, builder style.
    #[inline]
    pub fn with<D: Constructible>(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.insert(name, NestedType::of::<D>());
        self
    }

    /// Sets the nested type of the attribute `name`, returning the previous one.
    #[inline]
    pub fn insert(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        nested: NestedType,
    ) -> Option<NestedType> {
        self.types.insert(name.into(), nested)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&NestedType> {
        self.types.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl fmt::Debug for NestedTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.types.iter().map(|(name, ty)| (name, ty.type_path())))
            .finish()
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<(N, NestedType)> for NestedTypes {
    fn from_iter<T: IntoIterator<Item = (N, NestedType)>>(iter: T) -> Self {
        let mut nested = NestedTypes::new();
        for (name, ty) in iter {
            nested.insert(name, ty);
        }
        nested
    }
}
