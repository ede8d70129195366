use core::fmt;

use crate::Reflect;
use crate::ops::{Map, Struct};

// -----------------------------------------------------------------------------
// ReflectKind

/// The kind of data a reflected value holds.
///
/// # Examples
///
/// ```
/// use rm_remap::{Reflect, ops::ReflectKind};
///
/// assert_eq!(1_u8.reflect_kind(), ReflectKind::Opaque);
/// assert_eq!(ReflectKind::Struct.to_string(), "Struct");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// Named fields, see [`Struct`].
    Struct,
    /// String-keyed entries, see [`Map`].
    Map,
    /// Anything else. Opaque values have no readable attributes.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReflectKind::Struct => "Struct",
            ReflectKind::Map => "Map",
            ReflectKind::Opaque => "Opaque",
        })
    }
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable, kind-specific view of a reflected value.
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Map(&'a dyn Map),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Returns the [`ReflectKind`] of this view.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            ReflectRef::Struct(_) => ReflectKind::Struct,
            ReflectRef::Map(_) => ReflectKind::Map,
            ReflectRef::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the struct view, if any.
    #[inline]
    pub const fn as_struct(&self) -> Option<&'a dyn Struct> {
        match self {
            ReflectRef::Struct(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the map view, if any.
    #[inline]
    pub const fn as_map(&self) -> Option<&'a dyn Map> {
        match self {
            ReflectRef::Map(value) => Some(*value),
            _ => None,
        }
    }
}
