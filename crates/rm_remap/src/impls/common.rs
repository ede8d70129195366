use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::fmt;

use crate::error::ConstructError;
use crate::info::TypePath;
use crate::ops::{Map, ReflectCloneError, ReflectRef, Struct};
use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// Struct

/// A function use for implementing [`Reflect::reflect_partial_eq`].
///
/// # Rules
///
/// 1. If `y` is not a `Struct`, return `Some(false)`.
/// 2. Field counts must be equal.
/// 3. Every field of `y` must exist in `x` and compare equal.
///    An unsupported comparison is returned as is.
#[inline(never)]
pub fn struct_partial_eq(x: &dyn Struct, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Struct(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.field_len() != y.field_len() {
        return Some(false);
    }

    for (name, y_field) in y.iter_fields() {
        let Some(x_field) = x.field(name) else {
            return Some(false);
        };
        let result = x_field.reflect_partial_eq(y_field);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

/// A function use for implementing [`Reflect::reflect_debug`].
#[inline(never)]
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_name());
    for (name, field) in dyn_struct.iter_fields() {
        debug.field(name, &field as &dyn fmt::Debug);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// Map

/// A function use for implementing [`Reflect::reflect_partial_eq`].
///
/// # Rules
///
/// 1. If `y` is not a `Map`, return `Some(false)`.
/// 2. Entry counts must be equal.
/// 3. Every key of `y` must exist in `x` with an equal value.
#[inline(never)]
pub fn map_partial_eq(x: &dyn Map, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Map(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.entry_len() != y.entry_len() {
        return Some(false);
    }

    for (key, y_value) in y.iter_entries() {
        let Some(x_value) = x.get(key) else {
            return Some(false);
        };
        let result = x_value.reflect_partial_eq(y_value);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

/// A function use for implementing [`Reflect::reflect_debug`].
#[inline(never)]
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in dyn_map.iter_entries() {
        debug.entry(&key, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// Clone

/// Copies a value through [`Reflect::reflect_clone`] and moves it back out as `T`.
///
/// # Example
///
/// ```
/// use rm_remap::impls::clone_value;
///
/// let v = vec![Some(1_u8), None];
/// assert_eq!(clone_value(&v).unwrap(), v);
/// ```
pub fn clone_value<T: Reflect>(value: &T) -> Result<T, ReflectCloneError> {
    value
        .reflect_clone()?
        .take::<T>()
        .map_err(|_| ReflectCloneError::NotSupport {
            type_path: Cow::Borrowed(value.reflect_type_path()),
        })
}

/// Like [`clone_value`], but reports a failure as a field of `owner`.
///
/// Used by derived `reflect_clone` implementations.
pub fn clone_field<T: Reflect>(
    value: &T,
    owner: &'static str,
    field: &'static str,
) -> Result<T, ReflectCloneError> {
    clone_value(value).map_err(|_| ReflectCloneError::FieldNotCloneable {
        type_path: Cow::Borrowed(owner),
        field: Cow::Borrowed(field),
    })
}

// -----------------------------------------------------------------------------
// Construct

/// Converts one argument of a destination constructor into the field type `T`.
///
/// The value is moved when it already is a `T`; otherwise [`FromReflect`]
/// gets a chance (a mapping for a derived struct field). Anything else is a
/// [`ConstructError::MismatchedType`]. Values are never coerced.
///
/// # Example
///
/// ```
/// use rm_remap::{Reflect, impls::construct_field, error::ConstructError};
///
/// struct Dest;
/// # impl rm_remap::info::TypePath for Dest {
/// #     fn type_path() -> &'static str { "demo::Dest" }
/// #     fn type_name() -> &'static str { "Dest" }
/// #     fn type_ident() -> &'static str { "Dest" }
/// # }
///
/// let ok: u32 = construct_field::<Dest, u32>("size", 4_u32.into_boxed_reflect()).unwrap();
/// assert_eq!(ok, 4);
///
/// let err = construct_field::<Dest, u32>("size", 4_i64.into_boxed_reflect()).unwrap_err();
/// assert!(matches!(err, ConstructError::MismatchedType { found: "i64", .. }));
/// ```
pub fn construct_field<D: TypePath, T: FromReflect + TypePath>(
    field: &'static str,
    value: Box<dyn Reflect>,
) -> Result<T, ConstructError> {
    T::take_from_reflect(value).map_err(|value| ConstructError::MismatchedType {
        dest_type: D::type_path(),
        field,
        expected: T::type_path(),
        found: value.reflect_type_path(),
    })
}
