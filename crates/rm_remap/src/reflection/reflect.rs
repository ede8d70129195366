use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::DynamicTypePath;
use crate::ops::{ReflectCloneError, ReflectKind, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The base capability of every value the remapper can read from or write into.
///
/// A `Reflect` value can name its type ([`DynamicTypePath`]), report which
/// [kind](ReflectKind) of data it holds, hand out a typed view of that data
/// ([`reflect_ref`]) and copy itself into a fresh box ([`reflect_clone`]).
///
/// Sources are read through this trait: a [`Struct`] exposes named fields, a
/// [`Map`] exposes string-keyed entries, and everything else is opaque.
///
/// Prefer [`#[derive(Reflect)]`](crate::derive::Reflect) over manual
/// implementations.
///
/// # Type identification
///
/// [`Any::type_id`] on a `Box<dyn Reflect>` reports the box itself.
/// Use [`Reflect::ty_id`] or `<dyn Reflect>::is` instead:
///
/// ```
/// use rm_remap::Reflect;
/// use core::any::TypeId;
///
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// assert!(x.is::<i32>());
/// assert_eq!(x.downcast_ref::<i32>(), Some(&32));
/// ```
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_clone`]: Reflect::reflect_clone
/// [`Struct`]: crate::ops::Struct
/// [`Map`]: crate::ops::Map
pub trait Reflect: DynamicTypePath + Send + Sync + Any {
    /// Casts this value to `&dyn Reflect`.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts a boxed value to `Box<dyn Reflect>`.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as `Box<dyn Reflect>`.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying value.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns `true` for dynamic containers such as
    /// [`DynamicStruct`](crate::ops::DynamicStruct).
    ///
    /// Dynamic structs are treated as mappings by the attribute reader.
    #[inline]
    fn is_dynamic(&self) -> bool {
        false
    }

    /// Returns the kind of data this value holds.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns a typed view of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Copies this value into a new box of the same concrete type.
    ///
    /// Values that cannot be copied (for example structs holding an ignored
    /// field without a `Clone` impl) return a [`ReflectCloneError`].
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError>;

    /// Compares with another reflected value.
    ///
    /// `None` means the comparison is not supported.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    /// Debug formatting through reflection.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(data) => crate::impls::struct_debug(data, f),
            ReflectRef::Map(data) => crate::impls::map_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is a `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts to `&T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts a boxed value to `Box<T>`, giving the box back on mismatch.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Moves the value out of a box as `T`, giving the box back on mismatch.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::ops::ReflectKind {
            $crate::ops::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Reflect;

    #[test]
    fn downcast_and_take() {
        let boxed: Box<dyn Reflect> = String::from("value").into_boxed_reflect();
        assert!(boxed.is::<String>());
        assert!(!boxed.is::<&'static str>());

        let boxed = match boxed.take::<i32>() {
            Ok(_) => panic!("`String` must not downcast to `i32`"),
            Err(boxed) => boxed,
        };
        assert_eq!(boxed.reflect_type_name(), "String");
        assert_eq!(boxed.take::<String>().ok().as_deref(), Some("value"));
    }
}
