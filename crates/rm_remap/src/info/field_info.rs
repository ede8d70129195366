use core::any::{Any, TypeId};

use crate::info::TypePath;

// -----------------------------------------------------------------------------
// NamedField

/// A writable attribute of a destination type.
///
/// A field is *optional* when the destination declares a default for it, and
/// *required* otherwise.
///
/// # Examples
///
/// ```
/// use rm_remap::{derive::Reflect, registry::specifiable_attributes};
///
/// #[derive(Reflect)]
/// struct Foo {
///     field_a: f32,
///     #[reflect(default = 2)]
///     field_b: u8,
/// }
///
/// let info = specifiable_attributes::<Foo>();
///
/// assert!(info.field("field_a").unwrap().is_required());
/// assert!(info.field("field_b").unwrap().is_optional());
/// assert!(info.field_at(1).unwrap().type_is::<u8>());
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    type_path: fn() -> &'static str,
    optional: bool,
}

impl NamedField {
    /// Creates a required [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub const fn new<T: TypePath>(name: &'static str) -> Self {
        Self {
            name,
            ty_id: TypeId::of::<T>(),
            type_path: T::type_path,
            optional: false,
        }
    }

    /// Marks this field as optional (it has a declared default).
    #[inline]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if the destination declares a default for this field.
    #[inline]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns `true` if a value must be supplied for this field.
    #[inline]
    pub const fn is_required(&self) -> bool {
        !self.optional
    }

    /// Returns the `TypeId` of the field type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches the field type.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the type path of the field type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        (self.type_path)()
    }
}
