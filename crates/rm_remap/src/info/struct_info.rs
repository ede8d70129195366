use alloc::boxed::Box;
use core::any::TypeId;

use rm_utils::hash::{FixedHashState, HashMap};

use crate::info::{NamedField, TypePath};

/// The writable attribute table of a destination struct.
///
/// Fields keep their declaration order.
///
/// # Examples
///
/// ```
/// use rm_remap::{derive::Reflect, registry::specifiable_attributes};
///
/// #[derive(Reflect)]
/// struct A {
///     val: f32,
///     #[reflect(default)]
///     opt: bool,
/// }
///
/// let info = specifiable_attributes::<A>();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("opt"), Some(1));
/// assert_eq!(info.field_names(), &["val", "opt"]);
/// assert_eq!(info.required().map(|f| f.name()).collect::<Vec<_>>(), ["val"]);
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty_id: TypeId,
    type_path: &'static str,
    type_name: &'static str,
    fields: Box<[NamedField]>,
    field_names: Box<[&'static str]>,
    indices: HashMap<&'static str, usize>,
}

impl StructInfo {
    /// Creates a new [`StructInfo`] for `T`.
    ///
    /// The order of fields depends on the input order. A repeated name keeps
    /// its first position.
    pub fn new<T: TypePath>(fields: &[NamedField]) -> Self {
        let mut indices = HashMap::with_capacity_and_hasher(fields.len(), FixedHashState);
        for (index, field) in fields.iter().enumerate() {
            indices.entry(field.name()).or_insert(index);
        }

        Self {
            ty_id: TypeId::of::<T>(),
            type_path: T::type_path(),
            type_name: T::type_name(),
            field_names: fields.iter().map(NamedField::name).collect(),
            fields: fields.into(),
            indices,
        }
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.indices.get(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns an iterator over the fields without a declared default.
    pub fn required(&self) -> impl Iterator<Item = &NamedField> {
        self.fields.iter().filter(|field| field.is_required())
    }

    /// Returns the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    /// Returns the index for the given field `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns `true` if a field with the given `name` exists.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the `TypeId` of the described type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns the type path of the described type.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the short type name of the described type.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

#[cfg(test)]
mod tests {
    use super::StructInfo;
    use crate::info::{NamedField, TypePath};

    struct Point;

    impl TypePath for Point {
        fn type_path() -> &'static str {
            "tests::Point"
        }
        fn type_name() -> &'static str {
            "Point"
        }
        fn type_ident() -> &'static str {
            "Point"
        }
    }

    #[test]
    fn lookup_by_name_and_index() {
        let info = StructInfo::new::<Point>(&[
            NamedField::new::<f32>("x"),
            NamedField::new::<f32>("y"),
            NamedField::new::<u8>("tag").optional(),
        ]);

        assert_eq!(info.type_path(), "tests::Point");
        assert_eq!(info.field_len(), 3);
        assert_eq!(info.index_of("tag"), Some(2));
        assert!(info.field("tag").unwrap().is_optional());
        assert!(info.field("w").is_none());
        assert_eq!(info.field_at(1).unwrap().name(), "y");
        assert_eq!(info.field_at(1).unwrap().type_path(), "f32");
        assert_eq!(info.required().count(), 2);
    }
}
