use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

use rm_utils::hash::{FixedHashState, HashMap};

use crate::Reflect;
use crate::info::TypePath;
use crate::ops::ReflectCloneError;
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Dynamic Struct

/// An ordered name→value mapping of reflected values.
///
/// `DynamicStruct` plays three roles:
///
/// - the *overrides* handed to [`remap_with`](crate::remap_with),
/// - the argument set handed to a destination constructor,
/// - a *mapping source*: it reports itself as [dynamic](Reflect::is_dynamic),
///   so the attribute reader uses its entries verbatim.
///
/// Fields keep insertion order. Inserting an existing name overwrites the
/// value in place.
///
/// # Examples
///
/// ```
/// use rm_remap::ops::{DynamicStruct, Struct};
///
/// let mut dynamic = DynamicStruct::new();
/// dynamic.extend("field_1", 1_i32);
/// dynamic.extend("field_2", "hello");
/// dynamic.extend("field_1", 2_i32);
///
/// assert_eq!(dynamic.field_len(), 2);
/// assert_eq!(dynamic.field_as::<i32>("field_1"), Some(&2));
/// ```
#[derive(Default)]
pub struct DynamicStruct {
    fields: Vec<Box<dyn Reflect>>,
    field_names: Vec<Cow<'static, str>>,
    field_indices: HashMap<Cow<'static, str>, usize>,
}

impl TypePath for DynamicStruct {
    #[inline]
    fn type_path() -> &'static str {
        "rm_remap::ops::DynamicStruct"
    }

    #[inline]
    fn type_name() -> &'static str {
        "DynamicStruct"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "DynamicStruct"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("rm_remap::ops")
    }
}

impl DynamicStruct {
    /// Creates an empty `DynamicStruct`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fields: Vec::new(),
            field_names: Vec::new(),
            field_indices: HashMap::with_hasher(FixedHashState),
        }
    }

    /// Creates an empty `DynamicStruct` with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
            field_names: Vec::with_capacity(capacity),
            field_indices: HashMap::with_capacity_and_hasher(capacity, FixedHashState),
        }
    }

    /// Appends a boxed value as a field.
    ///
    /// If the field name already exists, the value is overwritten in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use rm_remap::ops::{Struct, DynamicStruct};
    ///
    /// let mut dynamic = DynamicStruct::new();
    /// dynamic.extend_boxed("field_a", Box::new(1_i32));
    /// dynamic.extend_boxed("field_b", Box::new("hello"));
    ///
    /// assert_eq!(dynamic.field_len(), 2);
    /// ```
    pub fn extend_boxed(&mut self, name: impl Into<Cow<'static, str>>, value: Box<dyn Reflect>) {
        let name: Cow<'static, str> = name.into();
        if let Some(&index) = self.field_indices.get(&name) {
            self.fields[index] = value;
        } else {
            self.fields.push(value);
            self.field_indices.insert(name.clone(), self.fields.len() - 1);
            self.field_names.push(name);
        }
    }

    /// Appends a value as a field, see [`DynamicStruct::extend_boxed`].
    #[inline]
    pub fn extend<T: Reflect>(&mut self, name: impl Into<Cow<'static, str>>, value: T) {
        self.extend_boxed(name, Box::new(value));
    }

    /// Removes the field with the given name and returns its value.
    ///
    /// Later fields keep their relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rm_remap::ops::DynamicStruct;
    ///
    /// let mut dynamic = DynamicStruct::new();
    /// dynamic.extend("a", 1_u8);
    /// dynamic.extend("b", 2_u8);
    ///
    /// let a = dynamic.remove("a").unwrap();
    /// assert_eq!(a.downcast_ref::<u8>(), Some(&1));
    /// assert_eq!(dynamic.index_of("b"), Some(0));
    /// assert!(dynamic.remove("a").is_none());
    /// ```
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Reflect>> {
        let index = self.field_indices.remove(name)?;
        self.field_names.remove(index);
        for later in self.field_indices.values_mut() {
            if *later > index {
                *later -= 1;
            }
        }
        Some(self.fields.remove(index))
    }

    /// Moves every field of `other` into `self`.
    ///
    /// Fields of `other` win on name collision.
    ///
    /// # Examples
    ///
    /// ```
    /// use rm_remap::ops::{DynamicStruct, Struct};
    ///
    /// let mut base = DynamicStruct::new();
    /// base.extend("a", 0_i32);
    /// base.extend("d", 1_i32);
    ///
    /// let mut overrides = DynamicStruct::new();
    /// overrides.extend("d", 2_i32);
    ///
    /// base.merge(overrides);
    /// assert_eq!(base.field_as::<i32>("d"), Some(&2));
    /// assert_eq!(base.field_len(), 2);
    /// ```
    pub fn merge(&mut self, other: DynamicStruct) {
        for (name, value) in other {
            self.extend_boxed(name, value);
        }
    }

    /// Returns `true` if a field with the given name exists.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.field_indices.contains_key(name)
    }

    /// Gets the index of the field with the given name.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Returns `true` if there are no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over the field names and values, in order.
    #[inline]
    pub fn iter(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }
}

impl Reflect for DynamicStruct {
    impl_reflect_cast_fn!(Struct);

    #[inline]
    fn is_dynamic(&self) -> bool {
        true
    }

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        Ok(Box::new(self.to_dynamic_struct()?))
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        crate::impls::struct_partial_eq(self, other)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::impls::struct_debug(self, f)
    }
}

impl fmt::Debug for DynamicStruct {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<(N, Box<dyn Reflect>)> for DynamicStruct {
    fn from_iter<T: IntoIterator<Item = (N, Box<dyn Reflect>)>>(fields: T) -> Self {
        let mut dynamic = DynamicStruct::new();
        for (name, value) in fields {
            dynamic.extend_boxed(name, value);
        }
        dynamic
    }
}

impl IntoIterator for DynamicStruct {
    type Item = (Cow<'static, str>, Box<dyn Reflect>);
    type IntoIter = core::iter::Zip<
        alloc::vec::IntoIter<Cow<'static, str>>,
        alloc::vec::IntoIter<Box<dyn Reflect>>,
    >;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.field_names.into_iter().zip(self.fields)
    }
}

impl<'a> IntoIterator for &'a DynamicStruct {
    type Item = (&'a str, &'a dyn Reflect);
    type IntoIter = StructFieldIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// -----------------------------------------------------------------------------
// Struct

/// A struct with named fields.
///
/// Sources that implement `Struct` expose their attributes through it, and
/// [`#[derive(Reflect)]`](crate::derive::Reflect) implements it automatically.
/// Fields marked `#[reflect(ignore)]` are not exposed.
///
/// # Examples
///
/// ```
/// use rm_remap::{Reflect, derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: i32,
///     b: &'static str,
/// }
///
/// let foo = Foo { a: 10, b: "hello" };
///
/// assert_eq!(foo.field_len(), 2);
/// assert_eq!(foo.name_at(1), Some("b"));
/// assert_eq!(foo.field("a").unwrap().downcast_ref::<i32>(), Some(&10));
/// ```
pub trait Struct: Reflect {
    /// Returns the value of the field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the value of the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of exposed fields.
    fn field_len(&self) -> usize;

    /// Returns an iterator over the field names and values, in order.
    fn iter_fields(&self) -> StructFieldIter<'_>;

    /// Copies every exposed field into a [`DynamicStruct`].
    ///
    /// Fails on the first field whose value cannot be cloned.
    fn to_dynamic_struct(&self) -> Result<DynamicStruct, ReflectCloneError> {
        let mut dynamic = DynamicStruct::with_capacity(self.field_len());
        for (name, value) in self.iter_fields() {
            dynamic.extend_boxed(String::from(name), value.reflect_clone()?);
        }
        Ok(dynamic)
    }
}

impl Struct for DynamicStruct {
    #[inline]
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        self.field_indices
            .get(name)
            .map(|&index| self.fields[index].deref())
    }

    #[inline]
    fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
        self.fields.get(index).map(Deref::deref)
    }

    #[inline]
    fn name_at(&self, index: usize) -> Option<&str> {
        self.field_names.get(index).map(AsRef::as_ref)
    }

    #[inline]
    fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }

    fn to_dynamic_struct(&self) -> Result<DynamicStruct, ReflectCloneError> {
        let mut fields = Vec::with_capacity(self.fields.len());
        for value in &self.fields {
            fields.push(value.reflect_clone()?);
        }
        Ok(DynamicStruct {
            fields,
            field_names: self.field_names.clone(),
            field_indices: self.field_indices.clone(),
        })
    }
}

impl dyn Struct {
    /// Returns a typed reference to the field with the given name.
    ///
    /// Returns `None` if the field does not exist or is not a `T`.
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }
}

impl DynamicStruct {
    /// Returns a typed reference to the field with the given name.
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        <dyn Struct>::field_as(self, name)
    }
}

// -----------------------------------------------------------------------------
// Struct Field Iterator

/// An iterator over the `(name, value)` pairs of a struct.
///
/// # Examples
///
/// ```
/// use rm_remap::{derive::Reflect, ops::StructFieldIter};
///
/// #[derive(Reflect)]
/// struct Foo { a: i32, b: bool }
///
/// let foo = Foo { a: 1, b: true };
/// let mut iter = StructFieldIter::new(&foo);
///
/// assert_eq!(iter.len(), 2);
/// let (name, value) = iter.next().unwrap();
/// assert_eq!(name, "a");
/// assert_eq!(value.downcast_ref::<i32>(), Some(&1));
/// ```
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.struct_val.name_at(self.index)?;
        let value = self.struct_val.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len().saturating_sub(self.index);
        (size, Some(size))
    }
}

impl<'a> ExactSizeIterator for StructFieldIter<'a> {}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{DynamicStruct, Struct};
    use crate::Reflect;

    #[test]
    fn remove_shifts_indices() {
        let mut dynamic = DynamicStruct::new();
        dynamic.extend("a", 0_i32);
        dynamic.extend("b", 1_i32);
        dynamic.extend("c", 2_i32);

        assert!(dynamic.remove("b").is_some());
        assert_eq!(dynamic.field_len(), 2);
        assert_eq!(dynamic.index_of("c"), Some(1));
        assert_eq!(dynamic.name_at(1), Some("c"));
        assert_eq!(dynamic.field_as::<i32>("c"), Some(&2));

        dynamic.extend("b", 3_i32);
        assert_eq!(dynamic.index_of("b"), Some(2));
    }

    #[test]
    fn clone_and_compare() {
        let mut dynamic = DynamicStruct::new();
        dynamic.extend("name", String::from("x"));
        dynamic.extend("size", 4_usize);

        let cloned = dynamic.reflect_clone().unwrap();
        assert!(cloned.is_dynamic());
        assert_eq!(dynamic.reflect_partial_eq(cloned.as_ref()), Some(true));

        dynamic.extend("size", 5_usize);
        assert_eq!(dynamic.reflect_partial_eq(cloned.as_ref()), Some(false));
    }
}
