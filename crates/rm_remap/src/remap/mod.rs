//! The remap operation.
//!
//! A remap reads the attributes of a source value, merges caller overrides on
//! top, checks that every required attribute of the destination is covered,
//! and builds the destination from the attributes it can accept.
//!
//! - [`remap`]: no overrides, no nested types.
//! - [`remap_with`]: explicit [`NestedTypes`] and overrides.
//! - [`Remapper`]: a builder over [`remap_with`].
//! - [`read_attribute`] and [`read_attributes`]: the attribute reader on its own.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod nested;

// -----------------------------------------------------------------------------
// Exports

pub use attributes::{read_attribute, read_attributes};
pub use nested::{NestedType, NestedTypes};

use attributes::copy_attribute;

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::error::{AttributeNames, RemapError};
use crate::ops::DynamicStruct;
use crate::registry::{Constructible, specifiable_attributes};

// -----------------------------------------------------------------------------
// remap

/// Builds a `D` from the attributes of `source`.
///
/// Equivalent to [`remap_with`] with no nested types and no overrides.
///
/// # Examples
///
/// ```
/// use rm_remap::{derive::Reflect, remap};
///
/// #[derive(Reflect)]
/// struct Source { a: i32, b: i32, c: i32 }
///
/// #[derive(Reflect, Debug, PartialEq)]
/// struct Dest { a: i32, b: i32 }
///
/// let dest = remap::<Dest>(&Source { a: 0, b: 1, c: 2 }).unwrap();
/// assert_eq!(dest, Dest { a: 0, b: 1 });
/// ```
#[inline]
pub fn remap<D: Constructible>(source: &dyn Reflect) -> Result<D, RemapError> {
    remap_with(source, &NestedTypes::new(), DynamicStruct::new())
}

/// Builds a `D` from the attributes of `source`, `overrides` and `nested`.
///
/// 1. Each attribute of `D` is looked up in `overrides` first, then read
///    from `source` with [`read_attribute`].
/// 2. Every required attribute of `D` must be found, otherwise
///    [`RemapError::MissingRequiredAttributes`] names the missing ones and
///    nothing is constructed.
/// 3. An attribute named in `nested` is remapped into the nested type
///    straight from the source. Any other source attribute is copied with
///    [`Reflect::reflect_clone`]; one that cannot be copied counts as
///    absent. Absent optional attributes keep their defaults and extra
///    attributes are dropped.
///
/// # Examples
///
/// ```
/// use rm_remap::{derive::Reflect, ops::DynamicStruct, remap::NestedTypes, remap_with};
///
/// #[derive(Reflect)]
/// struct Source { a: i32 }
///
/// #[derive(Reflect, Debug, PartialEq)]
/// struct Dest { a: i32, d: i32 }
///
/// let mut overrides = DynamicStruct::new();
/// overrides.extend("d", 2_i32);
///
/// let dest = remap_with::<Dest>(&Source { a: 0 }, &NestedTypes::new(), overrides).unwrap();
/// assert_eq!(dest, Dest { a: 0, d: 2 });
/// ```
pub fn remap_with<D: Constructible>(
    source: &dyn Reflect,
    nested: &NestedTypes,
    mut overrides: DynamicStruct,
) -> Result<D, RemapError> {
    let writable = specifiable_attributes::<D>();

    let mut arguments = Vec::with_capacity(writable.field_len());
    let mut missing = AttributeNames::new();

    for field in writable.iter() {
        let name = field.name();
        match resolve(source, nested, &overrides, name) {
            Some(argument) => arguments.push((name, argument)),
            None if field.is_required() => {
                missing.insert(name);
            }
            None => {}
        }
    }

    if !missing.is_empty() {
        log::debug!(
            "cannot remap `{}` into `{}`: missing {missing}",
            source.reflect_type_path(),
            D::type_path(),
        );
        return Err(RemapError::MissingRequiredAttributes {
            source_type: source.reflect_type_name(),
            dest_type: D::type_name(),
            missing,
        });
    }

    let mut args = DynamicStruct::with_capacity(arguments.len());
    for (name, argument) in arguments {
        let value = match argument {
            Argument::Copied(value) => value,
            Argument::Nested(nested_type, value) => nested_type.remap(value)?,
            Argument::Override(nested_type) => {
                let Some(value) = overrides.remove(name) else {
                    continue;
                };
                match nested_type {
                    Some(nested_type) => nested_type.remap(value.as_ref())?,
                    None => value,
                }
            }
        };
        args.extend_boxed(name, value);
    }

    #[cfg(feature = "debug")]
    log::trace!("construct `{}` from {args:?}", D::type_path());

    Ok(D::construct(args)?)
}

/// Where the value of one destination attribute comes from.
enum Argument<'a> {
    /// A source attribute, copied.
    Copied(Box<dyn Reflect>),
    /// A source attribute, remapped by reference.
    Nested(&'a NestedType, &'a dyn Reflect),
    /// The override of the same name, remapped if the attribute is nested.
    Override(Option<&'a NestedType>),
}

/// Overrides win. Source attributes are only copied when they are
/// forwarded as is; an attribute that cannot be copied counts as absent.
fn resolve<'a>(
    source: &'a dyn Reflect,
    nested: &'a NestedTypes,
    overrides: &DynamicStruct,
    name: &'static str,
) -> Option<Argument<'a>> {
    let nested_type = nested.get(name);
    if overrides.contains(name) {
        return Some(Argument::Override(nested_type));
    }

    let value = read_attribute(source, name)?;
    match nested_type {
        Some(nested_type) => Some(Argument::Nested(nested_type, value)),
        None => copy_attribute(source, name, value).map(Argument::Copied),
    }
}

// -----------------------------------------------------------------------------
// Remapper

/// A builder for one remap call.
///
/// # Examples
///
/// ```
/// use rm_remap::{Remapper, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Point { x: i32, y: i32, z: i32 }
///
/// #[derive(Reflect)]
/// struct Wrapper { point: Point, label: String }
///
/// #[derive(Reflect, Debug, PartialEq)]
/// struct Flat { x: i32, y: i32 }
///
/// #[derive(Reflect, Debug, PartialEq)]
/// struct Labeled { point: Flat, label: String }
///
/// let source = Wrapper { point: Point { x: 1, y: 2, z: 3 }, label: "p".into() };
///
/// let labeled: Labeled = Remapper::new(&source)
///     .nested::<Flat>("point")
///     .with_override("label", String::from("q"))
///     .build()
///     .unwrap();
///
/// assert_eq!(labeled, Labeled { point: Flat { x: 1, y: 2 }, label: "q".into() });
/// ```
pub struct Remapper<'a> {
    source: &'a dyn Reflect,
    nested: NestedTypes,
    overrides: DynamicStruct,
}

impl<'a> Remapper<'a> {
    /// Starts a remap of `source`.
    #[inline]
    pub fn new(source: &'a dyn Reflect) -> Self {
        Self {
            source,
            nested: NestedTypes::new(),
            overrides: DynamicStruct::new(),
        }
    }

    /// Remaps the attribute `name` into `N`.
    #[inline]
    pub fn nested<N: Constructible>(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.nested.insert(name, NestedType::of::<N>());
        self
    }

    /// Replaces all nested types.
    #[inline]
    pub fn with_nested_types(mut self, nested: NestedTypes) -> Self {
        self.nested = nested;
        self
    }

    /// Supplies `value` for the attribute `name`, winning over the source.
    #[inline]
    pub fn with_override<T: Reflect>(self, name: impl Into<Cow<'static, str>>, value: T) -> Self {
        self.with_override_boxed(name, Box::new(value))
    }

    /// See [`Remapper::with_override`].
    #[inline]
    pub fn with_override_boxed(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: Box<dyn Reflect>,
    ) -> Self {
        self.overrides.extend_boxed(name, value);
        self
    }

    /// Runs the remap, see [`remap_with`].
    #[inline]
    pub fn build<D: Constructible>(self) -> Result<D, RemapError> {
        remap_with(self.source, &self.nested, self.overrides)
    }
}
