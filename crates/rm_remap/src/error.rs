//! Errors of a remap call.

use alloc::collections::BTreeSet;
use core::fmt;

use thiserror::Error;

use crate::info::TypePath;

// -----------------------------------------------------------------------------
// Error

/// The failure of a remap call.
///
/// # Examples
///
/// ```
/// use rm_remap::{derive::Reflect, error::RemapError, remap};
///
/// #[derive(Reflect)]
/// struct Source { a: i32 }
///
/// #[derive(Reflect, Debug)]
/// struct Dest { a: i32, d: i32 }
///
/// let err = remap::<Dest>(&Source { a: 0 }).unwrap_err();
/// let RemapError::MissingRequiredAttributes { missing, .. } = &err else {
///     unreachable!();
/// };
///
/// assert_eq!(missing.to_string(), "{d}");
/// assert_eq!(
///     err.to_string(),
///     "the source `Source` cannot provide values for the required arguments {d} \
///      of destination type `Dest`",
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RemapError {
    #[error(
        "the source `{source_type}` cannot provide values for the required arguments \
         {missing} of destination type `{dest_type}`"
    )]
    MissingRequiredAttributes {
        source_type: &'static str,
        dest_type: &'static str,
        missing: AttributeNames,
    },

    /// The destination constructor rejected the argument set.
    #[error(transparent)]
    Construct(#[from] ConstructError),
}

/// A destination constructor failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConstructError {
    #[error("missing argument `{field}` for `{dest_type}`")]
    MissingArgument {
        dest_type: &'static str,
        field: &'static str,
    },

    #[error("argument `{field}` of `{dest_type}` expects `{expected}`, found `{found}`")]
    MismatchedType {
        dest_type: &'static str,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl ConstructError {
    /// Creates a [`ConstructError::MissingArgument`] for the destination `D`.
    #[inline]
    pub fn missing<D: TypePath>(field: &'static str) -> Self {
        Self::MissingArgument {
            dest_type: D::type_path(),
            field,
        }
    }
}

// -----------------------------------------------------------------------------
// AttributeNames

/// A sorted set of attribute names, displayed as `{a, d}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeNames(BTreeSet<&'static str>);

impl AttributeNames {
    /// Creates an empty set.
    #[inline]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Adds a name, returning `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, name: &'static str) -> bool {
        self.0.insert(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the names in sorted order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<&'static str> for AttributeNames {
    fn from_iter<T: IntoIterator<Item = &'static str>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for AttributeNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, name) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{AttributeNames, ConstructError, RemapError};

    #[test]
    fn names_are_sorted() {
        let names: AttributeNames = ["d", "a", "d"].into_iter().collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains("a"));
        assert_eq!(names.to_string(), "{a, d}");
        assert_eq!(AttributeNames::new().to_string(), "{}");
    }

    #[test]
    fn construct_error_is_transparent() {
        let inner = ConstructError::MismatchedType {
            dest_type: "demo::Dest",
            field: "size",
            expected: "u32",
            found: "i64",
        };
        let outer = RemapError::from(inner);

        assert_eq!(outer.to_string(), inner.to_string());
        assert_eq!(outer, RemapError::Construct(inner));
    }
}
