use alloc::borrow::Cow;
use core::fmt;

/// Error outcomes of [`Reflect::reflect_clone`](crate::Reflect::reflect_clone).
///
/// The attribute reader treats either variant as "unreadable" and skips the
/// attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReflectCloneError {
    /// The type does not support clone.
    NotSupport { type_path: Cow<'static, str> },
    /// The field cannot be cloned.
    FieldNotCloneable {
        type_path: Cow<'static, str>,
        field: Cow<'static, str>,
    },
}

impl fmt::Display for ReflectCloneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupport { type_path } => {
                write!(f, "`reflect_clone` not support for `{type_path}`")
            }
            Self::FieldNotCloneable { type_path, field } => {
                write!(
                    f,
                    "field `{type_path}::{field}` cannot be made cloneable for `reflect_clone`"
                )
            }
        }
    }
}

impl core::error::Error for ReflectCloneError {}
