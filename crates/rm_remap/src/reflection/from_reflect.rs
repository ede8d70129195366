use alloc::boxed::Box;

use crate::Reflect;

/// Builds a concrete value back out of reflected data.
///
/// Destination fields are filled through this trait, so every field type of a
/// derived destination must implement it.
///
/// # Rules
///
/// 1. If the input is exactly `Self`, it is cloned (or moved, through
///    [`take_from_reflect`]).
/// 2. A derived struct also accepts a dynamic struct (a mapping such as
///    [`DynamicStruct`]) and builds itself from the named entries, applying its
///    declared defaults.
/// 3. Anything else returns `None`. Values are never converted between types.
///
/// # Examples
///
/// ```
/// use rm_remap::{FromReflect, ops::DynamicStruct, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct A {
///     field_a: i32,
///     #[reflect(default)]
///     field_b: bool,
/// }
///
/// let mut dynamic = DynamicStruct::new();
/// dynamic.extend("field_a", 10_i32);
///
/// let a = A::from_reflect(&dynamic).unwrap();
///
/// assert_eq!(a.field_a, 10);
/// assert_eq!(a.field_b, false);
/// assert!(i64::from_reflect(&10_i32).is_none());
/// ```
///
/// [`take_from_reflect`]: FromReflect::take_from_reflect
/// [`DynamicStruct`]: crate::ops::DynamicStruct
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `FromReflect` so cannot be built from reflected data",
    note = "consider annotating `{Self}` with `#[derive(Reflect)]`"
)]
pub trait FromReflect: Reflect + Sized {
    /// Builds `Self` from a reflected value.
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self>;

    /// Moves the value out if it already is `Self`, otherwise falls back to
    /// [`FromReflect::from_reflect`]. The box is handed back on failure.
    fn take_from_reflect(reflect: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        match reflect.take::<Self>() {
            Ok(value) => Ok(value),
            Err(reflect) => match Self::from_reflect(reflect.as_ref()) {
                Some(value) => Ok(value),
                None => Err(reflect),
            },
        }
    }
}
