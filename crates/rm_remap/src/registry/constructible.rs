use crate::Reflect;
use crate::error::ConstructError;
use crate::info::{StructInfo, TypePath};
use crate::ops::DynamicStruct;

/// A destination type of a remap.
///
/// [`struct_info`] lists the writable attributes in declaration order, each
/// flagged optional (has a declared default) or required. [`construct`] builds
/// the value from an argument set, taking each present field and applying the
/// declared default for each absent optional one.
///
/// [`#[derive(Reflect)]`](crate::derive::Reflect) implements it for structs
/// with named fields.
///
/// # Manual implementation
///
/// ```
/// use rm_remap::{Reflect, derive::Reflect, remap};
/// use rm_remap::error::ConstructError;
/// use rm_remap::impls::construct_field;
/// use rm_remap::info::{NamedField, StructInfo};
/// use rm_remap::ops::DynamicStruct;
/// use rm_remap::registry::Constructible;
///
/// #[derive(Reflect)]
/// #[reflect(clone)]
/// #[derive(Clone)]
/// struct Meters {
///     value: f64,
/// }
///
/// // A destination with a renamed argument and a hand-written default.
/// struct Length(f64);
/// # impl rm_remap::info::TypePath for Length {
/// #     fn type_path() -> &'static str { "demo::Length" }
/// #     fn type_name() -> &'static str { "Length" }
/// #     fn type_ident() -> &'static str { "Length" }
/// # }
/// # impl Reflect for Length {
/// #     fn reflect_kind(&self) -> rm_remap::ops::ReflectKind { rm_remap::ops::ReflectKind::Opaque }
/// #     fn reflect_ref(&self) -> rm_remap::ops::ReflectRef<'_> { rm_remap::ops::ReflectRef::Opaque(self) }
/// #     fn reflect_clone(&self) -> Result<Box<dyn Reflect>, rm_remap::ops::ReflectCloneError> {
/// #         Ok(Box::new(Length(self.0)))
/// #     }
/// # }
///
/// impl Constructible for Length {
///     fn struct_info() -> StructInfo {
///         StructInfo::new::<Self>(&[NamedField::new::<f64>("value").optional()])
///     }
///
///     fn construct(mut args: DynamicStruct) -> Result<Self, ConstructError> {
///         match args.remove("value") {
///             Some(value) => Ok(Length(construct_field::<Self, f64>("value", value)?)),
///             None => Ok(Length(1.0)),
///         }
///     }
/// }
///
/// let length = remap::<Length>(&Meters { value: 3.0 }).unwrap();
/// assert_eq!(length.0, 3.0);
/// ```
///
/// [`struct_info`]: Constructible::struct_info
/// [`construct`]: Constructible::construct
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a remap destination",
    note = "consider annotating `{Self}` with `#[derive(Reflect)]`"
)]
pub trait Constructible: Reflect + TypePath + Sized {
    /// Returns the writable attribute table.
    ///
    /// This is uncached; use
    /// [`specifiable_attributes`](crate::registry::specifiable_attributes).
    fn struct_info() -> StructInfo;

    /// Builds the value from the given arguments.
    ///
    /// Arguments without a matching field are ignored.
    fn construct(args: DynamicStruct) -> Result<Self, ConstructError>;
}
