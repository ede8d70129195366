//! Derive macro of `rm_remap`, see [`Reflect`].
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for a struct with
/// named fields (or a unit struct):
///
/// - `TypePath`
/// - `Reflect`
/// - `Struct`
/// - `Constructible`
/// - `FromReflect`
///
/// So a derived struct can be read as a remap source and built as a remap
/// destination.
///
/// Tuple structs, enums and unions are rejected, so are lifetime and const
/// parameters.
///
/// ## Field Attributes
///
/// ### Ignore
///
/// An ignored field is neither readable nor writable. It is built with
/// `Default::default()`, and the struct can no longer be cloned through
/// reflection unless `#[reflect(clone)]` is present.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Foo {
///     name: String,
///     #[reflect(ignore)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// ### Default
///
/// A field with a default is optional: when no argument is supplied for it,
/// the default applies. Fields without one are required.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Foo {
///     a: i32,
///     #[reflect(default)]      // `Default::default()`
///     b: i32,
///     #[reflect(default = 2)]  // any expression of the field type
///     d: i32,
/// }
/// ```
///
/// ## Type Attributes
///
/// ### Clone
///
/// By default `reflect_clone` clones each field through reflection. If the
/// type implements `Clone`, the `clone` flag uses it instead.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// #[reflect(clone)]
/// struct Foo { /* ... */ }
/// ```
///
/// ### Custom Type Path
///
/// The default path is `module_path!()` followed by the type name. It can be
/// replaced, generics are appended automatically:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "you::me::Foo")]
/// struct Foo { /* ... */ }
/// ```
///
/// ### Auto Registration
///
/// With the `auto_register` feature, a marked type is added to the registry
/// by `SignatureRegistry::auto_register`. Generic types cannot be marked.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(auto_register)]
/// struct Foo { /* ... */ }
/// ```
///
/// This attribute is a no-op when the `auto_register` feature is disabled.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectStruct::from_derive_input(&ast) {
        Ok(info) => impls::impl_reflect_struct(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
