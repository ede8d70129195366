//! Paths used by the generated code.
//!
//! Everything goes through the crate path returned by [`rm_remap`], so the
//! generated code keeps working when `rm_remap` is reached through the
//! `remapper` umbrella crate.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `rm_remap` crate.
///
/// 1. For crates that depend on `rm_remap`, `::rm_remap` is returned.
/// 2. For crates that depend on `remapper`, `::remapper::remap` is returned.
/// 3. Otherwise `::rm_remap` is returned, which may be incorrect.
///
/// This reads the caller's `Cargo.toml`, so the result is passed around
/// instead of being recomputed.
pub(crate) fn rm_remap() -> syn::Path {
    rm_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("rm_remap"))
}

// -----------------------------------------------------------------------------
// Modules

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

#[inline(always)]
pub(crate) fn macro_exports_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::__macro_exports }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::__macro_exports::auto_register }
}

#[inline(always)]
pub(crate) fn reflect_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::Reflect }
}

#[inline(always)]
pub(crate) fn from_reflect_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::FromReflect }
}

#[inline(always)]
pub(crate) fn type_path_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::info::TypePath }
}

#[inline(always)]
pub(crate) fn struct_info_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::info::StructInfo }
}

#[inline(always)]
pub(crate) fn named_field_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::info::NamedField }
}

#[inline(always)]
pub(crate) fn impls_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::impls }
}

#[inline(always)]
pub(crate) fn struct_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::ops::Struct }
}

#[inline(always)]
pub(crate) fn map_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::ops::Map }
}

#[inline(always)]
pub(crate) fn dynamic_struct_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::ops::DynamicStruct }
}

#[inline(always)]
pub(crate) fn struct_field_iter_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::ops::StructFieldIter }
}

#[inline(always)]
pub(crate) fn reflect_kind_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::ops::ReflectKind }
}

#[inline(always)]
pub(crate) fn reflect_ref_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::ops::ReflectRef }
}

#[inline(always)]
pub(crate) fn reflect_clone_error_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::ops::ReflectCloneError }
}

#[inline(always)]
pub(crate) fn construct_error_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::error::ConstructError }
}

#[inline(always)]
pub(crate) fn constructible_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::registry::Constructible }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn signature_registry_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::registry::SignatureRegistry }
}

#[inline(always)]
pub(crate) fn generic_type_path_cell_(rm_remap_path: &syn::Path) -> TokenStream {
    quote! { #rm_remap_path::impls::GenericTypePathCell }
}
