//! Code generation for `#[derive(Reflect)]`.

// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod trait_constructible;
mod trait_from_reflect;
mod trait_reflect;
mod trait_struct;
mod trait_type_path;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generates every implementation of a derived struct.
pub(crate) fn impl_reflect_struct(info: &ReflectStruct) -> TokenStream {
    let type_path_impl = trait_type_path::impl_trait_type_path(info);
    let reflect_impl = trait_reflect::impl_trait_reflect(info);
    let struct_impl = trait_struct::impl_trait_struct(info);
    let constructible_impl = trait_constructible::impl_trait_constructible(info);
    let from_reflect_impl = trait_from_reflect::impl_trait_from_reflect(info);
    let auto_register_impl = auto_register::get_auto_register_impl(info);

    quote! {
        const _: () = {
            #type_path_impl

            #reflect_impl

            #struct_impl

            #constructible_impl

            #from_reflect_impl

            #auto_register_impl
        };
    }
}
