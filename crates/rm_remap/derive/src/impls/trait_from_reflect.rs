use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;
use crate::path::fp::OptionFP;

/// Generate implementation codes for `FromReflect`
///
/// A value of the same type is cloned. A mapping (a `Map` or a dynamic
/// `Struct`) goes through `Constructible::construct`. Other concrete structs
/// are never converted.
pub(crate) fn impl_trait_from_reflect(info: &ReflectStruct) -> TokenStream {
    let rm_remap_path = info.rm_remap_path();
    let reflect_ = crate::path::reflect_(rm_remap_path);
    let from_reflect_ = crate::path::from_reflect_(rm_remap_path);
    let reflect_ref_ = crate::path::reflect_ref_(rm_remap_path);
    let constructible_ = crate::path::constructible_(rm_remap_path);
    let struct_ = crate::path::struct_(rm_remap_path);
    let map_ = crate::path::map_(rm_remap_path);

    let real_ident = info.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #from_reflect_ for #real_ident #ty_generics #where_clause {
            fn from_reflect(reflect: &dyn #reflect_) -> #OptionFP<Self> {
                if <dyn #reflect_>::is::<Self>(reflect) {
                    return #reflect_::reflect_clone(reflect).ok()?.take::<Self>().ok();
                }

                let __args = match #reflect_::reflect_ref(reflect) {
                    #reflect_ref_::Struct(dyn_struct) if #reflect_::is_dynamic(reflect) => {
                        #struct_::to_dynamic_struct(dyn_struct).ok()?
                    }
                    #reflect_ref_::Map(dyn_map) => #map_::to_dynamic_struct(dyn_map).ok()?,
                    _ => return #OptionFP::None,
                };

                <Self as #constructible_>::construct(__args).ok()
            }
        }
    }
}
