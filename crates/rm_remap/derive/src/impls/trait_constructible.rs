use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;
use crate::path::fp::{OptionFP, ResultFP};

/// Generate implementation codes for `Constructible`
///
/// `struct_info` lists the active fields in declaration order, `construct`
/// consumes one argument per active field. Ignored fields and absent
/// optional arguments take their declared default.
pub(crate) fn impl_trait_constructible(info: &ReflectStruct) -> TokenStream {
    let rm_remap_path = info.rm_remap_path();
    let constructible_ = crate::path::constructible_(rm_remap_path);
    let struct_info_ = crate::path::struct_info_(rm_remap_path);
    let named_field_ = crate::path::named_field_(rm_remap_path);
    let dynamic_struct_ = crate::path::dynamic_struct_(rm_remap_path);
    let construct_error_ = crate::path::construct_error_(rm_remap_path);
    let impls_ = crate::path::impls_(rm_remap_path);

    let real_ident = info.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    let named_fields = info.active_fields().map(|field| {
        let ty = field.ty;
        let name = &field.name;
        if field.is_optional() {
            quote! { #named_field_::new::<#ty>(#name).optional() }
        } else {
            quote! { #named_field_::new::<#ty>(#name) }
        }
    });

    let field_values = info.fields().iter().map(|field| {
        let ident = field.ident;
        let ty = field.ty;
        let name = &field.name;

        if field.is_ignored() {
            let default_value = field.default_value();
            return quote! { #ident: #default_value, };
        }

        let absent = if field.is_optional() {
            field.default_value()
        } else {
            quote! { return #ResultFP::Err(#construct_error_::missing::<Self>(#name)) }
        };

        quote! {
            #ident: match __args.remove(#name) {
                #OptionFP::Some(__value) => #impls_::construct_field::<Self, #ty>(#name, __value)?,
                #OptionFP::None => #absent,
            },
        }
    });

    quote! {
        impl #impl_generics #constructible_ for #real_ident #ty_generics #where_clause {
            fn struct_info() -> #struct_info_ {
                #struct_info_::new::<Self>(&[
                    #(#named_fields),*
                ])
            }

            #[allow(unused_mut, unused_variables)]
            fn construct(mut __args: #dynamic_struct_) -> #ResultFP<Self, #construct_error_> {
                #ResultFP::Ok(Self {
                    #(#field_values)*
                })
            }
        }
    }
}
