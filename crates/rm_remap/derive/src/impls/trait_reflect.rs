use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::ReflectStruct;
use crate::path::fp::{CloneFP, FmtResultFP, FormatterFP, OptionFP, ResultFP};

/// Generate `Reflect::reflect_clone`.
///
/// - `#[reflect(clone)]`: `Clone::clone`.
/// - Any ignored field: `FieldNotCloneable`, the field has no reflected value.
/// - Otherwise every field is cloned through `reflect_clone`.
fn get_reflect_clone_impl(info: &ReflectStruct) -> TokenStream {
    let rm_remap_path = info.rm_remap_path();
    let macro_exports_ = crate::path::macro_exports_(rm_remap_path);
    let reflect_ = crate::path::reflect_(rm_remap_path);
    let reflect_clone_error_ = crate::path::reflect_clone_error_(rm_remap_path);
    let type_path_ = crate::path::type_path_(rm_remap_path);
    let impls_ = crate::path::impls_(rm_remap_path);

    if let Some(span) = info.attrs().clone {
        return quote_spanned! { span =>
            #[inline]
            fn reflect_clone(&self) -> #ResultFP<#macro_exports_::Box<dyn #reflect_>, #reflect_clone_error_> {
                #ResultFP::Ok(#macro_exports_::Box::new(<Self as #CloneFP>::clone(self)))
            }
        };
    }

    if let Some(field) = info.fields().iter().find(|field| field.is_ignored()) {
        let name = &field.name;
        return quote! {
            #[inline]
            fn reflect_clone(&self) -> #ResultFP<#macro_exports_::Box<dyn #reflect_>, #reflect_clone_error_> {
                #ResultFP::Err(#reflect_clone_error_::FieldNotCloneable {
                    type_path: #macro_exports_::Cow::Borrowed(<Self as #type_path_>::type_path()),
                    field: #macro_exports_::Cow::Borrowed(#name),
                })
            }
        };
    }

    let fields = info.fields().iter().map(|field| {
        let ident = field.ident;
        let name = &field.name;
        quote! {
            #ident: #impls_::clone_field(&self.#ident, <Self as #type_path_>::type_path(), #name)?,
        }
    });

    quote! {
        fn reflect_clone(&self) -> #ResultFP<#macro_exports_::Box<dyn #reflect_>, #reflect_clone_error_> {
            #ResultFP::Ok(#macro_exports_::Box::new(Self {
                #(#fields)*
            }))
        }
    }
}

/// Generate implementation codes for `Reflect`
pub(crate) fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let rm_remap_path = info.rm_remap_path();
    let reflect_ = crate::path::reflect_(rm_remap_path);
    let reflect_kind_ = crate::path::reflect_kind_(rm_remap_path);
    let reflect_ref_ = crate::path::reflect_ref_(rm_remap_path);
    let impls_ = crate::path::impls_(rm_remap_path);

    let real_ident = info.ident();
    let (impl_generics, ty_generics, mut where_clause) = info.split_generics();

    // A derived `Clone` on a generic type carries its own bounds.
    if info.attrs().clone.is_some() && info.is_generic() {
        let predicate: syn::WherePredicate =
            syn::parse_quote! { #real_ident #ty_generics: #CloneFP };
        if let Some(where_clause) = where_clause.as_mut() {
            where_clause.predicates.push(predicate);
        }
    }

    let reflect_clone_tokens = get_reflect_clone_impl(info);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #reflect_clone_tokens

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #OptionFP<bool> {
                #impls_::struct_partial_eq(self, other)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut #FormatterFP<'_>) -> #FmtResultFP {
                #impls_::struct_debug(self, f)
            }
        }
    }
}
