use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;
use crate::path::fp::OptionFP;

/// The compile-time parts of a type path: the full path without generics,
/// the short ident and the optional module.
struct PathParts {
    base: TokenStream,
    ident: String,
    module: Option<TokenStream>,
}

fn path_parts(info: &ReflectStruct) -> PathParts {
    match &info.attrs().type_path {
        Some(lit) => {
            let value = lit.value();
            match value.rsplit_once("::") {
                Some((module, ident)) => PathParts {
                    base: quote! { #lit },
                    ident: ident.to_owned(),
                    module: Some(quote! { #module }),
                },
                None => PathParts {
                    base: quote! { #lit },
                    ident: value,
                    module: None,
                },
            }
        }
        None => {
            let ident = info.ident().to_string();
            let suffix = format!("::{ident}");
            PathParts {
                base: quote! { ::core::concat!(::core::module_path!(), #suffix) },
                ident,
                module: Some(quote! { ::core::module_path!() }),
            }
        }
    }
}

/// `concat(&[head, "<", T::method(), ", ", U::method(), ">"])` cached per type.
fn generic_path_cell(info: &ReflectStruct, head: TokenStream, method: TokenStream) -> TokenStream {
    let rm_remap_path = info.rm_remap_path();
    let type_path_ = crate::path::type_path_(rm_remap_path);
    let impls_ = crate::path::impls_(rm_remap_path);
    let path_cell_ = crate::path::generic_type_path_cell_(rm_remap_path);

    let mut parts = vec![head, quote! { "<" }];
    for (index, param) in info.type_params().enumerate() {
        if index > 0 {
            parts.push(quote! { ", " });
        }
        parts.push(quote! { <#param as #type_path_>::#method() });
    }
    parts.push(quote! { ">" });

    quote! {
        static CELL: #path_cell_ = #path_cell_::new();
        CELL.get_or_insert::<Self>(|| #impls_::concat(&[#(#parts),*]))
    }
}

/// Generate implementation codes for `TypePath`
pub(crate) fn impl_trait_type_path(info: &ReflectStruct) -> TokenStream {
    let type_path_ = crate::path::type_path_(info.rm_remap_path());
    let real_ident = info.ident();

    let PathParts {
        base,
        ident,
        module,
    } = path_parts(info);

    let (type_path, type_name, inline_flag) = if info.is_generic() {
        (
            generic_path_cell(info, base, quote! { type_path }),
            generic_path_cell(info, quote! { #ident }, quote! { type_name }),
            TokenStream::new(),
        )
    } else {
        (base, quote! { #ident }, quote! { #[inline] })
    };

    let module_path = match module {
        Some(module) => quote! { #OptionFP::Some(#module) },
        None => quote! { #OptionFP::None },
    };

    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #type_path_ for #real_ident #ty_generics #where_clause {
            #inline_flag
            fn type_path() -> &'static str {
                #type_path
            }

            #inline_flag
            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn type_ident() -> &'static str {
                #ident
            }

            #[inline]
            fn module_path() -> #OptionFP<&'static str> {
                #module_path
            }
        }
    }
}
