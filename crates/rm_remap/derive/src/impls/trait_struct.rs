use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;
use crate::path::fp::OptionFP;

/// Generate implementation codes for `Struct`
///
/// Ignored fields are not exposed, so indices count active fields only.
pub(crate) fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let rm_remap_path = info.rm_remap_path();
    let reflect_ = crate::path::reflect_(rm_remap_path);
    let struct_ = crate::path::struct_(rm_remap_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(rm_remap_path);

    let real_ident = info.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    let idents: Vec<_> = info.active_fields().map(|field| field.ident).collect();
    let names: Vec<_> = info.active_fields().map(|field| field.name.as_str()).collect();
    let indices: Vec<_> = (0..idents.len()).collect();
    let field_len = idents.len();

    // Unit structs cannot be bound inside a repetition.
    let some_ = quote! { #OptionFP::Some };

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #OptionFP<&dyn #reflect_> {
                match name {
                    #(#names => #some_(&self.#idents as &dyn #reflect_),)*
                    _ => #OptionFP::None,
                }
            }

            fn field_at(&self, index: usize) -> #OptionFP<&dyn #reflect_> {
                match index {
                    #(#indices => #some_(&self.#idents as &dyn #reflect_),)*
                    _ => #OptionFP::None,
                }
            }

            fn name_at(&self, index: usize) -> #OptionFP<&str> {
                match index {
                    #(#indices => #some_(#names),)*
                    _ => #OptionFP::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}
