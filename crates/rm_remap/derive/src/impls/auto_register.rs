use proc_macro2::TokenStream;

use crate::derive_data::ReflectStruct;

/// Generate `auto_register` implementation
///
/// Generic types are rejected while parsing, so only concrete types get here.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(info: &ReflectStruct) -> TokenStream {
    use quote::quote_spanned;

    let Some(span) = info.attrs().auto_register else {
        return TokenStream::new();
    };

    let rm_remap_path = info.rm_remap_path();
    let auto_register_ = crate::path::auto_register_(rm_remap_path);
    let signature_registry_ = crate::path::signature_registry_(rm_remap_path);
    let real_ident = info.ident();

    quote_spanned! { span =>
        fn __rm_auto_register(registry: &#signature_registry_) {
            registry.register::<#real_ident>();
        }

        #auto_register_::inventory::submit! {
            #auto_register_::__AutoRegisterFunc(__rm_auto_register)
        }
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectStruct) -> TokenStream {
    TokenStream::new()
}
