//! Fully qualified paths of prelude items.
//!
//! The caller may shadow `Option`, `Result` or `Box`, so generated code never
//! relies on the prelude.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! fully_qualified {
    ($($name:ident => $(:: $seg:ident)+;)*) => {
        $(
            pub(crate) struct $name;

            impl ToTokens for $name {
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!($(:: $seg)+));
                }
            }
        )*
    };
}

fully_qualified! {
    OptionFP => ::core::option::Option;
    ResultFP => ::core::result::Result;
    CloneFP => ::core::clone::Clone;
    DefaultFP => ::core::default::Default;
    FormatterFP => ::core::fmt::Formatter;
    FmtResultFP => ::core::fmt::Result;
}
