use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, GenericParam, Generics, Ident, Type, WhereClause};

use crate::derive_data::{FieldAttributes, FieldDefault, TypeAttributes};
use crate::path::fp::DefaultFP;

// -----------------------------------------------------------------------------
// StructField

/// A named field of the derived struct.
pub(crate) struct StructField<'a> {
    /// The Rust identifier, raw prefix kept.
    pub ident: &'a Ident,
    /// The attribute name, raw prefix removed.
    pub name: String,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    #[inline]
    pub(crate) fn is_ignored(&self) -> bool {
        self.attrs.ignore.is_some()
    }

    /// Optional fields are active fields with a declared default.
    #[inline]
    pub(crate) fn is_optional(&self) -> bool {
        self.attrs.default.is_some()
    }

    /// The value used when no argument is supplied.
    pub(crate) fn default_value(&self) -> TokenStream {
        let ty = self.ty;
        match &self.attrs.default {
            Some(FieldDefault::Expr(expr)) => quote! { (#expr) },
            Some(FieldDefault::Trait) | None => quote! { <#ty as #DefaultFP>::default() },
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectStruct

/// The parsed derive input: a struct with named fields (or a unit struct).
pub(crate) struct ReflectStruct<'a> {
    ident: &'a Ident,
    generics: &'a Generics,
    attrs: TypeAttributes,
    fields: Vec<StructField<'a>>,
    rm_remap_path: syn::Path,
}

impl<'a> ReflectStruct<'a> {
    pub(crate) fn from_derive_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let data = match &ast.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`#[derive(Reflect)]` only supports structs with named fields",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`#[derive(Reflect)]` only supports structs with named fields",
                ));
            }
        };

        let fields = match &data.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .map(|field| {
                    // Named fields always carry an identifier.
                    let ident = field
                        .ident
                        .as_ref()
                        .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
                    Ok(StructField {
                        ident,
                        name: ident.unraw().to_string(),
                        ty: &field.ty,
                        attrs: FieldAttributes::parse_attrs(&field.attrs)?,
                    })
                })
                .collect::<syn::Result<Vec<_>>>()?,
            Fields::Unit => Vec::new(),
            Fields::Unnamed(unnamed) => {
                return Err(syn::Error::new_spanned(
                    unnamed,
                    "`#[derive(Reflect)]` only supports structs with named fields",
                ));
            }
        };

        for param in &ast.generics.params {
            if !matches!(param, GenericParam::Type(_)) {
                return Err(syn::Error::new_spanned(
                    param,
                    "`#[derive(Reflect)]` does not support lifetime or const parameters",
                ));
            }
        }

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        if let Some(span) = attrs.auto_register
            && !ast.generics.params.is_empty()
        {
            return Err(syn::Error::new(
                span,
                "`auto_register` is not supported for generic types",
            ));
        }

        Ok(Self {
            ident: &ast.ident,
            generics: &ast.generics,
            attrs,
            fields,
            rm_remap_path: crate::path::rm_remap(),
        })
    }

    #[inline]
    pub(crate) fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub(crate) fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub(crate) fn rm_remap_path(&self) -> &syn::Path {
        &self.rm_remap_path
    }

    /// All fields in declaration order.
    #[inline]
    pub(crate) fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Fields that are not `#[reflect(ignore)]`, in declaration order.
    pub(crate) fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| !field.is_ignored())
    }

    #[inline]
    pub(crate) fn is_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }

    /// Type parameter identifiers, in declaration order.
    pub(crate) fn type_params(&self) -> impl Iterator<Item = &Ident> {
        self.generics.type_params().map(|param| &param.ident)
    }

    /// Splits the generics for an impl block.
    ///
    /// Generic structs get `T: TypePath + Send + Sync` for every type
    /// parameter and `FieldTy: FromReflect + TypePath` for every active field.
    pub(crate) fn split_generics(&self) -> (TokenStream, TokenStream, Option<WhereClause>) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let impl_generics = impl_generics.to_token_stream();
        let ty_generics = ty_generics.to_token_stream();

        if !self.is_generic() {
            return (impl_generics, ty_generics, where_clause.cloned());
        }

        let type_path_ = crate::path::type_path_(&self.rm_remap_path);
        let from_reflect_ = crate::path::from_reflect_(&self.rm_remap_path);

        let mut generics = self.generics.clone();
        let where_clause = generics.make_where_clause();
        for param in self.type_params() {
            where_clause
                .predicates
                .push(syn::parse_quote! { #param: #type_path_ + ::core::marker::Send + ::core::marker::Sync });
        }
        for field in self.active_fields() {
            let ty = field.ty;
            where_clause
                .predicates
                .push(syn::parse_quote! { #ty: #from_reflect_ + #type_path_ });
        }

        (impl_generics, ty_generics, Some(where_clause.clone()))
    }
}
