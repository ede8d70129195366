use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, LitStr, Token};

use crate::REFLECT_ATTRIBUTE_NAME;

fn set_flag(slot: &mut Option<Span>, meta: &ParseNestedMeta) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error("duplicate attribute"));
    }
    *slot = Some(meta.path.get_ident().map_or_else(Span::call_site, |ident| ident.span()));
    Ok(())
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Type level `#[reflect(..)]` options.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `clone`: use `Clone` for `reflect_clone`.
    pub clone: Option<Span>,
    /// `auto_register`: submit the type for `SignatureRegistry::auto_register`.
    pub auto_register: Option<Span>,
    /// `type_path = "path::Name"`.
    pub type_path: Option<LitStr>,
}

impl TypeAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("clone") {
                    set_flag(&mut this.clone, &meta)
                } else if meta.path.is_ident("auto_register") {
                    set_flag(&mut this.auto_register, &meta)
                } else if meta.path.is_ident("type_path") {
                    if this.type_path.is_some() {
                        return Err(meta.error("duplicate attribute"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    validate_type_path(&lit)?;
                    this.type_path = Some(lit);
                    Ok(())
                } else {
                    Err(meta.error(
                        "unknown type attribute, expected `clone`, `auto_register` or `type_path = \"..\"`",
                    ))
                }
            })?;
        }

        Ok(this)
    }
}

fn validate_type_path(lit: &LitStr) -> syn::Result<()> {
    let value = lit.value();
    let valid = !value.is_empty()
        && value
            .split("::")
            .all(|segment| syn::parse_str::<syn::Ident>(segment).is_ok());
    if valid {
        Ok(())
    } else {
        Err(syn::Error::new(
            lit.span(),
            "`type_path` must look like `crate_name::module::Name`, without a leading `::` or generics",
        ))
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// The declared default of a field.
pub(crate) enum FieldDefault {
    /// `default`: `Default::default()`.
    Trait,
    /// `default = expr`.
    Expr(Box<Expr>),
}

/// Field level `#[reflect(..)]` options.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `ignore`: neither readable nor writable.
    pub ignore: Option<Span>,
    pub default: Option<FieldDefault>,
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("ignore") {
                    set_flag(&mut this.ignore, &meta)
                } else if meta.path.is_ident("default") {
                    if this.default.is_some() {
                        return Err(meta.error("duplicate attribute"));
                    }
                    this.default = Some(if meta.input.peek(Token![=]) {
                        FieldDefault::Expr(Box::new(meta.value()?.parse()?))
                    } else {
                        FieldDefault::Trait
                    });
                    Ok(())
                } else {
                    Err(meta.error(
                        "unknown field attribute, expected `ignore`, `default` or `default = expr`",
                    ))
                }
            })?;
        }

        Ok(this)
    }
}
