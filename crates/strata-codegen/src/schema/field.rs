use super::ErrorSet;

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier, used to access the struct member
    pub(crate) ident: syn::Ident,

    /// Declared name with any `r#` prefix removed
    pub(crate) name: String,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Contents of `#[db("...")]`, validated when the schema is built
    pub(crate) tag: Option<syn::LitStr>,

    /// True if the field is annotated with `#[embed]`
    pub(crate) embed: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("db") {
                if attrs.tag.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[db] attribute"));
                    continue;
                }

                match attr.parse_args::<syn::LitStr>() {
                    Ok(lit) => attrs.tag = Some(lit),
                    Err(_) => errs.push(syn::Error::new_spanned(
                        attr,
                        "expected `#[db(\"option;option:value\")]`",
                    )),
                }
            } else if attr.path().is_ident("embed") {
                if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else if attrs.embed {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[embed] attribute"));
                } else {
                    attrs.embed = true;
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            attrs,
            ty: field.ty.clone(),
        })
    }
}
