#[derive(Debug, Default)]
pub(crate) struct RecordAttr {
    /// Collection name from `#[collection = "..."]`
    pub(crate) collection: Option<syn::LitStr>,
}

impl RecordAttr {
    pub(super) fn populate_from_ast(
        &mut self,
        attrs: &[syn::Attribute],
        allow_collection: bool,
    ) -> syn::Result<()> {
        for attr in attrs {
            if !attr.path().is_ident("collection") {
                continue;
            }

            if !allow_collection {
                return Err(syn::Error::new_spanned(
                    attr,
                    "`collection` is only supported on `#[derive(Model)]`",
                ));
            }

            if self.collection.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate `collection` attribute",
                ));
            }

            let syn::Meta::NameValue(meta) = &attr.meta else {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected `collection = \"name\"`",
                ));
            };

            let syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit),
                ..
            }) = &meta.value
            else {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected `collection = \"name\"`",
                ));
            };

            if lit.value().is_empty() {
                return Err(syn::Error::new_spanned(lit, "collection name is empty"));
            }

            self.collection = Some(lit.clone());
        }

        Ok(())
    }
}
