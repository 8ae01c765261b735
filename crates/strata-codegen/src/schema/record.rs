use super::{ErrorSet, Field, RecordAttr};

use std_util::str;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecordKind {
    /// `#[derive(Record)]`: a structural record with no collection
    Plain,

    /// `#[derive(Model)]`: a record persisted to a named collection
    Model,
}

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Fields in declaration order
    pub(crate) fields: Vec<Field>,

    pub(crate) kind: RecordKind,

    /// Collection name; set for models only
    pub(crate) collection: Option<String>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct, kind: RecordKind) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut attr = RecordAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = attr.populate_from_ast(&ast.attrs, kind == RecordKind::Model) {
            errs.push(err);
        }

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let collection = match kind {
            RecordKind::Plain => None,
            RecordKind::Model => Some(match attr.collection {
                Some(lit) => lit.value(),
                None => default_collection(&ast.ident),
            }),
        };

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
            kind,
            collection,
        })
    }

    pub(crate) fn name(&self) -> String {
        self.ident.to_string()
    }

    pub(crate) fn is_model(&self) -> bool {
        self.kind == RecordKind::Model
    }

    pub(crate) fn embedded_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.attrs.embed)
    }
}

/// `UserProfile` is stored in `user_profiles`.
fn default_collection(ident: &syn::Ident) -> String {
    str::pluralize(&str::snake_case(&ident.to_string()))
}
