use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Only `#[derive(Model)]` gets an impl; the key accessors come from the
    /// trait's defaults.
    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let strata = &self.strata;
        let ident = &self.record.ident;

        let Some(collection) = &self.record.collection else {
            return quote!();
        };

        quote! {
            impl #strata::Model for #ident {
                fn collection(&self) -> &'static str {
                    #collection
                }
            }
        }
    }
}
