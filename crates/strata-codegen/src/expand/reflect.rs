use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_reflect_impl(&self) -> TokenStream {
        let strata = &self.strata;
        let ident = &self.record.ident;

        quote! {
            impl #strata::Reflect for #ident {
                fn ty() -> #strata::Type {
                    #strata::Type::Record(#strata::RecordType::new(
                        <Self as #strata::Record>::record_shape,
                    ))
                }

                fn to_value(&self) -> #strata::Value {
                    #strata::Value::Record(#strata::Box::new(#strata::Clone::clone(self)))
                }

                fn from_value(value: #strata::Value) -> #strata::Result<Self> {
                    #strata::record_from_value::<Self>(value)
                }
            }
        }
    }
}
