mod model;
mod record;
mod reflect;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for strata types
    strata: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impl = self.expand_record_impl();
        let reflect_impl = self.expand_reflect_impl();
        let model_impl = self.expand_model_impl();

        wrap_in_const(quote! {
            #record_impl
            #reflect_impl
            #model_impl
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        strata: quote!(_strata::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use strata as _strata;
            #code
        };
    }
}
