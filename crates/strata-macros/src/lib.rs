extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(Record, attributes(db, embed))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match strata_codegen::generate_record(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[proc_macro_derive(Model, attributes(db, embed, collection))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match strata_codegen::generate_model(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
