mod expand;
mod schema;

use proc_macro2::TokenStream;

/// Expands `#[derive(Record)]`.
pub fn generate_record(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let record = schema::Record::from_ast(&item, schema::RecordKind::Plain)?;

    Ok(expand::record(&record))
}

/// Expands `#[derive(Model)]`: a record that also implements `Model`.
pub fn generate_model(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let record = schema::Record::from_ast(&item, schema::RecordKind::Model)?;

    Ok(expand::record(&record))
}
