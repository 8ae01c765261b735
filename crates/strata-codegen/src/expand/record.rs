use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let strata = &self.strata;
        let ident = &self.record.ident;
        let record_shape = self.expand_record_shape();
        let field_body = self.expand_field_body();
        let set_field_body = self.expand_set_field_body();
        let model_casts = self.expand_model_casts();

        quote! {
            impl #strata::Record for #ident {
                fn record_shape() -> &'static #strata::Shape {
                    #record_shape
                }

                fn shape(&self) -> &'static #strata::Shape {
                    <Self as #strata::Record>::record_shape()
                }

                fn field(&self, name: &str) -> #strata::Option<#strata::Value> {
                    #field_body
                }

                fn set_field(&mut self, name: &str, value: #strata::Value) -> #strata::Result<()> {
                    #set_field_body
                }

                fn clone_record(&self) -> #strata::Box<dyn #strata::Record> {
                    #strata::Box::new(#strata::Clone::clone(self))
                }

                fn as_any(&self) -> &dyn #strata::Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn #strata::Any {
                    self
                }

                fn into_any(self: #strata::Box<Self>) -> #strata::Box<dyn #strata::Any> {
                    self
                }

                #model_casts
            }
        }
    }

    fn expand_record_shape(&self) -> TokenStream {
        let strata = &self.strata;
        let ident = &self.record.ident;
        let name = self.record.name();

        let collection = match &self.record.collection {
            Some(collection) => quote!(#strata::Option::Some(#collection)),
            None => quote!(#strata::Option::None),
        };

        let fields = self.record.fields.iter().map(|field| {
            let name = &field.name;
            let ty = &field.ty;
            let embedded = field.attrs.embed;
            let tag = match &field.attrs.tag {
                Some(tag) => quote!(#strata::Option::Some(#tag)),
                None => quote!(#strata::Option::None),
            };

            quote! {
                #strata::FieldShape {
                    name: #name,
                    tag: #tag,
                    ty: <#ty as #strata::Reflect>::ty(),
                    embedded: #embedded,
                }
            }
        });

        quote! {
            static SHAPE: #strata::OnceLock<#strata::Shape> = #strata::OnceLock::new();

            SHAPE.get_or_init(|| {
                #strata::Shape::new::<#ident>(#name, #collection, vec![ #( #fields ),* ])
            })
        }
    }

    /// Own fields match first; embedded records are searched in declaration
    /// order after that.
    fn expand_field_body(&self) -> TokenStream {
        let strata = &self.strata;

        let arms = self.record.fields.iter().map(|field| {
            let name = &field.name;
            let ident = &field.ident;

            quote! {
                #name => #strata::Option::Some(#strata::Reflect::to_value(&self.#ident)),
            }
        });

        let embedded = self.record.embedded_fields().map(|field| {
            let ident = &field.ident;

            quote! {
                if let #strata::Option::Some(value) = #strata::Record::field(&self.#ident, name) {
                    return #strata::Option::Some(value);
                }
            }
        });

        quote! {
            match name {
                #( #arms )*
                _ => {
                    #( #embedded )*
                    #strata::Option::None
                }
            }
        }
    }

    fn expand_set_field_body(&self) -> TokenStream {
        let strata = &self.strata;

        let arms = self.record.fields.iter().map(|field| {
            let name = &field.name;
            let ident = &field.ident;

            quote! {
                #name => {
                    self.#ident = #strata::Reflect::from_value(value)?;
                    Ok(())
                }
            }
        });

        let embedded = self.record.embedded_fields().map(|field| {
            let ident = &field.ident;

            quote! {
                if #strata::Record::shape(&self.#ident).find_field(name).is_some() {
                    return #strata::Record::set_field(&mut self.#ident, name, value);
                }
            }
        });

        quote! {
            match name {
                #( #arms )*
                _ => {
                    #( #embedded )*
                    Err(#strata::Error::unknown_field(name))
                }
            }
        }
    }

    fn expand_model_casts(&self) -> TokenStream {
        let strata = &self.strata;

        if self.record.is_model() {
            quote! {
                fn as_model(&self) -> #strata::Option<&dyn #strata::Model> {
                    #strata::Option::Some(self)
                }

                fn as_model_mut(&mut self) -> #strata::Option<&mut dyn #strata::Model> {
                    #strata::Option::Some(self)
                }

                fn into_model(
                    self: #strata::Box<Self>,
                ) -> ::std::result::Result<#strata::Box<dyn #strata::Model>, #strata::Box<dyn #strata::Record>> {
                    Ok(self)
                }
            }
        } else {
            quote! {
                fn as_model(&self) -> #strata::Option<&dyn #strata::Model> {
                    #strata::Option::None
                }

                fn as_model_mut(&mut self) -> #strata::Option<&mut dyn #strata::Model> {
                    #strata::Option::None
                }

                fn into_model(
                    self: #strata::Box<Self>,
                ) -> ::std::result::Result<#strata::Box<dyn #strata::Model>, #strata::Box<dyn #strata::Record>> {
                    Err(self)
                }
            }
        }
    }
}
