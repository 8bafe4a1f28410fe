//! Record derive macro implementation
//!
//! Generates the named-field lookup and downcast plumbing that lets a
//! struct participate in path traversal.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Implementation of the Record derive macro
pub fn derive_record_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Record can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data_struct.fields else {
        return Err(syn::Error::new_spanned(
            input,
            "Record requires a struct with named fields",
        ));
    };

    let mut field_arms = Vec::new();
    for field in &fields.named {
        let Some(ident) = &field.ident else {
            continue;
        };

        let mut skip = false;
        let mut rename: Option<String> = None;
        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let value = meta.value()?;
                    let name: LitStr = value.parse()?;
                    rename = Some(name.value());
                    Ok(())
                } else {
                    Err(meta.error("unsupported record attribute"))
                }
            })?;
        }
        if skip {
            continue;
        }

        let name = rename.unwrap_or_else(|| ident.to_string());
        field_arms.push(quote! {
            #name => ::core::option::Option::Some(::dotget::Value::from(
                ::core::clone::Clone::clone(&self.#ident),
            )),
        });
    }

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::dotget::Record for #struct_name #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::core::option::Option<::dotget::Value> {
                match name {
                    #(#field_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn as_any_arc(
                self: ::std::sync::Arc<Self>,
            ) -> ::std::sync::Arc<dyn ::core::any::Any + ::core::marker::Send + ::core::marker::Sync>
            {
                self
            }
        }
    })
}
