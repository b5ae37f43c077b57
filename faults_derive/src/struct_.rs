use crate::{fields_pattern, Behaviors, Capability};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, ItemStruct};

fn generate_struct_accessors(struct_: &ItemStruct) -> Result<Vec<TokenStream>, Error> {
    let behaviors = Behaviors::collect(&struct_.attrs, &struct_.fields)?;
    let pattern = fields_pattern(&struct_.fields);

    let accessors = Capability::ALL
        .into_iter()
        .filter_map(|capability| {
            let value = behaviors.get(capability)?;
            let signature = capability.signature();
            Some(quote! {
                #[allow(unused_variables)]
                #signature {
                    let Self #pattern = self;
                    ::core::option::Option::Some(#value)
                }
            })
        })
        .collect();

    Ok(accessors)
}

pub fn derive_behavior_struct(struct_: &ItemStruct) -> Result<TokenStream, Error> {
    let accessors = generate_struct_accessors(struct_)?;

    let struct_ident = &struct_.ident;
    let (impl_generics, ty_generics, where_clause) = struct_.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::faults::Behavior for #struct_ident #ty_generics #where_clause {
            #(#accessors)*
        }
    })
}
