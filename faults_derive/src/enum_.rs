use crate::{fields_pattern, Behaviors, Capability};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, ItemEnum};

fn generate_enum_accessor(
    variants: &[(TokenStream, Behaviors)],
    capability: Capability,
) -> Option<TokenStream> {
    let match_arms: Vec<_> = variants
        .iter()
        .filter_map(|(pattern, behaviors)| {
            let value = behaviors.get(capability)?;
            Some(quote! {
                #pattern => ::core::option::Option::Some(#value)
            })
        })
        .collect();

    if match_arms.is_empty() {
        return None;
    }

    let fallback = (match_arms.len() < variants.len()).then(|| {
        quote! {
            _ => ::core::option::Option::None
        }
    });

    let signature = capability.signature();
    Some(quote! {
        #[allow(unused_variables)]
        #signature {
            match self {
                #(#match_arms,)*
                #fallback
            }
        }
    })
}

pub fn derive_behavior_enum(enum_: &ItemEnum) -> Result<TokenStream, Error> {
    if let Some(arg) = enum_.attrs.iter().find(|a| a.path().is_ident("behavior")) {
        return Err(Error::new_spanned(
            arg,
            "behaviors of an enum are declared on its variants",
        ));
    }

    let variants = enum_
        .variants
        .iter()
        .map(|variant| {
            let variant_ident = &variant.ident;
            let fields = fields_pattern(&variant.fields);
            let behaviors = Behaviors::collect(&variant.attrs, &variant.fields)?;
            Ok((quote! { Self::#variant_ident #fields }, behaviors))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let accessors = Capability::ALL
        .into_iter()
        .filter_map(|capability| generate_enum_accessor(&variants, capability));

    let enum_ident = &enum_.ident;
    let (impl_generics, ty_generics, where_clause) = enum_.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::faults::Behavior for #enum_ident #ty_generics #where_clause {
            #(#accessors)*
        }
    })
}
