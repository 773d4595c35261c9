//! Capability list construction (`caps!`)

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Token, Type,
};

pub struct CapsInput {
    pub types: Punctuated<Type, Token![,]>,
}

impl Parse for CapsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let types = Punctuated::parse_terminated(input)?;
        Ok(CapsInput { types })
    }
}

/// Check for duplicate capabilities in the list
///
/// Catches repeats spelled the same way, with a span on the repeat.
/// Repeats spelled through different paths are rejected by the `CapList`
/// bound on the built list.
pub fn check_duplicates(types: &[Type]) -> syn::Result<()> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for ty in types {
        let ty_str = ty.to_token_stream().to_string().replace(' ', "");
        if !seen.insert(ty_str.clone()) {
            return Err(syn::Error::new_spanned(
                ty,
                format!(
                    "duplicate capability `{}`\n\
                     \n\
                     Each capability may appear only once in a capability list.\n\
                     Use a role to choose between competing capabilities instead.",
                    ty_str
                ),
            ));
        }
    }
    Ok(())
}

/// Build the list type: HCons<A, HCons<B, HCons<C, HNil>>>
///
/// Folding from the back keeps the written order as the resolution order.
pub fn build_cap_list(types: &[Type]) -> TokenStream2 {
    let mut result = quote! { ::tola_wrap::HNil };
    for ty in types.iter().rev() {
        result = quote! { ::tola_wrap::HCons<#ty, #result> };
    }
    result
}
