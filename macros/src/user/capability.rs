use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

/// Markers must be plain named types: the fingerprint is derived from the
/// path, so generic parameters would all share one identity.
fn ensure_not_generic(input: &DeriveInput, what: &str) -> syn::Result<()> {
    if input.generics.params.is_empty() {
        return Ok(());
    }
    Err(syn::Error::new_spanned(
        &input.generics,
        format!("{what} markers cannot be generic"),
    ))
}

/// Reads `#[capability(role = Path)]`, if present.
fn parse_role(input: &DeriveInput) -> syn::Result<Option<syn::Path>> {
    let mut role = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("capability") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("role") {
                role = Some(meta.value()?.parse::<syn::Path>()?);
                Ok(())
            } else {
                Err(meta.error("unsupported capability attribute, expected `role = Path`"))
            }
        })?;
    }
    Ok(role)
}

/// #[derive(Capability)] generates a call to the declarative macro bridge.
/// This allows module_path!() to be expanded at the definition site before
/// the fingerprint is computed.
///
/// 1. #[derive(Capability)] (proc-macro) -> generates __impl_capability! call
/// 2. __impl_capability! (decl-macro) -> passes concat!() to __fingerprint!
/// 3. __fingerprint! -> const fn hash nibbles as const generic arguments
pub fn expand_derive_capability(input: DeriveInput) -> syn::Result<TokenStream2> {
    ensure_not_generic(&input, "capability")?;
    let ident = &input.ident;
    let ident_str = ident.to_string();

    Ok(match parse_role(&input)? {
        Some(role) => quote! {
            ::tola_wrap::__impl_capability!(#ident, #ident_str, #role);
        },
        None => quote! {
            ::tola_wrap::__impl_role!(#ident, #ident_str);
            ::tola_wrap::__impl_capability!(#ident, #ident_str, #ident);
        },
    })
}

pub fn expand_derive_role(input: DeriveInput) -> syn::Result<TokenStream2> {
    ensure_not_generic(&input, "role")?;
    let ident = &input.ident;
    let ident_str = ident.to_string();

    Ok(quote! {
        ::tola_wrap::__impl_role!(#ident, #ident_str);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_capability_is_its_own_role() {
        let input: DeriveInput = syn::parse_str("struct Equality;").unwrap();
        let out = expand_derive_capability(input).unwrap().to_string();
        assert!(out.contains("__impl_role"));
        assert!(out.contains("__impl_capability"));
    }

    #[test]
    fn role_attribute_is_forwarded() {
        let input: DeriveInput =
            syn::parse_str("#[capability(role = Render)] struct ShowValue;").unwrap();
        let out = expand_derive_capability(input).unwrap().to_string();
        assert!(!out.contains("__impl_role"));
        assert!(out.contains("Render"));
    }

    #[test]
    fn unknown_attribute_is_an_error() {
        let input: DeriveInput =
            syn::parse_str("#[capability(order = 1)] struct Bad;").unwrap();
        assert!(expand_derive_capability(input).is_err());
    }

    #[test]
    fn generic_markers_are_rejected() {
        let input: DeriveInput = syn::parse_str("struct Bad<T>(T);").unwrap();
        assert!(expand_derive_role(input).is_err());
    }
}
