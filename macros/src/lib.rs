//! Procedural macros for the tola-wrap capability system
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Capability)]` | unit struct | Define a capability marker |
//! | `#[derive(Role)]` | unit struct | Define a role shared by competing capabilities |
//! | `caps![]` | - | Build an ordered capability list type |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Capability)]
//! struct Equality;
//!
//! #[derive(Capability)]
//! #[capability(role = Render)]
//! struct ShowValue;
//!
//! type Caps = caps![Equality, ShowValue];
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod user;

/// Derive macro for capability markers.
///
/// The capability's identity is a 64-bit fingerprint of its fully qualified
/// path, so equally named markers in different modules never collide.
///
/// An optional `#[capability(role = Path)]` attribute assigns the capability
/// to a role. Without it the capability is its own role.
#[proc_macro_derive(Capability, attributes(capability))]
pub fn derive_capability(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_capability(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro for role markers.
///
/// Roles name an operation slot (for example "render as text"). When several
/// listed capabilities share a role, the first one in list order wins.
#[proc_macro_derive(Role)]
pub fn derive_role(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_role(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Build an ordered capability list type.
///
/// # Usage
/// ```ignore
/// type NoCaps = caps![];
/// type Caps = caps![Equality, Arithmetic, ShowValue];
/// // => HCons<Equality, HCons<Arithmetic, HCons<ShowValue, HNil>>>
/// ```
///
/// Listing the same capability twice is a compile error.
#[proc_macro]
pub fn caps(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::CapsInput);
    let types: Vec<_> = input.types.into_iter().collect();

    if let Err(err) = user::check_duplicates(&types) {
        return err.to_compile_error().into();
    }

    user::build_cap_list(&types).into()
}
