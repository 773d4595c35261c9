#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - tracing: lifecycle trace events

//! # tola-wrap
//!
//! Strongly-typed domain values from two zero-overhead building blocks.
//!
//! - [`Optional<T>`]: a nullable single-value container that never changes in
//!   place. Empty is tested against the [`NOTHING`] sentinel.
//! - [`Wrapper<T, Tag, Caps>`]: a newtype whose `Tag` makes it a distinct type
//!   and whose `Caps` list statically mixes in behavior.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Present/Absent, Nibble (X0-XF), Fingerprint (path hash)        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Composition                                             |
//! |  - Capability, Role, HCons/HNil lists                             |
//! |  - Contains, Select (first match wins), Concat, Inspect           |
//! |  - Resolver / Mixes (capability -> composed type's storage)       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Containers                                              |
//! |  - Optional<T>, Wrapper<T, Tag, Caps>, reference capabilities     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_wrap::prelude::*;
//!
//! #[derive(Capability)]
//! struct Feet;
//!
//! impl Conversion<f64> for Feet {
//!     type Target = f64;
//!     fn convert(meters: &f64) -> f64 { meters * 3.28084 }
//! }
//!
//! enum MetersTag {}
//! type Meters = Wrapper<f64, MetersTag, caps![Equality, Feet, ShowValue]>;
//!
//! let height = Meters::new(2.0);
//! assert_eq!(height.convert::<Feet>(), 6.56168);
//! assert_eq!(height.to_string(), "2");
//! assert_eq!(height.clone(), height);
//! ```

// Allow `::tola_wrap` to work inside the crate itself
extern crate self as tola_wrap;

// Re-export paste for newtype!
pub use paste;

/// Lifecycle trace event; compiled out without the `tracing` feature.
macro_rules! lifecycle {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: "tola_wrap", $($arg)*);
    };
}

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Composition
// =============================================================================
pub mod compose;

// =============================================================================
// Layer 2: Containers
// =============================================================================
mod slot;
pub mod error;
pub mod optional;
pub mod wrapper;
pub mod mixins;

// newtype!
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use compose::{
    CapList, Capability, Concat, Contains, HCons, HNil, Inspect, Mixes, Resolver, Role, Select,
    Unresolved,
};
pub use error::AccessError;
pub use optional::{Nothing, Optional, NOTHING};
pub use primitives::{Absent, Bool, Present};
pub use wrapper::Wrapper;

// Re-export proc-macros
pub use macros::{caps, Capability, Role};

// =============================================================================
// Declarative Macro Bridge for #[derive(Capability)] / #[derive(Role)]
// =============================================================================
//
// Three-layer macro architecture to get module_path!() into the fingerprint:
// 1. #[derive(Capability)] (proc-macro) generates __impl_capability! call
// 2. __impl_capability! (this decl-macro) expands concat!(module_path!(), ...)
// 3. __fingerprint! turns the path into const generic nibbles

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use #[derive(Capability)] instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_capability {
    ($ty:ident, $name:expr, $role:ty) => {
        impl $crate::Capability for $ty {
            const NAME: &'static str = concat!(module_path!(), "::", $name);
            type Id = $crate::__fingerprint!(concat!(module_path!(), "::", $name));
            type Role = $role;
        }
    };
}

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use #[derive(Role)] or #[derive(Capability)] instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_role {
    ($ty:ident, $name:expr) => {
        impl $crate::Role for $ty {
            type Id = $crate::__fingerprint!(concat!(module_path!(), "::", $name));
        }
    };
}

/// Path string to `Fingerprint` type.
#[macro_export]
#[doc(hidden)]
macro_rules! __fingerprint {
    ($path:expr) => {
        $crate::primitives::fingerprint::Fingerprint<
            { $crate::primitives::fingerprint::nibble_at($path, 0) },
            { $crate::primitives::fingerprint::nibble_at($path, 1) },
            { $crate::primitives::fingerprint::nibble_at($path, 2) },
            { $crate::primitives::fingerprint::nibble_at($path, 3) },
            { $crate::primitives::fingerprint::nibble_at($path, 4) },
            { $crate::primitives::fingerprint::nibble_at($path, 5) },
            { $crate::primitives::fingerprint::nibble_at($path, 6) },
            { $crate::primitives::fingerprint::nibble_at($path, 7) },
            { $crate::primitives::fingerprint::nibble_at($path, 8) },
            { $crate::primitives::fingerprint::nibble_at($path, 9) },
            { $crate::primitives::fingerprint::nibble_at($path, 10) },
            { $crate::primitives::fingerprint::nibble_at($path, 11) },
            { $crate::primitives::fingerprint::nibble_at($path, 12) },
            { $crate::primitives::fingerprint::nibble_at($path, 13) },
            { $crate::primitives::fingerprint::nibble_at($path, 14) },
            { $crate::primitives::fingerprint::nibble_at($path, 15) },
        >
    };
}

/// Common items for building tagged values.
pub mod prelude {
    pub use crate::compose::{Capability, Inspect, Mixes, Resolver, Role};
    pub use crate::mixins::{
        Arithmetic, Conversion, Defaulted, Equality, Hashed, Ordered, Render, RenderWith,
        ShowTagged, ShowValue,
    };
    pub use crate::optional::{Nothing, Optional, NOTHING};
    pub use crate::wrapper::Wrapper;
    pub use crate::newtype;
    pub use macros::{caps, Capability, Role};
}
