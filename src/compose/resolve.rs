//! Self-type resolution.
//!
//! A capability never owns storage. Whatever it contributes is computed from
//! the value held by the concrete type it is mixed into, reached through
//! [`Resolver::resolve`]. Everything is resolved statically: the capability
//! is generic over `W: Resolver`, monomorphized per composed type.

use super::capability::Capability;
use super::list::{CapList, Contains};
use crate::primitives::Present;

/// Exposes a composed type's storage and type-level configuration.
///
/// Implemented by [`Wrapper`](crate::Wrapper).
pub trait Resolver {
    /// The held value type.
    type Value;
    /// The nominal tag. Never instantiated.
    type Tag: ?Sized;
    /// The ordered capability list.
    type Caps: CapList;

    /// The held value.
    fn resolve(&self) -> &Self::Value;
}

/// Satisfied by composed types whose capability list contains `C`.
///
/// Downstream capabilities add operations with a blanket impl:
///
/// ```ignore
/// #[derive(Capability)]
/// struct Halving;
///
/// trait Halved { fn halved(&self) -> f64; }
///
/// impl<W> Halved for W
/// where
///     W: Mixes<Halving> + Resolver<Value = f64>,
/// {
///     fn halved(&self) -> f64 { *self.resolve() / 2.0 }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not mix in capability `{C}`",
    label = "capability `{C}` is not listed for this type",
    note = "Add `{C}` to the type's `caps![...]` list."
)]
pub trait Mixes<C: Capability>: Resolver {}

impl<W, C> Mixes<C> for W
where
    W: Resolver,
    C: Capability,
    W::Caps: Contains<C, Out = Present>,
{
}
