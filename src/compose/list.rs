//! Ordered capability lists and their compile-time queries.
//!
//! A list is a cons chain in the order the caller wrote it:
//!
//! ```text
//! caps![A, B, C] = HCons<A, HCons<B, HCons<C, HNil>>>
//! ```
//!
//! Every query walks the chain front to back, so "earlier wins" falls out of
//! the structure rather than from any tie-breaking rule.

use core::marker::PhantomData;

use super::capability::{Capability, Role};
use crate::primitives::{Absent, Bool, IdentityEq};

/// Empty capability list
pub struct HNil;

/// Capability list cons cell
pub struct HCons<H, T>(PhantomData<fn() -> (H, T)>);

/// Result of [`Select`] when no listed capability fills the role.
pub struct Unresolved;

/// A well-formed capability list.
///
/// Each capability appears at most once, compared by identity rather than
/// by how its path was spelled:
///
/// ```compile_fail
/// use tola_wrap::{caps, CapList};
/// use tola_wrap::mixins::Equality;
///
/// type Twice = caps![Equality, tola_wrap::mixins::Equality];
/// let _ = <Twice as CapList>::LEN;
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a capability list",
    note = "Build capability lists with `caps![...]` and list each capability once."
)]
pub trait CapList: 'static {
    /// Number of capabilities in the list.
    const LEN: usize;
}

impl CapList for HNil {
    const LEN: usize = 0;
}

impl<H, T> CapList for HCons<H, T>
where
    H: Capability,
    T: CapList + Contains<H, Out = Absent>,
{
    const LEN: usize = 1 + T::LEN;
}

// =============================================================================
// Contains
// =============================================================================

/// Does the list contain capability `C`?
///
/// Returns `Present` (true) or `Absent` (false).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a capability list that can be searched for `{C}`",
    note = "Build capability lists with `caps![...]` from `#[derive(Capability)]` markers."
)]
pub trait Contains<C> {
    type Out: Bool;
    /// The boolean result as a constant.
    const RESULT: bool = <Self::Out as Bool>::VALUE;
}

impl<C> Contains<C> for HNil {
    type Out = Absent;
}

impl<C, H, T> Contains<C> for HCons<H, T>
where
    C: Capability,
    H: Capability,
    T: Contains<C>,
    H::Id: IdentityEq<C::Id>,
{
    type Out = <<H::Id as IdentityEq<C::Id>>::Out as Bool>::Or<<T as Contains<C>>::Out>;
}

// =============================================================================
// Select
// =============================================================================

/// The first capability in the list whose role is `R`, or [`Unresolved`].
pub trait Select<R> {
    type Out;
}

impl<R> Select<R> for HNil {
    type Out = Unresolved;
}

impl<R, H, T> Select<R> for HCons<H, T>
where
    R: Role,
    H: Capability,
    T: Select<R>,
    <H::Role as Role>::Id: IdentityEq<R::Id>,
{
    type Out = <<<H::Role as Role>::Id as IdentityEq<R::Id>>::Out as Bool>::If<
        H,
        <T as Select<R>>::Out,
    >;
}

// =============================================================================
// Concat
// =============================================================================

/// List concatenation: `Self ++ L`, order preserved.
pub trait Concat<L> {
    type Out;
}

impl<L> Concat<L> for HNil {
    type Out = L;
}

impl<H, T, L> Concat<L> for HCons<H, T>
where
    T: Concat<L>,
{
    type Out = HCons<H, <T as Concat<L>>::Out>;
}
