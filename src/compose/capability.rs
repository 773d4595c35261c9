use crate::primitives::fingerprint::Identity;

/// Capability Trait
///
/// Implemented by zero-sized marker types via `#[derive(Capability)]`.
/// A capability holds no state; what it contributes is decided by the traits
/// implemented for it (e.g. [`Conversion`](crate::mixins::Conversion)) and by
/// the wrapper impls gated on its presence.
pub trait Capability: 'static {
    /// Fully qualified path, used for inspection and diagnostics.
    const NAME: &'static str;

    /// Path fingerprint. Used for membership tests in capability lists.
    type Id: Identity;

    /// The operation slot this capability fills. When several listed
    /// capabilities share a role, the earliest one in the list is selected.
    type Role: Role;
}

/// Role Trait
///
/// Names an operation slot that competing capabilities may fill.
/// Capabilities derived without a `role` attribute are their own role.
pub trait Role: 'static {
    type Id: Identity;
}
