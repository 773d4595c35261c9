//! Runtime inspection of capability lists
//!
//! Allows iterating over the capabilities of a list for debugging.

use super::capability::Capability;
use super::list::{HCons, HNil};

/// Runtime inspection of capability lists.
///
/// Calls `f` for each capability with its fully qualified path, in list
/// order. Useful for debugging and logging.
pub trait Inspect {
    fn inspect<F: FnMut(&'static str)>(f: F);
}

impl Inspect for HNil {
    fn inspect<F: FnMut(&'static str)>(_f: F) {}
}

impl<H: Capability, T: Inspect> Inspect for HCons<H, T> {
    fn inspect<F: FnMut(&'static str)>(mut f: F) {
        f(H::NAME);
        T::inspect(f);
    }
}
