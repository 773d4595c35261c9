//! # Layer 1: Composition
//!
//! How capabilities are identified, listed and reached from the composed type.
//!
//! - **Markers**: `Capability` and `Role`, identified by path fingerprints.
//! - **Lists**: `HNil` / `HCons` built by `caps![]`, with `Contains`,
//!   `Select`, `Concat` and `Inspect`.
//! - **Resolution**: `Resolver` exposes the composed type's storage to the
//!   capabilities mixed into it; `Mixes<C>` gates an operation on `C` being listed.

pub mod capability;
pub mod list;
pub mod inspect;
pub mod resolve;

pub use capability::{Capability, Role};
pub use list::{CapList, Concat, Contains, HCons, HNil, Select, Unresolved};
pub use inspect::Inspect;
pub use resolve::{Mixes, Resolver};
