//! # Layer 0: Primitives
//!
//! Basic building blocks for capability identities:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF).
//! - `fingerprint.rs`: Path hashes carried as nibble types.

pub mod bool;
pub mod nibble;
pub mod fingerprint;

pub use bool::{Bool, Present, Absent, BoolNot};
pub use nibble::{Nibble, NibbleEq};
pub use fingerprint::{Fingerprint, Identity, IdentityEq, ToNibble, fnv1a_64, nibble_at};
