//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Capability)]` | on struct | Define capability marker |
//! | `#[derive(Role)]` | on struct | Define role marker |
//! | `caps!` | function macro | Build capability list |

mod cap_set;
pub mod capability;

pub use cap_set::{build_cap_list, check_duplicates, CapsInput};
pub use capability::{expand_derive_capability, expand_derive_role};
