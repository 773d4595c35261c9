//! Type-level nibble system (4-bit values X0-XF).
//!
//! Capability fingerprints are sixteen nibbles; comparing two fingerprints
//! reduces to sixteen `NibbleEq` lookups.

use super::bool::{Absent, Bool, Present};

/// Iterate over all 16 nibbles (X0..XF).
macro_rules! for_each_nibble {
    ($mac:ident) => {
        $mac!(X0); $mac!(X1); $mac!(X2); $mac!(X3);
        $mac!(X4); $mac!(X5); $mac!(X6); $mac!(X7);
        $mac!(X8); $mac!(X9); $mac!(XA); $mac!(XB);
        $mac!(XC); $mac!(XD); $mac!(XE); $mac!(XF);
    };
}

/// Generate impls for all distinct pairs (A, B) and (B, A) where A != B.
macro_rules! for_distinct_pairs {
    ($mac:ident) => {
        for_distinct_pairs!(@recurse $mac, [X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF]);
    };
    (@recurse $mac:ident, [$head:ident, $($tail:ident),*]) => {
        $(
            $mac!($head, $tail);
            $mac!($tail, $head);
        )*
        for_distinct_pairs!(@recurse $mac, [$($tail),*]);
    };
    (@recurse $mac:ident, [$last:ident]) => {};
}

/// Type-level nibble (4-bit value, 0..15)
pub trait Nibble: 'static {}

macro_rules! define_nibble {
    ($n:ident) => {
        pub struct $n;
        impl Nibble for $n {}
    };
}
for_each_nibble!(define_nibble);

/// Type-level nibble equality
pub trait NibbleEq<Other: Nibble>: Nibble {
    type Out: Bool;
}

// X == X → Present
macro_rules! impl_eq_self {
    ($n:ident) => { impl NibbleEq<$n> for $n { type Out = Present; } };
}
for_each_nibble!(impl_eq_self);

// X != Y → Absent
macro_rules! impl_neq { ($a:ident, $b:ident) => { impl NibbleEq<$b> for $a { type Out = Absent; } }; }
for_distinct_pairs!(impl_neq);
