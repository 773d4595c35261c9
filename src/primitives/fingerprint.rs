//! Capability fingerprints.
//!
//! A fingerprint is the 64-bit FNV-1a hash of a marker's fully qualified
//! path, carried as sixteen const generic nibbles:
//!
//! ```text
//! "crate::mixins::Equality" -> FNV-1a (u64) -> Fingerprint<n0, .., n15>
//!                                                 |
//!                                  ToNibble<nK> -> (X?, X?, .., X?)
//! ```
//!
//! The const parameters come from `const fn` evaluation of
//! `concat!(module_path!(), ...)`, which works on stable. Equality is decided
//! on the nibble types so the result is a type-level `Bool`.

use super::bool::Bool;
use super::nibble::*;

/// FNV-1a over the bytes of `s`.
pub const fn fnv1a_64(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash: u64 = 0xcbf29ce484222325;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x100000001b3);
        i += 1;
    }
    hash
}

/// Nibble `n` (0..16) of the hash of `s`, least significant first.
pub const fn nibble_at(s: &str, n: u32) -> u8 {
    ((fnv1a_64(s) >> (n * 4)) & 0xF) as u8
}

/// Converts a const `u8` (0-15) to a Nibble type.
pub trait ToNibble<const N: u8> {
    type Out: Nibble;
}

impl ToNibble<0> for () { type Out = X0; }
impl ToNibble<1> for () { type Out = X1; }
impl ToNibble<2> for () { type Out = X2; }
impl ToNibble<3> for () { type Out = X3; }
impl ToNibble<4> for () { type Out = X4; }
impl ToNibble<5> for () { type Out = X5; }
impl ToNibble<6> for () { type Out = X6; }
impl ToNibble<7> for () { type Out = X7; }
impl ToNibble<8> for () { type Out = X8; }
impl ToNibble<9> for () { type Out = X9; }
impl ToNibble<10> for () { type Out = XA; }
impl ToNibble<11> for () { type Out = XB; }
impl ToNibble<12> for () { type Out = XC; }
impl ToNibble<13> for () { type Out = XD; }
impl ToNibble<14> for () { type Out = XE; }
impl ToNibble<15> for () { type Out = XF; }

/// 64-bit identity of a capability or role marker.
///
/// Usage: `Fingerprint<{n0}, {n1}, ..., {n15}>`, normally produced by
/// `__fingerprint!`.
pub struct Fingerprint<
    const N0: u8, const N1: u8, const N2: u8, const N3: u8,
    const N4: u8, const N5: u8, const N6: u8, const N7: u8,
    const N8: u8, const N9: u8, const N10: u8, const N11: u8,
    const N12: u8, const N13: u8, const N14: u8, const N15: u8,
>;

/// A type-level identity that can be compared with `IdentityEq`.
pub trait Identity: 'static {
    /// The sixteen nibble types, as a flat tuple.
    type Nibbles;
}

impl<
    const N0: u8, const N1: u8, const N2: u8, const N3: u8,
    const N4: u8, const N5: u8, const N6: u8, const N7: u8,
    const N8: u8, const N9: u8, const N10: u8, const N11: u8,
    const N12: u8, const N13: u8, const N14: u8, const N15: u8,
> Identity for Fingerprint<N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15>
where
    (): ToNibble<N0> + ToNibble<N1> + ToNibble<N2> + ToNibble<N3>
      + ToNibble<N4> + ToNibble<N5> + ToNibble<N6> + ToNibble<N7>
      + ToNibble<N8> + ToNibble<N9> + ToNibble<N10> + ToNibble<N11>
      + ToNibble<N12> + ToNibble<N13> + ToNibble<N14> + ToNibble<N15>,
{
    type Nibbles = (
        <() as ToNibble<N0>>::Out, <() as ToNibble<N1>>::Out,
        <() as ToNibble<N2>>::Out, <() as ToNibble<N3>>::Out,
        <() as ToNibble<N4>>::Out, <() as ToNibble<N5>>::Out,
        <() as ToNibble<N6>>::Out, <() as ToNibble<N7>>::Out,
        <() as ToNibble<N8>>::Out, <() as ToNibble<N9>>::Out,
        <() as ToNibble<N10>>::Out, <() as ToNibble<N11>>::Out,
        <() as ToNibble<N12>>::Out, <() as ToNibble<N13>>::Out,
        <() as ToNibble<N14>>::Out, <() as ToNibble<N15>>::Out,
    );
}

/// Element-wise equality of two nibble tuples.
pub trait TupleEq<Other> {
    type Out: Bool;
}

macro_rules! impl_tuple_eq {
    (@combine $First:ty) => { $First };
    (@combine $First:ty, $($Rest:ty),+) => {
        <$First as Bool>::And<impl_tuple_eq!(@combine $($Rest),+)>
    };

    ($([$T:ident, $U:ident]),*) => {
        impl<$($T, $U),*> TupleEq<($($U,)*)> for ($($T,)*)
        where
            $($U: Nibble, $T: NibbleEq<$U>),*
        {
            type Out = impl_tuple_eq!(@combine $(<$T as NibbleEq<$U>>::Out),*);
        }
    };
}

impl_tuple_eq!(
    [L0, R0], [L1, R1], [L2, R2], [L3, R3],
    [L4, R4], [L5, R5], [L6, R6], [L7, R7],
    [L8, R8], [L9, R9], [L10, R10], [L11, R11],
    [L12, R12], [L13, R13], [L14, R14], [L15, R15]
);

/// Type-level identity comparison.
pub trait IdentityEq<Other> {
    type Out: Bool;
}

impl<A, B> IdentityEq<B> for A
where
    A: Identity,
    B: Identity,
    A::Nibbles: TupleEq<B::Nibbles>,
{
    type Out = <A::Nibbles as TupleEq<B::Nibbles>>::Out;
}
