//! Tagged newtype with statically composed capabilities.
//!
//! ```text
//! Wrapper<T, Tag, Caps>
//!         |   |    |
//!         |   |    +-- caps![A, B, ..]  ordered, compile-time only
//!         |   +------- nominal marker   never instantiated
//!         +----------- the one held value, always present
//! ```
//!
//! Two wrappers that differ in `Tag` or in `Caps` are unrelated types:
//!
//! ```compile_fail
//! use tola_wrap::Wrapper;
//!
//! enum Meters {}
//! enum Seconds {}
//!
//! let distance: Wrapper<f64, Meters> = Wrapper::new(3.0);
//! let duration: Wrapper<f64, Seconds> = distance;
//! ```
//!
//! Operations contributed by capabilities exist only when the capability is
//! listed:
//!
//! ```compile_fail
//! use tola_wrap::Wrapper;
//!
//! enum Meters {}
//! let a: Wrapper<f64, Meters> = Wrapper::new(1.0);
//! let b: Wrapper<f64, Meters> = Wrapper::new(2.0);
//! let _ = a + b; // `Arithmetic` is not listed
//! ```
//!
//! `Caps` must be a capability list:
//!
//! ```compile_fail
//! use tola_wrap::Wrapper;
//!
//! enum Meters {}
//! let _: Wrapper<u8, Meters, u32> = Wrapper::new(1);
//! ```

use core::any::type_name;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Add, Sub};

use crate::compose::{CapList, Contains, HNil, Inspect, Resolver, Select};
use crate::mixins::{Arithmetic, Conversion, Defaulted, Equality, Hashed, Ordered, Render, RenderWith};
use crate::primitives::Present;

/// A value of type `T` with the nominal identity `Tag` and the capabilities
/// listed in `Caps`.
///
/// The wrapper is always occupied and has no API that replaces its value.
/// A "changed" wrapper is a new wrapper, built with [`Wrapper::new`] or
/// [`Wrapper::rewrap`].
pub struct Wrapper<T, Tag: ?Sized, Caps: CapList = HNil> {
    value: T,
    _marker: PhantomData<(fn() -> PhantomData<Tag>, fn() -> Caps)>,
}

impl<T, Tag: ?Sized, Caps: CapList> Wrapper<T, Tag, Caps> {
    /// Wraps `value`. Only an exact `T` is accepted.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value, _marker: PhantomData }
    }

    /// Wraps a clone of `value`.
    #[inline]
    pub fn from_ref(value: &T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone())
    }

    /// The held value.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Exclusive access to the held value.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Moves the held value out. No clone is made.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Consumes the wrapper and wraps its value under another tag and
    /// capability list.
    #[inline]
    pub fn rewrap<Tag2: ?Sized, Caps2: CapList>(self) -> Wrapper<T, Tag2, Caps2> {
        Wrapper::new(self.value)
    }

    /// Type name of the tag.
    pub fn tag_name() -> &'static str {
        type_name::<Tag>()
    }

    /// Calls `f` with each listed capability's path, in list order.
    pub fn capability_names<F: FnMut(&'static str)>(f: F)
    where
        Caps: Inspect,
    {
        Caps::inspect(f)
    }

    /// Applies the conversion contributed by capability `C`.
    ///
    /// ```
    /// use tola_wrap::prelude::*;
    ///
    /// #[derive(Capability)]
    /// struct Truncate;
    ///
    /// impl Conversion<f64> for Truncate {
    ///     type Target = i64;
    ///     fn convert(value: &f64) -> i64 { *value as i64 }
    /// }
    ///
    /// enum Price {}
    /// let price: Wrapper<f64, Price, caps![Truncate]> = Wrapper::new(9.99);
    /// assert_eq!(price.convert::<Truncate>(), 9);
    /// ```
    #[inline]
    pub fn convert<C>(&self) -> C::Target
    where
        C: Conversion<T>,
        Caps: Contains<C, Out = Present>,
    {
        C::convert(self.resolve())
    }
}

impl<T, Tag: ?Sized, Caps: CapList> Resolver for Wrapper<T, Tag, Caps> {
    type Value = T;
    type Tag = Tag;
    type Caps = Caps;

    #[inline]
    fn resolve(&self) -> &T {
        &self.value
    }
}

impl<T, Tag: ?Sized, Caps: CapList> From<T> for Wrapper<T, Tag, Caps> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Clone, Tag: ?Sized, Caps: CapList> Clone for Wrapper<T, Tag, Caps> {
    fn clone(&self) -> Self {
        lifecycle!(value_type = type_name::<T>(), tag = type_name::<Tag>(), "wrapper: clone");
        Self::new(self.value.clone())
    }
}

impl<T: fmt::Debug, Tag: ?Sized, Caps: CapList> fmt::Debug for Wrapper<T, Tag, Caps> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Wrapper").field(&self.value).finish()
    }
}

// =============================================================================
// Capability-gated impls
// =============================================================================

impl<T, Tag: ?Sized, Caps: CapList> PartialEq for Wrapper<T, Tag, Caps>
where
    T: PartialEq,
    Caps: Contains<Equality, Out = Present>,
{
    fn eq(&self, other: &Self) -> bool {
        self.resolve() == other.resolve()
    }
}

impl<T, Tag: ?Sized, Caps: CapList> Eq for Wrapper<T, Tag, Caps>
where
    T: Eq,
    Caps: Contains<Equality, Out = Present>,
{
}

impl<T, Tag: ?Sized, Caps: CapList> PartialOrd for Wrapper<T, Tag, Caps>
where
    T: PartialOrd,
    Caps: Contains<Equality, Out = Present> + Contains<Ordered, Out = Present>,
{
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.resolve().partial_cmp(other.resolve())
    }
}

impl<T, Tag: ?Sized, Caps: CapList> Ord for Wrapper<T, Tag, Caps>
where
    T: Ord,
    Caps: Contains<Equality, Out = Present> + Contains<Ordered, Out = Present>,
{
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.resolve().cmp(other.resolve())
    }
}

impl<T, Tag: ?Sized, Caps: CapList> Hash for Wrapper<T, Tag, Caps>
where
    T: Hash,
    Caps: Contains<Hashed, Out = Present>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resolve().hash(state);
    }
}

impl<T, Tag: ?Sized, Caps: CapList> Add for Wrapper<T, Tag, Caps>
where
    T: Add<Output = T>,
    Caps: Contains<Arithmetic, Out = Present>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<T, Tag: ?Sized, Caps: CapList> Sub for Wrapper<T, Tag, Caps>
where
    T: Sub<Output = T>,
    Caps: Contains<Arithmetic, Out = Present>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<T, Tag: ?Sized, Caps: CapList> Default for Wrapper<T, Tag, Caps>
where
    T: Default,
    Caps: Contains<Defaulted, Out = Present>,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Rendered by the first capability in `Caps` with the [`Render`] role.
impl<T, Tag: ?Sized, Caps: CapList> fmt::Display for Wrapper<T, Tag, Caps>
where
    Caps: Select<Render>,
    <Caps as Select<Render>>::Out: RenderWith<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <<Caps as Select<Render>>::Out as RenderWith<T>>::render::<Tag>(self.resolve(), f)
    }
}
