//! Immutable nullable container.
//!
//! `Optional<T>` holds zero or one `T` and never changes in place: there is
//! no setter, no replace and no mutable accessor. Its state only moves between
//! instances, by construction, [`take`](Optional::take) or drop.
//!
//! ```
//! use tola_wrap::{Optional, NOTHING};
//!
//! let mut opt = Optional::of(42);
//! assert_eq!(*opt.get(), 42);
//! assert!(!opt.contains(&43));
//! assert!(opt != NOTHING);
//!
//! let moved = opt.take();
//! assert!(opt == NOTHING);
//! assert_eq!(*moved.get(), 42);
//! ```
//!
//! ## Access discipline
//!
//! [`get`](Optional::get) and [`into_inner`](Optional::into_inner) require an
//! occupied container and panic otherwise. Callers that cannot rule out the
//! empty state use [`try_get`](Optional::try_get), [`get_or`](Optional::get_or)
//! or compare against [`NOTHING`] first.

use core::fmt;

use crate::error::AccessError;
use crate::slot::Slot;

/// The empty-state sentinel.
///
/// Compares equal to every empty [`Optional`], in both operand orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nothing;

/// The one value of [`Nothing`].
pub const NOTHING: Nothing = Nothing;

/// A nullable single-value container with value semantics.
pub struct Optional<T> {
    slot: Slot<T>,
}

impl<T> Optional<T> {
    /// An empty container.
    pub const fn new() -> Self {
        Self { slot: Slot::vacant() }
    }

    /// An occupied container holding `value`.
    pub fn of(value: T) -> Self {
        lifecycle!(value_type = core::any::type_name::<T>(), "optional: construct");
        Self { slot: Slot::filled(value) }
    }

    /// Builds the held value from an argument bundle.
    ///
    /// ```
    /// use tola_wrap::Optional;
    ///
    /// struct Point { x: i32, y: i32 }
    /// impl From<(i32, i32)> for Point {
    ///     fn from((x, y): (i32, i32)) -> Self { Point { x, y } }
    /// }
    ///
    /// let p = Optional::<Point>::emplace((3, 4));
    /// assert_eq!(p.get().x + p.get().y, 7);
    /// ```
    pub fn emplace<A>(args: A) -> Self
    where
        T: From<A>,
    {
        Self::of(T::from(args))
    }

    /// Builds the held value with a constructor closure.
    pub fn with<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::of(f())
    }

    /// Builds the held value with a fallible constructor.
    ///
    /// The constructor's error is returned as is. On failure no container
    /// exists, so nothing is left half-built.
    pub fn try_with<F, E>(f: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        f().map(Self::of)
    }

    /// Returns `true` if the container is empty.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        !self.slot.is_occupied()
    }

    /// Returns `true` if the container holds a value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        self.slot.is_occupied()
    }

    /// The held value.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    #[inline]
    #[track_caller]
    pub fn get(&self) -> &T {
        match self.slot.get() {
            Some(value) => value,
            None => empty_access::<T>(),
        }
    }

    /// The held value, or [`AccessError::Empty`].
    #[inline]
    pub fn try_get(&self) -> Result<&T, AccessError> {
        self.slot.get().ok_or_else(AccessError::empty::<T>)
    }

    /// The held value if occupied, otherwise exactly `fallback`.
    #[inline]
    pub fn get_or<'a>(&'a self, fallback: &'a T) -> &'a T {
        match self.slot.get() {
            Some(value) => value,
            None => {
                lifecycle!(value_type = core::any::type_name::<T>(), "optional: fallback read");
                fallback
            }
        }
    }

    /// Moves the held value out. No clone is made.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    #[track_caller]
    pub fn into_inner(self) -> T {
        match self.slot.into_inner() {
            Some(value) => value,
            None => empty_access::<T>(),
        }
    }

    /// Moves the held value out, or returns [`AccessError::Empty`].
    pub fn try_into_inner(self) -> Result<T, AccessError> {
        self.slot.into_inner().ok_or_else(AccessError::empty::<T>)
    }

    /// Move-constructs a new container from this one.
    ///
    /// The result holds what `self` held; `self` is left empty.
    pub fn take(&mut self) -> Self {
        lifecycle!(
            value_type = core::any::type_name::<T>(),
            occupied = self.is_some(),
            "optional: take"
        );
        Self { slot: self.slot.take() }
    }

    /// Returns `true` if the container holds a value equal to `value`.
    ///
    /// An empty container contains nothing.
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.slot.get().is_some_and(|held| held == value)
    }

    /// Borrowing view as a std `Option`.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Converts into a std `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.slot.into_inner()
    }
}

#[cold]
#[track_caller]
fn empty_access<T>() -> ! {
    panic!("{}", AccessError::empty::<T>())
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        lifecycle!(
            value_type = core::any::type_name::<T>(),
            occupied = self.is_some(),
            "optional: clone"
        );
        Self { slot: self.slot.clone() }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::of(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::of(value),
            None => Self::new(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> PartialEq<Nothing> for Optional<T> {
    fn eq(&self, _: &Nothing) -> bool {
        self.is_nothing()
    }
}

impl<T> PartialEq<Optional<T>> for Nothing {
    fn eq(&self, other: &Optional<T>) -> bool {
        other.is_nothing()
    }
}

/// Two containers are equal when both are empty, or both hold equal values.
impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slot.get() == other.slot.get()
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(value) => f.debug_tuple("Optional").field(value).finish(),
            None => f.write_str("Nothing"),
        }
    }
}
