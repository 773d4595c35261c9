//! Single-value storage with explicit occupancy.
//!
//! A `Slot<T>` holds zero or one live `T`. Occupancy and storage are one
//! `Option<T>`, so a vacant slot can never be read or dropped as if it held a
//! value, and every value put in is dropped exactly once.

#[derive(Clone)]
pub(crate) struct Slot<T> {
    value: Option<T>,
}

impl<T> Slot<T> {
    pub(crate) const fn vacant() -> Self {
        Self { value: None }
    }

    pub(crate) const fn filled(value: T) -> Self {
        Self { value: Some(value) }
    }

    #[inline]
    pub(crate) const fn is_occupied(&self) -> bool {
        self.value.is_some()
    }

    #[inline]
    pub(crate) const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Moves the contents into a new slot, leaving this one vacant.
    #[inline]
    pub(crate) fn take(&mut self) -> Self {
        Self { value: self.value.take() }
    }

    #[inline]
    pub(crate) fn into_inner(self) -> Option<T> {
        self.value
    }
}
