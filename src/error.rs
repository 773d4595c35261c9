//! Error types for checked container access.

/// Failure of a checked [`Optional`](crate::Optional) access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// The container was empty.
    #[error("accessed the value of an empty `Optional<{type_name}>`")]
    Empty {
        /// Name of the held value type.
        type_name: &'static str,
    },
}

impl AccessError {
    pub(crate) fn empty<T>() -> Self {
        AccessError::Empty {
            type_name: core::any::type_name::<T>(),
        }
    }
}
