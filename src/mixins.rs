//! Reference capabilities.
//!
//! | Capability | Contributes to `Wrapper` |
//! |------------|--------------------------|
//! | [`Equality`] | `PartialEq`, `Eq` |
//! | [`Ordered`] | `PartialOrd`, `Ord` (with `Equality`) |
//! | [`Hashed`] | `Hash` |
//! | [`Arithmetic`] | `Add`, `Sub` |
//! | [`Defaulted`] | `Default` |
//! | [`ShowValue`] | `Display` as the bare value ([`Render`] role) |
//! | [`ShowTagged`] | `Display` as `Tag(value)` ([`Render`] role) |
//!
//! User-defined capabilities plug in through [`Conversion`], [`RenderWith`]
//! or a blanket impl over [`Mixes`](crate::Mixes).

use core::fmt;

use crate::compose::Capability;
use macros::{Capability, Role};

/// Compare wrappers of the same type by value.
#[derive(Capability)]
pub struct Equality;

/// Order wrappers of the same type by value. Requires [`Equality`].
#[derive(Capability)]
pub struct Ordered;

/// Hash wrappers by value.
#[derive(Capability)]
pub struct Hashed;

/// Add and subtract wrappers of the same type.
#[derive(Capability)]
pub struct Arithmetic;

/// Default-construct a wrapper from `T::default()`.
#[derive(Capability)]
pub struct Defaulted;

/// Role: render the wrapper as text (`Display`).
#[derive(Role)]
pub struct Render;

/// `Display` as the bare held value.
#[derive(Capability)]
#[capability(role = Render)]
pub struct ShowValue;

/// `Display` as `Tag(value)`, using the tag's unqualified type name.
#[derive(Capability)]
#[capability(role = Render)]
pub struct ShowTagged;

/// A capability that maps the held value to another type.
pub trait Conversion<T>: Capability {
    type Target;

    fn convert(value: &T) -> Self::Target;
}

/// A capability that fills the [`Render`] role.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot render a `{T}`",
    note = "`Display` needs a capability with the `Render` role, such as `ShowValue` or `ShowTagged`."
)]
pub trait RenderWith<T> {
    fn render<Tag: ?Sized>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: fmt::Display> RenderWith<T> for ShowValue {
    fn render<Tag: ?Sized>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(value, f)
    }
}

impl<T: fmt::Display> RenderWith<T> for ShowTagged {
    fn render<Tag: ?Sized>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_short_name(f, core::any::type_name::<Tag>())?;
        write!(f, "({})", value)
    }
}

/// Writes `path` with every module prefix dropped:
/// `a::Pair<b::X>` -> `Pair<X>`, `(a::X, b::Y)` -> `(X, Y)`.
fn write_short_name(f: &mut fmt::Formatter<'_>, path: &str) -> fmt::Result {
    fn in_path(c: char) -> bool {
        c.is_alphanumeric() || c == '_' || c == ':'
    }

    let mut rest = path;
    while !rest.is_empty() {
        let path_end = rest.find(|c: char| !in_path(c)).unwrap_or(rest.len());
        let (segment, tail) = rest.split_at(path_end);
        f.write_str(segment.rsplit("::").next().unwrap_or(segment))?;

        let punct_end = tail.find(in_path).unwrap_or(tail.len());
        f.write_str(&tail[..punct_end])?;
        rest = &tail[punct_end..];
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_capabilities_have_distinct_names() {
        assert!(Equality::NAME.ends_with("mixins::Equality"));
        assert_ne!(ShowValue::NAME, ShowTagged::NAME);
    }
}
