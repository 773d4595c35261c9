//! Declaration sugar for tagged newtypes.

/// Declare a tag and a [`Wrapper`](crate::Wrapper) alias in one line.
///
/// # Example
///
/// ```
/// use tola_wrap::prelude::*;
///
/// newtype!(pub Meters(f64): Equality, Arithmetic, ShowTagged);
///
/// let total = Meters::new(1.5) + Meters::new(2.0);
/// assert_eq!(total, Meters::new(3.5));
/// assert_eq!(total.to_string(), "MetersTag(3.5)");
/// ```
///
/// expands to
///
/// ```ignore
/// pub enum MetersTag {}
/// pub type Meters = Wrapper<f64, MetersTag, caps![Equality, Arithmetic, ShowTagged]>;
/// ```
#[macro_export]
macro_rules! newtype {
    ($(#[$meta:meta])* $vis:vis $name:ident($inner:ty) $(: $($cap:ty),+ $(,)?)?) => {
        $crate::paste::paste! {
            #[doc = concat!("Nominal tag of [`", stringify!($name), "`].")]
            $vis enum [<$name Tag>] {}

            $(#[$meta])*
            $vis type $name = $crate::Wrapper<$inner, [<$name Tag>], $crate::caps![$($($cap),+)?]>;
        }
    };
}
