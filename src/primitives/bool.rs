//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: selects `Then` when true, `Else` otherwise.
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;
}

/// Type-level True.
#[derive(Debug)]
pub struct Present;

/// Type-level False.
#[derive(Debug)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
}

/// Type-level NOT.
pub trait BoolNot: Bool {
    type Out: Bool;
}

impl BoolNot for Present {
    type Out = Absent;
}

impl BoolNot for Absent {
    type Out = Present;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Left;
    struct Right;

    fn same_type<A: 'static, B: 'static>() -> bool {
        core::any::TypeId::of::<A>() == core::any::TypeId::of::<B>()
    }

    #[test]
    fn truth_tables() {
        assert!(<<Present as Bool>::And<Present> as Bool>::VALUE);
        assert!(!<<Present as Bool>::And<Absent> as Bool>::VALUE);
        assert!(<<Absent as Bool>::Or<Present> as Bool>::VALUE);
        assert!(!<<Absent as Bool>::Or<Absent> as Bool>::VALUE);
        assert!(<<Absent as BoolNot>::Out as Bool>::VALUE);
    }

    #[test]
    fn conditional_selects_branch() {
        assert!(same_type::<<Present as Bool>::If<Left, Right>, Left>());
        assert!(same_type::<<Absent as Bool>::If<Left, Right>, Right>());
    }
}
