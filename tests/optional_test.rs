//! Behavior of the immutable nullable container.

mod common;

use common::{Counters, Tracked};
use tola_wrap::prelude::*;
use tola_wrap::AccessError;

#[test]
fn test_default_is_nothing() {
    let opt: Optional<i32> = Optional::new();
    assert!(NOTHING == opt);
    assert!(opt == NOTHING);
    assert!(!(NOTHING != opt));
    assert!(!(opt != NOTHING));
}

#[test]
fn test_value_initialized_is_not_nothing() {
    let opt = Optional::of(42);
    assert!(NOTHING != opt);
    assert!(opt != NOTHING);
    assert_ne!(Optional::<i32>::new(), opt);
}

#[test]
fn test_value_access() {
    let opt = Optional::of(42);
    assert_eq!(*opt.get(), 42);
    assert_ne!(*opt.get(), 44);
    assert!(opt.contains(&42));
    assert!(!opt.contains(&43));
}

#[test]
fn test_no_default_constructor_needed() {
    struct NoDefault(#[allow(dead_code)] i32);

    let empty: Optional<NoDefault> = Optional::new();
    assert!(empty == NOTHING);
    let full = Optional::of(NoDefault(1));
    assert!(full != NOTHING);
}

#[test]
fn test_emplace_forwards_arguments() {
    #[derive(Debug, PartialEq)]
    struct Span {
        start: usize,
        len: usize,
    }

    impl From<(usize, usize)> for Span {
        fn from((start, len): (usize, usize)) -> Self {
            Span { start, len }
        }
    }

    let span = Optional::<Span>::emplace((4, 2));
    assert_eq!(span.get(), &Span { start: 4, len: 2 });

    let text = Optional::<String>::emplace("abc");
    assert!(text.contains(&"abc"));
}

#[test]
fn test_copy_constructor() {
    let orig = Optional::of(42);
    let copy = orig.clone();
    assert_eq!(copy, orig);

    let empty: Optional<i32> = Optional::new();
    assert!(empty.clone() == NOTHING);
}

#[test]
fn test_move_constructor() {
    let mut orig = Optional::of(42);
    let moved = orig.take();
    assert_eq!(*moved.get(), 42);
    assert!(orig == NOTHING);

    // Taking from an empty container yields an empty one.
    let again = orig.take();
    assert!(again == NOTHING);
}

#[test]
fn test_fallback() {
    let empty: Optional<i32> = Optional::new();
    let fallback = 42;
    assert!(std::ptr::eq(empty.get_or(&fallback), &fallback));

    let full = Optional::of(7);
    assert_eq!(*full.get_or(&fallback), 7);
}

#[test]
fn test_checked_access() {
    let empty: Optional<String> = Optional::new();
    let err = empty.try_get().unwrap_err();
    assert!(matches!(err, AccessError::Empty { type_name } if type_name.ends_with("String")));
    assert!(err.to_string().contains("empty"));
    assert!(empty.try_into_inner().is_err());

    let full = Optional::of(String::from("x"));
    assert_eq!(full.try_get().map(String::as_str), Ok("x"));
}

#[test]
#[should_panic(expected = "empty")]
fn test_into_inner_on_empty_panics() {
    let empty: Optional<i32> = Optional::new();
    let _ = empty.into_inner();
}

#[test]
fn test_scenario_forty_two() {
    let mut opt = Optional::of(42);
    assert_eq!(*opt.get(), 42);
    assert!(!opt.contains(&43));
    assert!(!(opt == NOTHING));

    let target = opt.take();
    assert!(opt == NOTHING);
    assert_eq!(*target.get(), 42);
}

// =============================================================================
// Lifecycle accounting
// =============================================================================

#[test]
fn test_destructor_runs_once() {
    let counters = Counters::new();
    {
        let _opt = Optional::of(Tracked::new(1, &counters));
    }
    assert_eq!(counters.drops(), 1);
    assert_eq!(counters.clones(), 0);
}

#[test]
fn test_empty_container_drops_nothing() {
    let counters = Counters::new();
    {
        let _empty: Optional<Tracked> = Optional::new();
    }
    assert_eq!(counters.drops(), 0);
}

#[test]
fn test_move_out_makes_no_copy() {
    let counters = Counters::new();
    {
        let opt = Optional::of(Tracked::new(1, &counters));
        let value = opt.into_inner();
        assert_eq!(value.id, 1);
        assert_eq!(counters.drops(), 0);
    }
    assert_eq!(counters.clones(), 0);
    assert_eq!(counters.drops(), 1);
}

#[test]
fn test_move_out_of_temporary() {
    let counters = Counters::new();
    {
        let value = Optional::with(|| Tracked::new(2, &counters)).into_inner();
        assert_eq!(value.id, 2);
    }
    assert_eq!(counters.clones(), 0);
    assert_eq!(counters.drops(), 1);
}

#[test]
fn test_copy_makes_exactly_one_clone() {
    let counters = Counters::new();
    {
        let opt = Optional::of(Tracked::new(3, &counters));
        let copy = opt.clone();
        assert_eq!(copy.get().id, 3);
        assert_eq!(counters.clones(), 1);
    }
    assert_eq!(counters.drops(), 2);
}

#[test]
fn test_take_transfers_without_copy() {
    let counters = Counters::new();
    {
        let mut opt = Optional::of(Tracked::new(4, &counters));
        let moved = opt.take();
        assert!(opt == NOTHING);
        assert_eq!(moved.get().id, 4);
    }
    assert_eq!(counters.clones(), 0);
    assert_eq!(counters.drops(), 1);
}

#[test]
fn test_failed_construction_leaves_nothing() {
    let counters = Counters::new();
    let result: Result<Optional<Tracked>, &str> = Optional::try_with(|| {
        let _partial = Tracked::new(5, &counters);
        Err("constructor failed")
    });
    assert_eq!(result.err(), Some("constructor failed"));
    assert_eq!(counters.drops(), 1);
}
