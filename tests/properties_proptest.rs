use proptest::prelude::*;
use tola_wrap::prelude::*;

enum Label {}
type Name = Wrapper<String, Label, caps![Equality, ShowValue]>;

proptest! {
    #[test]
    fn test_optional_reads_back(v in any::<i64>()) {
        let opt = Optional::of(v);
        prop_assert_eq!(*opt.get(), v);
        prop_assert!(opt.contains(&v));
        prop_assert!(opt != NOTHING);
    }

    #[test]
    fn test_optional_clone_and_take(v in any::<String>()) {
        let mut opt = Optional::of(v.clone());
        let copy = opt.clone();
        prop_assert_eq!(&copy, &opt);

        let moved = opt.take();
        prop_assert!(opt == NOTHING);
        prop_assert_eq!(moved.into_inner(), v);
    }

    #[test]
    fn test_fallback_only_when_empty(v in any::<u32>(), fallback in any::<u32>()) {
        let empty: Optional<u32> = Optional::new();
        prop_assert_eq!(*empty.get_or(&fallback), fallback);
        prop_assert_eq!(*Optional::of(v).get_or(&fallback), v);
    }

    #[test]
    fn test_wrapper_reads_back(v in ".*") {
        let name = Name::new(v.clone());
        prop_assert_eq!(name.get(), &v);
        prop_assert_eq!(name.to_string(), v.clone());
        prop_assert_eq!(name.clone(), name);
    }
}
