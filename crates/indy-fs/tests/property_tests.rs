use indy_fs::NormalizedPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalization_invariants(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        let as_str = path.as_str();

        prop_assert!(!as_str.contains('\\'));

        // Only a leading network prefix may carry a double slash
        let remainder = if as_str.starts_with("//") { &as_str[2..] } else { as_str };
        prop_assert!(!remainder.contains("//"));

        // Cleaning is idempotent
        let roundtripped = NormalizedPath::new(path.to_native());
        prop_assert_eq!(path, roundtripped);
    }

    #[test]
    fn test_dot_segments_vanish(a in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}") {
        let with_dots = format!("{}/./x/..", a);
        prop_assert_eq!(NormalizedPath::new(&with_dots), NormalizedPath::new(&a));
    }
}
