//! Property-based tests for formcheck-validator.

use std::collections::BTreeSet;

use formcheck_validator::prelude::*;
use proptest::prelude::*;

fn field_names() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-z]{1,8}", 1..8)
}

// ============================================================================
// RESULTS ONLY EVER NAME SELECTED FIELDS
// ============================================================================

proptest! {
    #[test]
    fn unselected_fields_never_recorded(
        names in field_names(),
        values in prop::collection::vec("[a-z0-9@. ]{0,6}", 8),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..5),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let mut form = Validator::new(names.iter().cloned().zip(values.iter().cloned()));

        let mut selected = BTreeSet::new();
        for pick in &picks {
            let name = pick.get(&names);
            selected.insert(name.clone());
            form.select_field(name)
                .unwrap()
                .check_not_empty()
                .check_email()
                .check_length(LengthOptions::new().min(2).max(4))
                .unwrap();
        }

        for field in form.results().keys() {
            prop_assert!(selected.contains(field));
        }
    }

    #[test]
    fn absent_field_never_mutates_results(
        names in field_names(),
        missing in "[A-Z]{1,8}",
    ) {
        let mut form = Validator::new(names.iter().map(|n| (n.clone(), "")));
        for name in &names {
            form.select_field(name).unwrap().check_not_empty();
        }
        let before = form.results();

        let err = form.select_field(&missing).unwrap_err();
        prop_assert_eq!(err, UsageError::FieldNotFound(missing.clone()));
        prop_assert_eq!(form.results(), before);
    }
}

// ============================================================================
// RULE SEMANTICS
// ============================================================================

proptest! {
    #[test]
    fn integers_are_numeric_and_respect_bounds(n in -1000i64..1000, min in -1000i64..1000) {
        let mut form = Validator::new([("n", n.to_string())]);
        form.select_field("n")
            .unwrap()
            .check_numeric(RangeOptions::new().min(min))
            .unwrap();

        if n < min {
            let expected = format!("Field 'n' must be at least {min}");
            prop_assert_eq!(form.results().get("n").cloned(), Some(expected));
        } else {
            prop_assert!(form.is_valid());
        }
    }

    #[test]
    fn length_bounds_match_byte_length(s in "[a-z]{0,20}", max in 0usize..20) {
        let mut form = Validator::new([("s", s.clone())]);
        form.select_field("s")
            .unwrap()
            .check_length(LengthOptions::new().max(max))
            .unwrap();

        prop_assert_eq!(form.is_valid(), s.len() <= max);
    }

    #[test]
    fn at_most_one_message_per_field(s in ".{0,12}") {
        let mut form = Validator::new([("f", s)]);
        form.select_field("f")
            .unwrap()
            .check_not_empty()
            .check_numeric(RangeOptions::new().min(1).max(2))
            .unwrap()
            .check_email()
            .check_length(LengthOptions::new().min(3).max(1))
            .unwrap();

        prop_assert!(form.results().len() <= 1);
    }
}
