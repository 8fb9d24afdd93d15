use super::*;
use std::cmp::Ordering;
use crate::params;

#[test]
fn ordering_counts_bools_and_rejects_nan() {
    assert_eq!(ParamValue::Bool(true).compare_to(0.5), Some(Ordering::Greater));
    assert_eq!(ParamValue::Bool(false).compare_to(0.0), Some(Ordering::Equal));
    assert_eq!(ParamValue::Int(-3).compare_to(-2.5), Some(Ordering::Less));
    assert_eq!(ParamValue::Float(f64::NAN).compare_to(0.0), None);
    assert_eq!(ParamValue::Int(1).compare_to(f64::NAN), None);
    assert_eq!(ParamValue::Str("1".to_string()).compare_to(0.0), None);
    assert_eq!(ParamValue::None.compare_to(0.0), None);
}

#[test]
fn large_integers_compare_exactly() {
    // 2^53 + 1 rounds to 2^53 as f64.
    let big = ParamValue::Int(9_007_199_254_740_993);
    assert_eq!(big.compare_to(9_007_199_254_740_992.0), Some(Ordering::Greater));
    assert_eq!(ParamValue::Int(i64::MAX).compare_to(9.3e18), Some(Ordering::Less));
    assert_eq!(ParamValue::Int(i64::MIN).compare_to(-1e19), Some(Ordering::Greater));
    assert_eq!(ParamValue::Int(3).compare_to(3.0), Some(Ordering::Equal));
    assert_eq!(ParamValue::Int(3).compare_to(3.5), Some(Ordering::Less));
    assert_eq!(ParamValue::Int(-3).compare_to(-3.5), Some(Ordering::Greater));
}

#[test]
fn whole_floats_are_not_integral() {
    assert!(ParamValue::Int(2).is_integral());
    assert!(ParamValue::Bool(true).is_integral());
    assert!(!ParamValue::Float(2.0).is_integral());
}

#[test]
fn same_value_compares_numbers_across_variants() {
    assert!(ParamValue::Int(0).same_value(&ParamValue::Float(0.0)));
    assert!(ParamValue::Float(1.0).same_value(&ParamValue::Bool(true)));
    assert!(ParamValue::Bool(false).same_value(&ParamValue::Int(0)));
    assert!(!ParamValue::Int(1).same_value(&ParamValue::Float(1.5)));
    assert!(!ParamValue::Int(9_007_199_254_740_993).same_value(&ParamValue::Float(9_007_199_254_740_992.0)));
    assert!(!ParamValue::Float(f64::NAN).same_value(&ParamValue::Float(f64::NAN)));
}

#[test]
fn same_value_keeps_strings_and_none_exact() {
    assert!(ParamValue::from("a").same_value(&ParamValue::from("a")));
    assert!(!ParamValue::from("1").same_value(&ParamValue::Int(1)));
    assert!(ParamValue::None.same_value(&ParamValue::None));
    assert!(!ParamValue::None.same_value(&ParamValue::Int(0)));
    assert!(!ParamValue::None.same_value(&ParamValue::from("")));
}

#[test]
fn structural_equality_stays_per_variant() {
    assert_ne!(ParamValue::Int(1), ParamValue::Float(1.0));
    assert_eq!(ParamValue::from("a"), ParamValue::Str("a".to_string()));
}

#[test]
fn option_maps_none() {
    assert_eq!(ParamValue::from(None::<i64>), ParamValue::None);
    assert_eq!(ParamValue::from(Some(4)), ParamValue::Int(4));
}

#[test]
fn macro_keeps_insertion_order() {
    let set = params! { knn => 5, decay => 40.0, t => "auto" };
    let names: Vec<&str> = set.names().collect();
    assert_eq!(names, vec!["knn", "decay", "t"]);
    assert_eq!(set.get("decay"), Some(&ParamValue::Float(40.0)));
}

#[test]
fn insert_replaces_in_place() {
    let mut set = params! { a => 1, b => 2 };
    set.insert("a", 10);
    let pairs: Vec<(&str, &ParamValue)> = set.iter().collect();
    assert_eq!(pairs[0], ("a", &ParamValue::Int(10)));
    assert_eq!(set.len(), 2);
}

#[test]
fn select_follows_requested_order_and_rejects_unknown() {
    let set = params! { a => 1, b => 2, c => 3 };
    let picked = set.select(&["c", "a"]).expect("select");
    assert_eq!(picked.names().collect::<Vec<_>>(), vec!["c", "a"]);

    let err = set.select(&["z"]).expect_err("unknown");
    assert_eq!(err.to_string(), "unknown parameter z");
}

#[test]
fn display_matches_written_form() {
    assert_eq!(ParamValue::Int(5).to_string(), "5");
    assert_eq!(ParamValue::Float(1.5).to_string(), "1.5");
    assert_eq!(ParamValue::Str("auto".to_string()).to_string(), "auto");
    assert_eq!(ParamValue::None.to_string(), "none");
}
