//! Tests for query operations.

use super::*;
use crate::model::ClassLabel;
use crate::test_support::{bob_and_amy, names, record};

fn compare_names(a: &str, b: &str) -> Ordering {
    NameKey::new(a).cmp(&NameKey::new(b))
}

// ===== search_filter =====

#[test]
fn empty_term_returns_master_unchanged() {
    let master = bob_and_amy();
    let result = search_filter(&master, "");
    assert_eq!(names(&result), vec!["Bob Zane", "Amy Ames"]);
}

#[test]
fn whitespace_term_is_treated_as_empty() {
    let master = bob_and_amy();
    assert_eq!(search_filter(&master, "   ").len(), 2);
}

#[test]
fn search_matches_email_substring() {
    let master = bob_and_amy();
    let result = search_filter(&master, "aa@x");
    assert_eq!(names(&result), vec!["Amy Ames"]);
}

#[test]
fn search_is_case_insensitive_and_trimmed() {
    let master = bob_and_amy();
    let result = search_filter(&master, "  ZANE ");
    assert_eq!(names(&result), vec!["Bob Zane"]);
}

#[test]
fn search_matches_first_and_last_names_but_not_full_name() {
    let master = bob_and_amy();
    assert_eq!(names(&search_filter(&master, "bo")), vec!["Bob Zane"]);
    assert_eq!(names(&search_filter(&master, "mes")), vec!["Amy Ames"]);
    // The display name is not a search key
    assert!(search_filter(&master, "bob zane").is_empty());
}

#[test]
fn search_preserves_master_order() {
    let master = vec![
        record(1, "Cara", "Lane"),
        record(2, "Abe", "Lang"),
        record(3, "Lana", "Moss"),
    ];
    let result = search_filter(&master, "lan");
    assert_eq!(names(&result), vec!["Cara Lane", "Abe Lang", "Lana Moss"]);
}

#[test]
fn search_without_match_is_empty() {
    let master = bob_and_amy();
    assert!(search_filter(&master, "nobody").is_empty());
}

// ===== name ordering =====

#[test]
fn ascending_sorts_by_display_name() {
    let master = bob_and_amy();
    let result = sort_ascending_by_name(&master);
    assert_eq!(names(&result), vec!["Amy Ames", "Bob Zane"]);
}

#[test]
fn descending_sorts_by_display_name() {
    let master = vec![
        record(1, "Amy", "Ames"),
        record(2, "Cat", "Cole"),
        record(3, "Bob", "Zane"),
    ];
    let result = sort_descending_by_name(&master);
    assert_eq!(names(&result), vec!["Cat Cole", "Bob Zane", "Amy Ames"]);
}

#[test]
fn name_ordering_ignores_case_at_first_level() {
    let master = vec![record(1, "bob", "zane"), record(2, "Amy", "Ames")];
    let result = sort_ascending_by_name(&master);
    assert_eq!(names(&result), vec!["Amy Ames", "bob zane"]);
}

#[test]
fn name_ordering_places_accented_letters_with_their_base() {
    let master = vec![
        record(1, "Zoe", "Hart"),
        record(2, "Émile", "Roux"),
        record(3, "Dana", "Fox"),
    ];
    let result = sort_ascending_by_name(&master);
    assert_eq!(names(&result), vec!["Dana Fox", "Émile Roux", "Zoe Hart"]);
}

#[test]
fn lower_case_sorts_before_upper_case_when_otherwise_equal() {
    assert_eq!(compare_names("amy ames", "Amy Ames"), Ordering::Less);
    assert_eq!(compare_names("Amy Ames", "amy ames"), Ordering::Greater);
}

#[test]
fn space_sorts_before_letters() {
    assert_eq!(compare_names("Amy Ames", "Amya Bell"), Ordering::Less);
}

#[test]
fn equal_names_keep_master_order_in_both_directions() {
    let master = vec![
        record(1, "Sam", "Lee"),
        record(2, "Ann", "Ray"),
        record(3, "Sam", "Lee"),
    ];

    let ascending = sort_ascending_by_name(&master);
    let ascending_ids: Vec<String> = ascending.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(ascending_ids, vec!["2", "1", "3"]);

    let descending = sort_descending_by_name(&master);
    let descending_ids: Vec<String> = descending.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(descending_ids, vec!["1", "3", "2"]);
}

// ===== sort_by_score =====

#[test]
fn score_sorts_ascending() {
    let master = bob_and_amy();
    let result = sort_by_score(&master);
    let marks: Vec<f64> = result.iter().map(|r| r.marks).collect();
    assert_eq!(marks, vec![70.0, 90.0]);
}

#[test]
fn equal_scores_keep_master_order() {
    let master = vec![
        Record { marks: 80.0, ..record(1, "A", "One") },
        Record { marks: 60.0, ..record(2, "B", "Two") },
        Record { marks: 80.0, ..record(3, "C", "Three") },
    ];
    let result = sort_by_score(&master);
    assert_eq!(names(&result), vec!["B Two", "A One", "C Three"]);
}

// ===== filter_by_status =====

#[test]
fn status_filter_keeps_passing_only() {
    let master = bob_and_amy();
    let result = filter_by_status(&master);
    assert_eq!(names(&result), vec!["Bob Zane"]);
}

#[test]
fn status_filter_with_nobody_passing_is_empty() {
    let master = vec![Record { passing: false, ..record(1, "A", "One") }];
    assert!(filter_by_status(&master).is_empty());
}

// ===== sort_by_group =====

#[test]
fn group_sorts_numeric_labels_ascending() {
    let master = vec![
        Record { class: ClassLabel::Number(3.0), ..record(1, "A", "One") },
        Record { class: ClassLabel::Text("1".into()), ..record(2, "B", "Two") },
        Record { class: ClassLabel::Number(2.0), ..record(3, "C", "Three") },
    ];
    let result = sort_by_group(&master);
    assert_eq!(names(&result), vec!["B Two", "C Three", "A One"]);
}

#[test]
fn group_sort_is_numeric_not_lexical() {
    let master = vec![
        Record { class: ClassLabel::Text("10".into()), ..record(1, "A", "One") },
        Record { class: ClassLabel::Text("9".into()), ..record(2, "B", "Two") },
    ];
    let result = sort_by_group(&master);
    assert_eq!(names(&result), vec!["B Two", "A One"]);
}

#[test]
fn non_numeric_labels_go_last_in_master_order() {
    let master = vec![
        Record { class: ClassLabel::Text("10A".into()), ..record(1, "A", "One") },
        Record { class: ClassLabel::Number(5.0), ..record(2, "B", "Two") },
        Record { class: ClassLabel::Text("B".into()), ..record(3, "C", "Three") },
        Record { class: ClassLabel::Number(4.0), ..record(4, "D", "Four") },
    ];
    let result = sort_by_group(&master);
    assert_eq!(names(&result), vec!["D Four", "B Two", "A One", "C Three"]);
}

#[test]
fn equal_groups_keep_master_order() {
    let master = vec![
        Record { class: ClassLabel::Number(2.0), ..record(1, "A", "One") },
        Record { class: ClassLabel::Number(1.0), ..record(2, "B", "Two") },
        Record { class: ClassLabel::Text("2".into()), ..record(3, "C", "Three") },
    ];
    let result = sort_by_group(&master);
    assert_eq!(names(&result), vec!["B Two", "A One", "C Three"]);
}

// ===== partition_by_category =====

#[test]
fn partition_splits_female_then_male() {
    let master = bob_and_amy();
    let (female, male) = partition_by_category(&master);
    assert_eq!(names(&female), vec!["Amy Ames"]);
    assert_eq!(names(&male), vec!["Bob Zane"]);
}

#[test]
fn partition_drops_other_genders() {
    let master = vec![
        Record { gender: "Female".into(), ..record(1, "A", "One") },
        Record { gender: "Non-binary".into(), ..record(2, "B", "Two") },
        Record { gender: "Male".into(), ..record(3, "C", "Three") },
        Record { gender: "female".into(), ..record(4, "D", "Four") },
    ];
    let (female, male) = partition_by_category(&master);
    assert_eq!(names(&female), vec!["A One"]);
    assert_eq!(names(&male), vec!["C Three"]);
}

// ===== degenerate input =====

#[test]
fn every_operation_is_empty_on_empty_master() {
    let master: Vec<Record> = Vec::new();
    assert!(search_filter(&master, "x").is_empty());
    assert!(search_filter(&master, "").is_empty());
    assert!(sort_ascending_by_name(&master).is_empty());
    assert!(sort_descending_by_name(&master).is_empty());
    assert!(sort_by_score(&master).is_empty());
    assert!(filter_by_status(&master).is_empty());
    assert!(sort_by_group(&master).is_empty());
    let (female, male) = partition_by_category(&master);
    assert!(female.is_empty() && male.is_empty());
}

#[test]
fn operations_leave_master_untouched() {
    let master = bob_and_amy();
    let before = master.clone();
    let _ = sort_ascending_by_name(&master);
    let _ = sort_by_score(&master);
    let _ = sort_by_group(&master);
    let _ = filter_by_status(&master);
    assert_eq!(master, before);
}
