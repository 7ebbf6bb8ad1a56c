//! Query operations over the master roster (pure).
//!
//! Every operation borrows the master collection and returns a newly
//! allocated sequence of references into it. The input slice is never
//! reordered or truncated, so each call starts from the full data and
//! results never compound.

use crate::model::Record;
use deunicode::deunicode;
use std::cmp::{Ordering, Reverse};
use tracing::warn;

/// Gender value of the first partition.
pub const FEMALE: &str = "Female";

/// Gender value of the second partition.
pub const MALE: &str = "Male";

// ===== Search =====

/// Keep records whose first name, last name or email contains `term`.
///
/// The term is trimmed and matched case-insensitively. An empty term
/// matches every record. Master order is preserved.
pub fn search_filter<'a>(master: &'a [Record], term: &str) -> Vec<&'a Record> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return master.iter().collect();
    }

    master
        .iter()
        .filter(|record| matches_term(record, &needle))
        .collect()
}

/// Case-insensitive substring test against the three search keys.
///
/// `needle` must already be trimmed and lower-cased.
pub fn matches_term(record: &Record, needle: &str) -> bool {
    record.first_name.to_lowercase().contains(needle)
        || record.last_name.to_lowercase().contains(needle)
        || record.email.to_lowercase().contains(needle)
}

// ===== Name ordering =====

/// Collation key for a display name.
///
/// Compared field by field: transliterated case-folded text first, then the
/// case-folded original (accents), then the case pattern with lower case
/// ahead of upper case, then the raw string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NameKey {
    base: String,
    accents: String,
    case_pattern: Vec<bool>,
    raw: String,
}

impl NameKey {
    /// Build the key for `name`.
    pub fn new(name: &str) -> Self {
        Self {
            base: deunicode(name).to_lowercase(),
            accents: name.to_lowercase(),
            case_pattern: name.chars().map(char::is_uppercase).collect(),
            raw: name.to_string(),
        }
    }
}

/// Sort by display name, A to Z. Equal names keep master order.
pub fn sort_ascending_by_name(master: &[Record]) -> Vec<&Record> {
    let mut sorted: Vec<&Record> = master.iter().collect();
    sorted.sort_by_cached_key(|record| NameKey::new(&record.display_name()));
    sorted
}

/// Sort by display name, Z to A. Equal names keep master order.
pub fn sort_descending_by_name(master: &[Record]) -> Vec<&Record> {
    let mut sorted: Vec<&Record> = master.iter().collect();
    sorted.sort_by_cached_key(|record| Reverse(NameKey::new(&record.display_name())));
    sorted
}

// ===== Numeric orderings =====

/// Sort by marks, lowest first. Equal marks keep master order.
pub fn sort_by_score(master: &[Record]) -> Vec<&Record> {
    let mut sorted: Vec<&Record> = master.iter().collect();
    sorted.sort_by(|a, b| {
        a.marks
            .partial_cmp(&b.marks)
            .unwrap_or_else(|| a.marks.total_cmp(&b.marks))
    });
    sorted
}

/// Sort by class, lowest first.
///
/// Labels are read numerically (see [`ClassLabel::as_number`](crate::model::ClassLabel::as_number)).
/// Labels without a numeric reading, such as `"10A"`, go after every
/// numeric label in master order.
pub fn sort_by_group(master: &[Record]) -> Vec<&Record> {
    let mut keyed: Vec<(Option<f64>, &Record)> = master
        .iter()
        .map(|record| (record.class.as_number(), record))
        .collect();

    let non_numeric = keyed.iter().filter(|(value, _)| value.is_none()).count();
    if non_numeric > 0 {
        warn!(
            count = non_numeric,
            "Class labels without a numeric value; placing them last"
        );
    }

    keyed.sort_by(|(a, _), (b, _)| compare_class_values(*a, *b));
    keyed.into_iter().map(|(_, record)| record).collect()
}

fn compare_class_values(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ===== Filters =====

/// Keep passing students only. Master order is preserved.
pub fn filter_by_status(master: &[Record]) -> Vec<&Record> {
    master.iter().filter(|record| record.passing).collect()
}

/// Split into `(female, male)`, each in master order.
///
/// Records whose gender is neither [`FEMALE`] nor [`MALE`] appear in
/// neither sequence.
pub fn partition_by_category(master: &[Record]) -> (Vec<&Record>, Vec<&Record>) {
    let female = master.iter().filter(|r| r.gender == FEMALE).collect();
    let male = master.iter().filter(|r| r.gender == MALE).collect();
    (female, male)
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
