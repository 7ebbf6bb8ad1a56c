//! Record builders shared by unit tests.

use crate::model::{ClassLabel, Record, RecordId};

/// Build a record with neutral defaults.
///
/// Override fields with struct update syntax:
/// `Record { marks: 70.0, ..record(1, "Bob", "Zane") }`.
pub(crate) fn record(id: i64, first: &str, last: &str) -> Record {
    Record {
        id: RecordId::Number(id.into()),
        first_name: first.to_string(),
        last_name: last.to_string(),
        gender: "Male".to_string(),
        class: ClassLabel::Number(1.0),
        marks: 50.0,
        passing: true,
        email: format!("{}.{}@school.test", first, last).to_lowercase(),
        img_src: format!("https://avatars.test/{id}.png"),
    }
}

/// The two-student roster used by the end-to-end scenario.
pub(crate) fn bob_and_amy() -> Vec<Record> {
    vec![
        Record {
            gender: "Male".to_string(),
            class: ClassLabel::Number(1.0),
            marks: 70.0,
            passing: true,
            email: "bz@x.com".to_string(),
            ..record(1, "Bob", "Zane")
        },
        Record {
            gender: "Female".to_string(),
            class: ClassLabel::Number(2.0),
            marks: 90.0,
            passing: false,
            email: "aa@x.com".to_string(),
            ..record(2, "Amy", "Ames")
        },
    ]
}

/// Display names of a derived view, in order.
pub(crate) fn names(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.display_name()).collect()
}
