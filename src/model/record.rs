//! Student record shape as decoded from the roster payload.
//!
//! Records are created once at load time and never written afterwards.

use serde::Deserialize;
use std::fmt;

/// Identifier of a student.
///
/// The payload is loosely typed, so both numeric and string ids are accepted.
/// Any JSON number is kept as written, including `4.0` and values beyond
/// `i64`. Uniqueness is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric id, e.g. `17`.
    Number(serde_json::Number),
    /// Textual id, e.g. `"s-17"`.
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Group label of a student (the `class` field).
///
/// The payload carries either a number or a string. Ordering goes through
/// [`ClassLabel::as_number`], which coerces text the way a loose numeric
/// comparison would.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ClassLabel {
    /// Numeric label, e.g. `4`.
    Number(f64),
    /// Textual label, e.g. `"4"` or `"10A"`.
    Text(String),
}

impl ClassLabel {
    /// Numeric value of the label, if it has one.
    ///
    /// Text is trimmed and read as a loose numeric literal: empty text counts
    /// as `0`, `0x`/`0o`/`0b` prefixes select a radix and `Infinity` may be
    /// signed. Returns `None` for labels such as `"10A"`, `"inf"` or `"NaN"`
    /// that have no numeric reading.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ClassLabel::Number(n) if n.is_nan() => None,
            ClassLabel::Number(n) => Some(*n),
            ClassLabel::Text(s) => parse_numeric_text(s.trim()),
        }
    }
}

fn parse_numeric_text(text: &str) -> Option<f64> {
    if text.is_empty() {
        return Some(0.0);
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_digits(&text[2..], radix);
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        let infinity = if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some(infinity);
    }
    // f64::from_str also takes "inf" and "nan" in any case; those are not numbers here
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Unsigned digits in `radix`, with no sign and at least one digit.
fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassLabel::Number(n) => write!(f, "{n}"),
            ClassLabel::Text(s) => f.write_str(s),
        }
    }
}

/// One student row of the roster.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    /// Student identifier.
    pub id: RecordId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Open categorical value; "Male" and "Female" are the observed values.
    pub gender: String,
    /// Group the student belongs to.
    pub class: ClassLabel,
    /// Score.
    pub marks: f64,
    /// Whether the student is passing.
    pub passing: bool,
    /// Contact address, also a search key.
    pub email: String,
    /// Avatar image URL.
    pub img_src: String,
}

impl Record {
    /// First and last name joined by a single space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Status label shown in the table.
    pub fn status_label(&self) -> &'static str {
        if self.passing {
            "passing"
        } else {
            "failed"
        }
    }
}
