//! Table body rendering.
//!
//! [`render`] writes rows for a derived view into a [`TableBody`], the
//! single sink the terminal widget draws. The [`RenderMode`] decides how the
//! view's sequences land: in replace mode each sequence replaces the body,
//! in append mode the first replaces it and the rest are appended below.

use crate::model::Record;

/// Column titles, in display order.
pub const COLUMN_TITLES: [&str; 7] = ["ID", "Name", "Gender", "Class", "Marks", "Status", "Email"];

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Student identifier.
    pub id: String,
    /// Avatar image URL shown with the name.
    pub avatar: String,
    /// Display name ("first last").
    pub name: String,
    /// Gender value as loaded.
    pub gender: String,
    /// Class label.
    pub class: String,
    /// Marks.
    pub marks: String,
    /// "passing" or "failed".
    pub status: &'static str,
    /// Email address.
    pub email: String,
}

impl TableRow {
    /// Build the row for one record.
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.to_string(),
            avatar: record.img_src.clone(),
            name: record.display_name(),
            gender: record.gender.clone(),
            class: record.class.to_string(),
            marks: record.marks.to_string(),
            status: record.status_label(),
            email: record.email.clone(),
        }
    }

    /// Cell texts in [`COLUMN_TITLES`] order. The avatar is not a cell of its own.
    pub fn cells(&self) -> [&str; 7] {
        [
            &self.id,
            &self.name,
            &self.gender,
            &self.class,
            &self.marks,
            self.status,
            &self.email,
        ]
    }
}

/// The visible table body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBody {
    rows: Vec<TableRow>,
}

impl TableBody {
    /// Create an empty body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows currently shown, top to bottom.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of rows currently shown.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the body has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn replace(&mut self, records: &[&Record]) {
        self.rows.clear();
        self.append(records);
    }

    fn append(&mut self, records: &[&Record]) {
        self.rows
            .extend(records.iter().map(|record| TableRow::from_record(record)));
    }
}

/// How a view is written into the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Every sequence clears the body before it is written, so only the
    /// last one stays visible.
    Replace,
    /// The first sequence clears the body; later ones are appended below it.
    Append,
}

/// A derived view ready to render.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    /// One ordered sequence.
    Single(Vec<&'a Record>),
    /// Two sequences shown one after the other in a single table.
    Partitioned {
        /// Rendered first, replacing prior content.
        first: Vec<&'a Record>,
        /// Appended below `first` with no separator.
        second: Vec<&'a Record>,
    },
}

impl<'a> View<'a> {
    /// Sequences of the view in display order.
    fn sequences(&self) -> impl Iterator<Item = &[&'a Record]> + '_ {
        let (head, tail) = match self {
            View::Single(records) => (records.as_slice(), None),
            View::Partitioned { first, second } => (first.as_slice(), Some(second.as_slice())),
        };
        std::iter::once(head).chain(tail)
    }

    /// Total number of records in the view.
    pub fn len(&self) -> usize {
        match self {
            View::Single(records) => records.len(),
            View::Partitioned { first, second } => first.len() + second.len(),
        }
    }

    /// Whether the view has no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write `view` into `body` using `mode`.
///
/// Prior content never survives: rendering the same view twice leaves the
/// body identical.
pub fn render(body: &mut TableBody, view: &View<'_>, mode: RenderMode) {
    for (index, records) in view.sequences().enumerate() {
        match mode {
            RenderMode::Append if index > 0 => body.append(records),
            RenderMode::Append | RenderMode::Replace => body.replace(records),
        }
    }
}
