//! Control bindings.
//!
//! Each control maps to one query operation and one render mode through the
//! [`BINDINGS`] table. Dispatch always starts from the store's master
//! collection and keeps no state between calls.

use crate::query;
use crate::render::{self, RenderMode, TableBody, View};
use crate::store::Store;
use std::collections::HashMap;
use tracing::debug;

/// User-facing controls of the roster table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Filter by the search line text.
    Search,
    /// Display name, A to Z.
    SortAscending,
    /// Display name, Z to A.
    SortDescending,
    /// Marks, lowest first.
    SortByScore,
    /// Passing students only.
    FilterPassing,
    /// Class, lowest first.
    SortByGroup,
    /// Female rows, then male rows.
    PartitionByGender,
    /// The roster as loaded.
    ShowAll,
}

impl Control {
    /// Short label shown in the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Control::Search => "search",
            Control::SortAscending => "A → Z",
            Control::SortDescending => "Z → A",
            Control::SortByScore => "by marks",
            Control::FilterPassing => "passing only",
            Control::SortByGroup => "by class",
            Control::PartitionByGender => "by gender",
            Control::ShowAll => "all",
        }
    }
}

/// Query operation behind a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// [`query::search_filter`]
    SearchFilter,
    /// [`query::sort_ascending_by_name`]
    SortAscendingByName,
    /// [`query::sort_descending_by_name`]
    SortDescendingByName,
    /// [`query::sort_by_score`]
    SortByScore,
    /// [`query::filter_by_status`]
    FilterByStatus,
    /// [`query::sort_by_group`]
    SortByGroup,
    /// [`query::partition_by_category`]
    PartitionByCategory,
    /// The master collection as is.
    Identity,
}

impl Operation {
    /// Run the operation against `master`.
    pub fn apply<'a>(self, master: &'a [crate::model::Record], term: &str) -> View<'a> {
        match self {
            Operation::SearchFilter => View::Single(query::search_filter(master, term)),
            Operation::SortAscendingByName => View::Single(query::sort_ascending_by_name(master)),
            Operation::SortDescendingByName => {
                View::Single(query::sort_descending_by_name(master))
            }
            Operation::SortByScore => View::Single(query::sort_by_score(master)),
            Operation::FilterByStatus => View::Single(query::filter_by_status(master)),
            Operation::SortByGroup => View::Single(query::sort_by_group(master)),
            Operation::PartitionByCategory => {
                let (first, second) = query::partition_by_category(master);
                View::Partitioned { first, second }
            }
            Operation::Identity => View::Single(master.iter().collect()),
        }
    }
}

/// One row of the binding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// Control that triggers the binding.
    pub control: Control,
    /// Query operation to run.
    pub operation: Operation,
    /// How the result is written into the table body.
    pub mode: RenderMode,
}

const fn bind(control: Control, operation: Operation, mode: RenderMode) -> Binding {
    Binding {
        control,
        operation,
        mode,
    }
}

/// Every control and what it runs.
pub const BINDINGS: &[Binding] = &[
    bind(Control::Search, Operation::SearchFilter, RenderMode::Replace),
    bind(
        Control::SortAscending,
        Operation::SortAscendingByName,
        RenderMode::Replace,
    ),
    bind(
        Control::SortDescending,
        Operation::SortDescendingByName,
        RenderMode::Replace,
    ),
    bind(Control::SortByScore, Operation::SortByScore, RenderMode::Replace),
    bind(
        Control::FilterPassing,
        Operation::FilterByStatus,
        RenderMode::Replace,
    ),
    bind(Control::SortByGroup, Operation::SortByGroup, RenderMode::Replace),
    bind(
        Control::PartitionByGender,
        Operation::PartitionByCategory,
        RenderMode::Append,
    ),
    bind(Control::ShowAll, Operation::Identity, RenderMode::Replace),
];

/// Dispatches controls to query operations and the renderer.
#[derive(Debug, Clone)]
pub struct Controller {
    bindings: HashMap<Control, Binding>,
}

impl Controller {
    /// Build the controller from [`BINDINGS`].
    pub fn new() -> Self {
        Self::with_bindings(BINDINGS)
    }

    /// Build the controller from a custom table. Later rows win on duplicates.
    pub fn with_bindings(table: &[Binding]) -> Self {
        let bindings = table
            .iter()
            .map(|binding| (binding.control, *binding))
            .collect();
        Self { bindings }
    }

    /// Binding attached to `control`, if any.
    pub fn binding(&self, control: Control) -> Option<&Binding> {
        self.bindings.get(&control)
    }

    /// Derive the view for `control` from the store's master collection.
    ///
    /// `term` is only read by [`Control::Search`]. Returns `None` for a
    /// control with no binding.
    pub fn dispatch<'a>(&self, store: &'a Store, control: Control, term: &str) -> Option<View<'a>> {
        let binding = self.binding(control)?;
        let view = binding.operation.apply(store.master(), term);
        debug!(
            control = ?control,
            operation = ?binding.operation,
            rows = view.len(),
            "Control dispatched"
        );
        Some(view)
    }

    /// Dispatch `control` and render the result into `body` with the
    /// binding's render mode.
    ///
    /// Returns the number of rows rendered, or `None` if `control` has no
    /// binding (the body is left untouched).
    pub fn trigger(
        &self,
        store: &Store,
        control: Control,
        term: &str,
        body: &mut TableBody,
    ) -> Option<usize> {
        let mode = self.binding(control)?.mode;
        let view = self.dispatch(store, control, term)?;
        render::render(body, &view, mode);
        Some(body.len())
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::bob_and_amy;

    fn body_names(body: &TableBody) -> Vec<&str> {
        body.rows().iter().map(|row| row.name.as_str()).collect()
    }

    #[test]
    fn every_control_has_exactly_one_binding() {
        let all = [
            Control::Search,
            Control::SortAscending,
            Control::SortDescending,
            Control::SortByScore,
            Control::FilterPassing,
            Control::SortByGroup,
            Control::PartitionByGender,
            Control::ShowAll,
        ];
        for control in all {
            let count = BINDINGS.iter().filter(|b| b.control == control).count();
            assert_eq!(count, 1, "{control:?} should be bound once");
        }
    }

    #[test]
    fn only_gender_partition_uses_append_mode() {
        for binding in BINDINGS {
            let expected = if binding.control == Control::PartitionByGender {
                RenderMode::Append
            } else {
                RenderMode::Replace
            };
            assert_eq!(binding.mode, expected, "{:?}", binding.control);
        }
    }

    #[test]
    fn binding_mode_decides_how_partition_is_rendered() {
        let store = Store::from(bob_and_amy());
        let partition = |mode| Binding {
            control: Control::PartitionByGender,
            operation: Operation::PartitionByCategory,
            mode,
        };
        let mut body = TableBody::new();

        let appending = Controller::with_bindings(&[partition(RenderMode::Append)]);
        let rows = appending.trigger(&store, Control::PartitionByGender, "", &mut body);
        assert_eq!(rows, Some(2));
        assert_eq!(body_names(&body), vec!["Amy Ames", "Bob Zane"]);

        // Replace lets the male rows overwrite the female rows
        let replacing = Controller::with_bindings(&[partition(RenderMode::Replace)]);
        let rows = replacing.trigger(&store, Control::PartitionByGender, "", &mut body);
        assert_eq!(rows, Some(1));
        assert_eq!(body_names(&body), vec!["Bob Zane"]);
    }

    #[test]
    fn end_to_end_scenario() {
        let store = Store::from(bob_and_amy());
        let controller = Controller::new();
        let mut body = TableBody::new();

        controller.trigger(&store, Control::SortAscending, "", &mut body);
        assert_eq!(body_names(&body), vec!["Amy Ames", "Bob Zane"]);

        controller.trigger(&store, Control::SortByScore, "", &mut body);
        assert_eq!(body_names(&body), vec!["Bob Zane", "Amy Ames"]);

        controller.trigger(&store, Control::FilterPassing, "", &mut body);
        assert_eq!(body_names(&body), vec!["Bob Zane"]);

        controller.trigger(&store, Control::Search, "aa@x", &mut body);
        assert_eq!(body_names(&body), vec!["Amy Ames"]);
    }

    #[test]
    fn controls_do_not_compound() {
        let store = Store::from(bob_and_amy());
        let controller = Controller::new();
        let mut body = TableBody::new();

        controller.trigger(&store, Control::FilterPassing, "", &mut body);
        assert_eq!(body.len(), 1);

        // Sorting after filtering starts from the full roster again
        controller.trigger(&store, Control::SortAscending, "", &mut body);
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn gender_partition_renders_female_rows_first() {
        let store = Store::from(bob_and_amy());
        let controller = Controller::new();
        let mut body = TableBody::new();

        let rows = controller.trigger(&store, Control::PartitionByGender, "", &mut body);
        assert_eq!(rows, Some(2));
        assert_eq!(body_names(&body), vec!["Amy Ames", "Bob Zane"]);
    }

    #[test]
    fn search_term_is_ignored_by_other_controls() {
        let store = Store::from(bob_and_amy());
        let controller = Controller::new();
        let view = controller
            .dispatch(&store, Control::SortByScore, "no-such-student")
            .expect("bound control");
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn unloaded_store_yields_empty_views() {
        let store = Store::new();
        let controller = Controller::new();
        let mut body = TableBody::new();
        for binding in BINDINGS {
            let rows = controller.trigger(&store, binding.control, "", &mut body);
            assert_eq!(rows, Some(0), "{:?}", binding.control);
        }
    }

    #[test]
    fn unbound_control_leaves_body_untouched() {
        let store = Store::from(bob_and_amy());
        let controller = Controller::with_bindings(&BINDINGS[1..]);
        let mut body = TableBody::new();
        controller.trigger(&store, Control::ShowAll, "", &mut body);

        let rows = controller.trigger(&store, Control::Search, "amy", &mut body);
        assert_eq!(rows, None);
        assert_eq!(body.len(), 2);
    }
}
