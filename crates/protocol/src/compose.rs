//! View composer.
//!
//! Maps a [`SelectedListState`] onto a [`WidgetView`]. Composition is total
//! and pure: there is no state that could make it fail or differ between
//! calls.

use crate::state::SelectedListState;
use crate::view::{Region, TapAction, TapTarget, WidgetView};

/// Prefix rendered before every item title.
pub const ITEM_BULLET: &str = "• ";

/// Separator between rendered items.
pub const ITEM_SEPARATOR: &str = "\n";

/// Composes the widget view for `state`.
///
/// Items are rendered as `"• <title>"`, one per line, regardless of their
/// completion state. Every region is bound:
///
/// | Region | Target |
/// |--------|--------|
/// | `Container` | `OpenSelectedList` |
/// | `Title` | `OpenSelectedList` |
/// | `ConfigureButton` | `OpenConfiguration` |
///
/// Container and title are bound separately because the host does not let
/// tap targets cascade from a parent region.
///
/// # Examples
///
/// ```
/// use adventure_widget_protocol::{compose, SelectedListState, TaskSummary};
///
/// let state = SelectedListState::new(
///     "Groceries",
///     vec![TaskSummary::new("Milk", false), TaskSummary::new("Eggs", true)],
/// );
/// let view = compose(&state);
///
/// assert_eq!(view.title_text, "Groceries");
/// assert_eq!(view.summary_text, "• Milk\n• Eggs");
/// assert_eq!(view.actions.len(), 3);
/// ```
#[must_use]
pub fn compose(state: &SelectedListState) -> WidgetView {
    let summary_text = state
        .items
        .iter()
        .map(|item| format!("{ITEM_BULLET}{}", item.title))
        .collect::<Vec<_>>()
        .join(ITEM_SEPARATOR);

    WidgetView {
        title_text: state.title.clone(),
        summary_text,
        actions: Region::ALL
            .into_iter()
            .map(|region| TapAction::new(region, target_for(region)))
            .collect(),
    }
}

const fn target_for(region: Region) -> TapTarget {
    match region {
        // If nothing is selected the application falls back to its picker.
        Region::Container | Region::Title => TapTarget::OpenSelectedList,
        Region::ConfigureButton => TapTarget::OpenConfiguration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{NO_SELECTION_TITLE, TaskSummary};

    #[test]
    fn no_selection_view() {
        let view = compose(&SelectedListState::no_selection());

        assert_eq!(view.title_text, NO_SELECTION_TITLE);
        assert_eq!(view.summary_text, "");
        assert_eq!(
            view.actions,
            vec![
                TapAction::new(Region::Container, TapTarget::OpenSelectedList),
                TapAction::new(Region::Title, TapTarget::OpenSelectedList),
                TapAction::new(Region::ConfigureButton, TapTarget::OpenConfiguration),
            ]
        );
    }

    #[test]
    fn summary_ignores_completion() {
        let done = compose(&SelectedListState::new(
            "Trip",
            vec![TaskSummary::new("Tent", true)],
        ));
        let open = compose(&SelectedListState::new(
            "Trip",
            vec![TaskSummary::new("Tent", false)],
        ));
        assert_eq!(done, open);
    }

    #[test]
    fn summary_snapshot() {
        let view = compose(&SelectedListState::new(
            "Trip",
            vec![
                TaskSummary::new("Tent", false),
                TaskSummary::new("Stove", true),
                TaskSummary::new("Maps", false),
            ],
        ));

        insta::assert_snapshot!(view.summary_text, @r"
        • Tent
        • Stove
        • Maps
        ");
    }

    #[test]
    fn single_item_has_no_separator() {
        let view = compose(&SelectedListState::new(
            "Trip",
            vec![TaskSummary::new("Tent", false)],
        ));
        assert_eq!(view.summary_text, "• Tent");
    }

    #[test]
    fn empty_item_title_still_gets_bullet() {
        let view = compose(&SelectedListState::new(
            "Trip",
            vec![TaskSummary::new("", false)],
        ));
        assert_eq!(view.summary_text, "• ");
    }

    #[test]
    fn every_region_bound_once() {
        let view = compose(&SelectedListState::no_selection());
        for region in Region::ALL {
            let count = view.actions.iter().filter(|a| a.region == region).count();
            assert_eq!(count, 1, "{region:?} should be bound exactly once");
        }
    }

    #[test]
    fn list_picker_is_never_bound() {
        let view = compose(&SelectedListState::new("Trip", Vec::new()));
        assert!(
            view.actions
                .iter()
                .all(|a| a.target != TapTarget::OpenListPicker)
        );
    }
}
