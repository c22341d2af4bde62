//! The render pipeline entry points.
//!
//! The widget host calls [`render`] once per update cycle with whatever it
//! read from the persisted store. Nothing is cached between calls.

use serde::{Deserialize, Serialize};

use crate::compose::compose;
use crate::decode::decode_or_default;
use crate::view::WidgetView;

/// Identifier the host assigns to a placed widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(pub u32);

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Runs the full pipeline on a raw persisted payload.
///
/// Never fails: a payload that cannot be decoded renders as the
/// "no selection" widget.
///
/// # Examples
///
/// ```
/// use adventure_widget_protocol::render;
///
/// let view = render(Some(r#"{"title":"Groceries","items":[{"title":"Milk","completed":false}]}"#));
/// assert_eq!(view.title_text, "Groceries");
/// assert_eq!(view.summary_text, "• Milk");
///
/// let view = render(Some("{ corrupt"));
/// assert_eq!(view.title_text, "Select List");
/// ```
#[must_use]
pub fn render(raw: Option<&str>) -> WidgetView {
    compose(&decode_or_default(raw))
}

/// Renders every widget instance in a batch from one store snapshot.
///
/// Each instance goes through the pipeline on its own; the result follows
/// the order of `ids`.
///
/// # Examples
///
/// ```
/// use adventure_widget_protocol::{render, render_batch, WidgetId};
///
/// let views = render_batch(None, &[WidgetId(3), WidgetId(1)]);
/// assert_eq!(views.len(), 2);
/// assert_eq!(views[0].0, WidgetId(3));
/// assert_eq!(views[1].1, render(None));
/// ```
#[must_use]
pub fn render_batch(raw: Option<&str>, ids: &[WidgetId]) -> Vec<(WidgetId, WidgetView)> {
    ids.iter()
        .map(|&id| {
            tracing::debug!(widget = %id, "rendering widget instance");
            (id, render(raw))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NO_SELECTION_TITLE;
    use crate::view::{Region, TapAction, TapTarget};

    fn default_actions() -> Vec<TapAction> {
        vec![
            TapAction::new(Region::Container, TapTarget::OpenSelectedList),
            TapAction::new(Region::Title, TapTarget::OpenSelectedList),
            TapAction::new(Region::ConfigureButton, TapTarget::OpenConfiguration),
        ]
    }

    #[test]
    fn absent_payload_renders_default_view() {
        assert_eq!(
            render(None),
            WidgetView {
                title_text: NO_SELECTION_TITLE.to_string(),
                summary_text: String::new(),
                actions: default_actions(),
            }
        );
    }

    #[test]
    fn null_payload_renders_default_view() {
        assert_eq!(render(Some("null")), render(None));
    }

    #[test]
    fn null_fields_render_default_view() {
        assert_eq!(render(Some(r#"{"title":null,"items":null}"#)), render(None));
    }

    #[test]
    fn groceries_example() {
        let view = render(Some(
            r#"{"title":"Groceries","items":[{"title":"Milk","completed":false},{"title":"Eggs","completed":true}]}"#,
        ));
        assert_eq!(view.title_text, "Groceries");
        assert_eq!(view.summary_text, "• Milk\n• Eggs");
        assert_eq!(view.actions, default_actions());
    }

    #[test]
    fn item_missing_completed_renders_default_view() {
        let view = render(Some(r#"{"title":"Groceries","items":[{"title":"Milk"}]}"#));
        assert_eq!(view, render(None));
    }

    #[test]
    fn empty_list_example() {
        let view = render(Some(r#"{"title":"Empty List","items":[]}"#));
        assert_eq!(view.title_text, "Empty List");
        assert_eq!(view.summary_text, "");
    }

    #[test]
    fn batch_keeps_instance_order() {
        let ids = [WidgetId(7), WidgetId(2), WidgetId(5)];
        let views = render_batch(Some(r#"{"title":"Trip"}"#), &ids);
        let got: Vec<WidgetId> = views.iter().map(|(id, _)| *id).collect();
        assert_eq!(got, ids);
        assert!(views.iter().all(|(_, view)| view.title_text == "Trip"));
    }

    #[test]
    fn batch_of_nothing_is_empty() {
        assert!(render_batch(None, &[]).is_empty());
    }

    #[test]
    fn widget_id_display() {
        assert_eq!(WidgetId(12).to_string(), "#12");
    }
}
