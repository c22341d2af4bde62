//! Renderable widget description.
//!
//! A [`WidgetView`] is what the pipeline hands to the rendering host: the text
//! for the two display regions plus one [`TapAction`] per tappable region.
//! The host decides how regions and targets map onto concrete platform
//! primitives.

use serde::{Deserialize, Serialize};

/// A tappable zone of the widget.
///
/// # Examples
///
/// ```
/// use adventure_widget_protocol::Region;
///
/// assert_eq!(Region::ALL.len(), 3);
/// assert_eq!(Region::ALL[0], Region::Container);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// The widget body.
    Container,
    /// The list title at the top of the widget.
    Title,
    /// The button that opens the widget configuration.
    ConfigureButton,
}

impl Region {
    /// Every region, in binding order.
    pub const ALL: [Region; 3] = [Region::Container, Region::Title, Region::ConfigureButton];
}

/// A navigation request the host application interprets when a region is tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TapTarget {
    /// Reopen the application at the currently selected list.
    OpenSelectedList,
    /// Reopen the application at its list picker.
    OpenListPicker,
    /// Reopen the application at the widget configuration screen.
    OpenConfiguration,
}

impl TapTarget {
    /// Returns the launch URI the host passes to the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use adventure_widget_protocol::TapTarget;
    ///
    /// assert_eq!(TapTarget::OpenSelectedList.launch_uri(), "launchWidgetList");
    /// assert_eq!(TapTarget::OpenConfiguration.launch_uri(), "launchWidgetConfig");
    /// ```
    #[must_use]
    pub const fn launch_uri(self) -> &'static str {
        match self {
            Self::OpenSelectedList => "launchWidgetList",
            Self::OpenListPicker => "launchListPicker",
            Self::OpenConfiguration => "launchWidgetConfig",
        }
    }
}

/// Binds a region to the target it dispatches when tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TapAction {
    /// The tappable zone.
    pub region: Region,
    /// What happens on tap.
    pub target: TapTarget,
}

impl TapAction {
    /// Creates a new binding.
    #[must_use]
    pub const fn new(region: Region, target: TapTarget) -> Self {
        Self { region, target }
    }
}

/// The rendered widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetView {
    /// Text for the title region.
    pub title_text: String,
    /// Text for the items region: each item's bulleted title, joined with `\n`.
    pub summary_text: String,
    /// Tap bindings, one per [`Region`], in [`Region::ALL`] order.
    pub actions: Vec<TapAction>,
}

impl WidgetView {
    /// Returns the target bound to `region`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use adventure_widget_protocol::{render, Region, TapTarget};
    ///
    /// let view = render(None);
    /// assert_eq!(view.target_for(Region::Title), Some(TapTarget::OpenSelectedList));
    /// ```
    #[must_use]
    pub fn target_for(&self, region: Region) -> Option<TapTarget> {
        self.actions
            .iter()
            .find(|action| action.region == region)
            .map(|action| action.target)
    }

    /// Returns the summary split on `\n` into display lines.
    ///
    /// An empty summary has no lines. A title that itself contains `\n`
    /// spans several lines, so the count can exceed the number of items.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<&str> {
        if self.summary_text.is_empty() {
            Vec::new()
        } else {
            self.summary_text.split('\n').collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> WidgetView {
        WidgetView {
            title_text: "Trip".to_string(),
            summary_text: "• Tent\n• Stove".to_string(),
            actions: vec![
                TapAction::new(Region::Container, TapTarget::OpenSelectedList),
                TapAction::new(Region::ConfigureButton, TapTarget::OpenConfiguration),
            ],
        }
    }

    #[test]
    fn target_for_bound_region() {
        let view = sample_view();
        assert_eq!(
            view.target_for(Region::ConfigureButton),
            Some(TapTarget::OpenConfiguration)
        );
    }

    #[test]
    fn target_for_unbound_region() {
        assert_eq!(sample_view().target_for(Region::Title), None);
    }

    #[test]
    fn summary_lines_split_on_newline() {
        assert_eq!(sample_view().summary_lines(), ["• Tent", "• Stove"]);
    }

    #[test]
    fn multiline_item_title_spans_lines() {
        let view = crate::pipeline::render(Some(
            r#"{"title":"Trip","items":[{"title":"Tent\npoles","completed":false},{"title":"Stove","completed":false}]}"#,
        ));

        assert_eq!(view.summary_text, "• Tent\npoles\n• Stove");
        assert_eq!(view.summary_lines(), ["• Tent", "poles", "• Stove"]);
    }

    #[test]
    fn summary_lines_empty() {
        let view = WidgetView {
            summary_text: String::new(),
            ..sample_view()
        };
        assert!(view.summary_lines().is_empty());
    }

    #[test]
    fn launch_uris_are_distinct() {
        let uris = [
            TapTarget::OpenSelectedList.launch_uri(),
            TapTarget::OpenListPicker.launch_uri(),
            TapTarget::OpenConfiguration.launch_uri(),
        ];
        assert_ne!(uris[0], uris[1]);
        assert_ne!(uris[1], uris[2]);
        assert_ne!(uris[0], uris[2]);
    }

    #[test]
    fn region_json_format() {
        let json = serde_json::to_string(&Region::ConfigureButton).expect("serialize");
        assert_eq!(json, r#""configure_button""#);

        let json = serde_json::to_string(&TapTarget::OpenSelectedList).expect("serialize");
        assert_eq!(json, r#""open_selected_list""#);
    }
}
