//! Host state management.
//!
//! The host keeps the views produced by the latest update cycle, which
//! instance has keyboard focus, and the last navigation request a tap
//! produced. Views are replaced wholesale on every cycle, never patched.

use adventure_widget_protocol::{Region, TapTarget, WidgetId, WidgetView};
use chrono::{DateTime, Local};

/// A navigation request produced by tapping a widget region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRequest {
    /// The instance that was tapped.
    pub widget: WidgetId,
    /// The region that was tapped.
    pub region: Region,
    /// The target bound to that region.
    pub target: TapTarget,
}

impl NavigationRequest {
    /// Returns the launch URI handed to the application.
    #[must_use]
    pub fn launch_uri(&self) -> &'static str {
        self.target.launch_uri()
    }
}

/// The host state.
#[derive(Debug, Clone, Default)]
pub struct HostState {
    /// Rendered widget instances from the latest update cycle.
    pub views: Vec<(WidgetId, WidgetView)>,
    /// Index of the instance with keyboard focus.
    pub focused: usize,
    /// The last navigation request, if not dismissed.
    pub last_request: Option<NavigationRequest>,
    /// When the views were last produced.
    pub refreshed_at: Option<DateTime<Local>>,
    /// Why the last store read failed, if it did.
    pub store_error: Option<String>,
}

impl HostState {
    /// Creates an empty host state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the rendered views with the result of a new update cycle.
    ///
    /// Focus is kept on the same index when it still exists.
    pub fn apply_views(&mut self, views: Vec<(WidgetId, WidgetView)>, at: DateTime<Local>) {
        self.views = views;
        self.refreshed_at = Some(at);
        if self.focused >= self.views.len() {
            self.focused = 0;
        }
    }

    /// Moves focus to the next instance, wrapping around.
    pub fn focus_next(&mut self) {
        if !self.views.is_empty() {
            self.focused = (self.focused + 1) % self.views.len();
        }
    }

    /// Moves focus to the previous instance, wrapping around.
    pub fn focus_prev(&mut self) {
        if !self.views.is_empty() {
            self.focused = (self.focused + self.views.len() - 1) % self.views.len();
        }
    }

    /// Taps `region` on the instance at `index`.
    ///
    /// Returns the resulting request, which is also kept as the last request.
    /// Returns `None` if there is no such instance or the region is unbound.
    pub fn tap(&mut self, index: usize, region: Region) -> Option<NavigationRequest> {
        let (widget, view) = self.views.get(index)?;
        let request = NavigationRequest {
            widget: *widget,
            region,
            target: view.target_for(region)?,
        };
        self.focused = index;
        self.last_request = Some(request);
        Some(request)
    }

    /// Taps `region` on the focused instance.
    pub fn tap_focused(&mut self, region: Region) -> Option<NavigationRequest> {
        self.tap(self.focused, region)
    }

    /// Clears the last navigation request.
    pub fn dismiss(&mut self) {
        self.last_request = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adventure_widget_protocol::{render, render_batch};

    fn state_with(count: u32) -> HostState {
        let ids: Vec<WidgetId> = (1..=count).map(WidgetId).collect();
        let mut state = HostState::new();
        state.apply_views(render_batch(None, &ids), Local::now());
        state
    }

    #[test]
    fn new_state_is_empty() {
        let state = HostState::new();
        assert!(state.views.is_empty());
        assert!(state.last_request.is_none());
        assert!(state.refreshed_at.is_none());
    }

    #[test]
    fn focus_wraps_around() {
        let mut state = state_with(3);
        state.focus_prev();
        assert_eq!(state.focused, 2);
        state.focus_next();
        assert_eq!(state.focused, 0);
        state.focus_next();
        assert_eq!(state.focused, 1);
    }

    #[test]
    fn focus_on_empty_state_is_noop() {
        let mut state = HostState::new();
        state.focus_next();
        state.focus_prev();
        assert_eq!(state.focused, 0);
    }

    #[test]
    fn apply_views_resets_out_of_range_focus() {
        let mut state = state_with(3);
        state.focused = 2;
        state.apply_views(vec![(WidgetId(1), render(None))], Local::now());
        assert_eq!(state.focused, 0);
    }

    #[test]
    fn tap_records_request() {
        let mut state = state_with(2);
        let request = state.tap(1, Region::ConfigureButton).unwrap();

        assert_eq!(request.widget, WidgetId(2));
        assert_eq!(request.target, TapTarget::OpenConfiguration);
        assert_eq!(request.launch_uri(), "launchWidgetConfig");
        assert_eq!(state.focused, 1);
        assert_eq!(state.last_request, Some(request));
    }

    #[test]
    fn tap_focused_title_opens_list() {
        let mut state = state_with(1);
        let request = state.tap_focused(Region::Title).unwrap();
        assert_eq!(request.target, TapTarget::OpenSelectedList);
    }

    #[test]
    fn tap_missing_instance() {
        let mut state = state_with(1);
        assert!(state.tap(4, Region::Container).is_none());
        assert!(state.last_request.is_none());
    }

    #[test]
    fn dismiss_clears_request() {
        let mut state = state_with(1);
        state.tap_focused(Region::Container);
        state.dismiss();
        assert!(state.last_request.is_none());
    }
}
