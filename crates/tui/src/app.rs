//! Main host struct and run loop.
//!
//! This module provides the [`App`] struct which plays the part of a widget
//! host: on every update cycle it snapshots the store, runs the pipeline for
//! each configured instance, draws the cards, and turns taps into navigation
//! requests.

use adventure_widget_config::Config;
use adventure_widget_protocol::{Message, render_batch};
use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use tokio::time::Instant;

use crate::{
    event::{event_to_message, poll_event},
    layout::{CardLayout, STATUS_BAR_HEIGHT, instance_areas},
    state::{HostState, NavigationRequest},
    terminal::AppTerminal,
    widgets::{render_card, render_status_bar},
};

/// The preview host application.
#[derive(Debug)]
pub struct App {
    state: HostState,
    config: Config,
    should_quit: bool,
    /// Card layouts from the last draw, used for click hit-testing.
    card_layouts: Vec<(usize, CardLayout)>,
    next_refresh: Option<Instant>,
}

impl App {
    /// Creates a host for the given configuration.
    ///
    /// Nothing is read from the store until [`App::refresh`] or
    /// [`App::run`] is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use adventure_widget_config::Config;
    /// use adventure_widget_tui::App;
    ///
    /// let app = App::new(Config::default());
    /// assert!(app.state().views.is_empty());
    /// ```
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            state: HostState::new(),
            config,
            should_quit: false,
            card_layouts: Vec::new(),
            next_refresh: None,
        }
    }

    /// Returns a reference to the host state.
    #[must_use]
    pub fn state(&self) -> &HostState {
        &self.state
    }

    /// Returns a reference to the host configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns whether the host has been asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs one update cycle.
    ///
    /// A store that cannot be read is treated like an empty one, so the
    /// cards still render; the failure is shown in the status bar.
    pub fn refresh(&mut self) {
        let payload = match self.config.read_payload() {
            Ok(payload) => {
                self.state.store_error = None;
                payload
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not read store, rendering without a payload");
                self.state.store_error = Some(err.to_string());
                None
            }
        };

        let views = render_batch(payload.as_deref(), &self.config.widget_ids());
        tracing::debug!(instances = views.len(), "update cycle complete");
        self.state.apply_views(views, Local::now());
        self.next_refresh = Some(Instant::now() + self.config.refresh.interval());
    }

    /// Updates the host state based on a message.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::Refresh => {
                self.refresh();
            }
            Message::Tap { region } => {
                let request = self.state.tap_focused(region);
                Self::dispatch(request);
            }
            Message::ClickAt { column, row } => {
                self.handle_click(column, row);
            }
            Message::NextInstance => {
                self.state.focus_next();
            }
            Message::PrevInstance => {
                self.state.focus_prev();
            }
            Message::Dismiss => {
                self.state.dismiss();
            }
        }
    }

    /// Handles a mouse click at the given coordinates.
    fn handle_click(&mut self, column: u16, row: u16) {
        let hit = self
            .card_layouts
            .iter()
            .find_map(|(index, layout)| Some((*index, layout.hit_test(column, row)?)));

        if let Some((index, region)) = hit {
            let request = self.state.tap(index, region);
            Self::dispatch(request);
        }
    }

    fn dispatch(request: Option<NavigationRequest>) {
        if let Some(request) = request {
            tracing::info!(
                widget = %request.widget,
                region = ?request.region,
                uri = request.launch_uri(),
                "dispatching navigation request"
            );
        }
    }

    /// Renders the host UI to the given frame.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [cards_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
                .areas(area);

        self.card_layouts = self.render_cards(frame, cards_area);

        render_status_bar(
            self.state.last_request.as_ref(),
            self.state.refreshed_at,
            self.state.store_error.as_deref(),
            status_area,
            frame.buffer_mut(),
        );
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) -> Vec<(usize, CardLayout)> {
        let buf = frame.buffer_mut();
        self.state
            .views
            .iter()
            .zip(instance_areas(area, self.state.views.len()))
            .enumerate()
            .filter_map(|(index, ((_, view), card_area))| {
                let focused = index == self.state.focused;
                render_card(view, focused, card_area, buf).map(|layout| (index, layout))
            })
            .collect()
    }

    fn refresh_due(&self) -> bool {
        self.next_refresh
            .is_none_or(|deadline| Instant::now() >= deadline)
    }

    /// Runs the host loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use adventure_widget_config::Config;
    /// use adventure_widget_tui::{App, terminal::HostTerminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = HostTerminal::enter()?;
    ///     let mut app = App::new(Config::default());
    ///     app.run(&mut terminal).await?;
    ///     terminal.leave()?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            if self.refresh_due() {
                self.refresh();
            }

            terminal.draw(|frame| self.view(frame))?;

            if let Some(msg) = poll_event()?.as_ref().and_then(event_to_message) {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }

            tokio::task::yield_now().await;
        }

        Ok(())
    }
}
