//! Status bar rendering widget.
//!
//! The status bar shows either the last navigation request a tap produced,
//! or the keybinding hints, followed by when the views were last refreshed.

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::state::NavigationRequest;

/// Renders the status bar.
///
/// # Layout
///
/// ```text
/// +--------------------------------------------------------------+
/// | #1 title → launchWidgetList  |  updated 10:30:00              |
/// +--------------------------------------------------------------+
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use adventure_widget_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(None, None, None, area, &mut buf);
/// ```
pub fn render_status_bar(
    request: Option<&NavigationRequest>,
    refreshed_at: Option<DateTime<Local>>,
    store_error: Option<&str>,
    area: Rect,
    buf: &mut Buffer,
) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut spans = match request {
        Some(request) => vec![
            Span::styled(
                format!("{} {}", request.widget, region_label(request)),
                text_style,
            ),
            Span::styled(" → ", dim_style),
            Span::styled(request.launch_uri(), Style::default().fg(Color::Cyan)),
        ],
        None => vec![
            Span::styled("q", key_style),
            Span::styled(" Quit  ", text_style),
            Span::styled("Enter/t/c", key_style),
            Span::styled(" Tap  ", text_style),
            Span::styled("Tab", key_style),
            Span::styled(" Next  ", text_style),
            Span::styled("r", key_style),
            Span::styled(" Refresh", text_style),
        ],
    };

    if let Some(error) = store_error {
        spans.push(Span::styled("  |  ", dim_style));
        spans.push(Span::styled(
            format!("store unreadable: {error}"),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(at) = refreshed_at {
        spans.push(Span::styled("  |  ", dim_style));
        spans.push(Span::styled(
            format!("updated {}", at.format("%H:%M:%S")),
            dim_style,
        ));
    }

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}

fn region_label(request: &NavigationRequest) -> &'static str {
    use adventure_widget_protocol::Region;

    match request.region {
        Region::Container => "body",
        Region::Title => "title",
        Region::ConfigureButton => "configure",
    }
}
