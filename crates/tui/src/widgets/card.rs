//! Widget card rendering.
//!
//! Draws one [`WidgetView`] the way a home screen would: a bordered card with
//! the list title, a configure button, and the item summary.

use adventure_widget_protocol::WidgetView;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::layout::{CONFIGURE_LABEL, CardLayout, MIN_CARD_HEIGHT, MIN_CARD_WIDTH};

/// Returns the border color for a card.
#[must_use]
pub fn border_color(focused: bool) -> Color {
    if focused { Color::Cyan } else { Color::DarkGray }
}

/// Renders a widget card into `area`.
///
/// Returns where each region was drawn, for hit-testing. If `area` is too
/// small for a card, a notice is drawn instead and `None` is returned.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use adventure_widget_protocol::render;
/// use adventure_widget_tui::widgets::render_card;
///
/// let area = Rect::new(0, 0, 30, 8);
/// let mut buf = Buffer::empty(area);
///
/// let layout = render_card(&render(None), true, area, &mut buf);
/// assert!(layout.is_some());
/// ```
pub fn render_card(
    view: &WidgetView,
    focused: bool,
    area: Rect,
    buf: &mut Buffer,
) -> Option<CardLayout> {
    let Some(layout) = CardLayout::new(area) else {
        render_too_small(area, buf);
        return None;
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color(focused)))
        .render(layout.container, buf);

    Paragraph::new(Line::from(view.title_text.as_str()))
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .render(layout.title, buf);

    Paragraph::new(Line::from(CONFIGURE_LABEL))
        .style(Style::default().fg(Color::Yellow))
        .render(layout.configure_button, buf);

    let lines: Vec<Line> = view.summary_lines().into_iter().map(Line::from).collect();
    Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .render(layout.summary, buf);

    Some(layout)
}

fn render_too_small(area: Rect, buf: &mut Buffer) {
    let message = format!("Too small\n{MIN_CARD_WIDTH}×{MIN_CARD_HEIGHT}");
    Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use adventure_widget_protocol::{Region, render};

    const GROCERIES: &str = r#"{"title":"Groceries","items":[{"title":"Milk","completed":false},{"title":"Eggs","completed":true}]}"#;

    #[test]
    fn renders_title_button_and_items() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);

        render_card(&render(Some(GROCERIES)), false, area, &mut buf).unwrap();

        let content = buffer_to_string(&buf);
        assert!(content.contains("Groceries"));
        assert!(content.contains(CONFIGURE_LABEL));
        assert!(content.contains("• Milk"));
        assert!(content.contains("• Eggs"));
    }

    #[test]
    fn default_view_shows_select_list() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);

        render_card(&render(None), false, area, &mut buf).unwrap();

        let content = buffer_to_string(&buf);
        assert!(content.contains("Select List"));
        assert!(!content.contains('•'));
    }

    #[test]
    fn focused_card_border_is_highlighted() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);

        render_card(&render(None), true, area, &mut buf);

        assert_eq!(buf[(0, 0)].fg, border_color(true));
    }

    #[test]
    fn layout_matches_drawn_button() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);

        let layout = render_card(&render(None), false, area, &mut buf).unwrap();
        let button = layout.configure_button;

        assert_eq!(buf[(button.x, button.y)].symbol(), "[");
        assert_eq!(
            layout.hit_test(button.x, button.y),
            Some(Region::ConfigureButton)
        );
    }

    #[test]
    fn too_small_area_draws_notice() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);

        assert!(render_card(&render(None), false, area, &mut buf).is_none());
        assert!(buffer_to_string(&buf).contains("Too small"));
    }
}
