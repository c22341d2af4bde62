//! Layout measurements and hit-testing for widget cards.
//!
//! A card is drawn as a bordered box. Inside the border, the first row holds
//! the list title on the left and the configure button on the right; the
//! remaining rows hold the item summary:
//!
//! ```text
//! ╭──────────────────────────╮
//! │Groceries         [Config]│
//! │• Milk                    │
//! │• Eggs                    │
//! ╰──────────────────────────╯
//! ```

use adventure_widget_protocol::Region;
use ratatui::layout::{Constraint, Layout, Position, Rect};

/// Label drawn for the configure button.
pub const CONFIGURE_LABEL: &str = "[Config]";

/// Width of the configure button in columns.
pub const CONFIGURE_WIDTH: u16 = CONFIGURE_LABEL.len() as u16;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Minimum card width: borders, the configure button, and a few title columns.
pub const MIN_CARD_WIDTH: u16 = CONFIGURE_WIDTH + 2 + 6;

/// Minimum card height: borders, the title row, and one summary row.
pub const MIN_CARD_HEIGHT: u16 = 4;

/// Where each region of a card was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    /// The whole card, border included.
    pub container: Rect,
    /// The title row, left of the configure button.
    pub title: Rect,
    /// The configure button.
    pub configure_button: Rect,
    /// The rows below the title.
    pub summary: Rect,
}

impl CardLayout {
    /// Computes the layout of a card drawn in `area`.
    ///
    /// Returns `None` if `area` is too small to hold a card.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratatui::layout::Rect;
    /// use adventure_widget_tui::layout::CardLayout;
    ///
    /// let layout = CardLayout::new(Rect::new(0, 0, 30, 8)).unwrap();
    /// assert_eq!(layout.title.y, 1);
    /// assert!(CardLayout::new(Rect::new(0, 0, 5, 2)).is_none());
    /// ```
    #[must_use]
    pub fn new(area: Rect) -> Option<Self> {
        if area.width < MIN_CARD_WIDTH || area.height < MIN_CARD_HEIGHT {
            return None;
        }

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width - 2,
            height: area.height - 2,
        };

        let [title, configure_button] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(CONFIGURE_WIDTH)])
                .areas(Rect { height: 1, ..inner });

        Some(Self {
            container: area,
            title,
            configure_button,
            summary: Rect {
                y: inner.y + 1,
                height: inner.height - 1,
                ..inner
            },
        })
    }

    /// Returns the most specific region at the given position.
    ///
    /// The configure button and title sit inside the container, so they take
    /// precedence over it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratatui::layout::Rect;
    /// use adventure_widget_protocol::Region;
    /// use adventure_widget_tui::layout::CardLayout;
    ///
    /// let layout = CardLayout::new(Rect::new(0, 0, 30, 8)).unwrap();
    /// assert_eq!(layout.hit_test(2, 1), Some(Region::Title));
    /// assert_eq!(layout.hit_test(2, 4), Some(Region::Container));
    /// assert_eq!(layout.hit_test(40, 4), None);
    /// ```
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Region> {
        let position = Position::new(column, row);
        if self.configure_button.contains(position) {
            Some(Region::ConfigureButton)
        } else if self.title.contains(position) {
            Some(Region::Title)
        } else if self.container.contains(position) {
            Some(Region::Container)
        } else {
            None
        }
    }
}

/// Splits `area` into `count` equally wide columns, one per widget instance.
#[must_use]
pub fn instance_areas(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let ratio = u32::try_from(count).unwrap_or(u32::MAX);
    Layout::horizontal(vec![Constraint::Ratio(1, ratio); count])
        .split(area)
        .to_vec()
}
