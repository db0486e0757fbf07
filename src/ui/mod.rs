mod detail;
mod help;
mod list;
mod search;
mod settings;

use crate::overlay::OverlayKind;
use crate::screen::{Screen, CARD_ROWS};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};
use unicode_width::UnicodeWidthChar;

/// Fixed regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub list: Rect,
    pub show_more: Rect,
    pub status: Rect,
}

impl PageLayout {
    pub fn new(area: Rect) -> Self {
        // Layout: header(3) + list(min) + show more(1) + status(1)
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);
        Self {
            header: chunks[0],
            list: chunks[1],
            show_more: chunks[2],
            status: chunks[3],
        }
    }

    /// The list's area inside its border.
    pub fn list_inner(&self) -> Rect {
        Rect {
            x: self.list.x.saturating_add(1),
            y: self.list.y.saturating_add(1),
            width: self.list.width.saturating_sub(2),
            height: self.list.height.saturating_sub(2),
        }
    }

    /// How many cards fit in the list at once.
    pub fn visible_cards(&self) -> usize {
        (self.list_inner().height / CARD_ROWS).max(1) as usize
    }
}

/// What a mouse press at a screen position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A card slot in the list, counted from the top of the whole list.
    ListSlot(usize),
    ShowMore,
    Outside,
}

pub fn hit_test(layout: &PageLayout, scroll: usize, column: u16, row: u16) -> Hit {
    let inner = layout.list_inner();
    let inside = |r: Rect| {
        column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
    };
    if inside(inner) {
        Hit::ListSlot(scroll + ((row - inner.y) / CARD_ROWS) as usize)
    } else if inside(layout.show_more) {
        Hit::ShowMore
    } else {
        Hit::Outside
    }
}

/// Top-level render dispatch.
pub fn render(screen: &Screen, frame: &mut Frame) {
    let area = frame.area();
    let base = Style::default()
        .fg(screen.palette.color_light.into())
        .bg(screen.palette.color_dark.into());
    frame.render_widget(Block::default().style(base), area);

    list::render(screen, frame, &PageLayout::new(area));

    for kind in OverlayKind::ALL {
        if !screen.overlays.is_open(kind) {
            continue;
        }
        match kind {
            OverlayKind::Search => search::render(screen, frame),
            OverlayKind::Settings => settings::render(screen, frame),
            OverlayKind::Detail => detail::render(screen, frame),
        }
    }

    // Render help overlay on top if active
    if screen.show_help {
        help::render(screen, frame);
    }
}

/// Create a centered rectangle using percentage of parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Truncate a string to `max_width` display columns, adding "…" if truncated.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if unicode_width::UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut result = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        result.push(c);
    }
    result.push('…');
    result
}
