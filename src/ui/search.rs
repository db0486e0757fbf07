use super::centered_rect;
use crate::render::SelectOption;
use crate::screen::{Screen, SearchField};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render(screen: &Screen, frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let base = Style::default()
        .fg(screen.palette.color_light.into())
        .bg(screen.palette.color_dark.into());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Search ")
        .title_bottom(
            Line::from(" Tab next field  ←→ choose  Enter search  Esc cancel ")
                .style(Style::default().fg(Color::DarkGray)),
        )
        .style(base);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &screen.search_form;
    let field_block = |title: &'static str, field: SearchField| {
        let style = if form.field == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(format!(" {} ", title))
    };

    let title = Paragraph::new(form.title.as_str()).block(field_block("Title", SearchField::Title));
    frame.render_widget(title, rows[0]);

    let author = Paragraph::new(select_line(&screen.author_options, form.author))
        .block(field_block("Author", SearchField::Author));
    frame.render_widget(author, rows[1]);

    let genre = Paragraph::new(select_line(&screen.genre_options, form.genre))
        .block(field_block("Genre", SearchField::Genre));
    frame.render_widget(genre, rows[2]);

    if form.field == SearchField::Title {
        let cursor_x = rows[0].x + 1 + unicode_width::UnicodeWidthStr::width(form.title.as_str()) as u16;
        frame.set_cursor_position((cursor_x.min(rows[0].right().saturating_sub(2)), rows[0].y + 1));
    }
}

fn select_line(options: &[SelectOption], selected: usize) -> Line<'_> {
    let label = options
        .get(selected)
        .map(|o| o.label.as_str())
        .unwrap_or("");
    Line::from(vec![
        Span::styled("‹ ", Style::default().fg(Color::DarkGray)),
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(" ›", Style::default().fg(Color::DarkGray)),
    ])
}
