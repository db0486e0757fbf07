use super::centered_rect;
use crate::screen::Screen;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(screen: &Screen, frame: &mut Frame) {
    let detail = match &screen.detail {
        Some(d) => d,
        None => return,
    };

    let area = centered_rect(80, 70, frame.area());
    frame.render_widget(Clear, area);

    let base = Style::default()
        .fg(screen.palette.color_light.into())
        .bg(screen.palette.color_dark.into());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Detail ")
        .title_bottom(Line::from(" Esc close ").style(Style::default().fg(Color::DarkGray)))
        .style(base);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Layout: title + subtitle(3) + description(min) + image(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            detail.title.as_str(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            detail.subtitle.as_str(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(heading, chunks[0]);

    let description = Paragraph::new(detail.description.as_str()).wrap(Wrap { trim: false });
    frame.render_widget(description, chunks[1]);

    // Terminals cannot show the cover itself, so the image line links to it.
    let image = Paragraph::new(Line::from(vec![
        Span::styled("Cover: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            super::truncate_str(&detail.image, (chunks[2].width as usize).saturating_sub(7)),
            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        ),
    ]));
    frame.render_widget(image, chunks[2]);
}
