use super::centered_rect;
use crate::screen::Screen;
use crate::theme::Theme;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render(screen: &Screen, frame: &mut Frame) {
    let area = centered_rect(40, 30, frame.area());
    frame.render_widget(Clear, area);

    let choice = |theme: Theme| {
        if screen.settings_theme == theme {
            Span::styled(
                format!("[{}]", theme),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", theme), Style::default().fg(Color::DarkGray))
        }
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Theme  "),
            choice(Theme::Day),
            Span::raw("  "),
            choice(Theme::Night),
        ]),
    ];

    let settings = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Settings ")
            .title_bottom(
                Line::from(" ←→ choose  Enter save  Esc cancel ")
                    .style(Style::default().fg(Color::DarkGray)),
            )
            .style(
                Style::default()
                    .fg(screen.palette.color_light.into())
                    .bg(screen.palette.color_dark.into()),
            ),
    );
    frame.render_widget(settings, area);
}
