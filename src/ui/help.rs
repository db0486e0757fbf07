use super::centered_rect;
use crate::screen::Screen;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn binding(keys: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("    {:<10}", keys), Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ])
}

pub fn render(screen: &Screen, frame: &mut Frame) {
    let area = centered_rect(70, 70, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let help_text = vec![
        Line::from(""),
        section("Global"),
        binding("?", "Toggle this help"),
        binding("q", "Quit application"),
        binding("Esc", "Close the open panel"),
        Line::from(""),
        section("Book List"),
        binding("↑/k ↓/j", "Move between books"),
        binding("g/G", "Jump to first/last book"),
        binding("Enter", "Open book detail"),
        binding("m", "Show more books"),
        binding("/", "Search by title, author or genre"),
        binding(",", "Settings (day/night theme)"),
        Line::from(""),
        section("Search"),
        binding("Tab", "Next field"),
        binding("←/→", "Change author or genre"),
        binding("Enter", "Apply filters"),
        Line::from(""),
    ];

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help: Keybindings ")
                .title_bottom(Line::from(" Press ? or Esc to close ").style(Style::default().fg(Color::DarkGray))),
        )
        .style(
            Style::default()
                .fg(screen.palette.color_light.into())
                .bg(screen.palette.color_dark.into()),
        );

    frame.render_widget(help, area);
}
