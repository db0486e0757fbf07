use super::{PageLayout, truncate_str};
use crate::screen::Screen;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub fn render(screen: &Screen, frame: &mut Frame, layout: &PageLayout) {
    let fg: Color = screen.palette.color_light.into();
    let muted = Style::default().fg(fg).add_modifier(Modifier::DIM);

    // ── Header ──
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Book Explorer",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   [{} shown]", screen.previews.len()),
            muted,
        ),
    ]))
    .alignment(Alignment::Left)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(muted)
            .title_bottom(
                Line::from(vec![
                    Span::styled(" / ", Style::default().fg(Color::Yellow)),
                    Span::raw("Search "),
                    Span::styled(" , ", Style::default().fg(Color::Yellow)),
                    Span::raw("Settings "),
                ])
                .alignment(Alignment::Right),
            ),
    );
    frame.render_widget(header, layout.header);

    // ── List ──
    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(muted)
        .title(" Books ");

    if screen.list_message {
        let message = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No results found. Your filters might be too narrow.",
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(list_block);
        frame.render_widget(message, layout.list);
    } else {
        let width = layout.list_inner().width as usize;
        let items: Vec<ListItem> = screen
            .previews
            .iter()
            .map(|preview| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        truncate_str(&preview.title, width.saturating_sub(3)),
                        Style::default().fg(fg).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        truncate_str(screen.author_label(&preview.author), width.saturating_sub(3)),
                        muted,
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(list_block)
            .highlight_style(Style::default().fg(Color::Cyan))
            .highlight_symbol("▸ ");

        let mut state = ListState::default()
            .with_offset(screen.scroll)
            .with_selected((!screen.previews.is_empty()).then_some(screen.selected));
        frame.render_stateful_widget(list, layout.list, &mut state);
    }

    // ── Show more ──
    let button_style = if screen.show_more.disabled {
        muted
    } else {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(format!("[ {} ]", screen.show_more.label()))
        .style(button_style)
        .alignment(Alignment::Center);
    frame.render_widget(button, layout.show_more);

    // ── Status bar ──
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let status_line = Line::from(vec![
        Span::styled(" ↑↓", key),
        Span::raw(" Navigate  "),
        Span::styled("Enter", key),
        Span::raw(" Detail  "),
        Span::styled("m", key),
        Span::raw(" More  "),
        Span::styled("?", key),
        Span::raw(" Help  "),
        Span::styled("q", key),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(status_line), layout.status);
}
