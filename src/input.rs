use crate::overlay::OverlayKind;
use crate::screen::{Screen, SearchField};
use crate::session::Event;
use crate::theme::Theme;
use crate::ui::{Hit, PageLayout, hit_test};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map a key press to a page event. Keys that only move the selection or
/// edit a form update `screen` directly and yield no event.
pub fn handle_key(screen: &mut Screen, key: KeyEvent, layout: &PageLayout) -> Option<Event> {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        screen.should_quit = true;
        return None;
    }

    // If help is showing, any key closes it
    if screen.show_help {
        screen.show_help = false;
        return None;
    }

    match screen.overlays.topmost() {
        Some(OverlayKind::Detail) => handle_detail_key(key),
        Some(OverlayKind::Settings) => handle_settings_key(screen, key),
        Some(OverlayKind::Search) => handle_search_key(screen, key),
        None => handle_list_key(screen, key, layout),
    }
}

fn handle_list_key(screen: &mut Screen, key: KeyEvent, layout: &PageLayout) -> Option<Event> {
    match key.code {
        KeyCode::Char('q') => screen.should_quit = true,
        KeyCode::Char('?') => screen.show_help = true,
        KeyCode::Char('/') | KeyCode::Char('s') => return Some(Event::HeaderSearch),
        KeyCode::Char(',') | KeyCode::Char('t') => return Some(Event::HeaderSettings),
        KeyCode::Char('m') | KeyCode::Char('n') => {
            // A disabled button ignores clicks.
            if !screen.show_more.disabled {
                return Some(Event::ShowMore);
            }
        }
        KeyCode::Enter => {
            return Some(Event::ListClick {
                path: screen.click_path(screen.selected),
            });
        }
        KeyCode::Down | KeyCode::Char('j') => screen.select_next(),
        KeyCode::Up | KeyCode::Char('k') => screen.select_prev(),
        KeyCode::PageDown => screen.select_page_down(layout.visible_cards()),
        KeyCode::PageUp => screen.select_page_up(layout.visible_cards()),
        KeyCode::Char('g') | KeyCode::Home => screen.select_first(),
        KeyCode::Char('G') | KeyCode::End => screen.select_last(),
        _ => {}
    }
    None
}

fn handle_search_key(screen: &mut Screen, key: KeyEvent) -> Option<Event> {
    let on_title = screen.search_form.field == SearchField::Title;
    let plain = !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Esc => return Some(Event::SearchCancel),
        KeyCode::Enter => {
            return Some(Event::SubmitSearch {
                criteria: screen.search_criteria(),
            });
        }
        KeyCode::Tab => screen.search_form.field = screen.search_form.field.next(),
        KeyCode::BackTab => screen.search_form.field = screen.search_form.field.prev(),
        KeyCode::Left if !on_title => screen.cycle_option(-1),
        KeyCode::Right if !on_title => screen.cycle_option(1),
        KeyCode::Backspace if on_title => {
            screen.search_form.title.pop();
        }
        KeyCode::Char(c) if on_title && plain => screen.search_form.title.push(c),
        _ => {}
    }
    None
}

fn handle_settings_key(screen: &mut Screen, key: KeyEvent) -> Option<Event> {
    match key.code {
        KeyCode::Esc => return Some(Event::SettingsCancel),
        KeyCode::Enter => {
            return Some(Event::SubmitSettings {
                theme: screen.settings_theme,
            });
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
            screen.settings_theme = screen.settings_theme.toggled();
        }
        KeyCode::Char('d') => screen.settings_theme = Theme::Day,
        KeyCode::Char('n') => screen.settings_theme = Theme::Night,
        _ => {}
    }
    None
}

fn handle_detail_key(key: KeyEvent) -> Option<Event> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Some(Event::ListClose),
        _ => None,
    }
}

/// Map a mouse action on the list page to an event. Overlays are modal, so
/// the page ignores the mouse while one is open.
pub fn handle_mouse(screen: &mut Screen, mouse: MouseEvent, layout: &PageLayout) -> Option<Event> {
    if screen.show_help || screen.overlays.topmost().is_some() {
        return None;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match hit_test(layout, screen.scroll, mouse.column, mouse.row) {
                Hit::ListSlot(index) => {
                    if index < screen.previews.len() {
                        screen.selected = index;
                    }
                    Some(Event::ListClick {
                        path: screen.click_path(index),
                    })
                }
                Hit::ShowMore if !screen.show_more.disabled => Some(Event::ShowMore),
                _ => None,
            }
        }
        MouseEventKind::ScrollDown => {
            screen.select_next();
            None
        }
        MouseEventKind::ScrollUp => {
            screen.select_prev();
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::small_catalog;
    use crate::detail::PathNode;
    use crate::filter::Selection;
    use crate::session::Session;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    struct Harness {
        session: Session,
        screen: Screen,
        layout: PageLayout,
    }

    impl Harness {
        fn new() -> Self {
            let mut session = Session::new(small_catalog());
            let mut screen = Screen::new();
            screen.apply_all(session.init(Theme::Day));
            Self {
                session,
                screen,
                layout: PageLayout::new(Rect::new(0, 0, 80, 24)),
            }
        }

        fn press(&mut self, code: KeyCode) -> Option<Event> {
            let event = handle_key(&mut self.screen, key(code), &self.layout);
            if let Some(event) = event.clone() {
                self.screen.apply_all(self.session.handle(event));
            }
            event
        }

        fn type_str(&mut self, text: &str) {
            for c in text.chars() {
                self.press(KeyCode::Char(c));
            }
        }
    }

    #[test]
    fn test_ctrl_c_quits_from_overlay() {
        let mut h = Harness::new();
        h.press(KeyCode::Char('/'));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut h.screen, ctrl_c, &h.layout), None);
        assert!(h.screen.should_quit);
    }

    #[test]
    fn test_search_flow_by_keyboard() {
        let mut h = Harness::new();
        assert_eq!(h.press(KeyCode::Char('/')), Some(Event::HeaderSearch));
        assert!(h.screen.overlays.is_open(OverlayKind::Search));

        // 'q' and 'm' are text while the title field has focus.
        h.type_str("emma");
        assert_eq!(h.screen.search_form.title, "emma");
        h.press(KeyCode::Backspace);
        h.type_str("a");
        h.press(KeyCode::Tab);
        h.press(KeyCode::Right);

        let event = h.press(KeyCode::Enter);
        match event {
            Some(Event::SubmitSearch { criteria }) => {
                assert_eq!(criteria.title, "emma");
                assert_eq!(criteria.author, Selection::Id("a1".to_string()));
                assert_eq!(criteria.genre, Selection::Any);
            }
            other => panic!("expected search submit, got {:?}", other),
        }
        assert!(!h.screen.overlays.is_open(OverlayKind::Search));
        assert_eq!(h.screen.previews.len(), 1);
        assert_eq!(h.screen.previews[0].id, "b3");
    }

    #[test]
    fn test_modified_chars_do_not_edit_title() {
        let mut h = Harness::new();
        h.press(KeyCode::Char('/'));
        h.type_str("em");
        for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT] {
            let chord = KeyEvent::new(KeyCode::Char('u'), modifiers);
            assert_eq!(handle_key(&mut h.screen, chord, &h.layout), None);
        }
        let shifted = KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT);
        handle_key(&mut h.screen, shifted, &h.layout);
        assert_eq!(h.screen.search_form.title, "emM");
    }

    #[test]
    fn test_search_cancel_keeps_list() {
        let mut h = Harness::new();
        h.press(KeyCode::Char('s'));
        h.type_str("zzz");
        assert_eq!(h.press(KeyCode::Esc), Some(Event::SearchCancel));
        assert_eq!(h.screen.previews.len(), 2);
    }

    #[test]
    fn test_show_more_key_respects_disabled_button() {
        let mut h = Harness::new();
        assert_eq!(h.press(KeyCode::Char('m')), Some(Event::ShowMore));
        assert_eq!(h.press(KeyCode::Char('m')), Some(Event::ShowMore));
        assert!(h.screen.show_more.disabled);
        assert_eq!(h.press(KeyCode::Char('m')), None);
        assert_eq!(h.screen.previews.len(), 5);
    }

    #[test]
    fn test_settings_flow() {
        let mut h = Harness::new();
        assert_eq!(h.press(KeyCode::Char(',')), Some(Event::HeaderSettings));
        h.press(KeyCode::Right);
        assert_eq!(
            h.press(KeyCode::Enter),
            Some(Event::SubmitSettings { theme: Theme::Night })
        );
        assert_eq!(h.session.theme(), Theme::Night);
        assert!(!h.screen.overlays.is_open(OverlayKind::Settings));

        h.press(KeyCode::Char('t'));
        h.press(KeyCode::Char('n'));
        assert_eq!(h.press(KeyCode::Esc), Some(Event::SettingsCancel));
        assert_eq!(h.session.theme(), Theme::Night);
    }

    #[test]
    fn test_enter_opens_selected_detail_and_esc_closes() {
        let mut h = Harness::new();
        h.press(KeyCode::Down);
        assert_eq!(
            h.press(KeyCode::Enter),
            Some(Event::ListClick {
                path: vec![PathNode::preview("b2"), PathNode::plain()],
            })
        );
        assert!(h.screen.overlays.is_open(OverlayKind::Detail));
        assert_eq!(h.press(KeyCode::Esc), Some(Event::ListClose));
        assert!(!h.screen.overlays.is_open(OverlayKind::Detail));
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut h = Harness::new();
        h.press(KeyCode::Char('?'));
        assert!(h.screen.show_help);
        assert_eq!(h.press(KeyCode::Char('/')), None);
        assert!(!h.screen.show_help);
        assert!(!h.screen.overlays.is_open(OverlayKind::Search));
    }

    #[test]
    fn test_mouse_click_on_card() {
        let mut h = Harness::new();
        // Second card occupies rows 6 and 7.
        let event = handle_mouse(&mut h.screen, click(10, 7), &h.layout);
        assert_eq!(
            event,
            Some(Event::ListClick {
                path: vec![PathNode::preview("b2"), PathNode::plain()],
            })
        );
        assert_eq!(h.screen.selected, 1);
    }

    #[test]
    fn test_mouse_click_below_cards_and_on_button() {
        let mut h = Harness::new();
        let event = handle_mouse(&mut h.screen, click(10, 15), &h.layout);
        assert_eq!(event, Some(Event::ListClick { path: vec![PathNode::plain()] }));
        assert!(h.session.handle(event.unwrap()).is_empty());

        assert_eq!(
            handle_mouse(&mut h.screen, click(40, 22), &h.layout),
            Some(Event::ShowMore)
        );
    }

    #[test]
    fn test_mouse_ignored_under_overlay() {
        let mut h = Harness::new();
        h.press(KeyCode::Char('/'));
        assert_eq!(handle_mouse(&mut h.screen, click(10, 4), &h.layout), None);
    }
}
