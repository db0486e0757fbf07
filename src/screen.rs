use crate::detail::PathNode;
use crate::filter::FilterCriteria;
use crate::overlay::{FocusTarget, OverlayKind, Overlays};
use crate::render::{self, DetailView, PreviewProps, RenderOp, SelectOption, SelectTarget};
use crate::theme::{Palette, Theme};

/// Terminal rows taken by one preview card.
pub const CARD_ROWS: u16 = 2;

/// Which control of the search form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
}

impl SearchField {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Genre,
            Self::Genre => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Author => Self::Title,
            Self::Genre => Self::Author,
        }
    }
}

/// Edit state of the search form. Dropdown positions index into the
/// screen's option lists; index 0 is the "any" sentinel.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub title: String,
    pub author: usize,
    pub genre: usize,
    pub field: SearchField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowMoreButton {
    pub remaining: i64,
    pub disabled: bool,
}

impl ShowMoreButton {
    pub fn label(&self) -> String {
        render::show_more_label(self.remaining)
    }
}

/// In-memory model of what is on screen. Render instructions are the only
/// way the session changes it; the input layer only touches form state,
/// list selection and help.
pub struct Screen {
    pub previews: Vec<PreviewProps>,
    pub genre_options: Vec<SelectOption>,
    pub author_options: Vec<SelectOption>,
    pub show_more: ShowMoreButton,
    pub list_message: bool,
    pub palette: Palette,
    pub overlays: Overlays,
    pub focus: Option<FocusTarget>,
    pub detail: Option<DetailView>,

    pub selected: usize,
    pub scroll: usize,

    pub search_form: SearchForm,
    pub settings_theme: Theme,

    pub show_help: bool,
    pub should_quit: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self {
            previews: Vec::new(),
            genre_options: Vec::new(),
            author_options: Vec::new(),
            show_more: ShowMoreButton {
                remaining: 0,
                disabled: true,
            },
            list_message: false,
            palette: Palette::default(),
            overlays: Overlays::default(),
            focus: None,
            detail: None,
            selected: 0,
            scroll: 0,
            search_form: SearchForm::default(),
            settings_theme: Theme::Day,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn apply_all(&mut self, ops: Vec<RenderOp>) {
        for op in ops {
            self.apply(op);
        }
    }

    pub fn apply(&mut self, op: RenderOp) {
        match op {
            RenderOp::PopulateOptions { target, options } => match target {
                SelectTarget::Genres => self.genre_options.extend(options),
                SelectTarget::Authors => self.author_options.extend(options),
            },
            RenderOp::AppendPreviews(previews) => self.previews.extend(previews),
            RenderOp::ClearList => {
                self.previews.clear();
                self.selected = 0;
            }
            RenderOp::SetShowMore { remaining, disabled } => {
                self.show_more = ShowMoreButton { remaining, disabled };
            }
            RenderOp::SetListMessage(show) => self.list_message = show,
            RenderOp::ScrollToTop => {
                self.selected = 0;
                self.scroll = 0;
            }
            RenderOp::SetPalette(palette) => {
                self.palette = palette;
                self.settings_theme = if palette == Theme::Night.palette() {
                    Theme::Night
                } else {
                    Theme::Day
                };
            }
            RenderOp::OpenOverlay { kind, focus } => {
                self.overlays.open(kind, focus);
                if let Some(FocusTarget::SearchTitle) = focus {
                    self.search_form.field = SearchField::Title;
                }
                self.focus = focus;
            }
            RenderOp::CloseOverlay(kind) => {
                self.overlays.close(kind);
                if kind == OverlayKind::Search {
                    self.focus = None;
                }
            }
            RenderOp::ShowDetail(view) => self.detail = Some(view),
        }
    }

    /// Display name for an author id, looked up in the author dropdown.
    pub fn author_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.author_options
            .iter()
            .skip(1)
            .find(|o| o.value == id)
            .map(|o| o.label.as_str())
            .unwrap_or(id)
    }

    pub fn search_criteria(&self) -> FilterCriteria {
        let value = |options: &[SelectOption], idx: usize| {
            options
                .get(idx)
                .map(|o| o.value.clone())
                .unwrap_or_else(|| crate::filter::ANY.to_string())
        };
        FilterCriteria::from_form(
            &self.search_form.title,
            &value(&self.author_options, self.search_form.author),
            &value(&self.genre_options, self.search_form.genre),
        )
    }

    /// Step the focused dropdown by `delta`, wrapping around.
    pub fn cycle_option(&mut self, delta: isize) {
        let (len, idx) = match self.search_form.field {
            SearchField::Title => return,
            SearchField::Author => (self.author_options.len(), &mut self.search_form.author),
            SearchField::Genre => (self.genre_options.len(), &mut self.search_form.genre),
        };
        if len == 0 {
            return;
        }
        *idx = (*idx as isize + delta).rem_euclid(len as isize) as usize;
    }

    /// Propagation path of a click on the card at `index`: the card, then the list.
    pub fn click_path(&self, index: usize) -> Vec<PathNode> {
        match self.previews.get(index) {
            Some(preview) => vec![PathNode::preview(preview.id.clone()), PathNode::plain()],
            None => vec![PathNode::plain()],
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.previews.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_page_down(&mut self, rows: usize) {
        let last = self.previews.len().saturating_sub(1);
        self.selected = (self.selected + rows.max(1)).min(last);
    }

    pub fn select_page_up(&mut self, rows: usize) {
        self.selected = self.selected.saturating_sub(rows.max(1));
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.previews.len().saturating_sub(1);
    }

    /// Adjust the scroll offset so the selected card is within `visible` cards.
    pub fn ensure_visible(&mut self, visible: usize) {
        let visible = visible.max(1);
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + visible {
            self.scroll = self.selected + 1 - visible;
        }
    }
}
