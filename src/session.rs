use crate::catalog::Catalog;
use crate::detail::{self, PathNode};
use crate::filter::{self, FilterCriteria};
use crate::overlay::{FocusTarget, OverlayKind, Overlays};
use crate::pagination::Pagination;
use crate::render::{self, RenderOp, SelectTarget};
use crate::theme::Theme;

/// User actions the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SearchCancel,
    SettingsCancel,
    HeaderSearch,
    HeaderSettings,
    ListClose,
    SubmitSettings { theme: Theme },
    SubmitSearch { criteria: FilterCriteria },
    ShowMore,
    ListClick { path: Vec<PathNode> },
}

/// Everything a page view keeps between events.
pub struct Session {
    catalog: Catalog,
    pages: Pagination,
    overlays: Overlays,
    theme: Theme,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        let pages = Pagination::new(catalog.books().to_vec(), catalog.books_per_page());
        Self {
            catalog,
            pages,
            overlays: Overlays::default(),
            theme: Theme::Day,
        }
    }

    #[cfg(test)]
    pub fn pages(&self) -> &Pagination {
        &self.pages
    }

    #[cfg(test)]
    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    #[cfg(test)]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// One-time initial render: dropdowns, theme, first page, button.
    pub fn init(&mut self, theme: Theme) -> Vec<RenderOp> {
        tracing::info!(
            books = self.catalog.books().len(),
            books_per_page = self.catalog.books_per_page(),
            theme = %theme,
            "initial render"
        );
        vec![
            RenderOp::PopulateOptions {
                target: SelectTarget::Genres,
                options: render::create_options(self.catalog.genres(), "All Genres"),
            },
            RenderOp::PopulateOptions {
                target: SelectTarget::Authors,
                options: render::create_options(self.catalog.authors(), "All Authors"),
            },
            self.apply_theme(theme),
            self.pages.render_first_page(),
            self.pages.update_show_more_button(),
        ]
    }

    pub fn handle(&mut self, event: Event) -> Vec<RenderOp> {
        tracing::debug!(?event, "handling event");
        match event {
            Event::SearchCancel => self.close(OverlayKind::Search),
            Event::SettingsCancel => self.close(OverlayKind::Settings),
            Event::ListClose => self.close(OverlayKind::Detail),
            Event::HeaderSearch => self.open(OverlayKind::Search, Some(FocusTarget::SearchTitle)),
            Event::HeaderSettings => self.open(OverlayKind::Settings, None),
            Event::SubmitSettings { theme } => {
                let mut ops = vec![self.apply_theme(theme)];
                ops.extend(self.close(OverlayKind::Settings));
                ops
            }
            Event::SubmitSearch { criteria } => self.submit_search(&criteria),
            Event::ShowMore => self.show_more(),
            Event::ListClick { path } => self.list_click(&path),
        }
    }

    fn open(&mut self, kind: OverlayKind, focus: Option<FocusTarget>) -> Vec<RenderOp> {
        let focus = self.overlays.open(kind, focus);
        vec![RenderOp::OpenOverlay { kind, focus }]
    }

    fn close(&mut self, kind: OverlayKind) -> Vec<RenderOp> {
        self.overlays.close(kind);
        vec![RenderOp::CloseOverlay(kind)]
    }

    fn apply_theme(&mut self, theme: Theme) -> RenderOp {
        tracing::debug!(from = %self.theme, to = %theme, "theme applied");
        self.theme = theme;
        RenderOp::SetPalette(theme.palette())
    }

    fn submit_search(&mut self, criteria: &FilterCriteria) -> Vec<RenderOp> {
        let matches = filter::apply_search_filters(self.catalog.books(), criteria);
        tracing::info!(
            title = %criteria.title,
            author = %criteria.author,
            genre = %criteria.genre,
            unrestricted = criteria.is_unrestricted(),
            matches = matches.len(),
            "search submitted"
        );
        self.pages.reset(matches);

        let mut ops = vec![
            RenderOp::SetListMessage(self.pages.matches().is_empty()),
            RenderOp::ClearList,
            self.pages.render_first_page(),
            self.pages.update_show_more_button(),
            RenderOp::ScrollToTop,
        ];
        ops.extend(self.close(OverlayKind::Search));
        ops
    }

    fn show_more(&mut self) -> Vec<RenderOp> {
        let ops = vec![
            self.pages.render_next_page(),
            self.pages.update_show_more_button(),
        ];
        tracing::debug!(
            page = self.pages.page(),
            shown = self.pages.rendered_count(),
            remaining = self.pages.remaining(),
            "next page rendered"
        );
        ops
    }

    fn list_click(&mut self, path: &[PathNode]) -> Vec<RenderOp> {
        let Some(view) = detail::handle_list_click(&self.catalog, path) else {
            return Vec::new();
        };
        let mut ops = self.open(OverlayKind::Detail, None);
        ops.push(RenderOp::ShowDetail(view));
        ops
    }
}
