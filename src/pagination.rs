use crate::catalog::Book;
use crate::render::{self, RenderOp};

/// Current match set plus how many pages of it have been rendered.
#[derive(Debug, Clone)]
pub struct Pagination {
    matches: Vec<Book>,
    page: usize,
    page_size: usize,
}

impl Pagination {
    pub fn new(matches: Vec<Book>, page_size: usize) -> Self {
        Self {
            matches,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn matches(&self) -> &[Book] {
        &self.matches
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Start over with a new match set.
    pub fn reset(&mut self, matches: Vec<Book>) {
        self.matches = matches;
        self.page = 1;
    }

    fn slice(&self, start: usize, end: usize) -> &[Book] {
        let len = self.matches.len();
        &self.matches[start.min(len)..end.min(len)]
    }

    pub fn first_page(&self) -> &[Book] {
        self.slice(0, self.page_size)
    }

    /// Hand out the slice after the rendered pages and advance the cursor.
    pub fn next_page(&mut self) -> &[Book] {
        let start = self.handed_out();
        self.page = self.page.saturating_add(1);
        self.slice(start, start.saturating_add(self.page_size))
    }

    /// Slots covered by the pages handed out so far, saturating for huge page sizes.
    fn handed_out(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// Books not yet rendered. Negative once the last page overshoots.
    pub fn remaining(&self) -> i64 {
        let remaining = self.matches.len() as i128 - self.handed_out() as i128;
        i64::try_from(remaining).unwrap_or(i64::MIN)
    }

    /// Number of previews on screen after the pages handed out so far.
    pub fn rendered_count(&self) -> usize {
        self.handed_out().min(self.matches.len())
    }

    pub fn render_first_page(&self) -> RenderOp {
        render::create_book_previews(self.first_page())
    }

    pub fn render_next_page(&mut self) -> RenderOp {
        render::create_book_previews(self.next_page())
    }

    pub fn update_show_more_button(&self) -> RenderOp {
        let remaining = self.remaining();
        RenderOp::SetShowMore {
            remaining,
            disabled: remaining <= 0,
        }
    }
}
