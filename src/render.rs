//! Render instructions: a UI-agnostic description of every change the page
//! goes through. Handlers return them; the screen adapter applies them.

use crate::catalog::{Book, Labels};
use crate::filter::ANY;
use crate::overlay::{FocusTarget, OverlayKind};
use crate::theme::Palette;

/// The attributes a preview card is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewProps {
    /// Author id, passed through as-is.
    pub author: String,
    pub id: String,
    pub image: String,
    pub title: String,
}

impl From<&Book> for PreviewProps {
    fn from(book: &Book) -> Self {
        Self {
            author: book.author.clone(),
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// The dropdowns of the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectTarget {
    Genres,
    Authors,
}

/// Everything the detail overlay shows for one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub blur_image: String,
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    PopulateOptions {
        target: SelectTarget,
        options: Vec<SelectOption>,
    },
    /// One batched append of preview cards to the list.
    AppendPreviews(Vec<PreviewProps>),
    ClearList,
    /// `remaining` may be negative; the label clamps it at zero.
    SetShowMore { remaining: i64, disabled: bool },
    SetListMessage(bool),
    ScrollToTop,
    SetPalette(Palette),
    OpenOverlay {
        kind: OverlayKind,
        focus: Option<FocusTarget>,
    },
    CloseOverlay(OverlayKind),
    ShowDetail(DetailView),
}

/// Turn a run of books into a single batched append.
pub fn create_book_previews<'a, I>(books: I) -> RenderOp
where
    I: IntoIterator<Item = &'a Book>,
{
    RenderOp::AppendPreviews(books.into_iter().map(PreviewProps::from).collect())
}

/// Sentinel "any" option first, then one option per label in mapping order.
pub fn create_options(labels: &Labels, default_label: &str) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: ANY.to_string(),
        label: default_label.to_string(),
    })
    .chain(labels.iter().map(|(id, name)| SelectOption {
        value: id.to_string(),
        label: name.to_string(),
    }))
    .collect()
}

/// Label shown on the "show more" button.
pub fn show_more_label(remaining: i64) -> String {
    format!("Show more ({})", remaining.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::small_catalog;

    #[test]
    fn test_previews_are_one_batch_in_order() {
        let catalog = small_catalog();
        let op = create_book_previews(&catalog.books()[1..3]);
        let RenderOp::AppendPreviews(previews) = op else {
            panic!("expected a single append");
        };
        assert_eq!(previews.len(), 2);
        assert_eq!(
            previews[0],
            PreviewProps {
                author: "a2".to_string(),
                id: "b2".to_string(),
                image: "https://covers.example/b2.jpg".to_string(),
                title: "Frankenstein".to_string(),
            }
        );
        assert_eq!(previews[1].id, "b3");
    }

    #[test]
    fn test_empty_preview_batch() {
        let op = create_book_previews(std::iter::empty());
        assert_eq!(op, RenderOp::AppendPreviews(Vec::new()));
    }

    #[test]
    fn test_options_lead_with_any_sentinel() {
        let catalog = small_catalog();
        let options = create_options(catalog.genres(), "All Genres");
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["any", "g1", "g2", "g3"]);
        assert_eq!(options[0].label, "All Genres");
        assert_eq!(options[2].label, "Horror");
    }

    #[test]
    fn test_options_for_empty_mapping() {
        let options = create_options(&Labels::default(), "All Authors");
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "any");
    }

    #[test]
    fn test_show_more_label_clamps() {
        assert_eq!(show_more_label(3), "Show more (3)");
        assert_eq!(show_more_label(0), "Show more (0)");
        assert_eq!(show_more_label(-4), "Show more (0)");
    }
}
