use crate::catalog::{Book, Catalog};
use crate::render::DetailView;

const UNKNOWN_AUTHOR: &str = "Unknown author";

/// One element on a click's propagation path, innermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathNode {
    /// The `preview` data marker: the id of the book a card shows.
    pub preview: Option<String>,
}

impl PathNode {
    pub fn preview(id: impl Into<String>) -> Self {
        Self {
            preview: Some(id.into()),
        }
    }

    /// A node without a marker, e.g. the list container.
    pub fn plain() -> Self {
        Self::default()
    }
}

/// Nearest node on the path carrying a non-empty preview marker.
pub fn find_preview_marker(path: &[PathNode]) -> Option<&str> {
    path.iter()
        .filter_map(|node| node.preview.as_deref())
        .find(|id| !id.is_empty())
}

pub fn detail_view(catalog: &Catalog, book: &Book) -> DetailView {
    let author = catalog
        .author_name(&book.author)
        .unwrap_or(UNKNOWN_AUTHOR);
    DetailView {
        blur_image: book.image.clone(),
        image: book.image.clone(),
        title: book.title.clone(),
        subtitle: format!("{} ({})", author, book.year()),
        description: book.description.clone(),
    }
}

/// Resolve a click inside the list to the detail content of the clicked book.
/// Clicks outside any card, or on a card whose id is unknown, yield nothing.
pub fn handle_list_click(catalog: &Catalog, path: &[PathNode]) -> Option<DetailView> {
    let id = find_preview_marker(path)?;
    let book = catalog.find(id)?;
    Some(detail_view(catalog, book))
}
