use crate::models::ResourceKind;
use crate::state::{FetchStatus, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Image { url: String, alt: String },
}

impl Cell {
    /// Text a reader sees in the cell; images show their alt text.
    pub fn text(&self) -> &str {
        match self {
            Cell::Text(text) => text,
            Cell::Image { alt, .. } => alt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub kind: ResourceKind,
    pub label: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<Cell>>,
    pub status: FetchStatus,
}

impl TableView {
    pub fn contains_text(&self, needle: &str) -> bool {
        self.rows
            .iter()
            .flatten()
            .any(|cell| cell.text().contains(needle))
    }
}

pub fn headers(kind: ResourceKind) -> &'static [&'static str] {
    match kind {
        ResourceKind::Posts => &["ID", "Title", "Body"],
        ResourceKind::Comments => &["ID", "Post ID", "Name", "Email", "Body"],
        ResourceKind::Albums => &["ID", "User ID", "Title"],
        ResourceKind::Photos => &["ID", "Album ID", "Title", "Photo"],
    }
}

fn text(value: impl ToString) -> Cell {
    Cell::Text(value.to_string())
}

/// Table for the active view, or `None` when nothing is selected.
pub fn render(state: &ViewState) -> Option<TableView> {
    let kind = state.active()?;
    let rows = match kind {
        ResourceKind::Posts => state
            .visible_posts()
            .into_iter()
            .map(|post| vec![text(post.id), text(post.title), text(post.body)])
            .collect(),
        ResourceKind::Comments => state
            .comments()
            .items()
            .iter()
            .map(|comment| {
                vec![
                    text(comment.id),
                    text(comment.post_id),
                    text(&comment.name),
                    text(&comment.email),
                    text(&comment.body),
                ]
            })
            .collect(),
        ResourceKind::Albums => state
            .albums()
            .items()
            .iter()
            .map(|album| vec![text(album.id), text(album.user_id), text(&album.title)])
            .collect(),
        ResourceKind::Photos => state
            .photos()
            .items()
            .iter()
            .map(|photo| {
                vec![
                    text(photo.id),
                    text(photo.album_id),
                    text(&photo.title),
                    Cell::Image {
                        url: photo.thumbnail_url.clone(),
                        alt: format!("Photo {}", photo.id),
                    },
                ]
            })
            .collect(),
    };

    Some(TableView {
        kind,
        label: kind.label(),
        headers: headers(kind),
        rows,
        status: state.status(kind).clone(),
    })
}
