use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four collections exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Posts,
    Comments,
    Albums,
    Photos,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Posts,
        ResourceKind::Comments,
        ResourceKind::Albums,
        ResourceKind::Photos,
    ];

    /// Path segment under the API base URL, also used in error messages.
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Posts => "posts",
            ResourceKind::Comments => "comments",
            ResourceKind::Albums => "albums",
            ResourceKind::Photos => "photos",
        }
    }

    /// Heading shown above the table.
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Posts => "Posts:",
            ResourceKind::Comments => "Comments:",
            ResourceKind::Albums => "Albums:",
            ResourceKind::Photos => "Photos:",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    pub title: String,
    pub body: String,
}

impl Post {
    /// Body length in characters, the quantity the length filter bounds.
    pub fn body_len(&self) -> usize {
        self.body.chars().count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: u64,
    pub album_id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub thumbnail_url: String,
}

/// A successfully decoded response, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dataset {
    Posts(Vec<Post>),
    Comments(Vec<Comment>),
    Albums(Vec<Album>),
    Photos(Vec<Photo>),
}

impl Dataset {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Dataset::Posts(_) => ResourceKind::Posts,
            Dataset::Comments(_) => ResourceKind::Comments,
            Dataset::Albums(_) => ResourceKind::Albums,
            Dataset::Photos(_) => ResourceKind::Photos,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Dataset::Posts(v) => v.len(),
            Dataset::Comments(v) => v.len(),
            Dataset::Albums(v) => v.len(),
            Dataset::Photos(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// User-controlled request and filter parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchParams {
    pub limit: u32,
    pub min_chars: usize,
    pub max_chars: usize,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            limit: 10,
            min_chars: 100,
            max_chars: 500,
        }
    }
}
