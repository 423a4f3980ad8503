//! View state and its reducer.
//!
//! `ViewState::reduce` is the only way state changes. It performs no I/O:
//! requests and notifications come back as [`Effect`] values for the caller
//! to execute.

use tracing::debug;

use crate::filter::filter_posts;
use crate::models::{Album, Comment, Dataset, FetchParams, Photo, Post, ResourceKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Last good collection of one kind plus the bookkeeping of its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<T> {
    items: Vec<T>,
    status: FetchStatus,
    latest_token: u64,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: FetchStatus::Idle,
            latest_token: 0,
        }
    }
}

impl<T> Slot<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn latest_token(&self) -> u64 {
        self.latest_token
    }

    fn issue(&mut self) -> u64 {
        self.latest_token += 1;
        self.status = FetchStatus::Loading;
        self.latest_token
    }

    fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.status = FetchStatus::Loaded;
    }

    fn fail(&mut self, message: String) {
        self.status = FetchStatus::Failed(message);
    }
}

/// Overall phase of the active view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading(ResourceKind),
    Loaded(ResourceKind),
    Error(ResourceKind, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectView(ResourceKind),
    /// Selection that also commits a limit the user has not finished editing.
    SelectViewWithLimit {
        kind: ResourceKind,
        limit: u32,
    },
    ClearView,
    SetLimit(u32),
    SetMinChars(usize),
    SetMaxChars(usize),
    FetchSucceeded {
        token: u64,
        dataset: Dataset,
    },
    FetchFailed {
        kind: ResourceKind,
        token: u64,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch {
        kind: ResourceKind,
        token: u64,
        limit: u32,
    },
    NotifyError(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    active: Option<ResourceKind>,
    params: FetchParams,
    posts: Slot<Post>,
    comments: Slot<Comment>,
    albums: Slot<Album>,
    photos: Slot<Photo>,
}

impl ViewState {
    pub fn new(params: FetchParams) -> Self {
        Self {
            params: FetchParams {
                limit: params.limit.max(1),
                ..params
            },
            ..Self::default()
        }
    }

    pub fn active(&self) -> Option<ResourceKind> {
        self.active
    }

    pub fn params(&self) -> FetchParams {
        self.params
    }

    /// Raw posts from the last successful fetch, before length filtering.
    pub fn posts(&self) -> &Slot<Post> {
        &self.posts
    }

    pub fn comments(&self) -> &Slot<Comment> {
        &self.comments
    }

    pub fn albums(&self) -> &Slot<Album> {
        &self.albums
    }

    pub fn photos(&self) -> &Slot<Photo> {
        &self.photos
    }

    /// Posts that pass the current length bounds.
    pub fn visible_posts(&self) -> Vec<Post> {
        filter_posts(
            self.posts.items(),
            self.params.min_chars,
            self.params.max_chars,
        )
    }

    pub fn status(&self, kind: ResourceKind) -> &FetchStatus {
        match kind {
            ResourceKind::Posts => self.posts.status(),
            ResourceKind::Comments => self.comments.status(),
            ResourceKind::Albums => self.albums.status(),
            ResourceKind::Photos => self.photos.status(),
        }
    }

    pub fn latest_token(&self, kind: ResourceKind) -> u64 {
        match kind {
            ResourceKind::Posts => self.posts.latest_token(),
            ResourceKind::Comments => self.comments.latest_token(),
            ResourceKind::Albums => self.albums.latest_token(),
            ResourceKind::Photos => self.photos.latest_token(),
        }
    }

    pub fn phase(&self) -> Phase {
        let Some(kind) = self.active else {
            return Phase::Idle;
        };
        match self.status(kind) {
            FetchStatus::Idle => Phase::Idle,
            FetchStatus::Loading => Phase::Loading(kind),
            FetchStatus::Loaded => Phase::Loaded(kind),
            FetchStatus::Failed(message) => Phase::Error(kind, message.clone()),
        }
    }

    /// Applies one action and returns the next state with the effects to run.
    pub fn reduce(mut self, action: Action) -> (Self, Vec<Effect>) {
        let effects = match action {
            Action::SelectView(kind) => {
                self.active = Some(kind);
                vec![self.begin_fetch(kind)]
            }
            Action::SelectViewWithLimit { kind, limit } => {
                self.params.limit = limit.max(1);
                self.active = Some(kind);
                vec![self.begin_fetch(kind)]
            }
            Action::ClearView => {
                self.active = None;
                Vec::new()
            }
            Action::SetLimit(limit) => {
                let limit = limit.max(1);
                if limit == self.params.limit {
                    Vec::new()
                } else {
                    self.params.limit = limit;
                    match self.active {
                        Some(kind) => vec![self.begin_fetch(kind)],
                        None => Vec::new(),
                    }
                }
            }
            Action::SetMinChars(min_chars) => {
                self.params.min_chars = min_chars;
                Vec::new()
            }
            Action::SetMaxChars(max_chars) => {
                self.params.max_chars = max_chars;
                Vec::new()
            }
            Action::FetchSucceeded { token, dataset } => {
                let kind = dataset.kind();
                if self.latest_token(kind) != token {
                    debug!(%kind, token, latest = self.latest_token(kind), "discarding stale response");
                } else {
                    self.apply_dataset(dataset);
                }
                Vec::new()
            }
            Action::FetchFailed {
                kind,
                token,
                message,
            } => {
                if self.latest_token(kind) != token {
                    debug!(%kind, token, latest = self.latest_token(kind), "discarding stale failure");
                    Vec::new()
                } else {
                    self.fail(kind, message.clone());
                    vec![Effect::NotifyError(message)]
                }
            }
        };
        (self, effects)
    }

    fn begin_fetch(&mut self, kind: ResourceKind) -> Effect {
        let token = match kind {
            ResourceKind::Posts => self.posts.issue(),
            ResourceKind::Comments => self.comments.issue(),
            ResourceKind::Albums => self.albums.issue(),
            ResourceKind::Photos => self.photos.issue(),
        };
        Effect::Fetch {
            kind,
            token,
            limit: self.params.limit,
        }
    }

    fn apply_dataset(&mut self, dataset: Dataset) {
        match dataset {
            Dataset::Posts(items) => self.posts.replace(items),
            Dataset::Comments(items) => self.comments.replace(items),
            Dataset::Albums(items) => self.albums.replace(items),
            Dataset::Photos(items) => self.photos.replace(items),
        }
    }

    fn fail(&mut self, kind: ResourceKind, message: String) {
        match kind {
            ResourceKind::Posts => self.posts.fail(message),
            ResourceKind::Comments => self.comments.fail(message),
            ResourceKind::Albums => self.albums.fail(message),
            ResourceKind::Photos => self.photos.fail(message),
        }
    }
}
