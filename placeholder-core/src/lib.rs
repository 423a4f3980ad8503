pub mod config;
pub mod debounce;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod models;
pub mod notify;
pub mod render;
pub mod session;
pub mod state;

pub use config::{ApiConfig, AppConfig, UiConfig};
pub use debounce::Debouncer;
pub use error::{ConfigError, FetchError};
pub use fetcher::Fetcher;
pub use filter::filter_posts;
pub use models::{Album, Comment, Dataset, FetchParams, Photo, Post, ResourceKind};
pub use notify::{Notification, NotificationSink, Toasts};
pub use render::{render, Cell, TableView};
pub use session::Session;
pub use state::{Action, Effect, FetchStatus, Phase, Slot, ViewState};
