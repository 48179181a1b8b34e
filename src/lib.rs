pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;

pub use client::BookmarkClient;
pub use config::Config;
pub use error::ClientError;
pub use models::{Bookmark, BookmarkEdit, BookmarkId};
