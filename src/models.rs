use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque bookmark identifier
///
/// The server decides what an id looks like. Whatever form arrives is kept
/// and sent back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookmarkId {
    Int(i64),
    Uuid(Uuid),
    Text(String),
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkId::Int(id) => write!(f, "{}", id),
            BookmarkId::Uuid(id) => write!(f, "{}", id),
            BookmarkId::Text(id) => f.write_str(id),
        }
    }
}

impl FromStr for BookmarkId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.parse::<i64>() {
            return Ok(BookmarkId::Int(id));
        }
        if let Ok(id) = Uuid::parse_str(s) {
            return Ok(BookmarkId::Uuid(id));
        }
        Ok(BookmarkId::Text(s.to_string()))
    }
}

impl From<i64> for BookmarkId {
    fn from(id: i64) -> Self {
        BookmarkId::Int(id)
    }
}

impl From<i32> for BookmarkId {
    fn from(id: i32) -> Self {
        BookmarkId::Int(id.into())
    }
}

impl From<Uuid> for BookmarkId {
    fn from(id: Uuid) -> Self {
        BookmarkId::Uuid(id)
    }
}

/// A saved URL as the bookmark API returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: BookmarkId,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_datetime: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_visit_datetime: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl Bookmark {
    pub fn new(id: impl Into<BookmarkId>, url: impl Into<String>) -> Self {
        Bookmark {
            id: id.into(),
            url: url.into(),
            title: None,
            description: None,
            tags: None,
            visit_count: None,
            checked_datetime: None,
            last_visit_datetime: None,
            status_code: None,
        }
    }
}

/// POST body element
#[derive(Debug, Serialize)]
pub struct NewBookmark<'a> {
    pub url: &'a str,
}

/// PUT body element
#[derive(Debug, Serialize)]
pub struct BookmarkSync<'a> {
    pub id: &'a BookmarkId,
    pub url: &'a str,
}

impl<'a> From<&'a Bookmark> for BookmarkSync<'a> {
    fn from(bookmark: &'a Bookmark) -> Self {
        BookmarkSync {
            id: &bookmark.id,
            url: &bookmark.url,
        }
    }
}

/// PATCH body element for editing description and tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkEdit {
    pub id: BookmarkId,
    pub description: String,
    pub tags: Vec<String>,
}

/// DELETE body element
#[derive(Debug, Serialize)]
pub struct BookmarkRef<'a> {
    pub id: &'a BookmarkId,
}

impl<'a> From<&'a Bookmark> for BookmarkRef<'a> {
    fn from(bookmark: &'a Bookmark) -> Self {
        BookmarkRef { id: &bookmark.id }
    }
}

/// Visit body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitParams<'a> {
    pub id: &'a BookmarkId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_count: Option<i64>,
}

impl<'a> From<&'a Bookmark> for VisitParams<'a> {
    fn from(bookmark: &'a Bookmark) -> Self {
        VisitParams {
            id: &bookmark.id,
            visit_count: bookmark.visit_count,
        }
    }
}
