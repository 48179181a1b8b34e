use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reqwest::Response;

use crate::client::BookmarkClient;
use crate::config::Config;
use crate::models::{Bookmark, BookmarkEdit, BookmarkId};

#[derive(Parser, Debug)]
#[command(author, version, about = "Manage bookmarks through the bookmark REST API")]
pub struct Args {
    /// Base URL of the API, e.g. http://localhost:33875/api
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List all bookmarks
    List,
    /// Add bookmarks for the given URLs
    Add {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Re-check bookmarks, given as ID=URL pairs
    Sync {
        #[arg(required = true, value_parser = parse_id_url)]
        bookmarks: Vec<(BookmarkId, String)>,
    },
    /// Set the description and tags of a bookmark
    Edit {
        id: BookmarkId,
        #[arg(long)]
        description: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Delete bookmarks by id
    Delete {
        #[arg(required = true)]
        ids: Vec<BookmarkId>,
    },
    /// Record a visit to a bookmark
    Visit {
        id: BookmarkId,
        #[arg(long, allow_negative_numbers = true)]
        count: Option<i64>,
    },
}

fn parse_id_url(raw: &str) -> Result<(BookmarkId, String), String> {
    let (id, url) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=URL, got '{}'", raw))?;
    let id = id.parse::<BookmarkId>().map_err(|e| e.to_string())?;
    Ok((id, url.to_string()))
}

impl Args {
    /// Layer command-line overrides on top of `base`
    pub fn apply_to(&self, mut base: Config) -> Config {
        if let Some(base_url) = &self.base_url {
            base.base_url = base_url.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            base.timeout = Duration::from_millis(timeout_ms);
        }
        base
    }
}

/// Run one command against the API and return the response body for printing
pub async fn run(client: &BookmarkClient, command: Command) -> Result<String> {
    let response = match command {
        Command::List => client.list_bookmarks().await,
        Command::Add { urls } => client.create_bookmarks(&urls).await,
        Command::Sync { bookmarks } => {
            let bookmarks: Vec<Bookmark> = bookmarks
                .into_iter()
                .map(|(id, url)| Bookmark::new(id, url))
                .collect();
            client.replace_bookmarks(&bookmarks).await
        }
        Command::Edit { id, description, tags } => {
            client
                .patch_bookmarks(&[BookmarkEdit { id, description, tags }])
                .await
        }
        Command::Delete { ids } => {
            let bookmarks: Vec<Bookmark> = ids
                .into_iter()
                .map(|id| Bookmark::new(id, String::new()))
                .collect();
            client.delete_bookmarks(&bookmarks).await
        }
        Command::Visit { id, count } => {
            let mut bookmark = Bookmark::new(id, String::new());
            bookmark.visit_count = count;
            client.record_visit(&bookmark).await
        }
    }
    .context("Bookmark API request failed")?;

    render_body(response).await
}

async fn render_body(response: Response) -> Result<String> {
    let text = response
        .text()
        .await
        .context("Failed to read response body")?;

    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) => Ok(serde_json::to_string_pretty(&value)?),
        Err(_) => Ok(text),
    }
}
