// Route path constants - single source of truth for all API paths, relative to the base URL

pub const BOOKMARKS: &str = "/v1/bookmarks";
pub const VISIT_BOOKMARK: &str = "/v1/visit/bookmark";
