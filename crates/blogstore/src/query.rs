//! # Query Engine
//!
//! Pure functions from a set of post snapshots and a query to an ordered page.
//! Nothing here touches the store; commands fetch snapshots and hand them in.
//!
//! ## Pipeline
//!
//! 1. Filter: `published` (exact), `author` (case-sensitive substring), `tag`
//!    (exact element of `tags`). Each one applies only when set; empty strings
//!    count as unset.
//! 2. Search (search operation only, instead of step 1): published posts whose
//!    `title`, `content` or `summary` contains the term, or whose `tags`
//!    contain it as an exact element.
//! 3. Sort by `created_at` descending, ties by `id` descending, so paging is
//!    reproducible.
//! 4. Count the matches, then slice out `page` (1-based) of `page_size`.
//!    A page past the end is empty, not an error.

use serde::Serialize;

use crate::error::{BlogError, Result};
use crate::model::Post;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// A 1-based page request. Both numbers are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: usize, page_size: usize) -> Result<Self> {
        if page == 0 {
            return Err(BlogError::invalid("page", "must be at least 1"));
        }
        if page_size == 0 {
            return Err(BlogError::invalid("pageSize", "must be at least 1"));
        }
        Ok(Self { page, page_size })
    }

    /// Caps the page size at `max`, leaving smaller sizes alone.
    pub fn clamped(self, max: usize) -> Self {
        Self {
            page: self.page,
            page_size: self.page_size.min(max.max(1)),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// Listing filter. Unset fields do not filter. With no `pagination` the
/// caller's default page applies ([`Pagination::default`] when run directly).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub published: Option<bool>,
    pub author: Option<String>,
    pub tag: Option<String>,
    pub pagination: Option<Pagination>,
}

impl PostQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn matches(&self, post: &Post) -> bool {
        if let Some(published) = self.published {
            if post.is_published != published {
                return false;
            }
        }
        if let Some(author) = non_empty(&self.author) {
            if !post.author.contains(author) {
                return false;
            }
        }
        if let Some(tag) = non_empty(&self.tag) {
            if !post.has_tag(tag) {
                return false;
            }
        }
        true
    }
}

/// Free-text search over published posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    pub pagination: Option<Pagination>,
}

impl SearchQuery {
    /// Fails when `term` is empty. Whitespace is a legitimate term.
    pub fn new(term: impl Into<String>) -> Result<Self> {
        let term = term.into();
        if term.is_empty() {
            return Err(BlogError::invalid("query", "search query cannot be empty"));
        }
        Ok(Self {
            term,
            pagination: None,
        })
    }

    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn matches(&self, post: &Post) -> bool {
        let term = self.term.as_str();
        post.is_published
            && (post.title.contains(term)
                || post.content.contains(term)
                || post.summary.as_deref().is_some_and(|s| s.contains(term))
                || post.has_tag(term))
    }
}

/// One page of results plus what the caller needs to render paging metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Matches before slicing.
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages needed to show every match.
    pub fn page_count(&self) -> usize {
        self.total_count.div_ceil(self.page_size.max(1))
    }
}

/// Newest first; equal timestamps fall back to the higher id first.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Sorts `posts` and cuts out the requested page.
pub fn paginate(mut posts: Vec<Post>, pagination: Pagination) -> Page<Post> {
    sort_newest_first(&mut posts);
    let total_count = posts.len();
    let items = posts
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.page_size)
        .collect();

    Page {
        items,
        total_count,
        page: pagination.page,
        page_size: pagination.page_size,
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
