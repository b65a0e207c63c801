//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for whatever transport sits in front of the store (an HTTP
//! router, a CLI, a test harness).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes paging**: fills in the configured default page size and caps
//!   requested sizes at the configured maximum
//! - **Returns structured types** (`Result<Post>`, `Result<Page<Post>>`, ...)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Transport**: status codes, headers and body encoding are the caller's.
//!   A typical mapping is `PostNotFound` → 404, `Validation` → 400 with the
//!   failing fields, `ConcurrencyConflict` → 409, and `Page::total_count`,
//!   `page`, `page_size` → `X-Total-Count`, `X-Page`, `X-Page-Size`.
//!
//! ## Sharing
//!
//! Every method takes `&self`. Build one `BlogApi` at start-up and share it
//! (e.g. behind an `Arc`) between request handlers.

use crate::commands;
use crate::config::BlogConfig;
use crate::error::Result;
use crate::model::{NewPost, Post, PostId, PostPatch};
use crate::query::{Page, Pagination, PostQuery, SearchQuery, DEFAULT_PAGE};
use crate::seed;
use crate::store::memory::InMemoryStore;
use crate::store::PostStore;
use chrono::Utc;
use tracing::info;

pub struct BlogApi<S: PostStore> {
    store: S,
    config: BlogConfig,
}

impl BlogApi<InMemoryStore> {
    /// Builds the process-wide in-memory store described by `config`.
    pub fn from_config(config: BlogConfig) -> Result<Self> {
        config.validate()?;
        let store = if config.seed_sample_posts {
            let posts = seed::sample_posts(Utc::now());
            info!(count = posts.len(), "seeding sample posts");
            InMemoryStore::with_posts(posts)
        } else {
            InMemoryStore::new()
        };
        Ok(Self::new(store, config))
    }
}

impl<S: PostStore> BlogApi<S> {
    pub fn new(store: S, config: BlogConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &BlogConfig {
        &self.config
    }

    /// Turns optional paging parameters into a [`Pagination`]: `page` defaults
    /// to 1, `page_size` to the configured default, and the size is capped at
    /// the configured maximum. Zero for either is rejected.
    pub fn pagination(&self, page: Option<usize>, page_size: Option<usize>) -> Result<Pagination> {
        let pagination = Pagination::new(
            page.unwrap_or(DEFAULT_PAGE),
            page_size.unwrap_or(self.config.default_page_size),
        )?;
        Ok(pagination.clamped(self.config.max_page_size))
    }

    pub fn create_post(&self, input: NewPost) -> Result<Post> {
        commands::create::run(&self.store, input)
    }

    /// Read a post without counting a view.
    pub fn get_post(&self, id: PostId) -> Result<Post> {
        commands::get::run(&self.store, id)
    }

    /// Read a post for display; counts one view.
    pub fn view_post(&self, id: PostId) -> Result<Post> {
        commands::view::run(&self.store, id)
    }

    pub fn update_post(&self, id: PostId, patch: &PostPatch) -> Result<Post> {
        commands::update::run(&self.store, id, patch)
    }

    pub fn delete_post(&self, id: PostId) -> Result<bool> {
        commands::delete::run(&self.store, id)
    }

    pub fn post_exists(&self, id: PostId) -> bool {
        self.store.exists(id)
    }

    /// Lists posts. A filter without pagination gets the first page at the
    /// configured default size.
    pub fn list_posts(&self, mut filter: PostQuery) -> Result<Page<Post>> {
        filter.pagination = Some(self.settle(filter.pagination)?);
        commands::list::run(&self.store, &filter)
    }

    pub fn search_posts(&self, mut search: SearchQuery) -> Result<Page<Post>> {
        search.pagination = Some(self.settle(search.pagination)?);
        commands::search::run(&self.store, &search)
    }

    pub fn all_tags(&self) -> Result<Vec<String>> {
        commands::tags::run(&self.store)
    }

    pub fn all_authors(&self) -> Result<Vec<String>> {
        commands::authors::run(&self.store)
    }

    fn settle(&self, requested: Option<Pagination>) -> Result<Pagination> {
        match requested {
            Some(pagination) => Ok(pagination.clamped(self.config.max_page_size)),
            None => self.pagination(None, None),
        }
    }
}
