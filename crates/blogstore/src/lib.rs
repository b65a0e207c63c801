//! # Blogstore Architecture
//!
//! Blogstore is the **post store and query engine** of a blog backend. It holds
//! posts, enforces their invariants, answers filtered/paginated/search queries,
//! applies partial updates and counts views, all safely under concurrent access.
//! It has no opinion about transport: an HTTP router, a CLI or a test drives it
//! through the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transport (not in this crate)                              │
//! │  - Parses requests, maps errors to statuses, sets headers   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Applies configured paging defaults and caps              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Query Engine (query.rs)    │
//! │  - Validation, filtering, sorting, paging, aggregates       │
//! │  - Conflict retry for read-modify-write operations          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PostStore trait                                          │
//! │  - InMemoryStore: per-post locks, monotonic ids             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//!
//! The store is one long-lived instance shared by every request handler.
//! Writes to the same post are serialized, writes to different posts are not,
//! and readers always get a whole post. See [`store`] for the full contract.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug` for mutations, `trace` for
//! queries, `warn` for retried conflicts) and never installs a subscriber.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`query`]: Filters, search, sorting and pagination
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`model`]: `Post`, create and patch payloads
//! - [`validation`]: Field limits
//! - [`config`]: Configuration loading
//! - [`seed`]: Sample posts
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod seed;
pub mod store;
pub mod validation;

pub use api::BlogApi;
pub use error::{BlogError, Result};
