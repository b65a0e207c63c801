//! # Command Layer
//!
//! The business logic of the store. Each operation lives in its own submodule
//! as a plain `run` function over any [`PostStore`](crate::store::PostStore).
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate inputs before they reach the store
//! - Drive the store through its trait, never around it
//! - Run the query engine over store snapshots
//! - Return domain types (`Post`, `Page<Post>`, `Vec<String>`)
//!
//! ## What Commands Do NOT Do
//!
//! - **Transport**: no status codes, headers or request parsing
//! - **Defaults from configuration**: page-size defaults and caps are applied
//!   by the API facade before a query gets here
//!
//! ## Command Modules
//!
//! - [`create`]: Validate and store a new post
//! - [`get`]: Read one post without counting a view
//! - [`view`]: Read one post for display, counting the view
//! - [`update`]: Partial update
//! - [`delete`]: Remove a post
//! - [`list`]: Filtered, paginated listing
//! - [`search`]: Free-text search over published posts
//! - [`tags`]: Distinct tags of published posts
//! - [`authors`]: Distinct authors of published posts
//! - [`helpers`]: Conflict retry shared by the read-modify-write commands

pub mod authors;
pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod search;
pub mod tags;
pub mod update;
pub mod view;
