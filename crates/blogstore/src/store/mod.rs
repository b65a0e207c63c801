//! # Storage Layer
//!
//! The [`PostStore`] trait is the single source of truth for posts. Commands and
//! the API only ever touch post state through it, which lets a persistent backend
//! slot in later without changing anything above this layer.
//!
//! ## Consistency Contract
//!
//! - **Ids**: allocated by the store, strictly increasing, never reused, not even
//!   after the post holding them is deleted.
//! - **Snapshots**: reads hand out owned copies. A reader never sees a post
//!   half-way through a write.
//! - **Per-id linearizability**: `update`, `delete` and `increment_view` on the
//!   same id behave as if run one after another. A read-modify-write cannot lose
//!   another one's effect.
//! - **No global lock**: operations on different ids do not wait on each other.
//! - **All-or-nothing**: a mutation that fails leaves the post untouched.
//!
//! ## Conflicts
//!
//! Backends with optimistic, version-stamped writes may report
//! [`BlogError::ConcurrencyConflict`](crate::error::BlogError::ConcurrencyConflict)
//! from `update` and `increment_view`. The API layer retries such an operation
//! once before surfacing the conflict. [`memory::InMemoryStore`] serializes
//! writers per id and never reports one.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the process-wide in-memory authority.

use crate::error::Result;
use crate::model::{Post, PostDraft, PostId, PostPatch};

pub mod memory;

/// Abstract interface for post storage.
///
/// All methods take `&self`: implementations handle their own synchronization
/// so one instance can be shared across request handlers.
pub trait PostStore: Send + Sync {
    /// Store a validated draft under a new id, with `created_at == updated_at == now`
    /// and a zero view count. Returns the stored post.
    fn create(&self, draft: PostDraft) -> Result<Post>;

    /// Snapshot of one post. Does not count as a view.
    fn get(&self, id: PostId) -> Result<Post>;

    /// Merge `patch` into the post, refresh `updated_at`, return the new state.
    fn update(&self, id: PostId, patch: &PostPatch) -> Result<Post>;

    /// Remove a post. `Ok(false)` when there was nothing to remove.
    fn delete(&self, id: PostId) -> Result<bool>;

    fn exists(&self, id: PostId) -> bool;

    /// Add exactly one to the view count and return the state after the increment.
    fn increment_view(&self, id: PostId) -> Result<Post>;

    /// Snapshots of every live post, in no particular order.
    fn posts(&self) -> Result<Vec<Post>>;
}
