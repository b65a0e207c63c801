//! In-memory post store.
//!
//! Posts live in a [`DashMap`] from id to a per-post slot guarded by its own
//! [`RwLock`]. The map's shard locks are only held long enough to clone the
//! slot's `Arc`; all reads and writes of post state happen under the slot lock.
//! Writers to one id are therefore serialized while writers to other ids run
//! freely, and readers of one post share its read lock.
//!
//! Deleting marks the slot dead under its write lock before unlinking it from
//! the map. A writer that fetched the slot just before the delete will find it
//! dead once it gets the lock and report `PostNotFound`, so a racing
//! update/delete always resolves to one of the two sequential orders.

use super::PostStore;
use crate::error::{BlogError, Result};
use crate::model::{Post, PostDraft, PostId, PostPatch};
use chrono::Utc;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
struct Slot {
    post: Post,
    live: bool,
}

type SlotRef = Arc<RwLock<Slot>>;

#[derive(Debug)]
pub struct InMemoryStore {
    posts: DashMap<PostId, SlotRef>,
    next_id: AtomicU64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            posts: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Builds a store that already holds `posts`, as they are (ids, timestamps
    /// and view counts included). The id counter starts past the highest id
    /// given. If two posts share an id the later one wins.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        let map = DashMap::with_capacity(posts.len());
        for post in posts {
            map.insert(post.id, Arc::new(RwLock::new(Slot { post, live: true })));
        }
        Self {
            posts: map,
            next_id: AtomicU64::new(next_id),
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// The mutation path behind `update` and `increment_view`.
    ///
    /// Runs `f` against a working copy of the post while holding that post's
    /// write lock. The copy replaces the stored post only if `f` returns `Ok`,
    /// so a failed mutation leaves no trace.
    pub fn modify<T, F>(&self, id: PostId, f: F) -> Result<T>
    where
        F: FnOnce(&mut Post) -> Result<T>,
    {
        let slot = self.slot(id)?;
        let mut guard = slot.write();
        if !guard.live {
            return Err(BlogError::PostNotFound(id));
        }

        let mut working = guard.post.clone();
        let out = f(&mut working)?;
        guard.post = working;
        Ok(out)
    }

    fn slot(&self, id: PostId) -> Result<SlotRef> {
        self.posts
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(BlogError::PostNotFound(id))
    }

    fn allocate_id(&self) -> PostId {
        PostId(self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

impl PostStore for InMemoryStore {
    fn create(&self, draft: PostDraft) -> Result<Post> {
        let id = self.allocate_id();
        let post = Post::from_draft(id, draft, Utc::now());
        self.posts.insert(
            id,
            Arc::new(RwLock::new(Slot {
                post: post.clone(),
                live: true,
            })),
        );
        debug!(post_id = %id, "post created");
        Ok(post)
    }

    fn get(&self, id: PostId) -> Result<Post> {
        let slot = self.slot(id)?;
        let guard = slot.read();
        if guard.live {
            Ok(guard.post.clone())
        } else {
            Err(BlogError::PostNotFound(id))
        }
    }

    fn update(&self, id: PostId, patch: &PostPatch) -> Result<Post> {
        let post = self.modify(id, |post| {
            post.apply_patch(patch, Utc::now())?;
            Ok(post.clone())
        })?;
        debug!(post_id = %id, "post updated");
        Ok(post)
    }

    fn delete(&self, id: PostId) -> Result<bool> {
        let Ok(slot) = self.slot(id) else {
            return Ok(false);
        };

        {
            let mut guard = slot.write();
            if !guard.live {
                return Ok(false);
            }
            guard.live = false;
        }
        // Unlink only after the slot lock is released; map shard locks are
        // never taken while a slot lock is held.
        self.posts.remove(&id);

        debug!(post_id = %id, "post deleted");
        Ok(true)
    }

    fn exists(&self, id: PostId) -> bool {
        match self.slot(id) {
            Ok(slot) => {
                let live = slot.read().live;
                live
            }
            Err(_) => false,
        }
    }

    fn increment_view(&self, id: PostId) -> Result<Post> {
        let post = self.modify(id, |post| {
            post.view_count = post.view_count.saturating_add(1);
            Ok(post.clone())
        })?;
        debug!(post_id = %id, view_count = post.view_count, "view counted");
        Ok(post)
    }

    fn posts(&self) -> Result<Vec<Post>> {
        let slots: Vec<SlotRef> = self
            .posts
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();

        Ok(slots
            .iter()
            .filter_map(|slot| {
                let guard = slot.read();
                if guard.live {
                    Some(guard.post.clone())
                } else {
                    None
                }
            })
            .collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NewPost;
    use crate::validation::validate_create;
    use chrono::{DateTime, Duration, TimeZone};

    /// Builds a store with posts whose ids and creation times are predictable:
    /// the n-th post added gets id `n` and is one minute newer than the one
    /// before it.
    pub struct StoreFixture {
        posts: Vec<Post>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self { posts: Vec::new() }
        }

        pub fn base_time() -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        }

        pub fn with_post(self, input: NewPost) -> Self {
            let at = Self::base_time() + Duration::minutes(self.posts.len() as i64);
            self.with_post_at(input, at)
        }

        pub fn with_post_at(mut self, input: NewPost, created_at: DateTime<Utc>) -> Self {
            let id = PostId(self.posts.len() as u64 + 1);
            let draft = validate_create(input).expect("fixture post must be valid");
            self.posts.push(Post::from_draft(id, draft, created_at));
            self
        }

        pub fn with_published(self, title: &str) -> Self {
            self.with_post(NewPost::new(title, format!("Content of {}", title)).published(true))
        }

        pub fn with_draft(self, title: &str) -> Self {
            self.with_post(NewPost::new(title, format!("Content of {}", title)))
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_posts(self.posts)
        }
    }
}
