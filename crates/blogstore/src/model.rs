//! # Domain Model
//!
//! This module defines [`Post`], the only entity the store holds, and the two
//! payloads that mutate it: [`NewPost`] for creation and [`PostPatch`] for
//! partial updates.
//!
//! ## Lifecycle
//!
//! ```text
//! NewPost ──validate_create──▶ PostDraft ──store.create──▶ Post (id, timestamps, view_count = 0)
//!                                                           │
//!                      PostPatch ──Post::apply_patch────────┤ (updated_at refreshed)
//!                      store.increment_view ────────────────┤ (view_count + 1)
//!                      store.delete ────────────────────────┘ (id retired for good)
//! ```
//!
//! ## Partial Updates
//!
//! A patch has to tell "the caller did not mention this field" apart from "the
//! caller set this field to nothing". Every patch field is a [`Patch<T>`]:
//!
//! - [`Patch::Absent`]: key omitted, the stored value is kept.
//! - [`Patch::Present`]: key supplied, the stored value is replaced.
//!
//! Nullable fields use `Patch<Option<String>>`, so `Present(None)` clears
//! `summary` or `image_url` while `Absent` leaves them alone. `tags` is replaced
//! wholesale when present.
//!
//! ## Wire Shape
//!
//! Posts serialize with camelCase keys (`imageUrl`, `isPublished`, `viewCount`,
//! `createdAt`, `updatedAt`) and `tags` as an ordered list. A patch deserialized
//! from JSON maps a missing key to `Absent`. A `null` clears `summary` and
//! `imageUrl` (`Present(None)`); on any other key it counts as omitted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::Result;
use crate::validation;

/// Author stored when a post is created without one.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Store-assigned post identifier. Monotonic and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub author: String,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub view_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Materializes a validated draft under a freshly allocated id.
    pub fn from_draft(id: PostId, draft: PostDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            summary: draft.summary,
            author: draft.author,
            image_url: draft.image_url,
            tags: draft.tags,
            is_published: draft.is_published,
            view_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges `patch` into this post.
    ///
    /// All present fields are validated before any of them is written, so a
    /// rejected patch leaves the post exactly as it was (including
    /// `updated_at`). An accepted patch refreshes `updated_at` even when it
    /// carries no fields.
    pub fn apply_patch(&mut self, patch: &PostPatch, now: DateTime<Utc>) -> Result<()> {
        validation::validate_patch(patch)?;

        if let Patch::Present(title) = &patch.title {
            self.title = title.clone();
        }
        if let Patch::Present(content) = &patch.content {
            self.content = content.clone();
        }
        if let Patch::Present(summary) = &patch.summary {
            self.summary = summary.clone();
        }
        if let Patch::Present(author) = &patch.author {
            if !author.trim().is_empty() {
                self.author = author.clone();
            }
        }
        if let Patch::Present(image_url) = &patch.image_url {
            self.image_url = image_url.clone();
        }
        if let Patch::Present(tags) = &patch.tags {
            self.tags = tags.clone();
        }
        if let Patch::Present(is_published) = patch.is_published {
            self.is_published = is_published;
        }

        self.touch(now);
        Ok(())
    }

    /// Refreshes `updated_at`, never letting it fall behind `created_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Create payload as received from a caller. Unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_published: bool,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }
}

/// A create payload that passed validation: every field is in range and the
/// author default has been applied. Only [`validation::validate_create`]
/// produces one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub author: String,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub is_published: bool,
}

/// A field in a partial update: either omitted or supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Absent,
    Present(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Patch::Absent, Patch::Present)
    }
}

// Only reached when the key exists, so a `null` for `Patch<Option<_>>` lands
// as `Present(None)`. Missing keys fall back to `#[serde(default)]`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Patch::Present)
    }
}

/// For keys that cannot be cleared: `null` is read as "not supplied".
fn null_as_absent<'de, D, T>(deserializer: D) -> std::result::Result<Patch<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Patch::from)
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Absent => serializer.serialize_none(),
            Patch::Present(v) => v.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    #[serde(
        default,
        deserialize_with = "null_as_absent",
        skip_serializing_if = "Patch::is_absent"
    )]
    pub title: Patch<String>,
    #[serde(
        default,
        deserialize_with = "null_as_absent",
        skip_serializing_if = "Patch::is_absent"
    )]
    pub content: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub summary: Patch<Option<String>>,
    #[serde(
        default,
        deserialize_with = "null_as_absent",
        skip_serializing_if = "Patch::is_absent"
    )]
    pub author: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub image_url: Patch<Option<String>>,
    #[serde(
        default,
        deserialize_with = "null_as_absent",
        skip_serializing_if = "Patch::is_absent"
    )]
    pub tags: Patch<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "null_as_absent",
        skip_serializing_if = "Patch::is_absent"
    )]
    pub is_published: Patch<bool>,
}

impl PostPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Patch::Present(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Patch::Present(content.into());
        self
    }

    /// `None` clears the summary.
    pub fn summary(mut self, summary: Option<&str>) -> Self {
        self.summary = Patch::Present(summary.map(str::to_string));
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Patch::Present(author.into());
        self
    }

    /// `None` clears the image.
    pub fn image_url(mut self, image_url: Option<&str>) -> Self {
        self.image_url = Patch::Present(image_url.map(str::to_string));
        self
    }

    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = Patch::Present(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_published(mut self, is_published: bool) -> Self {
        self.is_published = Patch::Present(is_published);
        self
    }

    /// True when the patch supplies no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_absent()
            && self.content.is_absent()
            && self.summary.is_absent()
            && self.author.is_absent()
            && self.image_url.is_absent()
            && self.tags.is_absent()
            && self.is_published.is_absent()
    }
}
