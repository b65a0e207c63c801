//! Field validation for post payloads.
//!
//! Limits (counted in characters, not bytes):
//! - `title`: required, non-empty, at most 200
//! - `content`: required, non-empty
//! - `summary`: optional, at most 500
//! - `author`: at most 100, `"Anonymous"` when not given; a blank author in a
//!   patch leaves the stored one in place
//! - `imageUrl`: optional, at most 200
//!
//! Every failing field is reported, not just the first one.

use crate::error::{Result, ValidationErrors};
use crate::model::{NewPost, Patch, PostDraft, PostPatch, DEFAULT_AUTHOR};

pub const TITLE_MAX_CHARS: usize = 200;
pub const SUMMARY_MAX_CHARS: usize = 500;
pub const AUTHOR_MAX_CHARS: usize = 100;
pub const IMAGE_URL_MAX_CHARS: usize = 200;

/// Validates a create payload and resolves its defaults.
///
/// # Examples
/// ```
/// use blogstore::model::NewPost;
/// use blogstore::validation::validate_create;
///
/// let draft = validate_create(NewPost::new("Hello", "World")).unwrap();
/// assert_eq!(draft.author, "Anonymous");
///
/// assert!(validate_create(NewPost::new("", "World")).is_err());
/// assert!(validate_create(NewPost::new("Hello", "")).is_err());
/// ```
pub fn validate_create(input: NewPost) -> Result<PostDraft> {
    let mut errors = ValidationErrors::default();

    check_title(&input.title, &mut errors);
    check_content(&input.content, &mut errors);
    if let Some(summary) = &input.summary {
        check_max("summary", summary, SUMMARY_MAX_CHARS, &mut errors);
    }
    if let Some(author) = &input.author {
        check_max("author", author, AUTHOR_MAX_CHARS, &mut errors);
    }
    if let Some(image_url) = &input.image_url {
        check_max("imageUrl", image_url, IMAGE_URL_MAX_CHARS, &mut errors);
    }
    errors.into_result()?;

    let author = match input.author {
        Some(author) if !author.trim().is_empty() => author,
        _ => DEFAULT_AUTHOR.to_string(),
    };

    Ok(PostDraft {
        title: input.title,
        content: input.content,
        summary: input.summary,
        author,
        image_url: input.image_url,
        tags: input.tags,
        is_published: input.is_published,
    })
}

/// Validates the fields a patch supplies. Absent fields are not inspected.
pub fn validate_patch(patch: &PostPatch) -> Result<()> {
    let mut errors = ValidationErrors::default();

    if let Patch::Present(title) = &patch.title {
        check_title(title, &mut errors);
    }
    if let Patch::Present(content) = &patch.content {
        check_content(content, &mut errors);
    }
    if let Patch::Present(Some(summary)) = &patch.summary {
        check_max("summary", summary, SUMMARY_MAX_CHARS, &mut errors);
    }
    if let Patch::Present(author) = &patch.author {
        check_max("author", author, AUTHOR_MAX_CHARS, &mut errors);
    }
    if let Patch::Present(Some(image_url)) = &patch.image_url {
        check_max("imageUrl", image_url, IMAGE_URL_MAX_CHARS, &mut errors);
    }

    errors.into_result()
}

fn check_title(title: &str, errors: &mut ValidationErrors) {
    if title.trim().is_empty() {
        errors.push("title", "must not be empty");
    } else {
        check_max("title", title, TITLE_MAX_CHARS, errors);
    }
}

fn check_content(content: &str, errors: &mut ValidationErrors) {
    if content.trim().is_empty() {
        errors.push("content", "must not be empty");
    }
}

fn check_max(field: &'static str, value: &str, max: usize, errors: &mut ValidationErrors) {
    let len = value.chars().count();
    if len > max {
        errors.push(
            field,
            format!("must be at most {} characters (got {})", max, len),
        );
    }
}
