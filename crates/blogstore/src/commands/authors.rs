use crate::error::Result;
use crate::store::PostStore;
use std::collections::BTreeSet;

/// Distinct authors of published posts, sorted ascending.
pub fn run<S: PostStore>(store: &S) -> Result<Vec<String>> {
    let authors: BTreeSet<String> = store
        .posts()?
        .into_iter()
        .filter(|post| post.is_published)
        .map(|post| post.author)
        .collect();
    Ok(authors.into_iter().collect())
}
