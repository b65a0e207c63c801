use crate::error::Result;
use crate::store::PostStore;
use std::collections::BTreeSet;

/// Distinct tags used by published posts, sorted ascending.
pub fn run<S: PostStore>(store: &S) -> Result<Vec<String>> {
    let tags: BTreeSet<String> = store
        .posts()?
        .into_iter()
        .filter(|post| post.is_published)
        .flat_map(|post| post.tags)
        .collect();
    Ok(tags.into_iter().collect())
}
