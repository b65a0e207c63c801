use crate::error::Result;
use crate::model::Post;
use crate::query::{self, Page, SearchQuery};
use crate::store::PostStore;
use tracing::trace;

/// Search published posts. Empty terms are rejected when the
/// [`SearchQuery`] is built, so an accepted query always has something to
/// look for.
pub fn run<S: PostStore>(store: &S, search: &SearchQuery) -> Result<Page<Post>> {
    let matching: Vec<Post> = store
        .posts()?
        .into_iter()
        .filter(|post| search.matches(post))
        .collect();

    let page = query::paginate(matching, search.pagination.unwrap_or_default());
    trace!(
        term = search.term(),
        total = page.total_count,
        page = page.page,
        "searched posts"
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewPost;
    use crate::query::Pagination;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn unpublished_matches_are_hidden() {
        let store = StoreFixture::new()
            .with_post(
                NewPost::new("Getting Started", "Intro")
                    .with_tags(["dotnet"])
                    .published(true),
            )
            .with_post(NewPost::new("Draft", "All about dotnet internals"))
            .build();

        let page = run(&store, &SearchQuery::new("dotnet").unwrap()).unwrap();

        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].title, "Getting Started");
    }

    #[test]
    fn search_is_paginated() {
        let store = StoreFixture::new()
            .with_published("rust one")
            .with_published("rust two")
            .with_published("rust three")
            .build();

        let search = SearchQuery::new("rust")
            .unwrap()
            .paginate(Pagination::new(2, 2).unwrap());
        let page = run(&store, &search).unwrap();

        assert_eq!(page.total_count, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "rust one");
    }

    #[test]
    fn no_match_is_an_empty_page() {
        let store = StoreFixture::new().with_published("Hello").build();
        let page = run(&store, &SearchQuery::new("absent").unwrap()).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_count, 0);
    }
}
