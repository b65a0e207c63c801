use crate::error::Result;
use crate::model::Post;
use crate::query::{self, Page, PostQuery};
use crate::store::PostStore;
use tracing::trace;

pub fn run<S: PostStore>(store: &S, filter: &PostQuery) -> Result<Page<Post>> {
    let matching: Vec<Post> = store
        .posts()?
        .into_iter()
        .filter(|post| filter.matches(post))
        .collect();

    let page = query::paginate(matching, filter.pagination.unwrap_or_default());
    trace!(
        total = page.total_count,
        page = page.page,
        page_size = page.page_size,
        "listed posts"
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewPost, PostId};
    use crate::query::Pagination;
    use crate::store::memory::fixtures::StoreFixture;

    fn titles(page: &Page<Post>) -> Vec<&str> {
        page.items.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn lists_everything_newest_first_by_default() {
        let store = StoreFixture::new()
            .with_draft("Oldest")
            .with_published("Middle")
            .with_draft("Newest")
            .build();

        let page = run(&store, &PostQuery::new()).unwrap();

        assert_eq!(titles(&page), vec!["Newest", "Middle", "Oldest"]);
        assert_eq!(page.total_count, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
    }

    #[test]
    fn second_page_of_five() {
        let store = StoreFixture::new()
            .with_published("1")
            .with_published("2")
            .with_published("3")
            .with_published("4")
            .with_published("5")
            .build();

        let filter = PostQuery::new()
            .published(true)
            .paginate(Pagination::new(2, 2).unwrap());
        let page = run(&store, &filter).unwrap();

        // ranked 3rd and 4th newest
        assert_eq!(titles(&page), vec!["3", "2"]);
        assert_eq!(page.total_count, 5);
    }

    #[test]
    fn combines_filters() {
        let store = StoreFixture::new()
            .with_post(
                NewPost::new("A", "a")
                    .with_author("Tech Writer")
                    .with_tags(["dotnet", "tutorial"])
                    .published(true),
            )
            .with_post(
                NewPost::new("B", "b")
                    .with_author("Tech Writer")
                    .with_tags(["api"])
                    .published(true),
            )
            .with_post(
                NewPost::new("C", "c")
                    .with_author("Guest Writer")
                    .with_tags(["dotnet"]),
            )
            .build();

        let page = run(
            &store,
            &PostQuery::new().author("Writer").tag("dotnet"),
        )
        .unwrap();
        assert_eq!(titles(&page), vec!["C", "A"]);

        let page = run(
            &store,
            &PostQuery::new().published(true).tag("dotnet"),
        )
        .unwrap();
        assert_eq!(titles(&page), vec!["A"]);
        assert_eq!(page.total_count, 1);
    }

    #[test]
    fn deleted_posts_drop_out() {
        let store = StoreFixture::new().with_draft("A").with_draft("B").build();
        store.delete(PostId(2)).unwrap();
        let page = run(&store, &PostQuery::new()).unwrap();
        assert_eq!(titles(&page), vec!["A"]);
    }
}
