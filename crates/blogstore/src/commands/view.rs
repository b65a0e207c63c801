use super::helpers::retry_on_conflict;
use crate::error::Result;
use crate::model::{Post, PostId};
use crate::store::PostStore;

/// Fetch a post for display. Every successful call counts exactly one view
/// and returns the post as it is after that view.
pub fn run<S: PostStore>(store: &S, id: PostId) -> Result<Post> {
    retry_on_conflict(id, || store.increment_view(id))
}
