use crate::error::Result;
use crate::model::{Post, PostId};
use crate::store::PostStore;

/// Plain read. Unlike [`view`](super::view), this does not count as a view.
pub fn run<S: PostStore>(store: &S, id: PostId) -> Result<Post> {
    store.get(id)
}
