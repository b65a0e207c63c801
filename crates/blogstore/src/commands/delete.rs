use crate::error::Result;
use crate::model::PostId;
use crate::store::PostStore;

/// Remove a post. Returns `false` (not an error) when it did not exist.
pub fn run<S: PostStore>(store: &S, id: PostId) -> Result<bool> {
    store.delete(id)
}
