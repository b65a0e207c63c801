use super::helpers::retry_on_conflict;
use crate::error::Result;
use crate::model::{Post, PostId, PostPatch};
use crate::store::PostStore;

/// Apply a partial update. Fields the patch leaves absent keep their values;
/// `updated_at` is refreshed even for an empty patch.
pub fn run<S: PostStore>(store: &S, id: PostId, patch: &PostPatch) -> Result<Post> {
    retry_on_conflict(id, || store.update(id, patch))
}
