use crate::error::Result;
use crate::model::PostId;
use tracing::warn;

/// Runs a read-modify-write against the store, retrying it once if the
/// backend reports a concurrent modification. A second conflict is returned
/// to the caller. Every other outcome is returned as-is.
pub fn retry_on_conflict<T, F>(id: PostId, mut op: F) -> Result<T>
where
    F: FnMut() -> Result<T>,
{
    match op() {
        Err(err) if err.is_retryable() => {
            warn!(post_id = %id, "conflicting write, retrying once");
            op()
        }
        other => other,
    }
}
