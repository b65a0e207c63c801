use crate::error::Result;
use crate::model::{NewPost, Post};
use crate::store::PostStore;
use crate::validation::validate_create;

pub fn run<S: PostStore>(store: &S, input: NewPost) -> Result<Post> {
    let draft = validate_create(input)?;
    store.create(draft)
}
