use blogstore::config::BlogConfig;
use blogstore::model::{NewPost, PostId, PostPatch};
use blogstore::store::memory::InMemoryStore;
use blogstore::store::PostStore;
use blogstore::{BlogApi, BlogError};
use std::collections::HashSet;
use std::sync::Barrier;
use std::thread;

const THREADS: usize = 8;

fn api() -> BlogApi<InMemoryStore> {
    BlogApi::from_config(BlogConfig::default()).unwrap()
}

#[test]
fn concurrent_views_are_never_lost() {
    let api = api();
    let post = api
        .create_post(NewPost::new("Popular", "Everyone reads this").published(true))
        .unwrap();
    let per_thread = 250;
    let barrier = Barrier::new(THREADS);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                barrier.wait();
                for _ in 0..per_thread {
                    api.view_post(post.id).unwrap();
                }
            });
        }
    });

    let after = api.get_post(post.id).unwrap();
    assert_eq!(after.view_count, (THREADS * per_thread) as u64);
}

#[test]
fn each_view_sees_a_distinct_count() {
    let api = api();
    let post = api.create_post(NewPost::new("T", "C")).unwrap();
    let barrier = Barrier::new(THREADS);

    let counts: Vec<u64> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let api = &api;
                let barrier = &barrier;
                let id = post.id;
                s.spawn(move || {
                    barrier.wait();
                    (0..50)
                        .map(|_| api.view_post(id).unwrap().view_count)
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let unique: HashSet<u64> = counts.iter().copied().collect();
    assert_eq!(unique.len(), counts.len());
    assert_eq!(unique, (1..=(THREADS as u64 * 50)).collect::<HashSet<u64>>());
}

#[test]
fn concurrent_creates_get_unique_ids() {
    let api = api();
    let barrier = Barrier::new(THREADS);

    let ids: Vec<PostId> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let api = &api;
                let barrier = &barrier;
                s.spawn(move || {
                    barrier.wait();
                    (0..100)
                        .map(|i| {
                            api.create_post(NewPost::new(format!("{}-{}", t, i), "Body"))
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let unique: HashSet<PostId> = ids.iter().copied().collect();
    assert_eq!(unique.len(), THREADS * 100);
    assert_eq!(api.store().len(), THREADS * 100);
}

#[test]
fn update_racing_delete_resolves_cleanly() {
    for _ in 0..50 {
        let store = InMemoryStore::new();
        let api = BlogApi::new(store, BlogConfig::default());
        let post = api.create_post(NewPost::new("Racy", "Body")).unwrap();
        let barrier = Barrier::new(2);

        let (updated_title, deleted) = thread::scope(|s| {
            let updater = s.spawn(|| {
                barrier.wait();
                match api.update_post(post.id, &PostPatch::new().title("Updated")) {
                    Ok(post) => Some(post.title),
                    Err(BlogError::PostNotFound(id)) => {
                        assert_eq!(id, post.id);
                        None
                    }
                    Err(other) => panic!("unexpected error: {other}"),
                }
            });
            let deleter = s.spawn(|| {
                barrier.wait();
                api.delete_post(post.id).unwrap()
            });
            (updater.join().unwrap(), deleter.join().unwrap())
        });

        assert!(deleted);
        if let Some(title) = updated_title {
            assert_eq!(title, "Updated");
        }
        assert!(!api.post_exists(post.id));
        assert!(matches!(api.get_post(post.id), Err(BlogError::PostNotFound(_))));
    }
}

#[test]
fn concurrent_updates_never_mix_fields() {
    let store = InMemoryStore::new();
    let post = blogstore::commands::create::run(&store, NewPost::new("Start", "Start"))
        .unwrap();
    let barrier = Barrier::new(THREADS);

    thread::scope(|s| {
        for t in 0..THREADS {
            let store = &store;
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                let label = format!("writer-{}", t);
                for _ in 0..100 {
                    let patch = PostPatch::new().title(&label).content(&label);
                    store.update(post.id, &patch).unwrap();
                    let seen = store.get(post.id).unwrap();
                    assert_eq!(seen.title, seen.content, "torn read");
                }
            });
        }
    });

    let last = store.get(post.id).unwrap();
    assert_eq!(last.title, last.content);
    assert!(last.updated_at >= last.created_at);
}

#[test]
fn views_on_different_posts_proceed_together() {
    let api = api();
    let ids: Vec<PostId> = (0..THREADS)
        .map(|i| api.create_post(NewPost::new(format!("P{}", i), "Body")).unwrap().id)
        .collect();

    thread::scope(|s| {
        for id in &ids {
            let api = &api;
            s.spawn(move || {
                for _ in 0..200 {
                    api.view_post(*id).unwrap();
                }
            });
        }
    });

    for id in ids {
        assert_eq!(api.get_post(id).unwrap().view_count, 200);
    }
}
