//! Sample posts for a fresh store.
//!
//! Three posts, back-dated relative to `now`: two published, one draft. Ids 1-3
//! are taken, so posts created afterwards start at 4.

use chrono::{DateTime, Duration, Utc};

use crate::model::{Post, PostId};

pub fn sample_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        sample(
            1,
            now - Duration::days(7),
            "Welcome to My Blog",
            "This is my first blog post. I'm excited to share my thoughts and experiences with you!",
            "A welcome message and introduction to the blog.",
            "Blog Admin",
            true,
            "https://via.placeholder.com/600x300?text=Welcome",
            &["welcome", "introduction"],
            15,
        ),
        sample(
            2,
            now - Duration::days(3),
            "Getting Started with .NET Core",
            "In this post, we'll explore the basics of .NET Core development and how to build modern web applications.",
            "A beginner's guide to .NET Core development.",
            "Tech Writer",
            true,
            "https://via.placeholder.com/600x300?text=.NET+Core",
            &["dotnet", "programming", "tutorial"],
            42,
        ),
        sample(
            3,
            now - Duration::days(1),
            "Building RESTful APIs",
            "Learn how to design and implement RESTful APIs that are scalable, maintainable, and follow best practices.",
            "Best practices for building RESTful APIs.",
            "API Expert",
            false,
            "https://via.placeholder.com/600x300?text=REST+API",
            &["api", "rest", "backend"],
            8,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: u64,
    at: DateTime<Utc>,
    title: &str,
    content: &str,
    summary: &str,
    author: &str,
    is_published: bool,
    image_url: &str,
    tags: &[&str],
    view_count: u64,
) -> Post {
    Post {
        id: PostId(id),
        title: title.to_string(),
        content: content.to_string(),
        summary: Some(summary.to_string()),
        author: author.to_string(),
        image_url: Some(image_url.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        is_published,
        view_count,
        created_at: at,
        updated_at: at,
    }
}
