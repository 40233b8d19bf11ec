//! Data generation utilities for testing.
//!
//! This module produces a synthetic forum-post dataset, one post per line in the
//! form `subreddit,author,title,score`. Generation is seeded, so the same
//! `(count, seed)` pair always yields the same text.

use anyhow::Context;

/// Communities the generated posts are spread over.
pub const SUBREDDITS: &[&str] = &[
    "AskReddit",
    "rust",
    "science",
    "worldnews",
    "aww",
    "gaming",
];

const AUTHORS: &[&str] = &[
    "ferris", "crabby", "oxide", "borrowck", "lifetimes", "unsafe_cell", "tokio_rs",
];

const TITLE_WORDS: &[&str] = &[
    "the", "a", "what", "is", "why", "compiler", "cats", "today", "found", "new", "rust",
    "release", "space", "study", "shows", "game", "my", "first", "best", "ever", "2018",
];

/// A single parsed post.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Post {
    pub subreddit: String,
    pub author: String,
    pub title: String,
    pub score: i64,
}

/// Parses one `subreddit,author,title,score` line.
pub fn parse_post(line: &str) -> anyhow::Result<Post> {
    let fields: Vec<&str> = line.split(',').collect();
    let [subreddit, author, title, score] = fields.as_slice() else {
        anyhow::bail!("expected 4 fields, found {} in {line:?}", fields.len());
    };
    let score = score
        .trim()
        .parse()
        .with_context(|| format!("invalid score {score:?}"))?;
    Ok(Post {
        subreddit: subreddit.to_string(),
        author: author.to_string(),
        title: title.to_string(),
        score,
    })
}

/// Generates `count` posts as newline-separated CSV text.
///
/// # Arguments
///
/// * `count` - The number of posts to generate.
/// * `seed` - Seed for the random generator; equal seeds give equal output.
pub fn generate_posts_csv(count: usize, seed: u64) -> String {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut text = String::new();
    for _ in 0..count {
        let subreddit = SUBREDDITS[rng.usize(..SUBREDDITS.len())];
        let author = AUTHORS[rng.usize(..AUTHORS.len())];
        let title = (0..rng.usize(3..8))
            .map(|_| TITLE_WORDS[rng.usize(..TITLE_WORDS.len())])
            .collect::<Vec<_>>()
            .join(" ");
        let score = rng.i64(-5..500);
        text.push_str(&format!("{subreddit},{author},{title},{score}\n"));
    }
    text
}

/// Generates `count` posts and parses them back into [`Post`] records.
pub fn generate_posts(count: usize, seed: u64) -> anyhow::Result<Vec<Post>> {
    generate_posts_csv(count, seed)
        .lines()
        .map(parse_post)
        .collect()
}
