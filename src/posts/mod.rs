mod liker_index;

use std::{collections::HashSet, fmt};

use serde::Deserialize;

pub use self::liker_index::LikerIndex;

/// Opaque identifier as it appears in the input, either a JSON integer or a string.
///
/// `1` and `"1"` are different ids. Integers above `i64::MAX` land in `UInt`, so every
/// integer has exactly one representation.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Int(i64),
    UInt(u64),
    Str(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::UInt(id) => write!(f, "{id}"),
            Self::Str(id) => f.write_str(id),
        }
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self::Str(id.to_string())
    }
}

pub type LikeCount = u64;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Post {
    pub post_id: Id,
    pub author_id: Id,
    pub blog_id: Id,
    pub title: Option<String>,
    pub like_count: LikeCount,
}

/// Posts in input order. Queries read it one column at a time.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Table {
    posts: Vec<Post>,
}

impl Table {
    pub const fn new() -> Self {
        Self { posts: Vec::new() }
    }

    pub fn push(&mut self, post: Post) {
        self.posts.push(post);
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    pub fn like_counts(&self) -> impl Iterator<Item = LikeCount> + '_ {
        self.posts.iter().map(|post| post.like_count)
    }

    pub fn author_ids(&self) -> impl Iterator<Item = &Id> {
        self.posts.iter().map(|post| &post.author_id)
    }

    pub fn titles(&self) -> impl Iterator<Item = Option<&str>> {
        self.posts.iter().map(|post| post.title.as_deref())
    }

    pub fn distinct_authors(&self) -> HashSet<&Id> {
        self.author_ids().collect()
    }
}

impl FromIterator<Post> for Table {
    fn from_iter<I: IntoIterator<Item = Post>>(iter: I) -> Self {
        Self {
            posts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
pub(crate) fn post(post_id: i64, author_id: &str, title: Option<&str>, like_count: u64) -> Post {
    Post {
        post_id: Id::Int(post_id),
        author_id: Id::from(author_id),
        blog_id: Id::from("b1"),
        title: title.map(str::to_string),
        like_count,
    }
}
