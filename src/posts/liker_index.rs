use std::collections::HashMap;

use super::Id;

/// Liker id to the ids of the posts they liked, in the order the likes were seen.
///
/// Duplicate likes and self-likes are kept as they appear in the input.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct LikerIndex {
    map: HashMap<Id, Vec<Id>>,
}

impl LikerIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, liker: Id, post_id: Id) {
        self.map.entry(liker).or_default().push(post_id);
    }

    pub fn contains(&self, liker: &Id) -> bool {
        self.map.contains_key(liker)
    }

    pub fn liked_by(&self, liker: &Id) -> Option<&[Id]> {
        self.map.get(liker).map(Vec::as_slice)
    }

    /// Number of distinct likers.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
