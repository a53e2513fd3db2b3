use std::collections::HashMap;

use crate::posts::{Id, LikerIndex, Table};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralTendency {
    pub mean: f64,
    pub median: f64,
}

/// Mean and median of the like counts, or `None` for an empty table.
#[allow(clippy::cast_precision_loss)]
pub fn like_count_stats(table: &Table) -> Option<CentralTendency> {
    let mut counts: Vec<u64> = table.like_counts().collect();
    if counts.is_empty() {
        return None;
    }

    counts.sort_unstable();

    let mean = counts.iter().map(|&count| count as f64).sum::<f64>() / counts.len() as f64;
    let mid = counts.len() / 2;
    let median = if counts.len() % 2 == 0 {
        (counts[mid - 1] as f64 + counts[mid] as f64) / 2.0
    } else {
        counts[mid] as f64
    };

    Some(CentralTendency { mean, median })
}

/// Mean of the per-author post counts, or `None` for an empty table.
#[allow(clippy::cast_precision_loss)]
pub fn mean_posts_per_author(table: &Table) -> Option<f64> {
    let mut posts_per_author: HashMap<&Id, usize> = HashMap::new();
    for author in table.author_ids() {
        *posts_per_author.entry(author).or_insert(0) += 1;
    }

    if posts_per_author.is_empty() {
        return None;
    }

    let total: usize = posts_per_author.values().sum();
    Some(total as f64 / posts_per_author.len() as f64)
}

/// Distinct authors that never appear as a liker, whether or not their own posts got likes.
pub fn authors_without_likes(table: &Table, likers: &LikerIndex) -> usize {
    table
        .distinct_authors()
        .into_iter()
        .filter(|author| !likers.contains(author))
        .count()
}
