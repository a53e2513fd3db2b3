mod report;
mod stats;
mod word_search;

use std::path::Path;

pub use self::{
    report::Report,
    stats::{authors_without_likes, like_count_stats, mean_posts_per_author, CentralTendency},
    word_search::{count_word_matches, WordMatcher},
};

use crate::{
    config::RunConfig,
    error::Result,
    loader::{Loaded, Loader},
};

/// Runs the four queries over an already loaded table and index.
pub fn analyze(loaded: &Loaded, matcher: &WordMatcher) -> Report {
    let Loaded {
        table,
        likers,
        report: load_report,
    } = loaded;

    let like_counts = like_count_stats(table);
    tracing::debug!(?like_counts, "Computed like count stats");

    let posts_per_author = mean_posts_per_author(table);
    tracing::debug!(?posts_per_author, "Computed posts per author");

    let word_matches = matcher.count_matches(table);
    tracing::debug!(word = matcher.word(), word_matches, "Searched titles");

    let authors_without_likes = authors_without_likes(table, likers);
    tracing::debug!(authors_without_likes, "Counted authors without likes");

    Report {
        posts: table.len(),
        authors: table.distinct_authors().len(),
        likers: likers.len(),
        skipped_lines: load_report.skipped.len(),
        like_counts,
        posts_per_author,
        word: matcher.word().to_string(),
        word_matches,
        authors_without_likes,
    }
}

/// Loads `path` and analyzes it with the default configuration.
pub fn run(path: impl AsRef<Path>) -> Result<Report> {
    run_with(path, &RunConfig::default())
}

pub fn run_with(path: impl AsRef<Path>, config: &RunConfig) -> Result<Report> {
    // A bad word fails before the input is read.
    let matcher = WordMatcher::new(&config.word)?;

    let loaded = Loader::new(config.malformed).load(path)?;
    Ok(analyze(&loaded, &matcher))
}
