use std::fmt;

use super::stats::CentralTendency;

const NOT_AVAILABLE: &str = "n/a (no posts)";

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub posts: usize,
    pub authors: usize,
    pub likers: usize,
    pub skipped_lines: usize,
    pub like_counts: Option<CentralTendency>,
    pub posts_per_author: Option<f64>,
    pub word: String,
    pub word_matches: usize,
    pub authors_without_likes: usize,
}

struct Float(Option<f64>);

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            // Debug keeps the trailing ".0" on whole numbers.
            Some(value) => write!(f, "{value:?}"),
            None => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Summary =====")?;
        writeln!(f, "Posts: {}", self.posts)?;
        writeln!(f, "Authors: {}", self.authors)?;
        writeln!(f, "Likers: {}", self.likers)?;
        writeln!(f, "Skipped Lines: {}", self.skipped_lines)?;
        writeln!(f)?;

        writeln!(f, "===== Question 1 =====")?;
        writeln!(f, "Mean: {}", Float(self.like_counts.map(|c| c.mean)))?;
        writeln!(f, "Median: {}", Float(self.like_counts.map(|c| c.median)))?;
        writeln!(f)?;

        writeln!(f, "===== Question 2 =====")?;
        writeln!(
            f,
            "Mean Number of Posts Per Author: {}",
            Float(self.posts_per_author)
        )?;
        writeln!(f)?;

        writeln!(f, "===== Question 3 =====")?;
        writeln!(
            f,
            "Number of Posts Containing '{}': {}",
            self.word, self.word_matches
        )?;
        writeln!(f)?;

        writeln!(f, "===== Question 4 =====")?;
        writeln!(
            f,
            "Number of Authors Who Haven't Liked Any Posts: {}",
            self.authors_without_likes
        )
    }
}
