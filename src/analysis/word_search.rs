use regex::{Regex, RegexBuilder};

use crate::{
    error::{Error, Result},
    posts::Table,
};

/// Case-insensitive whole-word matcher.
///
/// Every title is scanned with the same pattern, so a search costs one pass over the table.
/// An inverted index (word to post ids) would make lookups constant time.
pub struct WordMatcher {
    word: String,
    regex: Regex,
}

impl WordMatcher {
    pub fn new(word: &str) -> Result<Self> {
        let word = word.trim();
        if word.is_empty() {
            return Err(Error::Generic("Search word must not be empty".to_string()));
        }

        Ok(Self {
            word: word.to_string(),
            regex: RegexBuilder::new(&format!(r"\b{}\b", regex::escape(word)))
                .case_insensitive(true)
                .build()
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Posts without a title never match.
    pub fn count_matches(&self, table: &Table) -> usize {
        table
            .titles()
            .flatten()
            .filter(|title| self.is_match(title))
            .count()
    }
}

pub fn count_word_matches(table: &Table, word: &str) -> Result<usize> {
    Ok(WordMatcher::new(word)?.count_matches(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::post;

    fn matcher(word: &str) -> WordMatcher {
        WordMatcher::new(word).expect("Failed to build matcher")
    }

    #[test]
    fn whole_words_only() {
        let red = matcher("red");

        assert!(red.is_match("My Red Car"));
        assert!(red.is_match("red-eye"));
        assert!(red.is_match("bored and red"));
        assert!(red.is_match("RED"));
        assert!(!red.is_match("bored"));
        assert!(!red.is_match("credible"));
        assert!(!red.is_match("redden"));
    }

    #[test]
    fn word_is_matched_literally() {
        let dotted = matcher("r.d");

        assert!(dotted.is_match("an r.d title"));
        assert!(!dotted.is_match("red"));
    }

    #[test]
    fn word_is_trimmed() {
        assert_eq!(matcher(" red ").word(), "red");
    }

    #[test]
    fn empty_word_is_rejected() {
        assert!(matches!(WordMatcher::new("  "), Err(Error::Generic(_))));
    }

    #[test]
    fn counts_rows_not_occurrences() {
        let table: Table = vec![
            post(1, "a", Some("red red red"), 1),
            post(2, "a", Some("Red car"), 1),
            post(3, "b", Some("credible"), 1),
            post(4, "b", None, 1),
        ]
        .into_iter()
        .collect();

        assert_eq!(count_word_matches(&table, "red").expect("Failed to search"), 2);
        assert_eq!(count_word_matches(&Table::new(), "red").expect("Failed to search"), 0);
    }

    #[test]
    fn case_insensitive_never_counts_fewer() {
        let table: Table = vec![
            post(1, "a", Some("Red"), 1),
            post(2, "a", Some("red"), 1),
            post(3, "a", Some("RED sky"), 1),
        ]
        .into_iter()
        .collect();

        let exact = Regex::new(r"\bred\b").expect("Failed to compile regex");
        let exact_count = table.titles().flatten().filter(|t| exact.is_match(t)).count();

        assert_eq!(exact_count, 1);
        assert!(matcher("red").count_matches(&table) >= exact_count);
        assert_eq!(matcher("red").count_matches(&table), 3);
    }
}
