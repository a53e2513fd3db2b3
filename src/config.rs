pub const DEFAULT_INPUT_PATH: &str = "posts.jsonl";
pub const DEFAULT_SEARCH_WORD: &str = "red";

/// What the loader does with a line it cannot turn into a post.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MalformedLines {
    /// Stop at the first bad line and return its error.
    #[default]
    Abort,
    /// Log the line, record it in the load report and keep going.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub word: String,
    pub malformed: MalformedLines,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            word: DEFAULT_SEARCH_WORD.to_string(),
            malformed: MalformedLines::default(),
        }
    }
}
