use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use serde::Deserialize;
use serde_json::Value;

use crate::{
    config::MalformedLines,
    error::{Error, Result},
    posts::{Id, LikeCount, LikerIndex, Post, Table},
};

const REQUIRED_FIELDS: [&str; 5] = ["post_id", "author_id", "blog_id", "title", "like_count"];

#[derive(Debug, Deserialize)]
struct PostRecord {
    post_id: Id,
    author_id: Id,
    blog_id: Id,
    title: Option<String>,
    like_count: LikeCount,
    #[serde(default)]
    liker_ids: Option<Vec<Id>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub lines_read: usize,
    pub posts_loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

/// Everything the analysis needs from one pass over the input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub table: Table,
    pub likers: LikerIndex,
    pub report: LoadReport,
}

impl Loaded {
    fn insert(&mut self, record: PostRecord) {
        for liker in record.liker_ids.unwrap_or_default() {
            self.likers.record(liker, record.post_id.clone());
        }

        self.table.push(Post {
            post_id: record.post_id,
            author_id: record.author_id,
            blog_id: record.blog_id,
            title: record.title,
            like_count: record.like_count,
        });
        self.report.posts_loaded += 1;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Loader {
    malformed: MalformedLines,
}

impl Loader {
    pub const fn new(malformed: MalformedLines) -> Self {
        Self { malformed }
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<Loaded> {
        let path = path.as_ref();
        tracing::info!("Loading posts from {}", path.display());

        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_from_reader(BufReader::new(file))
    }

    pub fn load_from_reader<R: BufRead>(&self, mut reader: R) -> Result<Loaded> {
        let mut loaded = Loaded::default();
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }

            loaded.report.lines_read += 1;
            let line = loaded.report.lines_read;

            match parse_line(line, &buffer) {
                Ok(record) => {
                    tracing::debug!(line, post_id = %record.post_id, "Parsed post");
                    loaded.insert(record);
                }
                Err(err) => match (self.malformed, err.line()) {
                    (MalformedLines::Skip, Some(line)) => {
                        tracing::warn!("Skipping {err}");
                        loaded.report.skipped.push(SkippedLine {
                            line,
                            reason: err.to_string(),
                        });
                    }
                    _ => return Err(err),
                },
            }
        }

        tracing::info!(
            "Loaded {} posts from {} lines ({} skipped, {} likers)",
            loaded.report.posts_loaded,
            loaded.report.lines_read,
            loaded.report.skipped.len(),
            loaded.likers.len()
        );

        Ok(loaded)
    }
}

/// A blank line is not valid JSON and fails like any other malformed line.
fn parse_line(line: usize, bytes: &[u8]) -> Result<PostRecord> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| Error::Encoding { line })?
        .trim();

    let value: Value = serde_json::from_str(text).map_err(|source| Error::Parse { line, source })?;

    let object = value.as_object().ok_or(Error::NotAnObject { line })?;
    if let Some(field) = REQUIRED_FIELDS
        .into_iter()
        .find(|field| !object.contains_key(*field))
    {
        return Err(Error::MissingField { line, field });
    }

    serde_json::from_value(value).map_err(|source| Error::InvalidField { line, source })
}
