//! Descriptive statistics over line-delimited JSON post records.
//!
//! [`Loader`] reads the input into a [`Table`] and a [`LikerIndex`] in one pass, and
//! [`analysis`] runs the queries over them. [`run`] does both.

pub mod analysis;
pub mod config;
pub mod error;
pub mod loader;
pub mod posts;

pub use analysis::{analyze, run, run_with, Report};
pub use config::{MalformedLines, RunConfig};
pub use error::{Error, Result};
pub use loader::{LoadReport, Loaded, Loader, SkippedLine};
pub use posts::{Id, LikerIndex, Post, Table};
