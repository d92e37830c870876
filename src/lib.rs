pub mod count;
pub mod error;
pub mod executor;
pub mod pipeline;
pub mod report;
pub mod topk;

pub use count::{count_words, merge, WordCounts};
pub use error::SourceError;
pub use executor::{run, Config, Executor};
pub use pipeline::{count_file, count_files, top_words, FileCount};
pub use report::{write_elapsed, write_top};
pub use topk::top_k;

/// How many words are reported when no other count is asked for.
pub const DEFAULT_TOP: usize = 10;
