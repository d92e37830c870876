use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};

use crate::count::{count_words, merge, WordCounts};
use crate::error::SourceError;
use crate::executor::{self, Config};
use crate::topk::top_k;

/// Result of counting one source. A failed source still yields a value: empty
/// counts plus the error that explains them.
#[derive(Debug)]
pub struct FileCount {
	pub counts: WordCounts,
	pub error: Option<SourceError>,
}

impl FileCount {
	fn failed(error: SourceError) -> Self {
		Self { counts: WordCounts::new(), error: Some(error) }
	}
}

pub fn count_file(path: &Path) -> FileCount {
	let file = match File::open(path) {
		Ok(file) => file,
		Err(source) => return FileCount::failed(SourceError::Open { path: path.to_owned(), source }),
	};

	match count_words(BufReader::new(file)) {
		Ok(counts) => {
			debug!("{}: {} distinct words", path.display(), counts.len());
			FileCount { counts, error: None }
		}
		Err(source) => FileCount::failed(SourceError::Read { path: path.to_owned(), source }),
	}
}

/// Counts every path on its own worker and returns the results in the order
/// the paths were given.
pub fn count_files<P>(paths: &[P], config: Config) -> Vec<FileCount>
where
	P: AsRef<Path> + Sync,
{
	let indexed: Vec<(usize, &Path)> = paths.iter().map(AsRef::as_ref).enumerate().collect();
	info!("counting {} files on up to {} threads", indexed.len(), config.thread_count);

	executor::run(
		&indexed,
		Config { chunk_size: 1, ..config },
		Vec::<(usize, FileCount)>::new,
		|done, &(index, path)| done.push((index, count_file(path))),
		|rx| {
			let mut done: Vec<_> = rx.into_iter().flatten().collect();
			done.sort_unstable_by_key(|&(index, _)| index);
			done.into_iter().map(|(_, count)| count).collect::<Vec<_>>()
		},
	)
}

/// Fans out over `paths`, merges the per-file counts and selects the `k` most
/// frequent words. Sources that failed are returned alongside.
pub fn top_words<P>(paths: &[P], k: usize, config: Config) -> (Vec<(Vec<u8>, usize)>, Vec<SourceError>)
where
	P: AsRef<Path> + Sync,
{
	let mut errors = Vec::new();
	let sources = count_files(paths, config).into_iter().map(|file| {
		errors.extend(file.error);
		file.counts
	});
	let counts = merge(sources);

	let top = top_k(&counts, k).into_iter().map(|(word, count)| (word.to_vec(), count)).collect();
	(top, errors)
}
