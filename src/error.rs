use std::io;
use std::path::PathBuf;

/// Why a source contributed nothing to the tally.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("failed to open file {}: {source}", path.display())]
	Open {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to read file {}: {source}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl SourceError {
	pub fn path(&self) -> &std::path::Path {
		match self {
			Self::Open { path, .. } | Self::Read { path, .. } => path,
		}
	}
}
