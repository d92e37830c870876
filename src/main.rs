use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use topk_words::{write_elapsed, write_top, Config, DEFAULT_TOP};

/// Print the most frequent words across one or more text files
#[derive(Parser, Debug)]
#[command(name = "topk_words", version, about)]
struct Args {
	/// Text files to count; each one is counted on its own worker
	#[arg(required = true, value_name = "FILES")]
	files: Vec<PathBuf>,

	/// Number of words to report
	#[arg(short = 'k', long = "top", default_value_t = DEFAULT_TOP)]
	top: usize,

	/// Worker threads (defaults to the number of CPUs)
	#[arg(short = 'j', long)]
	threads: Option<usize>,

	/// Show a progress bar while files are counted
	#[cfg(feature = "progression")]
	#[arg(long)]
	progress: bool,
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
	let args = Args::parse();
	let start = Instant::now();

	let mut config = Config::default();
	if let Some(threads) = args.threads {
		config.thread_count = threads.max(1);
	}
	#[cfg(feature = "progression")]
	{
		config.progress_bar = args.progress;
	}

	let (top, errors) = topk_words::top_words(&args.files, args.top, config);

	for error in &errors {
		eprintln!("{error}");
	}

	let mut stdout = BufWriter::new(stdout().lock());
	write_top(&mut stdout, &top).context("failed to write results")?;
	write_elapsed(&mut stdout, start.elapsed()).context("failed to write results")?;
	stdout.flush().context("failed to write results")?;

	Ok(())
}
