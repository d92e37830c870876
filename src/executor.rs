use std::sync::{Mutex, mpsc};
use std::thread;

pub struct Config<'a> {
	pub thread_count: usize,
	pub chunk_size: usize,
	#[cfg(feature = "progression")]
	pub bar_step: usize,
	#[cfg(feature = "progression")]
	pub progress_bar: bool,
	#[cfg(feature = "progression")]
	pub bar_config: progression::Config<'a>,
	#[cfg(not(feature = "progression"))]
	pub _phantom: std::marker::PhantomData<&'a ()>,
}

impl Default for Config<'_> {
	#[inline]
	fn default() -> Self {
		Self {
			thread_count: num_cpus::get(),
			chunk_size: 100,
			#[cfg(feature = "progression")]
			bar_step: 10,
			#[cfg(feature = "progression")]
			progress_bar: false,
			#[cfg(feature = "progression")]
			bar_config: progression::Config::default(),
			#[cfg(not(feature = "progression"))]
			_phantom: std::marker::PhantomData,
		}
	}
}

/// Scoped worker pool. Every worker folds the items it claims into its own
/// accumulator, so nothing is shared between workers except the chunk cursor.
pub struct Executor<'a> {
	config: Config<'a>,
}

impl<'a> Executor<'a> {
	#[inline]
	pub fn new(config: Config<'a>) -> Self {
		Self { config }
	}

	/// Runs `work` over `items` on up to `thread_count` workers and hands the
	/// per-worker accumulators to `gather` once every worker has finished.
	pub fn run<T, I, R, W, G>(&mut self, items: &[T], init: fn() -> I, work: W, mut gather: G) -> R
	where
		T: Sync,
		I: Send,
		R: Send,
		W: Fn(&mut I, &T) + Sync,
		G: FnMut(mpsc::Receiver<I>) -> R,
	{
		let thread_count = self.config.thread_count.min(items.len()).max(1);
		let chunk_size = self.config.chunk_size.min(items.len() / thread_count + 1).max(1);
		#[cfg(feature = "progression")]
		let bar = self.config.progress_bar.then(|| progression::Bar::new(items.len().try_into().unwrap(), self.config.bar_config.clone()));
		#[cfg(feature = "progression")]
		let bar_step = if self.config.progress_bar { self.config.bar_step.max(1) } else { chunk_size };
		#[cfg(not(feature = "progression"))]
		let bar_step = chunk_size;
		let chunks = Mutex::new(items.chunks(chunk_size));

		thread::scope(|scope| {
			let (sender, receiver) = mpsc::channel();

			for _ in 0..thread_count {
				let sender = sender.clone();
				let chunks = &chunks;
				let work = &work;
				#[cfg(feature = "progression")]
				let bar = &bar;

				scope.spawn(move || {
					let mut acc = init();

					#[allow(clippy::redundant_closure_call)]
					while let Some(chunk) = (|| chunks.lock().unwrap().next())() {
						for bar_chunk in chunk.chunks(bar_step) {
							for item in bar_chunk {
								work(&mut acc, item);
							}

							#[cfg(feature = "progression")]
							if let Some(bar) = bar {
								bar.inc(bar_chunk.len().try_into().unwrap());
							}
						}
					}

					sender.send(acc).unwrap()
				});
			}

			drop(sender);
			gather(receiver)
		})
	}
}

#[inline]
pub fn run<T, I, R, W, G>(items: &[T], config: Config, init: fn() -> I, work: W, gather: G) -> R
where
	T: Sync,
	I: Send,
	R: Send,
	W: Fn(&mut I, &T) + Sync,
	G: FnMut(mpsc::Receiver<I>) -> R,
{
	Executor::new(config).run(items, init, work, gather)
}

impl Default for Executor<'_> {
	#[inline]
	fn default() -> Self {
		Executor::new(Config::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn it_should_fold_every_item_once() {
		let items: Vec<u64> = (1..=1000).collect();

		let sum = run(
			&items,
			Config { thread_count: 4, chunk_size: 7, ..Default::default() },
			|| 0,
			|acc, i| *acc += i,
			|rx| rx.iter().sum::<u64>(),
		);

		assert_eq!(sum, 500_500);
	}

	#[test]
	fn it_should_not_spawn_more_workers_than_items() {
		let workers = run(
			&[1, 2],
			Config { thread_count: 16, chunk_size: 1, ..Default::default() },
			|| (),
			|_, _| {},
			|rx| rx.iter().count(),
		);

		assert_eq!(workers, 2);
	}

	#[test]
	fn it_should_gather_on_empty_input() {
		let items: [u32; 0] = [];

		let collected = run(
			&items,
			Config::default(),
			Vec::<u32>::new,
			|acc, &i| acc.push(i),
			|rx| rx.into_iter().flatten().collect::<Vec<_>>(),
		);

		assert!(collected.is_empty());
	}

	#[test]
	fn it_should_be_reusable() {
		let mut executor = Executor::new(Config { thread_count: 3, chunk_size: 1, ..Default::default() });
		let input = [1, 2, 3, 4, 5];

		for _ in 0..100 {
			let sum = executor.run(&input, || 0, |acc, i| *acc += i * i, |rx| rx.iter().sum::<i64>());
			assert_eq!(sum, 55);
		}
	}
}
