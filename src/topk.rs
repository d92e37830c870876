use std::cmp::Ordering;

use crate::count::WordCounts;

// Count descending, then word ascending so equal counts come out in a fixed order.
#[inline]
fn rank(a: &(&[u8], usize), b: &(&[u8], usize)) -> Ordering {
	b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Returns the `k` most frequent words, highest count first. Ties are broken
/// by ascending byte order of the word. Fewer than `k` distinct words yields
/// all of them.
pub fn top_k(counts: &WordCounts, k: usize) -> Vec<(&[u8], usize)> {
	if k == 0 {
		return Vec::new();
	}

	let mut entries: Vec<(&[u8], usize)> = counts.iter().map(|(word, &count)| (word.as_slice(), count)).collect();

	if k < entries.len() {
		entries.select_nth_unstable_by(k - 1, rank);
		entries.truncate(k);
	}

	entries.sort_unstable_by(rank);
	entries
}
