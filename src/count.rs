use std::collections::HashMap;
use std::io::{self, BufRead};

/// Lowercased word bytes mapped to the number of times they occurred.
pub type WordCounts = HashMap<Vec<u8>, usize>;

// Same set as C `isspace` in the "C" locale; `u8::is_ascii_whitespace` leaves out \v.
#[inline]
fn is_space(byte: u8) -> bool {
	matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

#[inline]
fn bump(counts: &mut WordCounts, word: &mut Vec<u8>) {
	if let Some(count) = counts.get_mut(word.as_slice()) {
		*count += 1;
	} else {
		counts.insert(word.clone(), 1);
	}

	word.clear();
}

/// Splits `reader` on whitespace runs and counts every token after ASCII
/// case folding. Tokens may span buffer refills.
pub fn count_words<R: BufRead>(mut reader: R) -> io::Result<WordCounts> {
	let mut counts = WordCounts::new();
	let mut word = Vec::with_capacity(64);

	loop {
		let consumed = {
			let buf = match reader.fill_buf() {
				Ok(buf) => buf,
				Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
				Err(e) => return Err(e),
			};

			if buf.is_empty() {
				break;
			}

			for &byte in buf {
				if is_space(byte) {
					if !word.is_empty() {
						bump(&mut counts, &mut word);
					}
				} else {
					word.push(byte.to_ascii_lowercase());
				}
			}

			buf.len()
		};

		reader.consume(consumed);
	}

	if !word.is_empty() {
		bump(&mut counts, &mut word);
	}

	Ok(counts)
}

/// Sums per-source counts into one mapping.
pub fn merge<I>(sources: I) -> WordCounts
where
	I: IntoIterator<Item = WordCounts>,
{
	sources.into_iter().fold(WordCounts::new(), |mut merged, counts| {
		if merged.is_empty() {
			return counts;
		}

		for (word, count) in counts {
			*merged.entry(word).or_default() += count;
		}

		merged
	})
}
