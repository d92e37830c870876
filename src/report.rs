use std::io::{self, Write};
use std::time::Duration;

/// Writes one `count word` line per entry with the count right-aligned to four columns.
pub fn write_top<W, S>(out: &mut W, entries: &[(S, usize)]) -> io::Result<()>
where
	W: Write,
	S: AsRef<[u8]>,
{
	for (word, count) in entries {
		write!(out, "{count:>4} ")?;
		out.write_all(word.as_ref())?;
		out.write_all(b"\n")?;
	}

	Ok(())
}

pub fn write_elapsed<W: Write>(out: &mut W, elapsed: Duration) -> io::Result<()> {
	writeln!(out, "Elapsed time is {} us", elapsed.as_micros())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn render(entries: &[(&[u8], usize)]) -> String {
		let mut out = Vec::new();
		write_top(&mut out, entries).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[test]
	fn it_should_right_align_counts() {
		let entries: [(&[u8], usize); 3] = [(b"b", 3), (b"a", 2), (b"c", 1)];

		assert_eq!(render(&entries), "   3 b\n   2 a\n   1 c\n");
	}

	#[test]
	fn it_should_widen_for_large_counts() {
		let entries: [(&[u8], usize); 2] = [(b"the", 123_456), (b"of", 1234)];

		assert_eq!(render(&entries), "123456 the\n1234 of\n");
	}

	#[test]
	fn it_should_write_raw_word_bytes() {
		let entries: [(&[u8], usize); 2] = [(b"\xff", 2), (b"\xfe", 1)];
		let mut out = Vec::new();
		write_top(&mut out, &entries).unwrap();

		assert_eq!(out, b"   2 \xff\n   1 \xfe\n");
	}

	#[test]
	fn it_should_print_nothing_for_no_entries() {
		assert_eq!(render(&[]), "");
	}

	#[test]
	fn it_should_report_microseconds() {
		let mut out = Vec::new();
		write_elapsed(&mut out, Duration::from_millis(12)).unwrap();

		assert_eq!(out, b"Elapsed time is 12000 us\n");
	}
}
