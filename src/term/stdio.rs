//! Plain frontend for pipes, redirected files and tests.

use crate::menu::{Event, Runtime};
use std::io::{self, BufRead, Read, Write};

/// Longest line kept; the rest of a longer line is skipped.
pub const MAX_LINE_LEN: u64 = 1024;

pub fn run<R: BufRead, W: Write>(
    runtime: &mut Runtime<'_>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        match runtime.execute() {
            Event::Print(s) => write!(output, "{}", s)?,
            Event::Error(s) => writeln!(output, "\n{}", s)?,
            Event::Input(prompt) => {
                write!(output, "{}", prompt)?;
                output.flush()?;
                match read_line(input)? {
                    Some(line) => runtime.enter(&line),
                    None => {
                        writeln!(output)?;
                        runtime.close();
                    }
                }
            }
            Event::Running => {}
            Event::Stopped => break,
        }
    }
    output.flush()
}

/// Consumes exactly one line, whatever it contains. `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    let len = input.by_ref().take(MAX_LINE_LEN).read_until(b'\n', &mut buf)?;
    if len == 0 {
        return Ok(None);
    }
    if buf.last() != Some(&b'\n') && len as u64 == MAX_LINE_LEN {
        skip_line(input)?;
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

fn skip_line<R: BufRead>(input: &mut R) -> io::Result<()> {
    loop {
        let (used, done) = {
            let available = input.fill_buf()?;
            if available.is_empty() {
                return Ok(());
            }
            match available.iter().position(|b| *b == b'\n') {
                Some(index) => (index + 1, true),
                None => (available.len(), false),
            }
        };
        input.consume(used);
        if done {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_consumes_whole_lines() {
        let mut input = Cursor::new(b"abc 12 junk\n7\n".to_vec());
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("abc 12 junk\n"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("7\n"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_read_line_survives_bad_utf8() {
        let mut input = Cursor::new(b"\xff\xfe\n3".to_vec());
        assert!(read_line(&mut input).unwrap().is_some());
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_long_line_is_capped_and_skipped() {
        let mut bytes = vec![b'x'; 10_000];
        bytes.extend_from_slice(b"\n7\n");
        let mut input = Cursor::new(bytes);
        let first = read_line(&mut input).unwrap().unwrap();
        assert_eq!(first.len() as u64, MAX_LINE_LEN);
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("7\n"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_line_at_limit_keeps_next_line() {
        let mut bytes = vec![b'y'; MAX_LINE_LEN as usize - 1];
        bytes.extend_from_slice(b"\n5\n");
        let mut input = Cursor::new(bytes);
        assert!(read_line(&mut input).unwrap().unwrap().ends_with('\n'));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("5\n"));
    }

    #[test]
    fn test_long_line_without_newline() {
        let mut input = Cursor::new(vec![b'z'; 5_000]);
        assert!(read_line(&mut input).unwrap().is_some());
        assert_eq!(read_line(&mut input).unwrap(), None);
    }
}
