/// One parsed menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Valid(i64),
    Invalid,
}

impl Choice {
    /// Parses the first token of a whole input line. The rest of the
    /// line is discarded with it.
    pub fn parse(line: &str) -> Choice {
        match line.split_whitespace().next().map(str::parse::<i64>) {
            Some(Ok(num)) => Choice::Valid(num),
            _ => Choice::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integers() {
        assert_eq!(Choice::parse("4"), Choice::Valid(4));
        assert_eq!(Choice::parse("  12\n"), Choice::Valid(12));
        assert_eq!(Choice::parse("-1"), Choice::Valid(-1));
        assert_eq!(Choice::parse("+3"), Choice::Valid(3));
        assert_eq!(Choice::parse("7 trailing words"), Choice::Valid(7));
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(Choice::parse("abc"), Choice::Invalid);
        assert_eq!(Choice::parse("4abc"), Choice::Invalid);
        assert_eq!(Choice::parse("1.5"), Choice::Invalid);
        assert_eq!(Choice::parse(""), Choice::Invalid);
        assert_eq!(Choice::parse("99999999999999999999999"), Choice::Invalid);
    }
}
