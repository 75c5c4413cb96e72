use thiserror::Error;

/// Both conditions are reported the same way; the next menu is the retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("❌ Invalid choice! Please enter a number between 0 and {max}.")]
    ParseFailure { max: i64 },
    #[error("❌ Invalid choice! Please enter a number between 0 and {max}.")]
    UnknownChoice { max: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_read_alike() {
        let parse = Error::ParseFailure { max: 12 };
        let unknown = Error::UnknownChoice { max: 12 };
        assert_eq!(parse.to_string(), unknown.to_string());
        assert_eq!(
            unknown.to_string(),
            "❌ Invalid choice! Please enter a number between 0 and 12."
        );
    }
}
