//! File parsing functionality for the input vector
//!
//! This module handles loading the comma-separated integer file and turning
//! it into an ordered sequence of numbers.

use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during file parsing
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Malformed number {token:?} at position {position}")]
    MalformedNumber { token: String, position: usize },
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Policy for handling the final token produced by splitting on the delimiter.
///
/// The input convention is `n1,n2,...,nk,` with a trailing comma, so the split
/// always yields one extra token at the end. [`TailPolicy::DropAlways`] keeps
/// that convention faithfully by discarding the final token unconditionally;
/// [`TailPolicy::DropEmpty`] only discards it when it is actually empty, so a
/// file that does not end in a delimiter keeps its last value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TailPolicy {
    /// Discard the final token unconditionally
    #[default]
    DropAlways,
    /// Discard the final token only when it is empty
    DropEmpty,
}

impl FromStr for TailPolicy {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "drop-always" => Ok(TailPolicy::DropAlways),
            "drop-empty" => Ok(TailPolicy::DropEmpty),
            other => Err(format!(
                "unknown tail policy {:?}, expected 'drop-always' or 'drop-empty'",
                other
            )),
        }
    }
}

/// Parse the input file and load the number sequence
///
/// This function:
/// - Reads the entire file into memory as text
/// - Splits the contents on `,` and applies the tail policy
/// - Parses every remaining token as a base-10 integer
///
/// # Arguments
/// * `file_path` - Path to the comma-separated integer file
/// * `policy` - How to treat the final token after splitting
///
/// # Returns
/// * `Ok(Vec<i64>)` - The parsed sequence in file order
/// * `Err(ParsingError)` - If file reading or token parsing failed
pub fn parse_vector(file_path: &Path, policy: TailPolicy) -> Result<Vec<i64>> {
    let raw = fs::read_to_string(file_path)?;
    parse_tokens(&raw, policy)
}

/// Splits raw text on `,` and parses each kept token as an integer
///
/// A trailing end-of-file newline is trimmed before splitting so that it does
/// not leak into the final token. Whitespace inside tokens is not accepted;
/// such tokens fail as malformed with their 0-based position reported.
pub fn parse_tokens(raw: &str, policy: TailPolicy) -> Result<Vec<i64>> {
    let mut tokens: Vec<&str> = raw.trim_end().split(',').collect();

    match policy {
        TailPolicy::DropAlways => {
            tokens.pop();
        }
        TailPolicy::DropEmpty => {
            if tokens.last() == Some(&"") {
                tokens.pop();
            }
        }
    }

    // A file holding only the delimiter (or nothing) parses to an empty
    // sequence rather than one malformed empty token.
    if tokens == [""] {
        tokens.clear();
    }

    tokens
        .iter()
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<i64>()
                .map_err(|_| ParsingError::MalformedNumber {
                    token: (*token).to_string(),
                    position,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens_well_formed() {
        let numbers = parse_tokens("3,7,2,9,", TailPolicy::DropAlways).unwrap();
        assert_eq!(numbers, vec![3, 7, 2, 9]);
    }

    #[test]
    fn test_parse_tokens_trailing_newline() {
        let numbers = parse_tokens("3,7,2,9,\n", TailPolicy::DropAlways).unwrap();
        assert_eq!(numbers, vec![3, 7, 2, 9]);
    }

    #[test]
    fn test_parse_tokens_negative_values() {
        let numbers = parse_tokens("-5,0,12,", TailPolicy::DropAlways).unwrap();
        assert_eq!(numbers, vec![-5, 0, 12]);
    }

    #[test]
    fn test_drop_always_discards_real_data_without_trailing_comma() {
        // The faithful convention: the last token goes away even when it
        // holds a real value.
        let numbers = parse_tokens("1,2,3", TailPolicy::DropAlways).unwrap();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_drop_empty_keeps_nonempty_tail() {
        let numbers = parse_tokens("1,2,3", TailPolicy::DropEmpty).unwrap();
        assert_eq!(numbers, vec![1, 2, 3]);

        let numbers = parse_tokens("1,2,3,", TailPolicy::DropEmpty).unwrap();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_tokens_only_delimiter() {
        let numbers = parse_tokens(",", TailPolicy::DropAlways).unwrap();
        assert!(numbers.is_empty());

        let numbers = parse_tokens(",", TailPolicy::DropEmpty).unwrap();
        assert!(numbers.is_empty());
    }

    #[test]
    fn test_parse_tokens_empty_file() {
        let numbers = parse_tokens("", TailPolicy::DropAlways).unwrap();
        assert!(numbers.is_empty());

        let numbers = parse_tokens("", TailPolicy::DropEmpty).unwrap();
        assert!(numbers.is_empty());
    }

    #[test]
    fn test_parse_tokens_malformed_number() {
        let result = parse_tokens("1,two,3,", TailPolicy::DropAlways);
        match result {
            Err(ParsingError::MalformedNumber { token, position }) => {
                assert_eq!(token, "two");
                assert_eq!(position, 1);
            }
            other => panic!("expected MalformedNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_tokens_interior_empty_token() {
        // An empty token in the middle is malformed, only the tail is special.
        let result = parse_tokens("1,,3,", TailPolicy::DropAlways);
        match result {
            Err(ParsingError::MalformedNumber { token, position }) => {
                assert_eq!(token, "");
                assert_eq!(position, 1);
            }
            other => panic!("expected MalformedNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_tokens_whitespace_in_token() {
        let result = parse_tokens("1, 2,3,", TailPolicy::DropAlways);
        assert!(matches!(
            result,
            Err(ParsingError::MalformedNumber { position: 1, .. })
        ));
    }

    #[test]
    fn test_round_trip() {
        let numbers = vec![3i64, 7, 2, 9];
        let serialized: String = numbers.iter().map(|n| format!("{},", n)).collect();
        let reparsed = parse_tokens(&serialized, TailPolicy::DropAlways).unwrap();
        assert_eq!(reparsed, numbers);
    }

    #[test]
    fn test_parse_vector_missing_file() {
        let result = parse_vector(
            Path::new("/nonexistent/does-not-exist.txt"),
            TailPolicy::DropAlways,
        );
        assert!(matches!(result, Err(ParsingError::FileRead(_))));
    }

    #[test]
    fn test_parse_vector_reads_file() {
        let path = std::env::temp_dir().join("vector_hist_parse_test.txt");
        fs::write(&path, "5,5,5,5,10,").unwrap();

        let numbers = parse_vector(&path, TailPolicy::DropAlways).unwrap();
        assert_eq!(numbers, vec![5, 5, 5, 5, 10]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_tail_policy_from_str() {
        assert_eq!(
            "drop-always".parse::<TailPolicy>().unwrap(),
            TailPolicy::DropAlways
        );
        assert_eq!(
            "drop-empty".parse::<TailPolicy>().unwrap(),
            TailPolicy::DropEmpty
        );
        assert!("keep".parse::<TailPolicy>().is_err());
    }
}
