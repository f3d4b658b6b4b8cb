// Copyright (c) 2024 The Botho Foundation
#![deny(missing_docs)]

//! Conversion between keypair byte arrays and base-58 text.
//!
//! Byte arrays are written the way keypair files store them: a comma
//! separated list of decimal numbers, optionally wrapped in brackets.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

/// Errors from parsing byte lists or base-58 strings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input held no bytes at all
    #[error("empty input")]
    Empty,

    /// A list entry was not a number in 0..=255
    #[error("entry {index} ({token:?}) is not a byte")]
    InvalidByte {
        /// Zero-based position of the entry
        index: usize,
        /// The offending entry, trimmed
        token: String,
    },

    /// The string was not valid base-58
    #[error("{0}")]
    Base58(#[from] bs58::decode::Error),
}

/// Parse a comma-separated byte list such as `1, 2, 3` or `[1,2,3]`
pub fn parse_byte_list(input: &str) -> Result<Vec<u8>, Error> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    if inner.trim().is_empty() {
        return Err(Error::Empty);
    }

    inner
        .split(',')
        .enumerate()
        .map(|(index, token)| {
            let token = token.trim();
            token.parse::<u8>().map_err(|_| Error::InvalidByte {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Format bytes as a bracketed list, `[1, 2, 3]`
pub fn format_byte_list(bytes: &[u8]) -> String {
    let items: Vec<String> = bytes.iter().map(u8::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Encode bytes as base-58 (Bitcoin alphabet)
pub fn encode(bytes: &[u8]) -> String {
    debug!("Encoding {} bytes", bytes.len());
    bs58::encode(bytes).into_string()
}

/// Decode a base-58 string (Bitcoin alphabet)
pub fn decode(input: &str) -> Result<Vec<u8>, Error> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::Empty);
    }
    let bytes = bs58::decode(input).into_vec()?;
    debug!("Decoded {} bytes", bytes.len());
    Ok(bytes)
}

/// Print `message` and read one line from stdin
pub fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Initialize logging for the conversion tools
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_list() {
        assert_eq!(parse_byte_list("1,2,3"), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_parse_with_whitespace_and_brackets() {
        assert_eq!(parse_byte_list(" [ 1, 2 ,3 ]\n"), Ok(vec![1, 2, 3]));
        assert_eq!(parse_byte_list("0, 255"), Ok(vec![0, 255]));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(
            parse_byte_list("1,x,3"),
            Err(Error::InvalidByte {
                index: 1,
                token: "x".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range_and_gaps() {
        assert!(matches!(
            parse_byte_list("1,256"),
            Err(Error::InvalidByte { index: 1, .. })
        ));
        assert!(matches!(
            parse_byte_list("1,-1"),
            Err(Error::InvalidByte { index: 1, .. })
        ));
        assert!(matches!(
            parse_byte_list("1,,2"),
            Err(Error::InvalidByte { index: 1, .. })
        ));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_byte_list(""), Err(Error::Empty));
        assert_eq!(parse_byte_list("[]"), Err(Error::Empty));
    }

    #[test]
    fn test_format_byte_list() {
        assert_eq!(format_byte_list(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(format_byte_list(&[]), "[]");
    }

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(encode(b"Hello World!"), "2NEpo7TZRRrLZSi2U");
        assert_eq!(encode(&[0, 0, 1]), "112");
        assert_eq!(encode(&[0u8; 32]), "11111111111111111111111111111111");
    }

    #[test]
    fn test_init_logging_installs_subscriber() {
        init_logging();
        assert!(tracing::dispatcher::has_been_set());
    }

    #[test]
    fn test_decode_rejects_ambiguous_characters() {
        assert!(matches!(decode("0OIl"), Err(Error::Base58(_))));
        assert_eq!(decode("   "), Err(Error::Empty));
    }
}
