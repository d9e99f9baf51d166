//! The fixed sample sequence and parsing of user supplied sequences.

use std::num::ParseIntError;

use thiserror::Error;

/// Sample input every sort is demonstrated on.
pub const SAMPLE: [i64; 10] = [21, 4, 1, 3, 9, 20, 25, 6, 21, 14];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSequenceError {
    #[error("value #{index} `{token}` is not an integer: {source}")]
    InvalidValue {
        index: usize,
        token: String,
        source: ParseIntError,
    },
    #[error("unbalanced brackets, expected both `[` and `]` or neither")]
    UnbalancedBrackets,
}

/// Parses integers separated by commas and/or whitespace, e.g. `[21, 4, 1]` or `21 4 1`.
///
/// Empty input, or `[]`, is an empty sequence.
pub fn parse_sequence(input: &str) -> Result<Vec<i64>, ParseSequenceError> {
    let trimmed = input.trim();

    let inner = match (trimmed.strip_prefix('['), trimmed.ends_with(']')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => trimmed,
        _ => return Err(ParseSequenceError::UnbalancedBrackets),
    };

    inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<i64>()
                .map_err(|source| ParseSequenceError::InvalidValue {
                    index,
                    token: token.to_owned(),
                    source,
                })
        })
        .collect()
}
