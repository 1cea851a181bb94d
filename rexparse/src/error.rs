use thiserror::Error;

/// Why a pattern could not be parsed.
///
/// Offsets count runes (`char`s), not bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The grammar did not match. `offset` is the furthest point any rule got to, and is only a
    /// hint at where the pattern goes wrong.
    #[error("invalid regex {pattern:?}: no match at offset {offset}")]
    NoMatch { pattern: String, offset: usize },
    /// A prefix of the pattern is a regex, but the rest of it is not part of that regex.
    #[error("invalid regex {pattern:?}: unexpected input at offset {offset}")]
    TrailingInput { pattern: String, offset: usize },
    #[error("invalid regex {pattern:?}: nesting exceeds the limit of {limit}")]
    TooDeep { pattern: String, limit: usize },
}

impl ParseError {
    pub fn pattern(&self) -> &str {
        match self {
            ParseError::NoMatch { pattern, .. }
            | ParseError::TrailingInput { pattern, .. }
            | ParseError::TooDeep { pattern, .. } => pattern,
        }
    }

    /// Where the problem was detected, if the error carries a position.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::NoMatch { offset, .. } | ParseError::TrailingInput { offset, .. } => {
                Some(*offset)
            }
            ParseError::TooDeep { .. } => None,
        }
    }
}
