use std::sync::Arc;

use rexparse_combinators::{FailureTracker, Input};

use crate::ast::Regex;
use crate::grammar::Grammar;
use crate::syntax::Extract;
use crate::{ParseError, ParserConfig};

/// Parses patterns with a fixed configuration.
///
/// The grammar is immutable, so one parser can be shared between threads and used for any
/// number of patterns.
#[derive(Clone)]
pub struct RegexParser {
    grammar: Arc<Grammar>,
    config: ParserConfig,
}

impl RegexParser {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            grammar: Grammar::shared(),
            config,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses all of `pattern`.
    pub fn parse(&self, pattern: impl AsRef<str>) -> Result<Regex, ParseError> {
        let pattern = pattern.as_ref();
        let runes: Vec<char> = pattern.chars().collect();
        let (regex, consumed) = self.run(pattern, &runes)?;
        if consumed < runes.len() {
            let err = ParseError::TrailingInput {
                pattern: pattern.to_string(),
                offset: consumed,
            };
            log::debug!("{err}");
            return Err(err);
        }
        Ok(regex)
    }

    /// Parses the longest regex at the start of `pattern`, returning it with the number of
    /// runes it covers. Whatever follows is left to the caller.
    pub fn parse_prefix(&self, pattern: impl AsRef<str>) -> Result<(Regex, usize), ParseError> {
        let pattern = pattern.as_ref();
        let runes: Vec<char> = pattern.chars().collect();
        self.run(pattern, &runes)
    }

    fn run(&self, pattern: &str, runes: &[char]) -> Result<(Regex, usize), ParseError> {
        let tracker = FailureTracker::new();
        let input = Input::new(runes)
            .with_max_depth(self.config.max_depth)
            .tracked(&tracker);

        let reply = self.grammar.regex().parse(input);
        let err = if tracker.depth_exceeded() {
            ParseError::TooDeep {
                pattern: pattern.to_string(),
                limit: self.config.max_depth,
            }
        } else {
            let parsed = reply.and_then(|(parsed, rest)| {
                let regex = Regex::extract(parsed.into_scalar()?)?;
                Some((regex, rest.offset()))
            });
            if let Some((regex, consumed)) = parsed {
                log::debug!("parsed {pattern:?} ({consumed} of {} runes)", runes.len());
                return Ok((regex, consumed));
            }
            ParseError::NoMatch {
                pattern: pattern.to_string(),
                offset: tracker.furthest_failure().unwrap_or(0),
            }
        };
        log::debug!("{err}");
        Err(err)
    }
}

impl Default for RegexParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_stops_before_unmatched_input() {
        let parser = RegexParser::new();
        let (regex, consumed) = parser.parse_prefix("ab)c").unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(regex.to_string(), "ab");

        assert_eq!(
            parser.parse("ab)c"),
            Err(ParseError::TrailingInput {
                pattern: "ab)c".to_string(),
                offset: 2
            })
        );
    }

    #[test]
    fn unclosed_char_group_does_not_match() {
        let err = RegexParser::new().parse("[0-9").unwrap_err();
        assert_eq!(err.pattern(), "[0-9");
        assert!(matches!(err, ParseError::NoMatch { .. }));
    }

    #[test]
    fn depth_limit() {
        let parser = RegexParser::with_config(ParserConfig::default().with_max_depth(3));
        assert!(parser.parse("(((a|b)))").is_ok());
        assert_eq!(
            parser.parse("((((a))))"),
            Err(ParseError::TooDeep {
                pattern: "((((a))))".to_string(),
                limit: 3
            })
        );
        assert_eq!(parser.config().max_depth, 3);
    }

    #[test]
    fn offsets_count_runes() {
        let parser = RegexParser::new();
        let err = parser.parse("\u{e9}\u{e9}").unwrap_err();
        assert_eq!(err.offset(), Some(0));

        let err = parser.parse("ab\u{e9}").unwrap_err();
        assert_eq!(err.offset(), Some(2));
    }
}
