//! A regular-expression syntax parser.
//!
//! [`parse_regex`] turns a pattern into a typed syntax tree ([`ast::Regex`]) in which every
//! node knows the rune offset it was parsed from. The grammar is built with
//! [`rexparse_combinators`] and only describes syntax: nothing here matches subject strings.
//!
//! ```
//! use rexparse::ast::{Cardinality, SubexprItem};
//!
//! let regex = rexparse::parse_regex("(a|b)+").unwrap();
//! let SubexprItem::Group(group) = &regex.expr.subexpr.items[0] else {
//!     panic!("expected a group");
//! };
//! assert_eq!(group.expr.alternatives().count(), 2);
//! assert_eq!(group.quant.unwrap().cardinality, Cardinality::OneOrMore);
//! assert_eq!(regex.to_string(), "(a|b)+");
//! ```

pub mod ast;
mod config;
mod convert;
mod error;
mod grammar;
mod parser;
mod print;
mod syntax;

#[cfg(feature = "rust-code-emitting")]
mod emit;

#[cfg(feature = "dot")]
mod dot;

pub use config::ParserConfig;
pub use error::ParseError;
pub use parser::RegexParser;

/// Parses all of `pattern` with the default [`ParserConfig`].
pub fn parse_regex(pattern: impl AsRef<str>) -> Result<ast::Regex, ParseError> {
    RegexParser::new().parse(pattern)
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::{parse_regex, ParseError};

    #[ctor::ctor]
    fn init() {
        env_logger::init();
    }

    fn only_match(regex: &Regex) -> &Match {
        match regex.expr.subexpr.items.as_slice() {
            [SubexprItem::Match(m)] => m,
            items => panic!("expected a single match, got {items:?}"),
        }
    }

    #[test]
    fn any_char() {
        let regex = parse_regex(".").unwrap();
        assert_eq!(
            only_match(&regex),
            &Match {
                item: MatchItem::AnyChar(AnyChar { pos: 0 }),
                quant: None,
                pos: 0,
            }
        );
    }

    #[test]
    fn laziness() {
        let lazy = parse_regex("a*?").unwrap();
        let greedy = parse_regex("a*").unwrap();
        let quant = |regex: &Regex| only_match(regex).quant.unwrap();

        assert_eq!(quant(&lazy).cardinality, Cardinality::ZeroOrMore);
        assert!(quant(&lazy).lazy);
        assert_eq!(quant(&greedy).cardinality, Cardinality::ZeroOrMore);
        assert!(!quant(&greedy).lazy);
        assert_eq!(only_match(&lazy).item, only_match(&greedy).item);
    }

    #[test]
    fn begin_anchor_only_at_start() {
        assert!(parse_regex("^a").unwrap().begin_anchor);
        assert!(!parse_regex("a").unwrap().begin_anchor);
        assert!(matches!(
            parse_regex("a^"),
            Err(ParseError::TrailingInput { offset: 1, .. })
        ));
    }

    #[test]
    fn empty_pattern_is_rejected() {
        assert_eq!(
            parse_regex(""),
            Err(ParseError::NoMatch {
                pattern: String::new(),
                offset: 0
            })
        );
    }

    #[test]
    fn empty_alternative_is_rejected() {
        assert!(parse_regex("a|").is_err());
        assert!(parse_regex("|a").is_err());
        assert!(parse_regex("()").is_err());
    }

    #[test]
    fn oversized_numbers_are_rejected() {
        assert!(parse_regex("a{4294967295}").is_ok());
        assert!(parse_regex("a{4294967296}").is_err());
        assert!(parse_regex("\\99999999999").is_err());
    }
}
