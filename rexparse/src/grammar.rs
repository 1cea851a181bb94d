//! The regex grammar, built from combinators.
//!
//! ```text
//! regex          ::= "^"? expr
//! expr           ::= subexpr ("|" subexpr)*
//! subexpr        ::= subexpr_item+
//! subexpr_item   ::= group | anchor | backref | match
//! group          ::= "(" "?:"? expr ")" quantifier?
//! anchor         ::= "$" | "\b" | "\B"
//! backref        ::= "\" num
//! match          ::= match_item quantifier?
//! match_item     ::= "." | char_class | ascii_char_class | char_group | char
//! char_group     ::= "[" "^"? char_group_item+ "]"
//! char_group_item::= char_class | ascii_char_class | char_range | char
//! char_range     ::= char "-" char
//! quantifier     ::= ("?" | "*" | "+" | "{" num ("," num?)? "}") "?"?
//! ```
//!
//! `group`, `subexpr_item`, `subexpr` and `expr` refer to each other and are wired through
//! [`Forward`] rules; everything else is built bottom-up. Only groups nest, so only `group` counts
//! against the depth limit.

use std::sync::{Arc, OnceLock};

use rexparse_combinators::{
    alt, concat, expect_rune, expect_rune_in, expect_rune_in_range, expect_string, nested, opt,
    rep, rep1, Forward, Parser, Value,
};

use crate::ast::CharClassKind;
use crate::convert;
use crate::syntax::Syntax;

type Rule = Parser<Syntax>;

/// Runes that may follow a `\` to stand for themselves.
const ESCAPABLE: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<', '=',
    '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

const CONTROL_ESCAPES: &[char] = &['t', 'n', 'r', 'f', 'v'];

/// Runes that must be escaped to be literal outside a character group.
pub(crate) const MATCH_RESERVED: &[char] =
    &['\\', '|', ')', '(', '[', '{', '*', '+', '?', '^', '$', '.'];

/// Runes that must be escaped to be literal inside a character group.
pub(crate) const GROUP_RESERVED: &[char] = &['\\', ']'];

/// The compiled grammar.
pub(crate) struct Grammar {
    regex: Rule,
    /// Strong handles to the recursive rules, which only reference each other weakly.
    _recursive: Vec<Rule>,
}

impl Grammar {
    pub fn new() -> Self {
        let Rules {
            regex,
            expr,
            subexpr,
            subexpr_item,
            group,
        } = rules();
        Self {
            regex,
            _recursive: vec![expr, subexpr, subexpr_item, group],
        }
    }

    /// The grammar shared by all parsers in this process.
    pub fn shared() -> Arc<Grammar> {
        static GRAMMAR: OnceLock<Arc<Grammar>> = OnceLock::new();
        Arc::clone(GRAMMAR.get_or_init(|| Arc::new(Grammar::new())))
    }

    pub fn regex(&self) -> &Rule {
        &self.regex
    }
}

struct Rules {
    regex: Rule,
    expr: Rule,
    subexpr: Rule,
    subexpr_item: Rule,
    group: Rule,
}

fn rules() -> Rules {
    log::trace!("building regex grammar");

    let group = Forward::new();
    let subexpr_item = Forward::new();
    let subexpr = Forward::new();
    let expr = Forward::new();

    let quantifier = quantifier();

    let group_rule = nested(
        concat([
            rune('('),
            opt(expect_string("?:")),
            expr.parser(),
            rune(')'),
            opt(quantifier.clone()),
        ])
        .convert(convert::to_group),
    );

    let subexpr_item_rule = alt([group.parser(), anchor(), backref(), matched(quantifier)])
        .convert(convert::to_subexpr_item);

    let subexpr_rule = rep1(subexpr_item.parser()).convert(convert::to_subexpr);

    let expr_rule = concat([
        subexpr.parser(),
        rep(concat([rune('|'), subexpr.parser()]).get(1)),
    ])
    .convert(convert::to_expr);

    let group = group.define(group_rule);
    let subexpr_item = subexpr_item.define(subexpr_item_rule);
    let subexpr = subexpr.define(subexpr_rule);
    let expr = expr.define(expr_rule);

    let regex = concat([opt(rune('^')), expr.clone()]).convert(convert::to_regex);

    Rules {
        regex,
        expr,
        subexpr,
        subexpr_item,
        group,
    }
}

fn rune(rune: char) -> Rule {
    expect_rune(rune)
}

fn digit() -> Rule {
    expect_rune_in_range('0', '9')
}

fn num() -> Rule {
    rep1(digit()).convert(convert::to_num)
}

fn letter() -> Rule {
    alt([expect_rune_in_range('a', 'z'), expect_rune_in_range('A', 'Z')])
}

fn letters() -> Rule {
    rep1(letter()).convert(convert::to_letters)
}

/// A literal character: an escape, or a printable ASCII rune not in `reserved`.
fn char_excluding(reserved: &'static [char]) -> Rule {
    let escaped =
        concat([rune('\\'), expect_rune_in(ESCAPABLE)]).convert(convert::to_escaped_char);
    let control =
        concat([rune('\\'), expect_rune_in(CONTROL_ESCAPES)]).convert(convert::to_control_char);
    let plain = expect_rune_in_range(' ', '~')
        .bind(move |parsed| {
            let allowed = matches!(
                parsed.value,
                Value::Scalar(Syntax::Rune(rune)) if !reserved.contains(&rune)
            );
            if allowed {
                Parser::pure(parsed)
            } else {
                Parser::fail()
            }
        })
        .convert(convert::to_char);
    alt([escaped, control, plain])
}

fn char_class() -> Rule {
    let escapes = CharClassKind::ALL.map(|kind| expect_string(&format!("\\{}", kind.escape())));
    alt(escapes).convert(convert::to_char_class)
}

fn ascii_char_class() -> Rule {
    concat([expect_string("[:"), letters(), expect_string(":]")])
        .convert(convert::to_ascii_char_class)
}

fn char_group() -> Rule {
    let group_char = char_excluding(GROUP_RESERVED);
    let char_range = concat([group_char.clone(), rune('-'), group_char.clone()])
        .select(&[0, 2])
        .convert(convert::to_char_range);
    let item = alt([char_class(), ascii_char_class(), char_range, group_char])
        .convert(convert::to_char_group_item);

    concat([rune('['), opt(rune('^')), rep1(item), rune(']')])
        .flatten()
        .convert(convert::to_char_group)
}

fn match_item() -> Rule {
    alt([
        rune('.').convert(convert::to_any_char),
        char_class(),
        ascii_char_class(),
        char_group(),
        char_excluding(MATCH_RESERVED),
    ])
    .convert(convert::to_match_item)
}

fn quantifier() -> Rule {
    let upper_bound = concat([rune(','), opt(num())]).convert(convert::to_upper_bound);
    let range = concat([rune('{'), num(), opt(upper_bound), rune('}')]).convert(convert::to_range);
    let cardinality =
        alt([rune('?'), rune('*'), rune('+'), range]).convert(convert::to_cardinality);

    concat([cardinality, opt(rune('?'))]).convert(convert::to_quantifier)
}

fn matched(quantifier: Rule) -> Rule {
    concat([match_item(), opt(quantifier)]).convert(convert::to_match)
}

fn anchor() -> Rule {
    alt([rune('$'), expect_string("\\b"), expect_string("\\B")]).convert(convert::to_anchor)
}

fn backref() -> Rule {
    concat([rune('\\'), num()]).convert(convert::to_backref)
}
