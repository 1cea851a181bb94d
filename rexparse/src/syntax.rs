use crate::ast::*;

/// Scalar values flowing through the grammar: raw runes and text from the primitive matchers,
/// and typed nodes once a converter has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Syntax {
    Rune(char),
    Text(String),
    Letters(Letters),
    Num(Num),
    Char(Char),
    AnyChar(AnyChar),
    CharClass(CharClass),
    AsciiCharClass(AsciiCharClass),
    CharRange(CharRange),
    CharGroupItem(CharGroupItem),
    CharGroup(CharGroup),
    MatchItem(MatchItem),
    Cardinality(Cardinality),
    UpperBound(UpperBound),
    Quantifier(Quantifier),
    Match(Match),
    Anchor(Anchor),
    Backref(Backref),
    Group(Group),
    SubexprItem(SubexprItem),
    Subexpr(Subexpr),
    Expr(Expr),
    Regex(Regex),
}

/// A run of ASCII letters, such as the name inside `[:alpha:]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Letters {
    pub value: String,
    pub pos: usize,
}

impl From<char> for Syntax {
    fn from(rune: char) -> Self {
        Syntax::Rune(rune)
    }
}

impl From<String> for Syntax {
    fn from(text: String) -> Self {
        Syntax::Text(text)
    }
}

/// Recovers a typed node from a [`Syntax`] scalar.
pub(crate) trait Extract: Sized {
    fn extract(syntax: Syntax) -> Option<Self>;
}

macro_rules! nodes {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Syntax {
                fn from(node: $variant) -> Self {
                    Syntax::$variant(node)
                }
            }

            impl Extract for $variant {
                fn extract(syntax: Syntax) -> Option<Self> {
                    match syntax {
                        Syntax::$variant(node) => Some(node),
                        _ => None,
                    }
                }
            }
        )*
    };
}

nodes!(
    Letters,
    Num,
    Char,
    AnyChar,
    CharClass,
    AsciiCharClass,
    CharRange,
    CharGroupItem,
    CharGroup,
    MatchItem,
    Cardinality,
    UpperBound,
    Quantifier,
    Match,
    Anchor,
    Backref,
    Group,
    SubexprItem,
    Subexpr,
    Expr,
    Regex,
);
