//! The regex syntax tree.
//!
//! Every node records `pos`, the rune offset of the first rune it was parsed from. The tree is
//! built once per parse and owned by its [`Regex`] root.

/// Access to the source offset of a node.
pub trait Positioned {
    fn pos(&self) -> usize;
}

macro_rules! positioned {
    ($($node:ty),* $(,)?) => {
        $(
            impl Positioned for $node {
                fn pos(&self) -> usize {
                    self.pos
                }
            }
        )*
    };
}

positioned!(
    Regex,
    Expr,
    Subexpr,
    Group,
    Anchor,
    Backref,
    Match,
    AnyChar,
    CharClass,
    AsciiCharClass,
    CharGroup,
    Quantifier,
    UpperBound,
    Num,
    Char,
);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Regex {
    /// Whether the regex starts with `^`.
    pub begin_anchor: bool,
    pub expr: Expr,
    pub pos: usize,
}

impl Regex {
    /// The number of capturing groups, which is also the highest valid backreference.
    pub fn capture_count(&self) -> usize {
        self.expr.capture_count()
    }
}

/// A chain of alternatives: `subexpr | alt`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr {
    pub subexpr: Subexpr,
    pub alt: Option<Box<Expr>>,
    pub pos: usize,
}

impl Expr {
    /// All alternatives of this chain, left to right.
    pub fn alternatives(&self) -> Alternatives<'_> {
        Alternatives { next: Some(self) }
    }

    fn capture_count(&self) -> usize {
        self.alternatives()
            .flat_map(|subexpr| &subexpr.items)
            .map(|item| match item {
                SubexprItem::Group(group) => {
                    usize::from(!group.non_capturing) + group.expr.capture_count()
                }
                _ => 0,
            })
            .sum()
    }
}

pub struct Alternatives<'a> {
    next: Option<&'a Expr>,
}

impl<'a> Iterator for Alternatives<'a> {
    type Item = &'a Subexpr;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.alt.as_deref();
        Some(&current.subexpr)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subexpr {
    /// Never empty.
    pub items: Vec<SubexprItem>,
    pub pos: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubexprItem {
    Group(Group),
    Anchor(Anchor),
    Backref(Backref),
    Match(Match),
}

impl Positioned for SubexprItem {
    fn pos(&self) -> usize {
        match self {
            SubexprItem::Group(group) => group.pos,
            SubexprItem::Anchor(anchor) => anchor.pos,
            SubexprItem::Backref(backref) => backref.pos,
            SubexprItem::Match(m) => m.pos,
        }
    }
}

/// `( ?: expr ) quant`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Group {
    pub non_capturing: bool,
    pub expr: Expr,
    pub quant: Option<Quantifier>,
    pub pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    /// `$`
    EndOfString,
    /// `\b`
    WordBoundary,
    /// `\B`
    NotWordBoundary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub kind: AnchorKind,
    pub pos: usize,
}

/// `\N`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Backref {
    pub number: Num,
    pub pos: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    pub item: MatchItem,
    /// Scopes over `item` only.
    pub quant: Option<Quantifier>,
    pub pos: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchItem {
    AnyChar(AnyChar),
    CharClass(CharClass),
    AsciiCharClass(AsciiCharClass),
    CharGroup(CharGroup),
    Char(Char),
}

impl Positioned for MatchItem {
    fn pos(&self) -> usize {
        match self {
            MatchItem::AnyChar(any) => any.pos,
            MatchItem::CharClass(class) => class.pos,
            MatchItem::AsciiCharClass(class) => class.pos,
            MatchItem::CharGroup(group) => group.pos,
            MatchItem::Char(c) => c.pos,
        }
    }
}

/// `.`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnyChar {
    pub pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClassKind {
    Digit,
    NotDigit,
    Space,
    NotSpace,
    Word,
    NotWord,
}

impl CharClassKind {
    pub const ALL: [CharClassKind; 6] = [
        CharClassKind::Digit,
        CharClassKind::NotDigit,
        CharClassKind::Space,
        CharClassKind::NotSpace,
        CharClassKind::Word,
        CharClassKind::NotWord,
    ];

    /// The rune following the backslash.
    pub fn escape(self) -> char {
        match self {
            CharClassKind::Digit => 'd',
            CharClassKind::NotDigit => 'D',
            CharClassKind::Space => 's',
            CharClassKind::NotSpace => 'S',
            CharClassKind::Word => 'w',
            CharClassKind::NotWord => 'W',
        }
    }

    pub fn from_escape(escape: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.escape() == escape)
    }
}

/// `\d`, `\D`, `\s`, `\S`, `\w` or `\W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharClass {
    pub kind: CharClassKind,
    pub pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsciiClassKind {
    Alnum,
    Alpha,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    XDigit,
}

impl AsciiClassKind {
    pub const ALL: [AsciiClassKind; 12] = [
        AsciiClassKind::Alnum,
        AsciiClassKind::Alpha,
        AsciiClassKind::Blank,
        AsciiClassKind::Cntrl,
        AsciiClassKind::Digit,
        AsciiClassKind::Graph,
        AsciiClassKind::Lower,
        AsciiClassKind::Print,
        AsciiClassKind::Punct,
        AsciiClassKind::Space,
        AsciiClassKind::Upper,
        AsciiClassKind::XDigit,
    ];

    /// The name between `[:` and `:]`.
    pub fn name(self) -> &'static str {
        match self {
            AsciiClassKind::Alnum => "alnum",
            AsciiClassKind::Alpha => "alpha",
            AsciiClassKind::Blank => "blank",
            AsciiClassKind::Cntrl => "cntrl",
            AsciiClassKind::Digit => "digit",
            AsciiClassKind::Graph => "graph",
            AsciiClassKind::Lower => "lower",
            AsciiClassKind::Print => "print",
            AsciiClassKind::Punct => "punct",
            AsciiClassKind::Space => "space",
            AsciiClassKind::Upper => "upper",
            AsciiClassKind::XDigit => "xdigit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// A POSIX bracket class such as `[:alpha:]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AsciiCharClass {
    pub kind: AsciiClassKind,
    pub pos: usize,
}

/// `[^ items ]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharGroup {
    pub negated: bool,
    /// Never empty, in source order.
    pub items: Vec<CharGroupItem>,
    pub pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharGroupItem {
    CharClass(CharClass),
    AsciiCharClass(AsciiCharClass),
    CharRange(CharRange),
    Char(Char),
}

impl Positioned for CharGroupItem {
    fn pos(&self) -> usize {
        match self {
            CharGroupItem::CharClass(class) => class.pos,
            CharGroupItem::AsciiCharClass(class) => class.pos,
            CharGroupItem::CharRange(range) => range.pos(),
            CharGroupItem::Char(c) => c.pos,
        }
    }
}

/// `low-high`, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharRange {
    pub low: Char,
    pub high: Char,
}

impl Positioned for CharRange {
    fn pos(&self) -> usize {
        self.low.pos
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantifier {
    pub cardinality: Cardinality,
    /// Set by a trailing `?`.
    pub lazy: bool,
    pub pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// `?`
    ZeroOrOne,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `{low}`, `{low,}` or `{low,high}`.
    ///
    /// `high` is `None` for `{low}`, which repeats exactly `low` times.
    Range {
        low: Num,
        high: Option<UpperBound>,
    },
}

impl Cardinality {
    /// The minimum and maximum number of repetitions; `None` is unbounded.
    pub fn bounds(&self) -> (u32, Option<u32>) {
        match self {
            Cardinality::ZeroOrOne => (0, Some(1)),
            Cardinality::ZeroOrMore => (0, None),
            Cardinality::OneOrMore => (1, None),
            Cardinality::Range { low, high: None } => (low.value, Some(low.value)),
            Cardinality::Range {
                low,
                high: Some(high),
            } => (low.value, high.value.map(|num| num.value)),
        }
    }
}

/// The `,high` part of a range. A missing value is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UpperBound {
    pub value: Option<Num>,
    pub pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Num {
    pub value: u32,
    pub pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Char {
    pub value: char,
    pub pos: usize,
}
