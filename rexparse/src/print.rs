//! Canonical pattern text for syntax trees.
//!
//! Printing a parsed regex and parsing the result again yields an equal tree, up to positions.

use std::fmt::{Display, Formatter, Result, Write};

use crate::ast::*;
use crate::grammar::MATCH_RESERVED;

/// Runes escaped inside a character group. `[` and `-` would otherwise start a class name or a
/// range, `^` would negate the group.
const GROUP_ESCAPED: &[char] = &['\\', ']', '[', '-', '^'];

fn write_char(f: &mut Formatter<'_>, value: char, escaped: &[char]) -> Result {
    match value {
        '\t' => f.write_str("\\t"),
        '\n' => f.write_str("\\n"),
        '\r' => f.write_str("\\r"),
        '\x0C' => f.write_str("\\f"),
        '\x0B' => f.write_str("\\v"),
        c if escaped.contains(&c) => write!(f, "\\{c}"),
        c => f.write_char(c),
    }
}

/// A character as it appears inside a character group.
struct InGroup<'a>(&'a Char);

impl Display for InGroup<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_char(f, self.0.value, GROUP_ESCAPED)
    }
}

impl Display for Regex {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.begin_anchor {
            f.write_char('^')?;
        }
        write!(f, "{}", self.expr)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, alternative) in self.alternatives().enumerate() {
            if i > 0 {
                f.write_char('|')?;
            }
            write!(f, "{alternative}")?;
        }
        Ok(())
    }
}

impl Display for Subexpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for item in &self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl Display for SubexprItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SubexprItem::Group(group) => group.fmt(f),
            SubexprItem::Anchor(anchor) => anchor.fmt(f),
            SubexprItem::Backref(backref) => backref.fmt(f),
            SubexprItem::Match(m) => m.fmt(f),
        }
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_char('(')?;
        if self.non_capturing {
            f.write_str("?:")?;
        }
        write!(f, "{})", self.expr)?;
        if let Some(quant) = &self.quant {
            write!(f, "{quant}")?;
        }
        Ok(())
    }
}

impl Display for Anchor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(match self.kind {
            AnchorKind::EndOfString => "$",
            AnchorKind::WordBoundary => "\\b",
            AnchorKind::NotWordBoundary => "\\B",
        })
    }
}

impl Display for Backref {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "\\{}", self.number)
    }
}

impl Display for Match {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.item)?;
        if let Some(quant) = &self.quant {
            write!(f, "{quant}")?;
        }
        Ok(())
    }
}

impl Display for MatchItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            MatchItem::AnyChar(any) => any.fmt(f),
            MatchItem::CharClass(class) => class.fmt(f),
            MatchItem::AsciiCharClass(class) => class.fmt(f),
            MatchItem::CharGroup(group) => group.fmt(f),
            MatchItem::Char(c) => c.fmt(f),
        }
    }
}

impl Display for AnyChar {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_char('.')
    }
}

impl Display for CharClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "\\{}", self.kind.escape())
    }
}

impl Display for AsciiCharClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[:{}:]", self.kind.name())
    }
}

impl Display for CharGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_char('[')?;
        if self.negated {
            f.write_char('^')?;
        }
        for (i, item) in self.items.iter().enumerate() {
            match item {
                CharGroupItem::CharClass(class) => write!(f, "{class}")?,
                CharGroupItem::AsciiCharClass(class) => write!(f, "{class}")?,
                CharGroupItem::CharRange(range) => write!(f, "{range}")?,
                // `[:name:]` would read back as an ASCII class.
                CharGroupItem::Char(c) if i == 0 && !self.negated && c.value == ':' => {
                    f.write_str("\\:")?
                }
                CharGroupItem::Char(c) => write!(f, "{}", InGroup(c))?,
            }
        }
        f.write_char(']')
    }
}

impl Display for CharRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}-{}", InGroup(&self.low), InGroup(&self.high))
    }
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.cardinality)?;
        if self.lazy {
            f.write_char('?')?;
        }
        Ok(())
    }
}

impl Display for Cardinality {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Cardinality::ZeroOrOne => f.write_char('?'),
            Cardinality::ZeroOrMore => f.write_char('*'),
            Cardinality::OneOrMore => f.write_char('+'),
            Cardinality::Range { low, high: None } => write!(f, "{{{low}}}"),
            Cardinality::Range {
                low,
                high: Some(high),
            } => write!(f, "{{{low}{high}}}"),
        }
    }
}

impl Display for UpperBound {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_char(',')?;
        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl Display for Num {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

/// A character in match context.
impl Display for Char {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_char(f, self.value, MATCH_RESERVED)
    }
}
