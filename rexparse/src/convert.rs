//! Converters from raw grammar results to syntax tree nodes.
//!
//! Each converter runs right after the structural parser that produced its input, and only
//! looks at that result. Returning `None` makes the surrounding parser fail.

use rexparse_combinators::{Parsed, Value};

use crate::ast::*;
use crate::syntax::{Extract, Letters, Syntax};

type Converted = Option<Value<Syntax>>;

fn node(node: impl Into<Syntax>) -> Converted {
    Some(Value::Scalar(node.into()))
}

fn take<N: Extract>(parsed: Parsed<Syntax>) -> Option<N> {
    N::extract(parsed.into_scalar()?)
}

/// `Empty` becomes `None`; anything else must be an `N`.
fn optional<N: Extract>(parsed: Parsed<Syntax>) -> Option<Option<N>> {
    if parsed.is_empty() {
        Some(None)
    } else {
        take(parsed).map(Some)
    }
}

fn rune(parsed: Parsed<Syntax>) -> Option<char> {
    match parsed.into_scalar()? {
        Syntax::Rune(rune) => Some(rune),
        _ => None,
    }
}

fn text(parsed: Parsed<Syntax>) -> Option<String> {
    match parsed.into_scalar()? {
        Syntax::Text(text) => Some(text),
        _ => None,
    }
}

fn parts<const N: usize>(parsed: Parsed<Syntax>) -> Option<[Parsed<Syntax>; N]> {
    parsed.into_items().try_into().ok()
}

pub(crate) fn to_char(parsed: Parsed<Syntax>) -> Converted {
    let pos = parsed.pos;
    node(Char {
        value: rune(parsed)?,
        pos,
    })
}

/// `\` followed by a punctuation rune stands for that rune.
pub(crate) fn to_escaped_char(parsed: Parsed<Syntax>) -> Converted {
    let pos = parsed.pos;
    let [_, escaped] = parts(parsed)?;
    node(Char {
        value: rune(escaped)?,
        pos,
    })
}

pub(crate) fn to_control_char(parsed: Parsed<Syntax>) -> Converted {
    let pos = parsed.pos;
    let [_, escaped] = parts(parsed)?;
    let value = match rune(escaped)? {
        't' => '\t',
        'n' => '\n',
        'r' => '\r',
        'f' => '\x0C',
        'v' => '\x0B',
        _ => return None,
    };
    node(Char { value, pos })
}

pub(crate) fn to_num(parsed: Parsed<Syntax>) -> Converted {
    let pos = parsed.pos;
    let mut value: u32 = 0;
    for digit in parsed.into_items() {
        let digit = rune(digit)?.to_digit(10)?;
        value = value.checked_mul(10)?.checked_add(digit)?;
    }
    node(Num { value, pos })
}

pub(crate) fn to_letters(parsed: Parsed<Syntax>) -> Converted {
    let pos = parsed.pos;
    let value = parsed
        .into_items()
        .into_iter()
        .map(rune)
        .collect::<Option<String>>()?;
    node(Letters { value, pos })
}

pub(crate) fn to_char_class(parsed: Parsed<Syntax>) -> Converted {
    let pos = parsed.pos;
    let text = text(parsed)?;
    let mut escape = text.strip_prefix('\\')?.chars();
    let kind = match (escape.next(), escape.next()) {
        (Some(escape), None) => CharClassKind::from_escape(escape)?,
        _ => return None,
    };
    node(CharClass { kind, pos })
}

pub(crate) fn to_ascii_char_class(parsed: Parsed<Syntax>) -> Converted {
    let pos = parsed.pos;
    let [_, name, _] = parts(parsed)?;
    let name: Letters = take(name)?;
    let kind = AsciiClassKind::from_name(&name.value)?;
    node(AsciiCharClass { kind, pos })
}

pub(crate) fn to_char_range(parsed: Parsed<Syntax>) -> Converted {
    let [low, high] = parts(parsed)?;
    node(CharRange {
        low: take(low)?,
        high: take(high)?,
    })
}

pub(crate) fn to_char_group_item(parsed: Parsed<Syntax>) -> Converted {
    let item = match parsed.into_scalar()? {
        Syntax::CharClass(class) => CharGroupItem::CharClass(class),
        Syntax::AsciiCharClass(class) => CharGroupItem::AsciiCharClass(class),
        Syntax::CharRange(range) => CharGroupItem::CharRange(range),
        Syntax::Char(c) => CharGroupItem::Char(c),
        _ => return None,
    };
    node(item)
}

/// Expects the flattened `[`, optional `^`, items, `]`.
pub(crate) fn to_char_group(parsed: Parsed<Syntax>) -> Converted {
    let pos = parsed.pos;
    let mut negated = false;
    let mut items = Vec::new();
    for part in parsed.into_items() {
        match part.into_scalar()? {
            Syntax::Rune('^') => negated = true,
            Syntax::Rune('[' | ']') => {}
            Syntax::CharGroupItem(item) => items.push(item),
            _ => return None,
        }
    }
    if items.is_empty() {
        return None;
    }
    node(CharGroup {
        negated,
        items,
        pos,
    })
}

pub(crate) fn to_any_char(parsed: Parsed<Syntax>) -> Converted {
    node(AnyChar { pos: parsed.pos })
}

pub(crate) fn to_match_item(parsed: Parsed<Syntax>) -> Converted {
    let item = match parsed.into_scalar()? {
        Syntax::AnyChar(any) => MatchItem::AnyChar(any),
        Syntax::CharClass(class) => MatchItem::CharClass(class),
        Syntax::AsciiCharClass(class) => MatchItem::AsciiCharClass(class),
        Syntax::CharGroup(group) => MatchItem::CharGroup(group),
        Syntax::Char(c) => MatchItem::Char(c),
        _ => return None,
    };
    node(item)
}

pub(crate) fn to_upper_bound(parsed: Parsed<Syntax>) -> Converted {
    let pos = parsed.pos;
    let [_, value] = parts(parsed)?;
    node(UpperBound {
        value: optional(value)?,
        pos,
    })
}

/// Rejects bounded ranges whose upper bound is below the lower one.
pub(crate) fn to_range(parsed: Parsed<Syntax>) -> Converted {
    let [_, low, high, _] = parts(parsed)?;
    let low: Num = take(low)?;
    let high: Option<UpperBound> = optional(high)?;
    if let Some(UpperBound {
        value: Some(high), ..
    }) = high
    {
        if high.value < low.value {
            return None;
        }
    }
    node(Cardinality::Range { low, high })
}

pub(crate) fn to_cardinality(parsed: Parsed<Syntax>) -> Converted {
    let cardinality = match parsed.into_scalar()? {
        Syntax::Rune('?') => Cardinality::ZeroOrOne,
        Syntax::Rune('*') => Cardinality::ZeroOrMore,
        Syntax::Rune('+') => Cardinality::OneOrMore,
        Syntax::Cardinality(range) => range,
        _ => return None,
    };
    node(cardinality)
}

pub(crate) fn to_quantifier(parsed: Parsed<Syntax>) -> Converted {
    let pos = parsed.pos;
    let [cardinality, lazy] = parts(parsed)?;
    node(Quantifier {
        cardinality: take(cardinality)?,
        lazy: !lazy.is_empty(),
        pos,
    })
}

pub(crate) fn to_match(parsed: Parsed<Syntax>) -> Converted {
    let pos = parsed.pos;
    let [item, quant] = parts(parsed)?;
    node(Match {
        item: take(item)?,
        quant: optional(quant)?,
        pos,
    })
}

pub(crate) fn to_anchor(parsed: Parsed<Syntax>) -> Converted {
    let pos = parsed.pos;
    let kind = match parsed.into_scalar()? {
        Syntax::Rune('$') => AnchorKind::EndOfString,
        Syntax::Text(text) if text == "\\b" => AnchorKind::WordBoundary,
        Syntax::Text(text) if text == "\\B" => AnchorKind::NotWordBoundary,
        _ => return None,
    };
    node(Anchor { kind, pos })
}

pub(crate) fn to_backref(parsed: Parsed<Syntax>) -> Converted {
    let pos = parsed.pos;
    let [_, number] = parts(parsed)?;
    node(Backref {
        number: take(number)?,
        pos,
    })
}

pub(crate) fn to_group(parsed: Parsed<Syntax>) -> Converted {
    let pos = parsed.pos;
    let [_, non_capturing, expr, _, quant] = parts(parsed)?;
    node(Group {
        non_capturing: !non_capturing.is_empty(),
        expr: take(expr)?,
        quant: optional(quant)?,
        pos,
    })
}

pub(crate) fn to_subexpr_item(parsed: Parsed<Syntax>) -> Converted {
    let item = match parsed.into_scalar()? {
        Syntax::Group(group) => SubexprItem::Group(group),
        Syntax::Anchor(anchor) => SubexprItem::Anchor(anchor),
        Syntax::Backref(backref) => SubexprItem::Backref(backref),
        Syntax::Match(m) => SubexprItem::Match(m),
        _ => return None,
    };
    node(item)
}

pub(crate) fn to_subexpr(parsed: Parsed<Syntax>) -> Converted {
    let pos = parsed.pos;
    let items = parsed
        .into_items()
        .into_iter()
        .map(take)
        .collect::<Option<Vec<SubexprItem>>>()?;
    if items.is_empty() {
        return None;
    }
    node(Subexpr { items, pos })
}

/// Alternatives are matched as a flat list and chained here, right to left, so that each
/// alternative's `Expr` holds the ones after it.
pub(crate) fn to_expr(parsed: Parsed<Syntax>) -> Converted {
    let [first, rest] = parts(parsed)?;
    let mut subexprs = vec![take::<Subexpr>(first)?];
    for alternative in rest.into_items() {
        subexprs.push(take(alternative)?);
    }

    let mut alt = None;
    while let Some(subexpr) = subexprs.pop() {
        alt = Some(Box::new(Expr {
            pos: subexpr.pos,
            subexpr,
            alt,
        }));
    }
    node(*alt?)
}

pub(crate) fn to_regex(parsed: Parsed<Syntax>) -> Converted {
    let pos = parsed.pos;
    let [anchor, expr] = parts(parsed)?;
    node(Regex {
        begin_anchor: !anchor.is_empty(),
        expr: take(expr)?,
        pos,
    })
}
