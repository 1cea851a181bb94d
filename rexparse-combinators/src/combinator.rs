use crate::{Input, Parsed, Parser};

/// Runs the parsers one after another on the successive remainders.
///
/// Produces a sequence with one element per parser, including `Empty` elements, positioned at
/// the first non-empty element. Fails as soon as any parser fails.
pub fn concat<T: 'static>(parsers: impl IntoIterator<Item = Parser<T>>) -> Parser<T> {
    let parsers: Vec<Parser<T>> = parsers.into_iter().collect();
    Parser::new(move |input| {
        let mut rest = input;
        let mut items = Vec::with_capacity(parsers.len());
        for parser in &parsers {
            let (parsed, next) = parser.parse(rest)?;
            items.push(parsed);
            rest = next;
        }
        Some((Parsed::sequence(items, input.offset()), rest))
    })
}

/// Ordered choice: the first parser to succeed on the original input wins.
pub fn alt<T: 'static>(parsers: impl IntoIterator<Item = Parser<T>>) -> Parser<T> {
    let parsers: Vec<Parser<T>> = parsers.into_iter().collect();
    Parser::new(move |input| parsers.iter().find_map(|parser| parser.parse(input)))
}

/// Never fails: yields `Empty` without consuming input when `parser` does not match.
pub fn opt<T: 'static>(parser: Parser<T>) -> Parser<T> {
    Parser::new(move |input| {
        parser
            .parse(input)
            .or_else(|| Some((Parsed::empty(input.offset()), input)))
    })
}

/// Zero or more greedy repetitions. Yields `Empty` if there were none.
pub fn rep<T: 'static>(parser: Parser<T>) -> Parser<T> {
    Parser::new(move |input| {
        let (items, rest) = repeat(&parser, input);
        if items.is_empty() {
            Some((Parsed::empty(input.offset()), input))
        } else {
            Some((Parsed::sequence(items, input.offset()), rest))
        }
    })
}

/// One or more greedy repetitions.
pub fn rep1<T: 'static>(parser: Parser<T>) -> Parser<T> {
    Parser::new(move |input| {
        let (items, rest) = repeat(&parser, input);
        if items.is_empty() {
            None
        } else {
            Some((Parsed::sequence(items, input.offset()), rest))
        }
    })
}

// A repetition that matched without consuming anything ends the loop, otherwise it would
// never terminate.
fn repeat<'a, T: 'static>(parser: &Parser<T>, input: Input<'a>) -> (Vec<Parsed<T>>, Input<'a>) {
    let mut rest = input;
    let mut items = Vec::new();
    while let Some((parsed, next)) = parser.parse(rest) {
        if next.offset() == rest.offset() {
            break;
        }
        items.push(parsed);
        rest = next;
    }
    (items, rest)
}

/// Runs `parser` one nesting level deeper, failing once the input's depth limit is reached.
pub fn nested<T: 'static>(parser: Parser<T>) -> Parser<T> {
    Parser::new(move |input| {
        let inner = input.descend()?;
        let (parsed, rest) = parser.parse(inner)?;
        Some((parsed, rest.at_depth(input.depth())))
    })
}
