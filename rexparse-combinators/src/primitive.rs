//! Leaf parsers over single runes and fixed rune sequences.
//!
//! On failure none of these consume input, and each reports the offset where matching stopped
//! to the input's [`FailureTracker`](crate::FailureTracker).

use crate::{Input, Parsed, Parser};

fn satisfy<T, P>(predicate: P) -> Parser<T>
where
    T: From<char> + 'static,
    P: Fn(char) -> bool + Send + Sync + 'static,
{
    Parser::new(move |input| match input.current() {
        Some((rune, offset)) if predicate(rune) => {
            let rest = input.advance()?;
            Some((Parsed::scalar(T::from(rune), offset), rest))
        }
        _ => {
            input.fail();
            None
        }
    })
}

/// Consumes `expected` runes one by one, or fails at the first mismatch.
fn match_runes<'a>(input: Input<'a>, expected: &[char]) -> Option<Input<'a>> {
    let mut rest = input;
    for &rune in expected {
        match rest.current() {
            Some((actual, _)) if actual == rune => rest = rest.advance()?,
            _ => {
                rest.fail();
                return None;
            }
        }
    }
    Some(rest)
}

pub fn expect_rune<T: From<char> + 'static>(expected: char) -> Parser<T> {
    satisfy(move |rune| rune == expected)
}

/// Matches any one of `runes`, trying them in the given order.
pub fn expect_rune_in<T: From<char> + 'static>(runes: &[char]) -> Parser<T> {
    let runes = runes.to_vec();
    satisfy(move |rune| runes.iter().any(|&candidate| candidate == rune))
}

/// Matches a rune in `low..=high`.
pub fn expect_rune_in_range<T: From<char> + 'static>(low: char, high: char) -> Parser<T> {
    satisfy(move |rune| (low..=high).contains(&rune))
}

/// Matches `runes` in sequence, producing one scalar per rune. An empty sequence succeeds
/// with `Empty` and consumes nothing.
pub fn expect_runes<T: From<char> + 'static>(runes: &[char]) -> Parser<T> {
    let runes = runes.to_vec();
    Parser::new(move |input| {
        let rest = match_runes(input, &runes)?;
        if runes.is_empty() {
            return Some((Parsed::empty(input.offset()), input));
        }
        let items = runes
            .iter()
            .enumerate()
            .map(|(index, &rune)| Parsed::scalar(T::from(rune), input.offset() + index))
            .collect();
        Some((Parsed::sequence(items, input.offset()), rest))
    })
}

/// Like [`expect_runes`], but produces the matched text as a single scalar.
pub fn expect_string<T: From<String> + 'static>(text: &str) -> Parser<T> {
    let runes: Vec<char> = text.chars().collect();
    let text = text.to_owned();
    Parser::new(move |input| {
        let rest = match_runes(input, &runes)?;
        Some((Parsed::scalar(T::from(text.clone()), input.offset()), rest))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FailureTracker, Value};

    fn runes(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn single_runes() {
        let text = runes("b");
        let input = Input::new(&text);

        let (parsed, rest) = expect_rune::<char>('b').parse(input).unwrap();
        assert_eq!(parsed, Parsed::scalar('b', 0));
        assert!(rest.is_empty());

        assert!(expect_rune::<char>('a').parse(input).is_none());
        assert!(expect_rune_in::<char>(&['a', 'b', 'c']).parse(input).is_some());
        assert!(expect_rune_in::<char>(&['x', 'y']).parse(input).is_none());
        assert!(expect_rune_in_range::<char>('a', 'b').parse(input).is_some());
        assert!(expect_rune_in_range::<char>('b', 'b').parse(input).is_some());
        assert!(expect_rune_in_range::<char>('c', 'z').parse(input).is_none());
    }

    #[test]
    fn end_of_input() {
        let text = runes("");
        let input = Input::new(&text);
        assert!(expect_rune::<char>('a').parse(input).is_none());
        assert!(expect_string::<String>("a").parse(input).is_none());
    }

    #[test]
    fn rune_sequences() {
        let text = runes("[:alpha:]");
        let input = Input::new(&text);

        let (parsed, rest) = expect_runes::<char>(&['[', ':']).parse(input).unwrap();
        assert_eq!(
            parsed.value,
            Value::Sequence(vec![Parsed::scalar('[', 0), Parsed::scalar(':', 1)])
        );
        assert_eq!(rest.offset(), 2);

        let (parsed, rest) = expect_runes::<char>(&[]).parse(input).unwrap();
        assert!(parsed.is_empty());
        assert_eq!(rest.offset(), 0);

        assert!(expect_runes::<char>(&['[', '!']).parse(input).is_none());
    }

    #[test]
    fn strings() {
        let text = runes("?:a");
        let input = Input::new(&text);

        let (parsed, rest) = expect_string::<String>("?:").parse(input).unwrap();
        assert_eq!(parsed, Parsed::scalar("?:".to_string(), 0));
        assert_eq!(rest.current(), Some(('a', 2)));

        assert!(expect_string::<String>("?:b").parse(input).is_none());
        assert!(expect_string::<String>("?:ab").parse(input).is_none());
    }

    #[test]
    fn failures_are_tracked() {
        let text = runes("abx");
        let tracker = FailureTracker::new();
        let input = Input::new(&text).tracked(&tracker);

        assert!(expect_string::<String>("abc").parse(input).is_none());
        assert_eq!(tracker.furthest_failure(), Some(2));

        assert!(expect_rune::<char>('z').parse(input).is_none());
        assert_eq!(tracker.furthest_failure(), Some(2));
    }
}
