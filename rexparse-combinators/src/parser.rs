use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::{Input, Parsed, Value};

/// What a parser produces: the result and the remaining input, or nothing on failure.
pub type Reply<'a, T> = Option<(Parsed<T>, Input<'a>)>;

type ParseFn<T> = dyn for<'a> Fn(Input<'a>) -> Reply<'a, T> + Send + Sync;

/// A parser is a shareable, immutable value wrapping a pure function over [`Input`].
///
/// Cloning is cheap; all clones run the same function. Parsers hold no state of their own, so a
/// single grammar can be used from several threads at once.
pub struct Parser<T> {
    run: Arc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> Debug for Parser<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

impl<T: 'static> Parser<T> {
    pub fn new<F>(run: F) -> Self
    where
        F: for<'a> Fn(Input<'a>) -> Reply<'a, T> + Send + Sync + 'static,
    {
        Self { run: Arc::new(run) }
    }

    pub fn parse<'a>(&self, input: Input<'a>) -> Reply<'a, T> {
        (self.run)(input)
    }

    /// A parser that never succeeds.
    pub fn fail() -> Self {
        Self::new(|_| None)
    }

    /// Recursively concatenates nested sequences into one flat sequence, dropping `Empty`
    /// results. Scalars and `Empty` pass through unchanged.
    pub fn flatten(self) -> Self {
        Self::new(move |input| {
            let (parsed, rest) = self.parse(input)?;
            let Parsed { value, pos } = parsed;
            let flat = match value {
                Value::Sequence(items) => {
                    let mut flat = Vec::new();
                    for item in items {
                        item.flatten_into(&mut flat);
                    }
                    if flat.is_empty() {
                        Parsed::empty(pos)
                    } else {
                        Parsed::new(Value::Sequence(flat), pos)
                    }
                }
                value => Parsed::new(value, pos),
            };
            Some((flat, rest))
        })
    }

    /// Picks element `index` out of a sequence result (`Empty` if out of bounds). Results that
    /// are not sequences pass through unchanged.
    pub fn get(self, index: usize) -> Self {
        Self::new(move |input| {
            let (parsed, rest) = self.parse(input)?;
            let Parsed { value, pos } = parsed;
            let picked = match value {
                Value::Sequence(mut items) if index < items.len() => items.swap_remove(index),
                Value::Sequence(_) => Parsed::empty(pos),
                value => Parsed::new(value, pos),
            };
            Some((picked, rest))
        })
    }

    /// Maps a successful result through `f`. When `f` rejects the result, the whole parser
    /// fails even though the underlying parser matched.
    pub fn convert<F>(self, f: F) -> Self
    where
        F: Fn(Parsed<T>) -> Option<Value<T>> + Send + Sync + 'static,
    {
        Self::new(move |input| {
            let (parsed, rest) = self.parse(input)?;
            let pos = parsed.pos;
            let value = f(parsed)?;
            Some((Parsed::new(value, pos), rest))
        })
    }

    /// Builds the continuation parser from the result of `self`, and runs it on the remaining
    /// input. The continuation's result is the result of the whole parser.
    pub fn bind<F>(self, f: F) -> Self
    where
        F: Fn(Parsed<T>) -> Parser<T> + Send + Sync + 'static,
    {
        Self::new(move |input| {
            let (parsed, rest) = self.parse(input)?;
            let next = f(parsed);
            next.parse(rest)
        })
    }
}

impl<T: Clone + Send + Sync + 'static> Parser<T> {
    /// A parser that succeeds with `parsed` without consuming input.
    pub fn pure(parsed: Parsed<T>) -> Self {
        Self::new(move |input| Some((parsed.clone(), input)))
    }

    /// Keeps only the requested elements of a sequence result, in the requested order.
    ///
    /// Out-of-range indices are dropped, and if nothing survives the result is `Empty`.
    /// Results that are not sequences pass through unchanged.
    pub fn select(self, indices: &[usize]) -> Self {
        let indices = indices.to_vec();
        Self::new(move |input| {
            let (parsed, rest) = self.parse(input)?;
            let Parsed { value, pos } = parsed;
            let selected = match value {
                Value::Sequence(items) => {
                    let picked: Vec<_> = indices
                        .iter()
                        .filter_map(|&index| items.get(index).cloned())
                        .collect();
                    if picked.is_empty() {
                        Parsed::empty(pos)
                    } else {
                        Parsed::sequence(picked, pos)
                    }
                }
                value => Parsed::new(value, pos),
            };
            Some((selected, rest))
        })
    }
}
