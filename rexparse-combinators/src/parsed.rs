/// The value half of a parse result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<T> {
    /// Nothing was matched (ε).
    Empty,
    Scalar(T),
    Sequence(Vec<Parsed<T>>),
}

/// A value paired with the offset of the first rune it was built from.
///
/// The offset of an `Empty` result is whatever the input offset happened to be and carries no
/// meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: Value<T>,
    pub pos: usize,
}

impl<T> Parsed<T> {
    pub fn new(value: Value<T>, pos: usize) -> Self {
        Self { value, pos }
    }

    pub fn empty(pos: usize) -> Self {
        Self::new(Value::Empty, pos)
    }

    pub fn scalar(value: T, pos: usize) -> Self {
        Self::new(Value::Scalar(value), pos)
    }

    /// Builds a composite positioned at its first non-empty component, or at `fallback` when
    /// every component is empty.
    pub fn sequence(items: Vec<Parsed<T>>, fallback: usize) -> Self {
        let pos = first_pos(&items).unwrap_or(fallback);
        Self::new(Value::Sequence(items), pos)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.value, Value::Empty)
    }

    pub fn into_scalar(self) -> Option<T> {
        match self.value {
            Value::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Views the result as a list: `Empty` has no items and a scalar is its own only item.
    pub fn into_items(self) -> Vec<Parsed<T>> {
        match self.value {
            Value::Empty => Vec::new(),
            Value::Scalar(_) => vec![self],
            Value::Sequence(items) => items,
        }
    }

    /// Concatenates all nested sequences into one list, dropping empty results.
    pub(crate) fn flatten_into(self, out: &mut Vec<Parsed<T>>) {
        match self.value {
            Value::Empty => {}
            Value::Scalar(_) => out.push(self),
            Value::Sequence(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

pub(crate) fn first_pos<T>(items: &[Parsed<T>]) -> Option<usize> {
    items.iter().find(|item| !item.is_empty()).map(|item| item.pos)
}

#[cfg(test)]
mod tests {
    use super::{Parsed, Value};

    #[test]
    fn sequence_position_skips_empty() {
        let seq = Parsed::sequence(
            vec![Parsed::empty(0), Parsed::scalar('a', 4), Parsed::scalar('b', 5)],
            0,
        );
        assert_eq!(seq.pos, 4);

        let all_empty: Parsed<char> = Parsed::sequence(vec![Parsed::empty(9)], 2);
        assert_eq!(all_empty.pos, 2);
    }

    #[test]
    fn items() {
        assert!(Parsed::<char>::empty(0).into_items().is_empty());
        assert_eq!(
            Parsed::scalar('x', 1).into_items(),
            vec![Parsed::scalar('x', 1)]
        );

        let nested = Parsed::sequence(
            vec![
                Parsed::scalar('a', 0),
                Parsed::sequence(vec![Parsed::empty(1), Parsed::scalar('b', 1)], 1),
            ],
            0,
        );
        let mut flat = Vec::new();
        nested.flatten_into(&mut flat);
        assert_eq!(flat, vec![Parsed::scalar('a', 0), Parsed::scalar('b', 1)]);
        assert_eq!(
            Parsed::new(Value::Sequence(flat), 0).into_scalar(),
            None::<char>
        );
    }
}
