use std::sync::{Arc, OnceLock};

use crate::Parser;

/// A rule that can be referenced before it is defined, for mutually recursive grammars.
///
/// References obtained through [`Forward::parser`] are weak: whoever keeps the parser returned
/// by [`Forward::define`] owns the rule, so recursive rules never form reference cycles.
pub struct Forward<T> {
    cell: Arc<OnceLock<Parser<T>>>,
}

impl<T: 'static> Forward<T> {
    pub fn new() -> Self {
        Self {
            cell: Arc::new(OnceLock::new()),
        }
    }

    /// A late-bound reference to the rule. It fails while the rule is undefined, and after the
    /// defined rule has been dropped.
    pub fn parser(&self) -> Parser<T> {
        let weak = Arc::downgrade(&self.cell);
        Parser::new(move |input| {
            let Some(cell) = weak.upgrade() else {
                log::warn!("late-bound rule used after its grammar was dropped");
                return None;
            };
            let rule = cell.get()?;
            rule.parse(input)
        })
    }

    /// Ties the knot, returning the owning parser for the rule.
    pub fn define(self, parser: Parser<T>) -> Parser<T> {
        self.cell.set(parser).ok();
        let cell = self.cell;
        Parser::new(move |input| cell.get()?.parse(input))
    }
}

impl<T: 'static> Default for Forward<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Forward;
    use crate::{alt, concat, expect_rune, Input, Parser};

    // parens ::= "(" parens ")" | "x"
    fn parens() -> Parser<char> {
        let rule = Forward::new();
        let body = alt([
            concat([expect_rune('('), rule.parser(), expect_rune(')')]).get(1),
            expect_rune('x'),
        ]);
        rule.define(body)
    }

    #[test]
    fn recursive_rule() {
        let parens = parens();
        for (text, ok) in [("x", true), ("((x))", true), ("((x)", false), ("()", false)] {
            let runes: Vec<char> = text.chars().collect();
            let result = parens.parse(Input::new(&runes));
            assert_eq!(
                result.is_some_and(|(_, rest)| rest.is_empty()),
                ok,
                "{text}"
            );
        }
    }

    #[test]
    fn undefined_and_dropped_rules_fail() {
        let runes = vec!['x'];
        let rule: Forward<char> = Forward::new();
        let reference = rule.parser();
        assert!(reference.parse(Input::new(&runes)).is_none());

        let defined = rule.define(expect_rune('x'));
        assert!(reference.parse(Input::new(&runes)).is_some());

        drop(defined);
        assert!(reference.parse(Input::new(&runes)).is_none());
    }
}
