use std::io;
use std::io::Write;

use crate::ast::*;

impl Regex {
    /// Writes the syntax tree as a Graphviz digraph, one node per tree node, labelled with the
    /// node kind and its offset.
    pub fn output_dot(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w, "digraph {{")?;
        let mut out = DotWriter {
            w: &mut *w,
            next: 0,
        };
        let label = if self.begin_anchor { "regex ^" } else { "regex" };
        let root = out.node(label, self.pos)?;
        out.expr(root, &self.expr)?;
        writeln!(w, "}}")?;
        Ok(())
    }
}

struct DotWriter<'w, W> {
    w: &'w mut W,
    next: usize,
}

impl<W: Write> DotWriter<'_, W> {
    fn node(&mut self, label: &str, pos: usize) -> io::Result<usize> {
        let id = self.next;
        self.next += 1;
        let label = label.replace('\\', "\\\\").replace('"', "\\\"");
        writeln!(self.w, "node[label=\"{label} @{pos}\"] id{id}")?;
        Ok(id)
    }

    fn edge(&mut self, src: usize, tgt: usize) -> io::Result<()> {
        writeln!(self.w, "id{src} -> id{tgt}")
    }

    fn child(&mut self, parent: usize, label: &str, pos: usize) -> io::Result<usize> {
        let id = self.node(label, pos)?;
        self.edge(parent, id)?;
        Ok(id)
    }

    fn expr(&mut self, parent: usize, expr: &Expr) -> io::Result<()> {
        let id = self.child(parent, "expr", expr.pos)?;
        for alternative in expr.alternatives() {
            let sub = self.child(id, "subexpr", alternative.pos)?;
            for item in &alternative.items {
                self.subexpr_item(sub, item)?;
            }
        }
        Ok(())
    }

    fn subexpr_item(&mut self, parent: usize, item: &SubexprItem) -> io::Result<()> {
        match item {
            SubexprItem::Group(group) => {
                let label = if group.non_capturing { "group ?:" } else { "group" };
                let id = self.child(parent, label, group.pos)?;
                self.expr(id, &group.expr)?;
                self.quantifier(id, group.quant.as_ref())
            }
            SubexprItem::Anchor(anchor) => {
                self.leaf(parent, &format!("anchor {anchor}"), anchor.pos)
            }
            SubexprItem::Backref(backref) => {
                self.leaf(parent, &format!("backref {}", backref.number), backref.pos)
            }
            SubexprItem::Match(m) => {
                let id = self.child(parent, "match", m.pos)?;
                self.match_item(id, &m.item)?;
                self.quantifier(id, m.quant.as_ref())
            }
        }
    }

    fn match_item(&mut self, parent: usize, item: &MatchItem) -> io::Result<()> {
        match item {
            MatchItem::CharGroup(group) => {
                let label = if group.negated { "group ^" } else { "group" };
                let id = self.child(parent, &format!("char {label}"), group.pos)?;
                for item in &group.items {
                    let label = match item {
                        CharGroupItem::CharClass(class) => format!("class {class}"),
                        CharGroupItem::AsciiCharClass(class) => format!("class {class}"),
                        CharGroupItem::CharRange(range) => format!("range {range}"),
                        CharGroupItem::Char(c) => format!("char {:?}", c.value),
                    };
                    self.child(id, &label, item.pos())?;
                }
                Ok(())
            }
            MatchItem::AnyChar(any) => self.leaf(parent, "any", any.pos),
            MatchItem::CharClass(class) => self.leaf(parent, &format!("class {class}"), class.pos),
            MatchItem::AsciiCharClass(class) => {
                self.leaf(parent, &format!("class {class}"), class.pos)
            }
            MatchItem::Char(c) => self.leaf(parent, &format!("char {:?}", c.value), c.pos),
        }
    }

    fn quantifier(&mut self, parent: usize, quant: Option<&Quantifier>) -> io::Result<()> {
        match quant {
            Some(quant) => self.leaf(parent, &format!("quantifier {quant}"), quant.pos),
            None => Ok(()),
        }
    }

    fn leaf(&mut self, parent: usize, label: &str, pos: usize) -> io::Result<()> {
        self.child(parent, label, pos).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use crate::parse_regex;

    #[test]
    fn writes_one_node_per_tree_node() {
        let regex = parse_regex("^(a|\\d)*\"").unwrap();
        let mut out = Vec::new();
        regex.output_dot(&mut out).unwrap();
        let dot = String::from_utf8(out).unwrap();

        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("node[label=\"regex ^ @0\"] id0"));
        assert!(dot.contains("node[label=\"class \\\\d @4\"]"));
        assert!(dot.contains("node[label=\"quantifier * @7\"]"));
        assert!(dot.contains("node[label=\"char '\\\"' @8\"]"));
        // regex, expr, subexpr, group, expr, two subexprs, two matches, two leaves, quantifier,
        // match and leaf for the quote.
        assert_eq!(dot.matches("node[").count(), 14);
        assert_eq!(dot.matches(" -> ").count(), 13);
    }
}
