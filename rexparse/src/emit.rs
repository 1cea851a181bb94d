use proc_macro2::TokenStream;
use quote::{quote, ToTokens};

use crate::ast::*;

impl Regex {
    /// Rust code for an expression that constructs this syntax tree. Paths are absolute, through
    /// `::rexparse::ast`, so the code can be spliced into any crate that depends on `rexparse`.
    pub fn emit(&self) -> TokenStream {
        self.to_token_stream()
    }
}

fn option<T: ToTokens>(value: Option<&T>) -> TokenStream {
    match value {
        Some(value) => quote!(::core::option::Option::Some(#value)),
        None => quote!(::core::option::Option::None),
    }
}

fn vec<T: ToTokens>(items: &[T]) -> TokenStream {
    quote!(::std::vec![#(#items),*])
}

impl ToTokens for Regex {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            begin_anchor,
            expr,
            pos,
        } = self;
        tokens.extend(quote!(::rexparse::ast::Regex {
            begin_anchor: #begin_anchor,
            expr: #expr,
            pos: #pos,
        }));
    }
}

impl ToTokens for Expr {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self { subexpr, alt, pos } = self;
        let alt = match alt {
            Some(alt) => quote!(::core::option::Option::Some(::std::boxed::Box::new(#alt))),
            None => quote!(::core::option::Option::None),
        };
        tokens.extend(quote!(::rexparse::ast::Expr {
            subexpr: #subexpr,
            alt: #alt,
            pos: #pos,
        }));
    }
}

impl ToTokens for Subexpr {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let items = vec(&self.items);
        let pos = self.pos;
        tokens.extend(quote!(::rexparse::ast::Subexpr {
            items: #items,
            pos: #pos,
        }));
    }
}

impl ToTokens for SubexprItem {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            SubexprItem::Group(group) => quote!(::rexparse::ast::SubexprItem::Group(#group)),
            SubexprItem::Anchor(anchor) => quote!(::rexparse::ast::SubexprItem::Anchor(#anchor)),
            SubexprItem::Backref(backref) => {
                quote!(::rexparse::ast::SubexprItem::Backref(#backref))
            }
            SubexprItem::Match(m) => quote!(::rexparse::ast::SubexprItem::Match(#m)),
        });
    }
}

impl ToTokens for Group {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            non_capturing,
            expr,
            quant,
            pos,
        } = self;
        let quant = option(quant.as_ref());
        tokens.extend(quote!(::rexparse::ast::Group {
            non_capturing: #non_capturing,
            expr: #expr,
            quant: #quant,
            pos: #pos,
        }));
    }
}

impl ToTokens for Anchor {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let kind = match self.kind {
            AnchorKind::EndOfString => quote!(EndOfString),
            AnchorKind::WordBoundary => quote!(WordBoundary),
            AnchorKind::NotWordBoundary => quote!(NotWordBoundary),
        };
        let pos = self.pos;
        tokens.extend(quote!(::rexparse::ast::Anchor {
            kind: ::rexparse::ast::AnchorKind::#kind,
            pos: #pos,
        }));
    }
}

impl ToTokens for Backref {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self { number, pos } = self;
        tokens.extend(quote!(::rexparse::ast::Backref {
            number: #number,
            pos: #pos,
        }));
    }
}

impl ToTokens for Match {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self { item, quant, pos } = self;
        let quant = option(quant.as_ref());
        tokens.extend(quote!(::rexparse::ast::Match {
            item: #item,
            quant: #quant,
            pos: #pos,
        }));
    }
}

impl ToTokens for MatchItem {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            MatchItem::AnyChar(any) => quote!(::rexparse::ast::MatchItem::AnyChar(#any)),
            MatchItem::CharClass(class) => quote!(::rexparse::ast::MatchItem::CharClass(#class)),
            MatchItem::AsciiCharClass(class) => {
                quote!(::rexparse::ast::MatchItem::AsciiCharClass(#class))
            }
            MatchItem::CharGroup(group) => quote!(::rexparse::ast::MatchItem::CharGroup(#group)),
            MatchItem::Char(c) => quote!(::rexparse::ast::MatchItem::Char(#c)),
        });
    }
}

impl ToTokens for AnyChar {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let pos = self.pos;
        tokens.extend(quote!(::rexparse::ast::AnyChar { pos: #pos }));
    }
}

impl ToTokens for CharClass {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let kind = match self.kind {
            CharClassKind::Digit => quote!(Digit),
            CharClassKind::NotDigit => quote!(NotDigit),
            CharClassKind::Space => quote!(Space),
            CharClassKind::NotSpace => quote!(NotSpace),
            CharClassKind::Word => quote!(Word),
            CharClassKind::NotWord => quote!(NotWord),
        };
        let pos = self.pos;
        tokens.extend(quote!(::rexparse::ast::CharClass {
            kind: ::rexparse::ast::CharClassKind::#kind,
            pos: #pos,
        }));
    }
}

impl ToTokens for AsciiCharClass {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let kind = match self.kind {
            AsciiClassKind::Alnum => quote!(Alnum),
            AsciiClassKind::Alpha => quote!(Alpha),
            AsciiClassKind::Blank => quote!(Blank),
            AsciiClassKind::Cntrl => quote!(Cntrl),
            AsciiClassKind::Digit => quote!(Digit),
            AsciiClassKind::Graph => quote!(Graph),
            AsciiClassKind::Lower => quote!(Lower),
            AsciiClassKind::Print => quote!(Print),
            AsciiClassKind::Punct => quote!(Punct),
            AsciiClassKind::Space => quote!(Space),
            AsciiClassKind::Upper => quote!(Upper),
            AsciiClassKind::XDigit => quote!(XDigit),
        };
        let pos = self.pos;
        tokens.extend(quote!(::rexparse::ast::AsciiCharClass {
            kind: ::rexparse::ast::AsciiClassKind::#kind,
            pos: #pos,
        }));
    }
}

impl ToTokens for CharGroup {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let negated = self.negated;
        let items = vec(&self.items);
        let pos = self.pos;
        tokens.extend(quote!(::rexparse::ast::CharGroup {
            negated: #negated,
            items: #items,
            pos: #pos,
        }));
    }
}

impl ToTokens for CharGroupItem {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            CharGroupItem::CharClass(class) => {
                quote!(::rexparse::ast::CharGroupItem::CharClass(#class))
            }
            CharGroupItem::AsciiCharClass(class) => {
                quote!(::rexparse::ast::CharGroupItem::AsciiCharClass(#class))
            }
            CharGroupItem::CharRange(range) => {
                quote!(::rexparse::ast::CharGroupItem::CharRange(#range))
            }
            CharGroupItem::Char(c) => quote!(::rexparse::ast::CharGroupItem::Char(#c)),
        });
    }
}

impl ToTokens for CharRange {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self { low, high } = self;
        tokens.extend(quote!(::rexparse::ast::CharRange {
            low: #low,
            high: #high,
        }));
    }
}

impl ToTokens for Quantifier {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            cardinality,
            lazy,
            pos,
        } = self;
        tokens.extend(quote!(::rexparse::ast::Quantifier {
            cardinality: #cardinality,
            lazy: #lazy,
            pos: #pos,
        }));
    }
}

impl ToTokens for Cardinality {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            Cardinality::ZeroOrOne => quote!(::rexparse::ast::Cardinality::ZeroOrOne),
            Cardinality::ZeroOrMore => quote!(::rexparse::ast::Cardinality::ZeroOrMore),
            Cardinality::OneOrMore => quote!(::rexparse::ast::Cardinality::OneOrMore),
            Cardinality::Range { low, high } => {
                let high = option(high.as_ref());
                quote!(::rexparse::ast::Cardinality::Range {
                    low: #low,
                    high: #high,
                })
            }
        });
    }
}

impl ToTokens for UpperBound {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let value = option(self.value.as_ref());
        let pos = self.pos;
        tokens.extend(quote!(::rexparse::ast::UpperBound {
            value: #value,
            pos: #pos,
        }));
    }
}

impl ToTokens for Num {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self { value, pos } = self;
        tokens.extend(quote!(::rexparse::ast::Num {
            value: #value,
            pos: #pos,
        }));
    }
}

impl ToTokens for Char {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self { value, pos } = self;
        tokens.extend(quote!(::rexparse::ast::Char {
            value: #value,
            pos: #pos,
        }));
    }
}
