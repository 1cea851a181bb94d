use pretty_assertions::assert_eq;
use rexparse::ast::*;
use rexparse::{parse_regex, ParseError, ParserConfig, RegexParser};

#[ctor::ctor]
fn init() {
    env_logger::init();
}

fn c(value: char, pos: usize) -> Char {
    Char { value, pos }
}

fn num(value: u32, pos: usize) -> Num {
    Num { value, pos }
}

fn literal(value: char, pos: usize) -> SubexprItem {
    SubexprItem::Match(Match {
        item: MatchItem::Char(c(value, pos)),
        quant: None,
        pos,
    })
}

fn quant(cardinality: Cardinality, pos: usize) -> Option<Quantifier> {
    Some(Quantifier {
        cardinality,
        lazy: false,
        pos,
    })
}

fn range(low: Char, high: Char) -> CharGroupItem {
    CharGroupItem::CharRange(CharRange { low, high })
}

fn class(kind: CharClassKind, pos: usize) -> CharClass {
    CharClass { kind, pos }
}

#[test]
fn alternation_in_quantified_group() {
    let expected = Regex {
        begin_anchor: false,
        expr: Expr {
            subexpr: Subexpr {
                items: vec![SubexprItem::Group(Group {
                    non_capturing: false,
                    expr: Expr {
                        subexpr: Subexpr {
                            items: vec![literal('a', 1)],
                            pos: 1,
                        },
                        alt: Some(Box::new(Expr {
                            subexpr: Subexpr {
                                items: vec![literal('b', 3)],
                                pos: 3,
                            },
                            alt: None,
                            pos: 3,
                        })),
                        pos: 1,
                    },
                    quant: quant(Cardinality::OneOrMore, 5),
                    pos: 0,
                })],
                pos: 0,
            },
            alt: None,
            pos: 0,
        },
        pos: 0,
    };
    assert_eq!(parse_regex("(a|b)+").unwrap(), expected);
}

#[test]
fn package_pattern() {
    let mut items: Vec<SubexprItem> = "package"
        .chars()
        .enumerate()
        .map(|(i, value)| literal(value, i + 1))
        .collect();
    items.push(SubexprItem::Match(Match {
        item: MatchItem::CharClass(class(CharClassKind::Space, 8)),
        quant: quant(Cardinality::OneOrMore, 10),
        pos: 8,
    }));
    items.push(SubexprItem::Match(Match {
        item: MatchItem::CharGroup(CharGroup {
            negated: false,
            items: vec![
                range(c('0', 12), c('9', 14)),
                range(c('A', 15), c('Z', 17)),
                range(c('a', 18), c('z', 20)),
                CharGroupItem::Char(c('_', 21)),
            ],
            pos: 11,
        }),
        quant: None,
        pos: 11,
    }));
    items.push(SubexprItem::Match(Match {
        item: MatchItem::CharGroup(CharGroup {
            negated: false,
            items: vec![
                CharGroupItem::CharClass(class(CharClassKind::Digit, 24)),
                CharGroupItem::CharClass(class(CharClassKind::Word, 26)),
            ],
            pos: 23,
        }),
        quant: quant(Cardinality::ZeroOrMore, 29),
        pos: 23,
    }));

    let expected = Regex {
        begin_anchor: true,
        expr: Expr {
            subexpr: Subexpr { items, pos: 1 },
            alt: None,
            pos: 1,
        },
        pos: 0,
    };
    assert_eq!(
        parse_regex(r"^package\s+[0-9A-Za-z_][\d\w]*").unwrap(),
        expected
    );
}

#[test]
fn negated_group() {
    let regex = parse_regex("[^#$]").unwrap();
    assert_eq!(
        regex.expr.subexpr.items,
        vec![SubexprItem::Match(Match {
            item: MatchItem::CharGroup(CharGroup {
                negated: true,
                items: vec![CharGroupItem::Char(c('#', 2)), CharGroupItem::Char(c('$', 3))],
                pos: 0,
            }),
            quant: None,
            pos: 0,
        })]
    );
}

#[test]
fn range_cardinalities() {
    let cardinality = |pattern: &str| match parse_regex(pattern).unwrap().expr.subexpr.items[0] {
        SubexprItem::Match(Match {
            quant: Some(quant), ..
        }) => quant.cardinality,
        ref other => panic!("expected a quantified match, got {other:?}"),
    };

    assert_eq!(
        cardinality("a{2}"),
        Cardinality::Range {
            low: num(2, 2),
            high: None
        }
    );
    assert_eq!(
        cardinality("a{2,}"),
        Cardinality::Range {
            low: num(2, 2),
            high: Some(UpperBound {
                value: None,
                pos: 3
            })
        }
    );
    assert_eq!(
        cardinality("a{2,4}"),
        Cardinality::Range {
            low: num(2, 2),
            high: Some(UpperBound {
                value: Some(num(4, 4)),
                pos: 3
            })
        }
    );
}

#[test]
fn unterminated_char_group_fails() {
    let err = parse_regex("[0-9").unwrap_err();
    assert!(matches!(err, ParseError::NoMatch { .. }));
    assert_eq!(err.pattern(), "[0-9");
    assert_eq!(
        err.to_string(),
        format!("invalid regex \"[0-9\": no match at offset {}", err.offset().unwrap())
    );
}

#[test]
fn printed_patterns_reparse_to_the_same_tree() {
    for pattern in [
        "(a|b)+",
        r"^package\s+[0-9A-Za-z_][\d\w]*",
        "[^#$]",
        "a*?b+?c??",
        r"(?:x{2}|y{2,}|z{2,4})\b\1$",
        r"\[\]\{\}\(\)\|\\",
        r"[\-\]\\a-]",
        r"[[:alnum:][:punct:]]\W\S\D",
        r"\t\n\r\f\v[\t-\r]",
        r"[\:alpha:]",
        r"[\:x][^:x:]",
        "(a|b|c)|d|e",
    ] {
        let parsed = parse_regex(pattern).unwrap();
        let printed = parsed.to_string();
        let reparsed = parse_regex(&printed).unwrap();
        assert_eq!(reparsed.to_string(), printed, "{pattern}");
        assert_eq!(
            without_positions(&reparsed),
            without_positions(&parsed),
            "{pattern}"
        );
    }
}

/// Printing normalises escapes, which moves offsets, so trees are compared without them.
fn without_positions(regex: &Regex) -> String {
    let debug = format!("{regex:?}");
    let mut out = String::with_capacity(debug.len());
    let mut rest = debug.as_str();
    while let Some(at) = rest.find("pos: ") {
        out.push_str(&rest[..at]);
        rest = rest[at + "pos: ".len()..].trim_start_matches(|c: char| c.is_ascii_digit());
    }
    out.push_str(rest);
    out
}

#[test]
fn shared_parser_across_threads() {
    let parser = RegexParser::new();
    std::thread::scope(|s| {
        for pattern in ["a|b", "[a-z]+", "(x)\\1"] {
            let parser = &parser;
            s.spawn(move || assert_eq!(parser.parse(pattern).unwrap().to_string(), pattern));
        }
    });
}

fn nested(depth: usize) -> String {
    format!("{}a{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn nesting_is_bounded() {
    let parser = RegexParser::with_config(ParserConfig::default().with_max_depth(8));
    assert!(parser.parse(nested(8)).is_ok());
    assert_eq!(
        parser.parse(nested(9)),
        Err(ParseError::TooDeep {
            pattern: nested(9),
            limit: 8
        })
    );
}

#[test]
fn default_nesting_limit() {
    assert!(parse_regex(nested(64)).is_ok());
    assert!(matches!(
        parse_regex(nested(65)),
        Err(ParseError::TooDeep { limit: 64, .. })
    ));
    assert!(matches!(
        parse_regex(nested(10_000)),
        Err(ParseError::TooDeep { limit: 64, .. })
    ));
}

#[test]
fn alternatives_do_not_nest() {
    let keywords = vec!["kw"; 200].join("|");
    let regex = parse_regex(&keywords).unwrap();
    assert_eq!(regex.expr.alternatives().count(), 200);
    assert_eq!(regex.to_string(), keywords);

    let parser = RegexParser::with_config(ParserConfig::default().with_max_depth(1));
    assert!(parser.parse("(a|b|c|d|e)").is_ok());
    assert!(matches!(
        parser.parse("((a)|b)"),
        Err(ParseError::TooDeep { limit: 1, .. })
    ));
}
