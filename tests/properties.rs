//! Universal properties that must hold for every input, not just the hand-picked corpus cases.
//!
//! Generators are restricted to the grammar's own lexical vocabulary (keyword aliases,
//! connectives, quote/regex delimiters, short word fragments) rather than arbitrary bytes, so a
//! generated string actually exercises a real grammar path instead of bottoming out as a single
//! opaque `Bare` value every time.

use proptest::prelude::*;
use query_parser::ast::*;
use query_parser::parse;
use query_vocab::{lookup_alias, KeywordId, KEYWORDS};

fn keyword_alias() -> impl Strategy<Value = String> {
    let aliases: Vec<String> = KEYWORDS.iter().flat_map(|info| info.aliases.iter().map(|a| a.to_string())).collect();
    proptest::sample::select(aliases)
}

fn connective_word(canonical_and: bool) -> impl Strategy<Value = &'static str> {
    if canonical_and {
        proptest::sample::select(vec!["and", "AND", "&"]).boxed()
    } else {
        proptest::sample::select(vec!["or", "OR", "|"]).boxed()
    }
}

fn plain_word() -> impl Strategy<Value = String> {
    "[a-z]{2,8}".prop_filter("must not collide with a reserved connective/not word", |w| {
        !matches!(w.to_ascii_lowercase().as_str(), "and" | "or" | "not")
    })
}

// ---------------------------------------------------------------------------------------------
// Property 1: parse never rejects input, no matter how malformed.
// ---------------------------------------------------------------------------------------------

proptest! {
    #[test]
    fn parse_never_panics_on_arbitrary_text(s in ".{0,64}") {
        let _ = parse(&s);
    }

    #[test]
    fn parse_never_panics_on_vocabulary_soup(
        words in proptest::collection::vec(prop_oneof![keyword_alias(), plain_word(), Just(":".to_string()), Just("(".to_string()), Just(")".to_string())], 0..12)
    ) {
        let input = words.join(" ");
        let _ = parse(&input);
    }
}

// ---------------------------------------------------------------------------------------------
// Property 2: whitespace-only or empty input is the empty query, and nothing else.
// ---------------------------------------------------------------------------------------------

proptest! {
    #[test]
    fn whitespace_only_input_is_empty_query(ws in "[ \t\n]{0,8}") {
        let q = parse(&ws);
        prop_assert_eq!(q.0.len(), 1);
        prop_assert_eq!(&q.0[0].node, &QueryItem::Empty);
    }
}

// ---------------------------------------------------------------------------------------------
// Property 3: a recognized keyword alias is always normalized to its canonical id in the tree —
// the tree never carries the raw alias spelling for a known keyword.
// ---------------------------------------------------------------------------------------------

proptest! {
    #[test]
    fn known_keyword_aliases_normalize_to_canonical_ids(alias in keyword_alias(), value in plain_word()) {
        let input = format!("{alias} {value}");
        let q = parse(&input);
        let QueryItem::Statement(Statement::Expression(expr)) = &q.0[0].node else {
            prop_assert!(false, "expected a single Expression statement, got {:?}", q.0[0].node);
            unreachable!()
        };
        let Expression::Simple(SimpleQuery::Keyword(KeywordQuery::Spires { keyword, .. })) = &expr.node else {
            prop_assert!(false, "expected a Spires keyword query, got {:?}", expr.node);
            unreachable!()
        };
        let expected = lookup_alias(&alias).expect("generator only produces registered aliases");
        match keyword {
            // `ac` is deliberately ambiguous; either resolution is canonical, neither is the
            // raw alias spelling.
            KeywordRef::Known(KeywordId::ExactAuthor) | KeywordRef::Known(KeywordId::AuthorCount)
                if alias.eq_ignore_ascii_case("ac") => {}
            KeywordRef::Known(id) => prop_assert_eq!(*id, expected),
            KeywordRef::Unknown(raw) => prop_assert!(false, "known alias {alias:?} surfaced as Unknown({raw:?})"),
        }
    }
}

// ---------------------------------------------------------------------------------------------
// Property 4: a Complex (quoted) value preserves its opening/closing delimiters exactly.
// ---------------------------------------------------------------------------------------------

proptest! {
    #[test]
    fn complex_value_preserves_delimiters_exactly(word in "[a-zA-Z]{1,10}", quote in proptest::sample::select(vec!['\'', '"'])) {
        let quoted = format!("{quote}{word}{quote}");
        let input = format!("title:{quoted}");
        let q = parse(&input);
        let QueryItem::Statement(Statement::Expression(expr)) = &q.0[0].node else {
            prop_assert!(false, "expected a single Expression statement, got {:?}", q.0[0].node);
            unreachable!()
        };
        let Expression::Simple(SimpleQuery::Keyword(KeywordQuery::Invenio { value, .. })) = &expr.node else {
            prop_assert!(false, "expected an Invenio keyword query, got {:?}", expr.node);
            unreachable!()
        };
        prop_assert_eq!(&value.node, &Value::Complex(quoted));
    }
}

// ---------------------------------------------------------------------------------------------
// Property 5: parsing is deterministic — the same input always yields a structurally equal tree.
// ---------------------------------------------------------------------------------------------

proptest! {
    #[test]
    fn parsing_is_deterministic(
        words in proptest::collection::vec(prop_oneof![keyword_alias(), plain_word()], 1..8)
    ) {
        let input = words.join(" ");
        let first = parse(&input);
        let second = parse(&input);
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------------------------
// Property 6: boolean connective symbols are equivalent to their word forms — swapping
// `and` <-> `&` or `or` <-> `|` on any input yields the same tree.
// ---------------------------------------------------------------------------------------------

proptest! {
    #[test]
    fn and_word_and_ampersand_are_interchangeable(
        left_kw in keyword_alias(), left_val in plain_word(),
        right_kw in keyword_alias(), right_val in plain_word(),
        word_form in connective_word(true),
    ) {
        let symbol_form = "&";
        let with_word = format!("{left_kw} {left_val} {word_form} {right_kw} {right_val}");
        let with_symbol = format!("{left_kw} {left_val} {symbol_form} {right_kw} {right_val}");
        prop_assert_eq!(parse(&with_word), parse(&with_symbol));
    }

    #[test]
    fn or_word_and_pipe_are_interchangeable(
        left_kw in keyword_alias(), left_val in plain_word(),
        right_kw in keyword_alias(), right_val in plain_word(),
        word_form in connective_word(false),
    ) {
        let symbol_form = "|";
        let with_word = format!("{left_kw} {left_val} {word_form} {right_kw} {right_val}");
        let with_symbol = format!("{left_kw} {left_val} {symbol_form} {right_kw} {right_val}");
        prop_assert_eq!(parse(&with_word), parse(&with_symbol));
    }
}

// ---------------------------------------------------------------------------------------------
// Property 7 (find/fin/f prefix equivalence) and the seed boundary scenarios are simple enough
// to hand-write as plain unit tests rather than generate.
// ---------------------------------------------------------------------------------------------

#[test]
fn find_fin_f_prefixes_are_equivalent_to_no_prefix() {
    let bare = parse("author ellis");
    for prefix in ["find", "fin", "f", "FIND", "Fin"] {
        let prefixed = parse(&format!("{prefix} author ellis"));
        assert_eq!(prefixed, bare, "prefix {prefix:?} should be equivalent to no prefix at all");
    }
}

#[test]
fn seed_empty_input() {
    let q = parse("");
    assert_eq!(q.0.len(), 1);
    assert_eq!(q.0[0].node, QueryItem::Empty);
}

#[test]
fn seed_fin_prefix_with_invenio_quoted_value() {
    let q = parse("FIN author:'ellis'");
    let QueryItem::Statement(Statement::Expression(expr)) = &q.0[0].node else {
        panic!("expected a single Expression statement, got {:?}", q.0[0].node);
    };
    match &expr.node {
        Expression::Simple(SimpleQuery::Keyword(KeywordQuery::Invenio { keyword, value })) => {
            assert_eq!(*keyword, KeywordRef::Known(KeywordId::Author));
            assert_eq!(value.node, Value::Complex("'ellis'".into()));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn seed_range_and_topcite_range_conjoined() {
    let q = parse("d 2015->2017 and cited:1->9");
    let QueryItem::Statement(Statement::Boolean(b)) = &q.0[0].node else {
        panic!("expected a Boolean statement, got {:?}", q.0[0].node);
    };
    assert_eq!(b.op, Connective::And);
    match &b.left.node {
        Expression::Simple(SimpleQuery::Keyword(KeywordQuery::Spires { keyword, value })) => {
            assert_eq!(*keyword, KeywordRef::Known(KeywordId::Date));
            assert_eq!(
                value.node,
                Value::Range(RangeOp {
                    from: "2015".into(),
                    to: "2017".into(),
                })
            );
        }
        other => panic!("unexpected left {other:?}"),
    }
    let Statement::Expression(right_expr) = &b.right.node else {
        panic!("expected a trailing Expression, got {:?}", b.right.node);
    };
    match &right_expr.node {
        Expression::Simple(SimpleQuery::Keyword(KeywordQuery::Invenio { keyword, value })) => {
            assert_eq!(*keyword, KeywordRef::Known(KeywordId::Topcite));
            assert_eq!(
                value.node,
                Value::Range(RangeOp {
                    from: "1".into(),
                    to: "9".into(),
                })
            );
        }
        other => panic!("unexpected right {other:?}"),
    }
}

#[test]
fn seed_malformed_tail_on_its_own() {
    let q = parse("title and foo");
    assert_eq!(q.0.len(), 1);
    match &q.0[0].node {
        QueryItem::Malformed(words) => assert_eq!(words, &vec!["title".to_string(), "and".to_string(), "foo".to_string()]),
        other => panic!("unexpected {other:?}"),
    }
}
