//! End-to-end expression parsing + lowering against the cube-list algebra,
//! exercised through the public `expression` and `name_table` surface rather
//! than the grammar's own unit tests.

use bcl_engine::decision::{is_subset, is_tautology};
use bcl_engine::expression::{lower, parse_expr};
use bcl_engine::name_table::NameTable;

fn table(vars: &[&str]) -> NameTable {
    let mut t = NameTable::new('x');
    for v in vars {
        t.intern(v);
    }
    t
}

#[test]
fn operator_precedence_matches_textbook_boolean_algebra() {
    // a | b & c == a | (b & c): satisfied whenever a is true regardless of b, c.
    let names = table(&["a", "b", "c"]);
    let expr = parse_expr("a + b * c").unwrap();
    let list = lower(&expr, &names).unwrap();

    let a_true = bcl_engine::CubeList::parse_bcl("1--\n").unwrap();
    assert!(is_subset(&a_true, &list).unwrap());
}

#[test]
fn de_morgan_expansion_matches_explicit_or_of_negated_literals() {
    let names = table(&["a", "b"]);
    let demorgan = lower(&parse_expr("!(a & b)").unwrap(), &names).unwrap();
    let explicit = lower(&parse_expr("!a + !b").unwrap(), &names).unwrap();

    assert!(is_subset(&demorgan, &explicit).unwrap());
    assert!(is_subset(&explicit, &demorgan).unwrap());
}

#[test]
fn complementary_literal_disjunction_is_a_tautology() {
    let names = table(&["a"]);
    let list = lower(&parse_expr("a | !a").unwrap(), &names).unwrap();
    assert!(is_tautology(&list).unwrap());
}

#[test]
fn constants_fold_to_universal_or_empty_list() {
    let names = table(&["a", "b"]);
    let always_true = lower(&parse_expr("1").unwrap(), &names).unwrap();
    let always_false = lower(&parse_expr("0").unwrap(), &names).unwrap();
    assert!(is_tautology(&always_true).unwrap());
    assert!(always_false.is_empty());
}

#[test]
fn nested_parens_and_mixed_operator_alphabets_parse_identically() {
    let names = table(&["a", "b", "c"]);
    let ascii = lower(&parse_expr("a & (b | c)").unwrap(), &names).unwrap();
    let symbolic = lower(&parse_expr("a * (b + c)").unwrap(), &names).unwrap();
    assert!(is_subset(&ascii, &symbolic).unwrap());
    assert!(is_subset(&symbolic, &ascii).unwrap());
}

#[test]
fn unparseable_expression_reports_invalid_syntax() {
    let err = parse_expr("a & & b").unwrap_err();
    assert!(matches!(
        err,
        bcl_engine::ExpressionParseError::InvalidSyntax { .. }
    ));
}
