use std::fs;

use veritab::{
    Assignment, BinaryOperator, Error, EvalError, Expr, LexError, ParseError, Token, TruthTable,
    analyze, evaluate, parse_formula,
};
use veritab::interpreter::{lexer::tokenize, table::assignments};

fn table(source: &str) -> TruthTable {
    match analyze(source) {
        Ok(analysis) => analysis.table,
        Err(e) => panic!("Formula '{source}' failed: {e}"),
    }
}

/// Looks up the result for one row by its truth values, given in
/// sorted-variable order.
fn result_for(table: &TruthTable, values: &[bool]) -> bool {
    table.rows
         .iter()
         .find(|row| {
             row.assignment
                .iter()
                .map(|(_, value)| *value)
                .eq(values.iter().copied())
         })
         .unwrap_or_else(|| panic!("No row for values {values:?}"))
         .result
}

#[test]
fn single_variable_has_two_rows() {
    let table = table("P");
    assert_eq!(table.variables, vec!['P']);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].assignment, vec![('P', false)]);
    assert!(!table.rows[0].result);
    assert_eq!(table.rows[1].assignment, vec![('P', true)]);
    assert!(table.rows[1].result);
}

#[test]
fn conjunction_truth_table() {
    let table = table("P ∧ Q");
    assert_eq!(table.rows.len(), 4);
    assert!(result_for(&table, &[true, true]));
    assert!(!result_for(&table, &[true, false]));
    assert!(!result_for(&table, &[false, true]));
    assert!(!result_for(&table, &[false, false]));
}

#[test]
fn implication_truth_table() {
    let table = table("P → Q");
    assert!(result_for(&table, &[false, false]));
    assert!(!result_for(&table, &[true, false]));
    assert!(result_for(&table, &[false, true]));
    assert!(result_for(&table, &[true, true]));
}

#[test]
fn negation_flips_every_row() {
    let negated = table("¬(P ∧ Q)");
    let plain = table("P ∧ Q");

    assert_eq!(negated.rows.len(), plain.rows.len());
    for (negated_row, plain_row) in negated.rows.iter().zip(&plain.rows) {
        assert_eq!(negated_row.assignment, plain_row.assignment);
        assert_eq!(negated_row.result, !plain_row.result);
    }
}

#[test]
fn grouped_implication_truth_table() {
    let table = table("(P ∨ Q) → R");
    assert_eq!(table.rows.len(), 8);
    assert!(result_for(&table, &[false, false, false]));
    assert!(!result_for(&table, &[true, false, false]));
}

#[test]
fn tautology_holds_in_every_row() {
    let table = table("P ∨ ¬P");
    assert!(table.rows.iter().all(|row| row.result));
}

#[test]
fn double_negation_matches_plain_variable() {
    let doubled = table("¬¬P");
    let plain = table("P");
    for (doubled_row, plain_row) in doubled.rows.iter().zip(&plain.rows) {
        assert_eq!(doubled_row.result, plain_row.result);
    }
}

#[test]
fn chaining_is_flat_left_to_right() {
    // No precedence among the binary connectives: the disjunction is the
    // outer node and the conjunction subtree is its left child.
    let expected = Expr::Binary {
        operator: BinaryOperator::Or,
        left:     Box::new(Expr::Binary {
            operator: BinaryOperator::And,
            left:     Box::new(Expr::Variable { name: 'P' }),
            right:    Box::new(Expr::Variable { name: 'Q' }),
        }),
        right:    Box::new(Expr::Variable { name: 'R' }),
    };
    assert_eq!(parse_formula("P ∧ Q ∨ R").unwrap(), expected);
}

#[test]
fn implication_gets_no_special_precedence() {
    // Conventional precedence would parse this as P → (Q ∧ R); the flat
    // chain folds it as (P → Q) ∧ R instead.
    let expr = parse_formula("P → Q ∧ R").unwrap();
    match expr {
        Expr::Binary { operator: BinaryOperator::And, left, .. } => {
            assert!(matches!(*left, Expr::Binary { operator: BinaryOperator::Implies, .. }));
        },
        other => panic!("Expected a conjunction at the root, got {other:?}"),
    }
}

#[test]
fn row_count_is_exponential_in_variables() {
    for (source, n) in [("P", 1), ("P ∧ Q", 2), ("(P ∨ Q) → R", 3), ("(A ∧ B) ∨ (C ∧ D)", 4)] {
        assert_eq!(table(source).rows.len(), 1 << n, "wrong row count for '{source}'");
    }
}

#[test]
fn zero_variables_yield_one_empty_assignment() {
    let generated = assignments(&[]);
    assert_eq!(generated.len(), 1);
    assert!(generated[0].is_empty());
}

#[test]
fn assignments_follow_binary_counting_order() {
    // Bit 0 of the counter drives the first sorted variable, so it
    // toggles fastest.
    let table = table("P ∧ Q");
    assert_eq!(table.rows[0].assignment, vec![('P', false), ('Q', false)]);
    assert_eq!(table.rows[1].assignment, vec![('P', true), ('Q', false)]);
    assert_eq!(table.rows[2].assignment, vec![('P', false), ('Q', true)]);
    assert_eq!(table.rows[3].assignment, vec![('P', true), ('Q', true)]);
}

#[test]
fn row_description_uses_sorted_variable_order() {
    let table = table("Q ∧ P");
    assert_eq!(table.rows[0].describe(), "P=false, Q=false");
    assert_eq!(table.rows[1].describe(), "P=true, Q=false");
}

#[test]
fn ampersand_is_a_lex_error() {
    assert!(matches!(analyze("P & Q"),
                     Err(Error::Lex(LexError { found: '&', offset: 2 }))));
}

#[test]
fn lowercase_variable_is_a_lex_error() {
    assert!(matches!(analyze("p"), Err(Error::Lex(LexError { found: 'p', offset: 0 }))));
}

#[test]
fn lex_error_offsets_count_characters() {
    // The two-byte '¬' and '∧' symbols each still advance the offset by
    // one character.
    assert!(matches!(analyze("¬P ∧ q"),
                     Err(Error::Lex(LexError { found: 'q', offset: 5 }))));
}

#[test]
fn token_offsets_count_characters() {
    let tokens = tokenize("¬(P ∧ Q)").unwrap();
    assert_eq!(tokens,
               vec![(Token::Not, 0),
                    (Token::LParen, 1),
                    (Token::Variable('P'), 2),
                    (Token::And, 4),
                    (Token::Variable('Q'), 6),
                    (Token::RParen, 7)]);
}

#[test]
fn unicode_whitespace_is_skipped() {
    // No-break space and em space separate tokens without producing any.
    let table = table("P\u{a0}∧\u{2003}Q");
    assert_eq!(table.rows.len(), 4);
}

#[test]
fn unclosed_group_is_a_parse_error() {
    assert!(matches!(analyze("(P ∧ Q"),
                     Err(Error::Parse(ParseError::ExpectedClosingParen { opened_at: 0 }))));
}

#[test]
fn missing_operand_is_a_parse_error() {
    assert!(matches!(analyze(""), Err(Error::Parse(ParseError::UnexpectedEndOfInput))));
    assert!(matches!(analyze("P ∧"), Err(Error::Parse(ParseError::UnexpectedEndOfInput))));
}

#[test]
fn operand_position_rejects_stray_tokens() {
    assert!(matches!(analyze(")"),
                     Err(Error::Parse(ParseError::UnexpectedToken { token:  Token::RParen,
                                                                    offset: 0, }))));
    assert!(matches!(analyze("∧ P"),
                     Err(Error::Parse(ParseError::UnexpectedToken { token:  Token::And,
                                                                    offset: 0, }))));
}

#[test]
fn nesting_past_the_ceiling_is_a_parse_error() {
    let mut deep = "¬".repeat(200);
    deep.push('P');
    assert!(matches!(analyze(&deep),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));
}

#[test]
fn moderate_nesting_is_accepted() {
    let mut source = "¬".repeat(30);
    source.push('P');
    assert_eq!(table(&source).rows.len(), 2);
}

#[test]
fn too_many_variables_are_rejected() {
    let letters: Vec<String> = ('A'..='U').map(String::from).collect();
    let source = letters.join(" ∧ ");
    assert!(matches!(analyze(&source),
                     Err(Error::Eval(EvalError::TooManyVariables { count: 21, limit: 20 }))));
}

#[test]
fn unbound_variable_is_an_eval_error() {
    let expr = parse_formula("P ∧ Q").unwrap();
    let assignment: Assignment = [('P', true)].into_iter().collect();
    assert!(matches!(evaluate(&expr, &assignment),
                     Err(EvalError::UnboundVariable { name: 'Q' })));
}

#[test]
fn evaluation_never_consumes_the_tree() {
    let expr = parse_formula("P → Q").unwrap();
    for row in &table("P → Q").rows {
        let assignment: Assignment = row.assignment.iter().copied().collect();
        assert_eq!(evaluate(&expr, &assignment).unwrap(), row.result);
    }
}

#[test]
fn serialized_tree_has_the_tagged_form() {
    let expr = parse_formula("¬P ∨ Q").unwrap();
    let expected = serde_json::json!({
        "kind": "binary",
        "operator": "∨",
        "left": {
            "kind": "unary",
            "operator": "¬",
            "operand": { "kind": "variable", "name": "P" },
        },
        "right": { "kind": "variable", "name": "Q" },
    });
    assert_eq!(serde_json::to_value(&expr).unwrap(), expected);
}

#[test]
fn example_formulas_all_tabulate() {
    let contents = fs::read_to_string("tests/example.logic").expect("missing file");

    let mut count = 0;
    for line in contents.lines().map(str::trim).filter(|line| !line.is_empty()) {
        count += 1;
        let rows = table(line).rows.len();
        assert!(rows.is_power_of_two(), "'{line}' produced {rows} rows");
    }

    assert!(count > 0, "No formulas found in tests/example.logic");
}
