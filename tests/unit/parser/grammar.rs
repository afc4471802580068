use super::*;
use crate::lexer::classify::classify;
use crate::lexer::implicit::insert_implicit_mul;
use crate::lexer::scan::scan;

/// Run the full front end and parse, with variables `x` and `y`.
fn parse_str(input: &str) -> PlotexprResult<Node> {
    let functions = FunctionTable::default();
    let constants = ConstantTable::default();
    let variables = vec!["x".to_string(), "y".to_string()];
    let raw = scan(input)?;
    let classified = classify(raw, &variables, &functions, &constants)?;
    let tokens = insert_implicit_mul(classified);
    parse(&tokens, &functions, &constants)
}

fn var(name: &str) -> Node {
    Node::Variable(name.to_string())
}

#[test]
fn addition_is_left_associative() {
    // (x - y) + 1, not x - (y + 1).
    let ast = parse_str("x - y + 1").unwrap();
    assert_eq!(
        ast,
        Node::binary('+', Node::binary('-', var("x"), var("y")), Node::Number(1.0))
    );
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let ast = parse_str("1 + 2 * x").unwrap();
    assert_eq!(
        ast,
        Node::binary(
            '+',
            Node::Number(1.0),
            Node::binary('*', Node::Number(2.0), var("x"))
        )
    );
}

#[test]
fn power_is_right_associative() {
    let ast = parse_str("x^y^2").unwrap();
    assert_eq!(
        ast,
        Node::binary('^', var("x"), Node::binary('^', var("y"), Node::Number(2.0)))
    );
}

#[test]
fn unary_minus_binds_looser_than_power() {
    let ast = parse_str("-2^2").unwrap();
    assert_eq!(
        ast,
        Node::unary('-', Node::binary('^', Node::Number(2.0), Node::Number(2.0)))
    );
}

#[test]
fn exponent_may_carry_its_own_sign() {
    let ast = parse_str("2^-3").unwrap();
    assert_eq!(
        ast,
        Node::binary('^', Node::Number(2.0), Node::unary('-', Node::Number(3.0)))
    );
}

#[test]
fn constants_fold_to_literals() {
    let ast = parse_str("pi").unwrap();
    assert_eq!(ast, Node::Number(std::f64::consts::PI));
}

#[test]
fn abs_bars_desugar_to_an_abs_call() {
    let ast = parse_str("|x|").unwrap();
    assert_eq!(
        ast,
        Node::Call {
            name: "abs".to_string(),
            args: vec![var("x")],
        }
    );
}

#[test]
fn call_with_paren_argument_list() {
    let ast = parse_str("atan2(y, x)").unwrap();
    assert_eq!(
        ast,
        Node::Call {
            name: "atan2".to_string(),
            args: vec![var("y"), var("x")],
        }
    );
}

#[test]
fn call_arguments_may_contain_additive_expressions() {
    let ast = parse_str("clamp(x + 1, -1, 1)").unwrap();
    let Node::Call { name, args } = ast else {
        panic!("expected call");
    };
    assert_eq!(name, "clamp");
    assert_eq!(args.len(), 3);
    assert_eq!(args[0], Node::binary('+', var("x"), Node::Number(1.0)));
}

#[test]
fn no_paren_call_consumes_one_muldiv_operand() {
    // sin x^2 + 1 == sin(x^2) + 1
    let ast = parse_str("sin x^2 + 1").unwrap();
    assert_eq!(
        ast,
        Node::binary(
            '+',
            Node::Call {
                name: "sin".to_string(),
                args: vec![Node::binary('^', var("x"), Node::Number(2.0))],
            },
            Node::Number(1.0)
        )
    );
}

#[test]
fn implicit_multiplication_reaches_the_parser() {
    let ast = parse_str("2x").unwrap();
    assert_eq!(ast, Node::binary('*', Node::Number(2.0), var("x")));

    let ast = parse_str("2(x+1)").unwrap();
    assert_eq!(
        ast,
        Node::binary(
            '*',
            Node::Number(2.0),
            Node::binary('+', var("x"), Node::Number(1.0))
        )
    );
}

#[test]
fn bare_adjacent_factor_is_tolerated_without_insertion() {
    // Feed the parser a juxtaposed stream directly, skipping the inserter.
    let functions = FunctionTable::default();
    let constants = ConstantTable::default();
    let tokens = vec![Token::Number(2.0), Token::Variable("x".to_string())];
    let ast = parse(&tokens, &functions, &constants).unwrap();
    assert_eq!(ast, Node::binary('*', Node::Number(2.0), var("x")));
}

#[test]
fn arity_mismatch_is_a_parse_error() {
    assert_eq!(
        parse_str("clamp(x, 1)").unwrap_err().to_string(),
        "clamp expects 3 args"
    );
    assert_eq!(
        parse_str("sin()").unwrap_err().to_string(),
        "sin expects 1 args"
    );
    assert_eq!(
        parse_str("log(x, 2, 3)").unwrap_err().to_string(),
        "log expects 1-2 args"
    );
    assert!(parse_str("min(x)").is_ok());
}

#[test]
fn dangling_operator_is_unexpected_end() {
    assert_eq!(
        parse_str("x +").unwrap_err().to_string(),
        "Unexpected end of input"
    );
}

#[test]
fn unmatched_delimiters_are_structural_errors() {
    assert_eq!(
        parse_str("(x + 1").unwrap_err().to_string(),
        "Unexpected end of input"
    );
    assert_eq!(
        parse_str("x + 1)").unwrap_err().to_string(),
        "Unexpected token \")\""
    );
    assert_eq!(
        parse_str("|x").unwrap_err().to_string(),
        "Unexpected end of input"
    );
}

#[test]
fn trailing_comma_is_rejected() {
    assert_eq!(
        parse_str("atan2(y, x,)").unwrap_err().to_string(),
        "Unexpected token \")\""
    );
}

#[test]
fn comma_outside_a_call_is_rejected() {
    assert_eq!(
        parse_str("x, y").unwrap_err().to_string(),
        "Unexpected token \",\""
    );
}

#[test]
fn ast_serializes_stably() {
    let ast = parse_str("2x").unwrap();
    let json = serde_json::to_value(&ast).unwrap();
    assert_eq!(json["Binary"]["op"], "*");
    assert_eq!(json["Binary"]["left"]["Number"], 2.0);
    assert_eq!(json["Binary"]["right"]["Variable"], "x");
}
