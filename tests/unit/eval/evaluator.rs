use super::*;

fn table() -> FunctionTable {
    FunctionTable::default()
}

fn num(v: f64) -> Node {
    Node::Number(v)
}

#[test]
fn scope_set_replaces_and_get_misses_cleanly() {
    let mut scope = Scope::new();
    assert_eq!(scope.get("x"), None);
    scope.set("x", 1.0);
    scope.set("x", 2.0);
    scope.set("y", 3.0);
    assert_eq!(scope.get("x"), Some(2.0));
    assert_eq!(scope.get("y"), Some(3.0));
}

#[test]
fn literals_and_variables() {
    let scope = Scope::from([("x", 1.25)]);
    assert_eq!(evaluate(&num(7.0), &scope, &table()).unwrap(), 7.0);
    assert_eq!(
        evaluate(&Node::Variable("x".to_string()), &scope, &table()).unwrap(),
        1.25
    );
}

#[test]
fn missing_variable_is_a_recoverable_error() {
    let scope = Scope::new();
    let err = evaluate(&Node::Variable("x".to_string()), &scope, &table()).unwrap_err();
    assert_eq!(err.to_string(), "Variable \"x\" is not defined");
}

#[test]
fn unary_ops() {
    let scope = Scope::new();
    assert_eq!(
        evaluate(&Node::unary('-', num(3.0)), &scope, &table()).unwrap(),
        -3.0
    );
    assert_eq!(
        evaluate(&Node::unary('+', num(3.0)), &scope, &table()).unwrap(),
        3.0
    );
}

#[test]
fn binary_arithmetic() {
    let scope = Scope::new();
    let cases = [
        ('+', 7.0, 2.0, 9.0),
        ('-', 7.0, 2.0, 5.0),
        ('*', 7.0, 2.0, 14.0),
        ('/', 7.0, 2.0, 3.5),
        ('%', 7.0, 2.0, 1.0),
        ('^', 2.0, 10.0, 1024.0),
    ];
    for (op, l, r, expected) in cases {
        let got = evaluate(&Node::binary(op, num(l), num(r)), &scope, &table()).unwrap();
        assert_eq!(got, expected, "{l} {op} {r}");
    }
}

#[test]
fn division_by_zero_follows_ieee_semantics() {
    let scope = Scope::new();
    let inf = evaluate(&Node::binary('/', num(1.0), num(0.0)), &scope, &table()).unwrap();
    assert_eq!(inf, f64::INFINITY);
    let nan = evaluate(&Node::binary('%', num(1.0), num(0.0)), &scope, &table()).unwrap();
    assert!(nan.is_nan());
}

#[test]
fn call_evaluates_arguments_left_to_right() {
    let scope = Scope::from([("x", 5.0)]);
    let call = Node::Call {
        name: "clamp".to_string(),
        args: vec![
            Node::Variable("x".to_string()),
            Node::unary('-', num(1.0)),
            num(1.0),
        ],
    };
    assert_eq!(evaluate(&call, &scope, &table()).unwrap(), 1.0);
}

#[test]
fn call_argument_errors_propagate() {
    let scope = Scope::new();
    let call = Node::Call {
        name: "sin".to_string(),
        args: vec![Node::Variable("x".to_string())],
    };
    assert!(evaluate(&call, &scope, &table()).is_err());
}
