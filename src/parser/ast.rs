#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Immutable expression tree produced by the parser.
///
/// Each node owns its children exclusively (a tree, no sharing, no cycles),
/// so a compiled expression can be evaluated many times, from many threads,
/// against different scopes.
pub enum Node {
    /// Numeric literal. Constants are folded into this at parse time.
    Number(f64),
    /// Variable reference, resolved from the scope at evaluation time.
    Variable(String),
    /// Unary `+` or `-`.
    Unary {
        /// Operator character, `+` or `-`.
        op: char,
        /// Operand subtree.
        operand: Box<Node>,
    },
    /// Binary arithmetic: `+ - * / % ^`.
    Binary {
        /// Operator character.
        op: char,
        /// Left operand subtree.
        left: Box<Node>,
        /// Right operand subtree.
        right: Box<Node>,
    },
    /// Call of a named table function; arity already validated.
    Call {
        /// Lower-cased function name.
        name: String,
        /// Argument subtrees, in source order.
        args: Vec<Node>,
    },
}

impl Node {
    pub(crate) fn unary(op: char, operand: Node) -> Self {
        Node::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub(crate) fn binary(op: char, left: Node, right: Node) -> Self {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
