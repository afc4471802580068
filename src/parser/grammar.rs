use crate::builtins::table::{ConstantTable, FunctionTable};
use crate::foundation::error::{PlotexprError, PlotexprResult};
use crate::lexer::token::Token;
use crate::parser::ast::Node;

/// Parse a classified token stream into an AST.
///
/// Recursive descent, one grammar rule per precedence level, lowest to
/// highest: add/sub, mul/div/rem, unary, power, primary. Power is
/// right-associative and unary minus binds looser than power, so `-2^2`
/// is `-(2^2)` and `x^y^z` is `x^(y^z)`.
///
/// Constants are folded to number literals here, absolute-value bars desugar
/// to `abs(..)` calls, and call arity is validated against the function
/// table. Any token left over after the top-level expression is a hard error.
pub(crate) fn parse(
    tokens: &[Token],
    functions: &FunctionTable,
    constants: &ConstantTable,
) -> PlotexprResult<Node> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        functions,
        constants,
    };
    let node = parser.expression()?;
    if let Some(extra) = parser.peek() {
        return Err(PlotexprError::unexpected_token(extra));
    }
    Ok(node)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    functions: &'a FunctionTable,
    constants: &'a ConstantTable,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume the next token when it equals `expected`.
    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            return true;
        }
        false
    }

    /// Consume `expected` or fail with the structural error for what is there.
    fn expect(&mut self, expected: &Token) -> PlotexprResult<()> {
        if self.eat(expected) {
            return Ok(());
        }
        match self.peek() {
            Some(found) => Err(PlotexprError::unexpected_token(found)),
            None => Err(PlotexprError::UnexpectedEnd),
        }
    }

    fn expression(&mut self) -> PlotexprResult<Node> {
        self.add_sub()
    }

    fn add_sub(&mut self) -> PlotexprResult<Node> {
        let mut node = self.mul_div()?;
        while let Some(&Token::Op(op @ ('+' | '-'))) = self.peek() {
            self.pos += 1;
            let rhs = self.mul_div()?;
            node = Node::binary(op, node, rhs);
        }
        Ok(node)
    }

    fn mul_div(&mut self) -> PlotexprResult<Node> {
        let mut node = self.unary()?;
        loop {
            match self.peek() {
                Some(&Token::Op(op @ ('*' | '/' | '%'))) => {
                    self.pos += 1;
                    let rhs = self.unary()?;
                    node = Node::binary(op, node, rhs);
                }
                // Tolerate a bare adjacent factor as an implicit multiplicand
                // even though insertion normally runs before parsing.
                Some(token) if token.starts_factor() => {
                    let rhs = self.unary()?;
                    node = Node::binary('*', node, rhs);
                }
                _ => return Ok(node),
            }
        }
    }

    fn unary(&mut self) -> PlotexprResult<Node> {
        if let Some(&Token::Op(op @ ('+' | '-'))) = self.peek() {
            self.pos += 1;
            let operand = self.unary()?;
            return Ok(Node::unary(op, operand));
        }
        self.power()
    }

    fn power(&mut self) -> PlotexprResult<Node> {
        let base = self.primary()?;
        if self.eat(&Token::Op('^')) {
            // Recurse into unary, not power: right-associative, and the
            // exponent may carry its own sign (`2^-3`).
            let exponent = self.unary()?;
            return Ok(Node::binary('^', base, exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> PlotexprResult<Node> {
        let Some(token) = self.advance() else {
            return Err(PlotexprError::UnexpectedEnd);
        };
        match token.clone() {
            Token::Number(v) => Ok(Node::Number(v)),
            Token::Variable(name) => Ok(Node::Variable(name)),
            Token::Constant(name) => {
                // Classification guarantees presence; fold to a literal so the
                // evaluator needs no constant case.
                let value = self
                    .constants
                    .get(&name)
                    .ok_or_else(|| PlotexprError::unknown_identifier(&name))?;
                Ok(Node::Number(value))
            }
            Token::Function(name) => self.call(name),
            Token::OpenParen => {
                let inner = self.expression()?;
                self.expect(&Token::CloseParen)?;
                Ok(inner)
            }
            Token::AbsOpen => {
                let inner = self.expression()?;
                self.expect(&Token::AbsClose)?;
                Ok(Node::Call {
                    name: "abs".to_string(),
                    args: vec![inner],
                })
            }
            other => Err(PlotexprError::unexpected_token(other)),
        }
    }

    /// Parse a function call: a parenthesized comma-separated argument list,
    /// or the no-paren shorthand consuming exactly one mul/div-level operand
    /// (`sin x`, `sin x^2`).
    fn call(&mut self, name: String) -> PlotexprResult<Node> {
        let mut args = Vec::new();
        if self.eat(&Token::OpenParen) {
            if !self.eat(&Token::CloseParen) {
                loop {
                    args.push(self.expression()?);
                    if self.eat(&Token::Comma) {
                        continue;
                    }
                    self.expect(&Token::CloseParen)?;
                    break;
                }
            }
        } else {
            args.push(self.mul_div()?);
        }

        let def = self
            .functions
            .get(&name)
            .ok_or_else(|| PlotexprError::unknown_identifier(&name))?;
        if args.len() < def.min_args || args.len() > def.max_args {
            return Err(PlotexprError::arity(&name, def.min_args, def.max_args));
        }
        Ok(Node::Call { name, args })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parser/grammar.rs"]
mod tests;
