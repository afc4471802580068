use crate::lexer::token::Token;

/// Inject synthetic `*` tokens between juxtaposed value/factor pairs.
///
/// Whenever the previously emitted token can terminate a value and the next
/// token can start a factor, a multiplication operator is inserted. This is
/// what makes `2x`, `2(x+1)`, `x y`, and `2 3` parse as products without an
/// explicit operator. Infallible single forward pass.
pub(crate) fn insert_implicit_mul(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Some(prev) = out.last()
            && prev.ends_value()
            && token.starts_factor()
        {
            out.push(Token::Op('*'));
        }
        out.push(token);
    }
    out
}
