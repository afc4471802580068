use crate::builtins::table::{ConstantTable, FunctionTable};
use crate::foundation::error::{PlotexprError, PlotexprResult};
use crate::lexer::token::{RawToken, Token};

/// Resolve raw identifiers and disambiguate pipe tokens, order-preserving.
///
/// Identifier lookup is case-insensitive: the lower-cased name is checked
/// against the function table, then the constant table, then the caller's
/// variable set (emitting the caller's canonical variable name so scope keys
/// match). Anything left over is an unknown identifier.
///
/// A `|` closes an absolute-value group when the previously classified token
/// can terminate a value expression; otherwise it opens one. This is a
/// single-token lookback, so nested or back-to-back groups such as `||x|-1|`
/// are inherently ambiguous and not supported.
pub(crate) fn classify(
    raw: Vec<RawToken>,
    variables: &[String],
    functions: &FunctionTable,
    constants: &ConstantTable,
) -> PlotexprResult<Vec<Token>> {
    let mut out: Vec<Token> = Vec::with_capacity(raw.len());

    for token in raw {
        let classified = match token {
            RawToken::Number(v) => Token::Number(v),
            RawToken::Ident(name) => {
                let lower = name.to_ascii_lowercase();
                if functions.contains(&lower) {
                    Token::Function(lower)
                } else if constants.contains(&lower) {
                    Token::Constant(lower)
                } else if let Some(canonical) = variables
                    .iter()
                    .find(|v| v.eq_ignore_ascii_case(&lower))
                {
                    Token::Variable(canonical.clone())
                } else {
                    return Err(PlotexprError::unknown_identifier(name));
                }
            }
            RawToken::Pipe => match out.last() {
                Some(prev) if prev.ends_value() => Token::AbsClose,
                _ => Token::AbsOpen,
            },
            RawToken::OpenParen => Token::OpenParen,
            RawToken::CloseParen => Token::CloseParen,
            RawToken::Comma => Token::Comma,
            RawToken::Op(c) => Token::Op(c),
        };
        out.push(classified);
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/lexer/classify.rs"]
mod tests;
