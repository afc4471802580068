use std::fmt;

#[derive(Clone, Debug, PartialEq)]
/// Raw token produced by the scanner, before identifier resolution.
pub(crate) enum RawToken {
    Number(f64),
    Ident(String),
    OpenParen,
    CloseParen,
    Comma,
    Pipe,
    Op(char),
}

#[derive(Clone, Debug, PartialEq)]
/// Classified token consumed by the parser.
///
/// Identifiers have been resolved against the caller's tables and every pipe
/// has been disambiguated, so the parser never sees a raw identifier.
pub(crate) enum Token {
    Number(f64),
    Variable(String),
    Constant(String),
    Function(String),
    OpenParen,
    CloseParen,
    Comma,
    AbsOpen,
    AbsClose,
    Op(char),
}

impl Token {
    /// True when this token can terminate a value expression.
    ///
    /// Shared by pipe disambiguation and implicit-multiplication insertion.
    pub(crate) fn ends_value(&self) -> bool {
        matches!(
            self,
            Token::Number(_)
                | Token::Variable(_)
                | Token::Constant(_)
                | Token::CloseParen
                | Token::AbsClose
        )
    }

    /// True when this token can begin a factor.
    pub(crate) fn starts_factor(&self) -> bool {
        matches!(
            self,
            Token::Number(_)
                | Token::Variable(_)
                | Token::Constant(_)
                | Token::Function(_)
                | Token::OpenParen
                | Token::AbsOpen
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(v) => write!(f, "{v}"),
            Token::Variable(name) | Token::Constant(name) | Token::Function(name) => {
                write!(f, "{name}")
            }
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::AbsOpen | Token::AbsClose => write!(f, "|"),
            Token::Op(c) => write!(f, "{c}"),
        }
    }
}
