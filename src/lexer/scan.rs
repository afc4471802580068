use crate::foundation::error::{PlotexprError, PlotexprResult};
use crate::lexer::token::RawToken;

/// Scan a normalized expression string into a flat raw token stream.
///
/// Single left-to-right pass, one character of lookahead, ASCII whitespace
/// skipped. `**` folds into a single `^` (calculator convention).
pub(crate) fn scan(input: &str) -> PlotexprResult<Vec<RawToken>> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }
        if c.is_ascii_digit() || (c == '.' && next_is_digit(&chars, i + 1)) {
            let (token, next) = scan_number(&chars, i)?;
            out.push(token);
            i = next;
            continue;
        }
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            out.push(RawToken::Ident(chars[start..i].iter().collect()));
            continue;
        }
        match c {
            '(' => out.push(RawToken::OpenParen),
            ')' => out.push(RawToken::CloseParen),
            ',' => out.push(RawToken::Comma),
            '|' => out.push(RawToken::Pipe),
            '*' if chars.get(i + 1) == Some(&'*') => {
                out.push(RawToken::Op('^'));
                i += 1;
            }
            '+' | '-' | '*' | '/' | '^' | '%' => out.push(RawToken::Op(c)),
            _ => return Err(PlotexprError::unexpected_token(c)),
        }
        i += 1;
    }

    Ok(out)
}

fn next_is_digit(chars: &[char], i: usize) -> bool {
    matches!(chars.get(i), Some(c) if c.is_ascii_digit())
}

/// Scan one numeric literal starting at `start`.
///
/// Accepts at most one decimal point, then an optional `e`/`E` exponent with
/// an optional sign and at least one digit. A second decimal point directly
/// after the literal and an exponent marker without digits are both lexical
/// errors.
fn scan_number(chars: &[char], start: usize) -> PlotexprResult<(RawToken, usize)> {
    let mut i = start;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if chars.get(i) == Some(&'.') {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if chars.get(i) == Some(&'.') {
            return Err(PlotexprError::unexpected_token('.'));
        }
    }
    if matches!(chars.get(i), Some('e' | 'E')) {
        let marker = chars[i];
        let mut j = i + 1;
        if matches!(chars.get(j), Some('+' | '-')) {
            j += 1;
        }
        if !next_is_digit(chars, j) {
            return Err(PlotexprError::unexpected_token(marker));
        }
        i = j;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }

    let literal: String = chars[start..i].iter().collect();
    let value: f64 = literal
        .parse()
        .map_err(|_| PlotexprError::unexpected_token(&literal))?;
    Ok((RawToken::Number(value), i))
}

#[cfg(test)]
#[path = "../../tests/unit/lexer/scan.rs"]
mod tests;
