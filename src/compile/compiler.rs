use crate::builtins::table::{ConstantTable, FunctionTable};
use crate::eval::evaluator::{Scope, evaluate};
use crate::foundation::error::{PlotexprError, PlotexprResult};
use crate::lexer::classify::classify;
use crate::lexer::implicit::insert_implicit_mul;
use crate::lexer::scan::scan;
use crate::parser::ast::Node;
use crate::parser::grammar::parse;

/// Error messages stored on a failed compilation are cut here so they are
/// always safe to render inline next to the expression input.
const MAX_ERROR_LEN: usize = 90;

#[derive(Clone, Debug)]
/// Inputs to [`compile`] beyond the expression string itself.
pub struct CompileOptions {
    /// Variable names the expression may reference (matched case-insensitively,
    /// scope keys use these exact spellings).
    pub variables: Vec<String>,
    /// Callable function table.
    pub functions: FunctionTable,
    /// Named constants, folded to literals at parse time.
    pub constants: ConstantTable,
}

impl Default for CompileOptions {
    /// One variable `x` plus the default function and constant tables.
    fn default() -> Self {
        Self {
            variables: vec!["x".to_string()],
            functions: FunctionTable::default(),
            constants: ConstantTable::default(),
        }
    }
}

impl CompileOptions {
    /// Default tables over the given variable names.
    pub fn with_variables<I, S>(variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            variables: variables.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug)]
/// Result of [`compile`]: a reusable evaluator, or a short displayable error.
///
/// Created once per edited expression string (typically per keystroke,
/// debounced by the caller) and discarded on recompile. On success the AST is
/// immutable and the struct is `Send + Sync`, so one compiled expression may
/// be evaluated from many worker threads with thread-local scopes.
pub struct CompiledExpression {
    normalized: String,
    ast: Option<Node>,
    functions: FunctionTable,
    error: Option<String>,
}

impl CompiledExpression {
    /// The expression text after `lhs =` stripping and trimming.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The parsed tree, `None` when compilation failed.
    pub fn ast(&self) -> Option<&Node> {
        self.ast.as_ref()
    }

    /// The stored error message, `None` on success. At most 90 characters,
    /// single line, safe to render directly.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True when compilation succeeded.
    pub fn is_ok(&self) -> bool {
        self.ast.is_some()
    }

    /// Evaluate against a scope. Fails when compilation failed or when the
    /// scope is missing a referenced variable.
    pub fn eval(&self, scope: &Scope) -> PlotexprResult<f64> {
        match &self.ast {
            Some(ast) => evaluate(ast, scope, &self.functions),
            None => {
                let message = self.error.as_deref().unwrap_or("expression not compiled");
                Err(anyhow::anyhow!("{message}").into())
            }
        }
    }

    /// The evaluator closure, `None` exactly when compilation failed.
    pub fn evaluator(&self) -> Option<impl Fn(&Scope) -> PlotexprResult<f64> + '_> {
        let ast = self.ast.as_ref()?;
        Some(move |scope: &Scope| evaluate(ast, scope, &self.functions))
    }
}

/// Compile an expression string into a [`CompiledExpression`].
///
/// Ties the pipeline together: normalize, scan, classify, insert implicit
/// multiplication, parse. Never panics; the first failing stage wins and its
/// message is stored on the returned value instead of propagating.
#[tracing::instrument(skip(options))]
pub fn compile(expression: &str, options: CompileOptions) -> CompiledExpression {
    let normalized = normalize(expression).to_string();
    match compile_stages(&normalized, &options) {
        Ok(ast) => CompiledExpression {
            normalized,
            ast: Some(ast),
            functions: options.functions,
            error: None,
        },
        Err(err) => {
            tracing::debug!(error = %err, "expression rejected");
            CompiledExpression {
                normalized,
                ast: None,
                functions: options.functions,
                error: Some(display_message(&err)),
            }
        }
    }
}

fn compile_stages(normalized: &str, options: &CompileOptions) -> PlotexprResult<Node> {
    if normalized.is_empty() {
        return Err(PlotexprError::EmptyInput);
    }
    let raw = scan(normalized)?;
    let classified = classify(raw, &options.variables, &options.functions, &options.constants)?;
    let tokens = insert_implicit_mul(classified);
    parse(&tokens, &options.functions, &options.constants)
}

/// Strip an optional `lhs =` prefix (`y = ...`, `z=...`) and trim whitespace.
fn normalize(raw: &str) -> &str {
    let body = match raw.find('=') {
        Some(idx) => &raw[idx + 1..],
        None => raw,
    };
    body.trim()
}

/// First line of the error, truncated to [`MAX_ERROR_LEN`] on a char boundary.
fn display_message(err: &PlotexprError) -> String {
    let text = err.to_string();
    let line = text.lines().next().unwrap_or_default();
    match line.char_indices().nth(MAX_ERROR_LEN) {
        Some((idx, _)) => line[..idx].to_string(),
        None => line.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;
