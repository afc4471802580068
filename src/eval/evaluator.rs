use crate::builtins::table::FunctionTable;
use crate::foundation::error::{PlotexprError, PlotexprResult};
use crate::parser::ast::Node;

#[derive(Clone, Debug, Default)]
/// Ephemeral variable bindings for one evaluation.
///
/// A flat list with linear lookup: expressions bind one or two variables, so
/// this beats hashing in a per-sample loop. Callers typically keep one scope
/// per worker thread and overwrite values between samples; the compiled
/// expression never retains it.
pub struct Scope {
    entries: Vec<(String, f64)>,
}

impl Scope {
    /// Empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any existing binding.
    pub fn set(&mut self, name: &str, value: f64) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
            return;
        }
        self.entries.push((name.to_string(), value));
    }

    /// Look up a binding.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }
}

impl<const N: usize> From<[(&str, f64); N]> for Scope {
    fn from(pairs: [(&str, f64); N]) -> Self {
        let mut scope = Scope::new();
        for (name, value) in pairs {
            scope.set(name, value);
        }
        scope
    }
}

/// Evaluate an AST against a scope, dispatching per node kind.
///
/// Pure tree walk: no mutation, no allocation beyond call argument vectors,
/// safe to run concurrently against the same AST with different scopes.
/// Arithmetic follows IEEE-754 double semantics; divide by zero and domain
/// errors are not failures, they propagate as `Infinity`/`NaN` for the caller
/// to filter. The only evaluation error is a variable missing from the scope.
pub fn evaluate(node: &Node, scope: &Scope, functions: &FunctionTable) -> PlotexprResult<f64> {
    match node {
        Node::Number(v) => Ok(*v),
        Node::Variable(name) => scope
            .get(name)
            .ok_or_else(|| PlotexprError::undefined_variable(name)),
        Node::Unary { op: '-', operand } => Ok(-evaluate(operand, scope, functions)?),
        Node::Unary { operand, .. } => evaluate(operand, scope, functions),
        Node::Binary { op, left, right } => {
            let l = evaluate(left, scope, functions)?;
            let r = evaluate(right, scope, functions)?;
            match op {
                '+' => Ok(l + r),
                '-' => Ok(l - r),
                '*' => Ok(l * r),
                '/' => Ok(l / r),
                '%' => Ok(l % r),
                '^' => Ok(l.powf(r)),
                other => Err(anyhow::anyhow!("unsupported binary operator \"{other}\"").into()),
            }
        }
        Node::Call { name, args } => {
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(evaluate(arg, scope, functions)?);
            }
            let def = functions
                .get(name)
                .ok_or_else(|| PlotexprError::unknown_identifier(name))?;
            Ok((def.apply)(&values))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
