//! Plotexpr compiles user-typed mathematical expressions into reusable numeric
//! functions over named variables.
//!
//! A string such as `y = sin(x) + 0.5*x^2` or `z = sin(x)*cos(y)` becomes a
//! [`CompiledExpression`] that a 2-D function plotter or a 3-D surface sampler
//! can evaluate thousands of times per redraw.
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: strip an optional `lhs =` prefix and surrounding whitespace
//! 2. **Tokenize**: scan the string into a flat token stream
//! 3. **Classify**: resolve identifiers into function/constant/variable tokens and
//!    disambiguate `|` into open/close absolute-value bars
//! 4. **Insert implicit multiplication**: `2x`, `2(x+1)`, `2 3` all multiply
//! 5. **Parse**: recursive descent into an immutable AST, arity-checked
//! 6. **Evaluate**: stateless tree walk against a caller-owned [`Scope`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Never panics on input**: every stage returns a `Result`; [`compile`] converts
//!   any failure into a short, user-displayable error string.
//! - **Reusable and thread-safe**: the AST is immutable after construction, the
//!   scope is caller-owned, so one compiled expression may be sampled from many
//!   worker threads without locks.
//! - **IEEE-754 end-to-end**: divide by zero and domain errors are not failures;
//!   they propagate as `Infinity`/`NaN` for the caller to filter.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod builtins;
mod compile;
mod eval;
mod foundation;
mod lexer;
mod parser;
mod sample;

pub use builtins::table::{ConstantTable, FunctionDef, FunctionTable, NativeFn};
pub use compile::compiler::{CompileOptions, CompiledExpression, compile};
pub use eval::evaluator::{Scope, evaluate};
pub use foundation::error::{PlotexprError, PlotexprResult};
pub use parser::ast::Node;
pub use sample::grid::{SurfaceGrid, sample_curve, sample_surface};
