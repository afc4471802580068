use rayon::prelude::*;

use crate::compile::compiler::CompiledExpression;
use crate::eval::evaluator::Scope;
use crate::foundation::error::{PlotexprError, PlotexprResult};

/// Sample a one-variable expression at `count` evenly spaced positions
/// across `[min, max]`.
///
/// This is the 2-D plotter consumption pattern: one evaluation per horizontal
/// pixel. Non-finite values come back as `None` so the caller can break the
/// polyline at poles instead of drawing through them. Fails when the
/// expression did not compile or references a variable other than `variable`.
#[tracing::instrument(skip(expr))]
pub fn sample_curve(
    expr: &CompiledExpression,
    variable: &str,
    min: f64,
    max: f64,
    count: usize,
) -> PlotexprResult<Vec<Option<f64>>> {
    let mut out = Vec::with_capacity(count);
    let mut scope = Scope::new();
    for i in 0..count {
        scope.set(variable, position(min, max, i, count));
        let value = expr.eval(&scope)?;
        out.push(value.is_finite().then_some(value));
    }
    Ok(out)
}

#[derive(Clone, Debug)]
/// Row-major height grid produced by [`sample_surface`].
pub struct SurfaceGrid {
    /// Samples per row (x direction).
    pub cols: usize,
    /// Number of rows (y direction).
    pub rows: usize,
    /// `cols * rows` heights, row-major.
    pub heights: Vec<f64>,
}

impl SurfaceGrid {
    /// Height at `(col, row)`, `None` out of bounds.
    pub fn height(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.heights.get(row * self.cols + col).copied()
    }
}

/// Sample a two-variable expression over a `cols x rows` grid, in parallel
/// across rows.
///
/// This is the 3-D surface consumption pattern: one evaluation per grid
/// vertex, each worker thread carrying its own scope against the shared
/// immutable AST. Non-finite heights are substituted with `0.0` so a
/// malformed or singular surface still yields a renderable, if degenerate,
/// mesh.
#[tracing::instrument(skip(expr))]
pub fn sample_surface(
    expr: &CompiledExpression,
    x_var: &str,
    y_var: &str,
    x_range: (f64, f64),
    y_range: (f64, f64),
    cols: usize,
    rows: usize,
) -> PlotexprResult<SurfaceGrid> {
    let mut heights = vec![0.0_f64; cols.saturating_mul(rows)];
    heights
        .par_chunks_mut(cols.max(1))
        .enumerate()
        .try_for_each(|(row, out)| -> Result<(), PlotexprError> {
            let mut scope = Scope::new();
            scope.set(y_var, position(y_range.0, y_range.1, row, rows));
            for (col, height) in out.iter_mut().enumerate() {
                scope.set(x_var, position(x_range.0, x_range.1, col, cols));
                let value = expr.eval(&scope)?;
                *height = if value.is_finite() { value } else { 0.0 };
            }
            Ok(())
        })?;
    Ok(SurfaceGrid {
        cols,
        rows,
        heights,
    })
}

/// Position of sample `i` out of `count` across `[min, max]`, endpoints
/// inclusive. A single sample lands on `min`.
fn position(min: f64, max: f64, i: usize, count: usize) -> f64 {
    if count < 2 {
        return min;
    }
    min + (max - min) * (i as f64) / ((count - 1) as f64)
}

#[cfg(test)]
#[path = "../../tests/unit/sample/grid.rs"]
mod tests;
