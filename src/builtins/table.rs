use std::collections::HashMap;
use std::f64::consts::{E, PI, TAU};

/// Native implementation of a built-in function.
///
/// Plain function pointer so tables stay `Clone + Send + Sync` for free.
pub type NativeFn = fn(&[f64]) -> f64;

#[derive(Clone, Copy, Debug)]
/// A callable entry in a [`FunctionTable`].
///
/// Arity is validated at parse time, so `apply` is only ever invoked with an
/// argument count inside `[min_args, max_args]`.
pub struct FunctionDef {
    /// Native implementation.
    pub apply: NativeFn,
    /// Minimum accepted argument count, inclusive.
    pub min_args: usize,
    /// Maximum accepted argument count, inclusive (`usize::MAX` = unbounded).
    pub max_args: usize,
}

impl FunctionDef {
    /// Fixed-arity definition accepting exactly `args` arguments.
    pub fn exact(apply: NativeFn, args: usize) -> Self {
        Self {
            apply,
            min_args: args,
            max_args: args,
        }
    }

    /// Definition accepting an inclusive range of argument counts.
    pub fn ranged(apply: NativeFn, min_args: usize, max_args: usize) -> Self {
        Self {
            apply,
            min_args,
            max_args,
        }
    }

    /// Variadic definition accepting `min_args` or more arguments.
    pub fn variadic(apply: NativeFn, min_args: usize) -> Self {
        Self {
            apply,
            min_args,
            max_args: usize::MAX,
        }
    }
}

#[derive(Clone, Debug)]
/// Immutable-after-construction map from lower-case name to [`FunctionDef`].
pub struct FunctionTable {
    entries: HashMap<String, FunctionDef>,
}

impl FunctionTable {
    /// Empty table; useful for callers that want a restricted language.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace a function. Names are lower-cased for lookup.
    pub fn insert(&mut self, name: impl Into<String>, def: FunctionDef) {
        self.entries.insert(name.into().to_ascii_lowercase(), def);
    }

    /// Look up a function by (already lower-cased) name.
    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.entries.get(name)
    }

    /// True when `name` is a known function.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

impl Default for FunctionTable {
    /// The calculator-style built-in set: one-argument transcendentals,
    /// `atan2`/`pow`/`mod`, `log` with optional base, three-argument `clamp`,
    /// and variadic `min`/`max`/`hypot`.
    fn default() -> Self {
        let mut table = Self::empty();
        let one_arg: [(&str, NativeFn); 20] = [
            ("sin", |a| a[0].sin()),
            ("cos", |a| a[0].cos()),
            ("tan", |a| a[0].tan()),
            ("asin", |a| a[0].asin()),
            ("acos", |a| a[0].acos()),
            ("atan", |a| a[0].atan()),
            ("sinh", |a| a[0].sinh()),
            ("cosh", |a| a[0].cosh()),
            ("tanh", |a| a[0].tanh()),
            ("ln", |a| a[0].ln()),
            ("log10", |a| a[0].log10()),
            ("log2", |a| a[0].log2()),
            ("sqrt", |a| a[0].sqrt()),
            ("cbrt", |a| a[0].cbrt()),
            ("abs", |a| a[0].abs()),
            ("exp", |a| a[0].exp()),
            ("floor", |a| a[0].floor()),
            ("ceil", |a| a[0].ceil()),
            ("round", |a| a[0].round()),
            ("sign", |a| sign(a[0])),
        ];
        for (name, f) in one_arg {
            table.insert(name, FunctionDef::exact(f, 1));
        }
        table.insert("atan2", FunctionDef::exact(|a| a[0].atan2(a[1]), 2));
        table.insert("pow", FunctionDef::exact(|a| a[0].powf(a[1]), 2));
        table.insert("mod", FunctionDef::exact(|a| a[0] % a[1], 2));
        table.insert("log", FunctionDef::ranged(log_with_base, 1, 2));
        table.insert("clamp", FunctionDef::exact(clamp, 3));
        table.insert("min", FunctionDef::variadic(fold_min, 1));
        table.insert("max", FunctionDef::variadic(fold_max, 1));
        table.insert("hypot", FunctionDef::variadic(hypot_n, 1));
        table
    }
}

#[derive(Clone, Debug)]
/// Immutable-after-construction map from lower-case name to numeric value.
pub struct ConstantTable {
    entries: HashMap<String, f64>,
}

impl ConstantTable {
    /// Empty table.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace a constant. Names are lower-cased for lookup.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.entries.insert(name.into().to_ascii_lowercase(), value);
    }

    /// Look up a constant by (already lower-cased) name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.get(name).copied()
    }

    /// True when `name` is a known constant.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

impl Default for ConstantTable {
    /// `pi`, `e`, and `tau`.
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert("pi", PI);
        table.insert("e", E);
        table.insert("tau", TAU);
        table
    }
}

/// Calculator-convention sign: `0.0` at zero, `NaN` for `NaN`.
///
/// `f64::signum` returns `1.0` at `+0.0`, which is not what graphing users
/// expect from `sign(0)`.
fn sign(v: f64) -> f64 {
    if v == 0.0 || v.is_nan() { v } else { v.signum() }
}

/// `log(x)` is the natural log; `log(x, base)` uses the caller's base.
fn log_with_base(args: &[f64]) -> f64 {
    match args {
        [x] => x.ln(),
        [x, base] => x.log(*base),
        _ => f64::NAN,
    }
}

/// Non-panicking clamp: `x.max(min).min(max)`.
///
/// `f64::clamp` asserts `min <= max`; a user typing `clamp(x, 1, -1)` must get
/// IEEE garbage back, not a panic in the render loop.
fn clamp(args: &[f64]) -> f64 {
    args[0].max(args[1]).min(args[2])
}

fn fold_min(args: &[f64]) -> f64 {
    args.iter().copied().fold(f64::INFINITY, f64::min)
}

fn fold_max(args: &[f64]) -> f64 {
    args.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Euclidean norm of the argument vector.
fn hypot_n(args: &[f64]) -> f64 {
    args.iter().map(|v| v * v).sum::<f64>().sqrt()
}

#[cfg(test)]
#[path = "../../tests/unit/builtins/table.rs"]
mod tests;
