//! Algebra formulas: complex arithmetic, inequalities, logarithms.

pub mod complex;
pub mod formulas;
pub mod logexp;

pub use complex::ComplexError;
pub use formulas::{AlgebraError, Means};
pub use logexp::LogError;
