//! Closed-form textbook formulas with validated inputs.
//!
//! Layout
//! - `space`: 3D analytic geometry kernel (vectors, planes, predicates, derived queries).
//! - `algebra`: complex arithmetic, inequalities, logarithms.
//! - `geometry`: triangles, trigonometric identities, solids.
//! - `stats`: descriptive statistics.
//!
//! Every fallible formula returns a module-specific error enum; nothing here
//! panics on bad input and nothing keeps state between calls.

pub mod algebra;
pub mod cfg;
pub mod geometry;
pub mod space;
pub mod stats;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::SpaceCfg;
pub use nalgebra::{Complex, Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{SpaceCfg, ANGLE_EPS, ZERO_EPS};
    pub use crate::geometry::triangle::Triangle;
    pub use crate::space::{Plane, SpaceError};
    pub use nalgebra::{Complex, Vector2 as Vec2, Vector3 as Vec3};
}
