//! 3D analytic geometry kernel.
//!
//! Purpose
//! - Vector algebra over `Vector3<f64>` with explicit zero-vector rejection.
//! - Planes in coefficient form `a·x + b·y + c·z + d = 0`.
//! - Relational predicates (parallel, perpendicular, collinear) and derived
//!   queries (projections, angle extremes, intersection directions).
//!
//! Conventions
//! - A `Vector3<f64>` is a point or a free direction depending on the caller.
//! - Every tolerance-dependent operation takes a `SpaceCfg` by value.
//! - Predicates answer `Ok(false)` for a well-formed negative result and `Err`
//!   only when an operand is invalid (zero direction, failed precondition).
//!
//! Code cross-refs: `types::{Plane, SpaceError}`, `crate::cfg::SpaceCfg`

mod plane;
pub mod predicates;
pub mod queries;
mod types;
pub mod vector;

pub use plane::new_plane;
pub use predicates::{
    are_lines_perpendicular_to_same_plane, are_planes_parallel, are_planes_perpendicular,
    is_line_parallel_to_plane, is_line_perpendicular_to_oblique, is_line_perpendicular_to_plane,
    is_line_perpendicular_to_plane_by_intersection,
};
pub use queries::{
    line_plane_intersection_dir, max_angle_between_skew_lines, min_angle_line_to_plane,
    plane_intersection_dirs, project_onto_plane, projected_area, three_cosine_theorem,
    three_sine_theorem,
};
pub use types::{Plane, Result, SpaceError};
pub use vector::{
    add, cos_angle, cross, dot, is_collinear, is_zero, linearly_dependent, magnitude, normalize,
    scale, subtract,
};
