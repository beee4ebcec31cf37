//! Planar and solid geometry formulas.
//!
//! - `triangle`: laws of sines/cosines, projection theorem, medians, Heron, triangle centers.
//! - `trig`: trigonometric identities with explicit undefined points.
//! - `solid`: surface areas, volumes, Euler's polyhedron formula.

pub mod solid;
pub mod triangle;
pub mod trig;

pub use solid::SolidError;
pub use triangle::{Triangle, TriangleError};
pub use trig::TrigError;
