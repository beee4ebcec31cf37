//! Walk through the space kernel on a unit cube.
//!
//! Rejection paths log at debug level; the subscriber is set to debug to show them.

use formulas::space::{self, Plane, SpaceError};
use formulas::SpaceCfg;
use nalgebra::vector;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<(), SpaceError> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    let cfg = SpaceCfg::default();

    // bottom face z = 0 and side face x = 0 of the unit cube
    let origin = vector![0.0, 0.0, 0.0];
    let (ex, ey, ez) = (vector![1.0, 0.0, 0.0], vector![0.0, 1.0, 0.0], vector![0.0, 0.0, 1.0]);
    let bottom = Plane::from_points(origin, ex, ey, cfg)?;
    let side = Plane::from_points(origin, ey, ez, cfg)?;
    let top = Plane::new(0.0, 0.0, 1.0, -1.0);

    tracing::info!(
        perpendicular = space::are_planes_perpendicular(&bottom, &side, cfg)?,
        parallel = space::are_planes_parallel(&bottom, &top, cfg)?,
        "faces"
    );

    // space diagonal against the bottom face
    let diagonal = vector![1.0, 1.0, 1.0];
    let angle = space::min_angle_line_to_plane(diagonal, &bottom, cfg)?;
    tracing::info!(degrees = angle.to_degrees(), "diagonal to bottom face");

    let (d1, d2) = space::plane_intersection_dirs(&bottom, &top, &side, cfg)?;
    tracing::info!(?d1, ?d2, "side face cuts top and bottom along");

    // collinear points are rejected, logged at debug level
    let err = Plane::from_points(origin, diagonal, diagonal * 2.0, cfg);
    tracing::info!(?err, "degenerate plane");
    Ok(())
}
