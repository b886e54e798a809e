//! Coordinate projection engine for drawing GPS tracks onto images.
//!
//! Layout
//! - `geo`: geographic points, great-circle math, extents.
//! - `layout`: the centered square drawable region of an output canvas.
//! - `project`: the two projection strategies (axis-normalized fit and
//!   distance/bearing local projection) behind the `Projection` trait.
//! - `render` (feature `raster`): image + GPX adapters around the engine.
//!
//! The engine is pure: no I/O, no shared state. Every call derives its values
//! fresh, so tracks can be projected from many threads without coordination.

pub mod error;
pub mod geo;
pub mod layout;
pub mod project;
#[cfg(feature = "raster")]
pub mod render;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::ProjectionError;
pub use geo::{bearing_degrees, bearing_radians, distance_km, find_extent, GeoExtent, GeoPoint};
pub use layout::{compute_drawable_rect, stroke_width, CanvasRect};
pub use nalgebra::Vector2 as Vec2;
pub use project::{
    project_segment, project_track, AxisNormalized, DevicePoint, DistanceBearing, Projection,
    SegmentError, Strategy,
};
#[cfg(feature = "raster")]
pub use render::{render, render_with, RenderCfg, RenderError, RenderSummary};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::ProjectionError;
    pub use crate::geo::{find_extent, GeoExtent, GeoPoint};
    pub use crate::layout::{compute_drawable_rect, CanvasRect};
    pub use crate::project::{project_segment, project_track, DevicePoint, Projection, Strategy};
}
