//! Top-down site view for the operator console.
//!
//! This crate keeps the geometry of the console pure: site coordinates in
//! meters with y pointing up, an affine [`Transform`] onto a y-down pixel
//! canvas, and a two-layer retained scene. The background layer holds the
//! site map, grid and the robot's trail and only ever grows; the foreground
//! layer holds the current robot pose and is wiped on every update. A
//! front-end rasterizes the layers through the transform.

pub mod geometry;
pub mod scene;
pub mod transform;
pub mod view;

pub use geometry::{Extent, Point, Polygon, Pose, SiteMap, Span};
pub use scene::{Layer, Rgba, Shape, Stroke};
pub use transform::{Fit, MapError, Transform};
pub use view::MapView;
