use serde::{Deserialize, Serialize};

/// A position in site coordinates: meters, y pointing north (up), origin at
/// the site reference point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Closed ring of vertices; the last point connects back to the first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Bounding box over the vertices, or `None` for an empty ring.
    pub fn extent(&self) -> Option<Extent> {
        let first = self.points.first()?;
        let mut extent = Extent {
            x: Span {
                min: first.x,
                max: first.x,
            },
            y: Span {
                min: first.y,
                max: first.y,
            },
        };
        for p in &self.points[1..] {
            extent.x.min = extent.x.min.min(p.x);
            extent.x.max = extent.x.max.max(p.x);
            extent.y.min = extent.y.min.min(p.y);
            extent.y.max = extent.y.max.max(p.y);
        }
        Some(extent)
    }
}

/// Site geometry received once per mission: the navigable boundary plus zero
/// or more obstacle footprints inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMap {
    pub exterior: Polygon,
    #[serde(default)]
    pub interiors: Vec<Polygon>,
}

/// Closed interval along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub fn length(&self) -> f64 {
        self.max - self.min
    }
}

/// Bounding box of the exterior boundary, recomputed on every new map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x: Span,
    pub y: Span,
}

/// Robot pose in site coordinates. `theta` is in radians, zero along the
/// world +x axis, increasing counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Heading for the numeric readout.
    pub fn heading_degrees(&self) -> f64 {
        self.theta.to_degrees()
    }
}
