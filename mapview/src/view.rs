use std::f64::consts::{FRAC_PI_6, PI};

use tracing::debug;

use crate::geometry::{Point, Pose, SiteMap};
use crate::scene::{Layer, Rgba, Shape, Stroke};
use crate::transform::{MapError, Transform};

// Palette carried over from the operator console.
const GROUND_FILL: Rgba = Rgba::rgb(0x2e, 0xcc, 0x71);
const GROUND_EDGE: Rgba = Rgba::rgb(0x27, 0xae, 0x60);
const OBSTACLE_FILL: Rgba = Rgba::rgb(0xe7, 0x4c, 0x3c);
const OBSTACLE_EDGE: Rgba = Rgba::rgb(0xc0, 0x39, 0x2b);
const TRAIL_FILL: Rgba = Rgba::rgb(0x34, 0x98, 0xdb);
const TRAIL_EDGE: Rgba = Rgba::rgb(0x29, 0x80, 0xb9);
const GRID_LINE: Rgba = Rgba::rgb(0xec, 0xf0, 0xf1);
const ORIGIN_MARK: Rgba = Rgba::rgb(0x2c, 0x3e, 0x50);
const ROBOT_BODY: Rgba = Rgba::rgb(0xbd, 0xc3, 0xc7);
const ROBOT_EDGE: Rgba = Rgba::rgb(0x2c, 0x3e, 0x50);
const HEADING_MARK: Rgba = Rgba::rgb(0xe7, 0x4c, 0x3c);

/// Trail mark radius, meters.
pub const TRAIL_RADIUS: f64 = 0.08;
/// Robot body radius, meters.
pub const ROBOT_RADIUS: f64 = 0.25;
/// Length of the heading indicator, meters.
pub const HEADING_LENGTH: f64 = 0.35;

const ARROW_LENGTH: f64 = 0.08;
const ARROW_ANGLE: f64 = FRAC_PI_6;

// Grid lines run across a fixed generous reach rather than the exact canvas
// extent; the transform clips everything outside the visible region anyway.
const GRID_REACH: f64 = 100.0;

/// The console's drawing surface: a persistent background layer (map, grid,
/// origin marker, trail) and a volatile foreground layer (the robot), both
/// sharing one transform.
///
/// The background is additive. It is wiped only by [`MapView::set_map`],
/// [`MapView::reset_background`] or [`MapView::clear_all`]; trail marks
/// accumulate on it for the whole session. The foreground is cleared and
/// redrawn on every pose update.
pub struct MapView {
    background: Layer,
    foreground: Layer,
    transform: Option<Transform>,
    width: f64,
    height: f64,
}

impl MapView {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            background: Layer::default(),
            foreground: Layer::default(),
            transform: None,
            width,
            height,
        }
    }

    /// Current transform; `None` until the first map has been fitted.
    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn background(&self) -> &Layer {
        &self.background
    }

    pub fn foreground(&self) -> &Layer {
        &self.foreground
    }

    /// Replace the site map: refit the transform (the canvas may shrink on
    /// one axis), wipe both layers and repaint boundary, fine grid, bold
    /// grid and origin marker, in that order.
    ///
    /// A degenerate exterior is refused before anything is cleared, so the
    /// previous background stays intact.
    pub fn set_map(&mut self, map: &SiteMap) -> Result<(), MapError> {
        let fit = Transform::fit(&map.exterior, self.width, self.height)?;
        self.clear_all();
        self.transform = Some(fit.transform);
        self.width = fit.width;
        self.height = fit.height;
        debug!(
            scale = fit.transform.scale,
            width = self.width,
            height = self.height,
            "map fitted"
        );

        self.draw_map(map);
        self.draw_grid(1.0, 0.01);
        self.draw_grid(5.0, 0.03);
        self.draw_origin();
        Ok(())
    }

    /// Paint one trail mark. Additive: previous marks are never erased.
    pub fn trail_point(&mut self, p: Point) {
        self.background.push(Shape::Circle {
            center: p,
            radius: TRAIL_RADIUS,
            fill: Some(TRAIL_FILL),
            stroke: Some(Stroke {
                width: 0.02,
                color: TRAIL_EDGE,
            }),
        });
    }

    /// Replay a historical trail, one mark per recorded position.
    pub fn bulk_trail(&mut self, points: &[Point]) {
        debug!(count = points.len(), "trail replay");
        for p in points {
            self.trail_point(*p);
        }
    }

    /// Redraw the robot at `pose`. The foreground layer is wiped first, so
    /// it always holds exactly one robot.
    pub fn draw_robot(&mut self, pose: &Pose) {
        self.foreground.clear();

        let center = pose.position();
        self.foreground.push(Shape::Circle {
            center,
            radius: ROBOT_RADIUS,
            fill: Some(ROBOT_BODY),
            stroke: Some(Stroke {
                width: 0.03,
                color: ROBOT_EDGE,
            }),
        });

        let stroke = Stroke {
            width: 0.05,
            color: HEADING_MARK,
        };
        let tip = Point::new(
            pose.x + HEADING_LENGTH * pose.theta.cos(),
            pose.y + HEADING_LENGTH * pose.theta.sin(),
        );
        self.foreground.push(Shape::Segment {
            from: center,
            to: tip,
            stroke,
        });
        for angle in [pose.theta - ARROW_ANGLE, pose.theta + ARROW_ANGLE] {
            self.foreground.push(Shape::Segment {
                from: tip,
                to: Point::new(
                    tip.x - ARROW_LENGTH * angle.cos(),
                    tip.y - ARROW_LENGTH * angle.sin(),
                ),
                stroke,
            });
        }
    }

    /// Live pose update: leave a trail mark, then redraw the robot. Every
    /// reported position ends up in the trail, not a sampled subset.
    pub fn robot_update(&mut self, pose: &Pose) {
        self.trail_point(pose.position());
        self.draw_robot(pose);
    }

    /// Wipe the background layer only.
    pub fn reset_background(&mut self) {
        self.background.clear();
    }

    /// Wipe both layers. Nothing is repainted until the next redraw.
    pub fn clear_all(&mut self) {
        self.background.clear();
        self.foreground.clear();
    }

    /// Paint the site geometry on the background layer.
    pub fn draw_map(&mut self, map: &SiteMap) {
        // Obstacles first, the ground boundary last.
        for interior in &map.interiors {
            self.background.push(Shape::Polygon {
                points: interior.points.clone(),
                fill: Some(OBSTACLE_FILL),
                stroke: Some(Stroke {
                    width: 0.05,
                    color: OBSTACLE_EDGE,
                }),
            });
        }
        self.background.push(Shape::Polygon {
            points: map.exterior.points.clone(),
            fill: Some(GROUND_FILL),
            stroke: Some(Stroke {
                width: 0.05,
                color: GROUND_EDGE,
            }),
        });
    }

    /// Paint grid lines every `spacing` world units on the background.
    pub fn draw_grid(&mut self, spacing: f64, line_width: f64) {
        let stroke = Stroke {
            width: line_width,
            color: GRID_LINE,
        };
        let mut i = -GRID_REACH;
        while i <= GRID_REACH {
            self.background.push(Shape::Segment {
                from: Point::new(i, -GRID_REACH),
                to: Point::new(i, GRID_REACH),
                stroke,
            });
            self.background.push(Shape::Segment {
                from: Point::new(-GRID_REACH, i),
                to: Point::new(GRID_REACH, i),
                stroke,
            });
            i += spacing;
        }
    }

    /// Paint the decorative marker at the world origin. Sized in world
    /// units, so it scales with the map.
    pub fn draw_origin(&mut self) {
        let origin = Point::new(0.0, 0.0);
        let ring = Stroke {
            width: 0.01,
            color: ORIGIN_MARK,
        };
        for radius in [0.3, 0.5] {
            self.background.push(Shape::Circle {
                center: origin,
                radius,
                fill: None,
                stroke: Some(ring),
            });
        }
        let quadrant = Stroke {
            width: 0.2,
            color: ORIGIN_MARK,
        };
        for (start, end) in [(0.5 * PI, PI), (1.5 * PI, 2.0 * PI)] {
            self.background.push(Shape::Arc {
                center: origin,
                radius: 0.4,
                start,
                end,
                stroke: quadrant,
            });
        }
    }
}
