use thiserror::Error;

use crate::geometry::{Point, Polygon};

/// World margin kept on every side of the exterior, meters.
const MARGIN: f64 = 1.0;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map has no exterior boundary")]
    EmptyExterior,
    #[error("exterior boundary has zero extent ({dx} x {dy} m)")]
    DegenerateExterior { dx: f64, dy: f64 },
}

/// Affine mapping from site coordinates (meters, y up) to canvas pixels
/// (y down): `px = scale * (x + tx)`, `py = -scale * (y + ty)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub tx: f64,
    pub ty: f64,
}

/// Result of fitting an exterior into a canvas: the transform plus the
/// possibly shrunk canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub transform: Transform,
    pub width: f64,
    pub height: f64,
}

impl Transform {
    /// Fit `exterior` into a `width` x `height` canvas.
    ///
    /// The scale is chosen so the whole boundary plus a one-meter margin
    /// fits; the canvas dimension that would have left spare margin is
    /// shrunk to match instead of letterboxing. A map whose boundary is
    /// empty or collapses to a point or line is refused, since it has no
    /// finite scale.
    ///
    /// # Example
    /// ```
    /// use mapview::{Point, Polygon, Transform};
    ///
    /// let exterior = Polygon::new(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(10.0, 0.0),
    ///     Point::new(10.0, 6.0),
    ///     Point::new(0.0, 6.0),
    /// ]);
    /// let fit = Transform::fit(&exterior, 800.0, 600.0).unwrap();
    /// assert!((fit.transform.scale - 800.0 / 12.0).abs() < 1e-9);
    /// assert_eq!(fit.width, 800.0);
    /// ```
    pub fn fit(exterior: &Polygon, width: f64, height: f64) -> Result<Fit, MapError> {
        let extent = exterior.extent().ok_or(MapError::EmptyExterior)?;
        let dx = extent.x.length();
        let dy = extent.y.length();
        if dx <= 0.0 || dy <= 0.0 {
            return Err(MapError::DegenerateExterior { dx, dy });
        }

        let span_x = dx + 2.0 * MARGIN;
        let span_y = dy + 2.0 * MARGIN;
        let scale_x = width / span_x;
        let scale_y = height / span_y;

        let (scale, width, height) = if scale_x > scale_y {
            (scale_y, span_x * scale_y, height)
        } else {
            (scale_x, width, span_y * scale_x)
        };

        Ok(Fit {
            transform: Transform {
                scale,
                tx: -extent.x.min + MARGIN,
                ty: -extent.y.max - MARGIN,
            },
            width,
            height,
        })
    }

    /// Site point to canvas pixels.
    pub fn to_canvas(&self, p: Point) -> (f64, f64) {
        (self.scale * (p.x + self.tx), -self.scale * (p.y + self.ty))
    }

    /// Canvas pixels back to a site point, for cursor readouts.
    pub fn to_world(&self, px: f64, py: f64) -> Point {
        Point::new(px / self.scale - self.tx, -py / self.scale - self.ty)
    }
}
