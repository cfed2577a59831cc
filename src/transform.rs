//! Coordinate transformation pipeline.
//!
//! Maps data-space values through an axis's normalized sub-rectangle
//! into absolute image coordinates. Normalized-axis-local coordinates
//! run over `[0,1]x[0,1]` within the axis's on-figure placement; data
//! values are normalized against the axis limits, with Y flipped
//! because image-space Y grows downward.

use crate::error::{PlotError, PlotResult};

/// Pure coordinate mapping for one axis within one figure.
#[derive(Debug, Clone, Copy)]
pub struct AxisTransform {
    origin: (f64, f64),
    size: (f64, f64),
    figure: (f64, f64),
    x_limits: (f64, f64),
    y_limits: (f64, f64),
}

impl AxisTransform {
    /// Build a transform from axis placement, figure pixel size and
    /// data limits. Limits may be reversed (`min > max`, flipping the
    /// axis direction) but never equal.
    pub fn new(
        origin: (f64, f64),
        size: (f64, f64),
        figure: (f64, f64),
        x_limits: (f64, f64),
        y_limits: (f64, f64),
    ) -> PlotResult<Self> {
        if x_limits.0 == x_limits.1 {
            return Err(PlotError::DegenerateAxis {
                axis: "x",
                value: x_limits.0,
            });
        }
        if y_limits.0 == y_limits.1 {
            return Err(PlotError::DegenerateAxis {
                axis: "y",
                value: y_limits.0,
            });
        }
        Ok(AxisTransform {
            origin,
            size,
            figure,
            x_limits,
            y_limits,
        })
    }

    /// Normalized-axis-local u to absolute image x.
    pub fn to_image_x(&self, u: f64) -> f64 {
        self.figure.0 * (self.origin.0 + u * self.size.0)
    }

    /// Normalized-axis-local v to absolute image y.
    pub fn to_image_y(&self, v: f64) -> f64 {
        self.figure.1 * (self.origin.1 + v * self.size.1)
    }

    /// Data x to normalized-axis-local u.
    pub fn norm_x(&self, x: f64) -> f64 {
        (x - self.x_limits.0) / (self.x_limits.1 - self.x_limits.0)
    }

    /// Data y to normalized-axis-local v, flipped for image space.
    pub fn norm_y(&self, y: f64) -> f64 {
        1.0 - (y - self.y_limits.0) / (self.y_limits.1 - self.y_limits.0)
    }

    /// Composed pipeline: data point to absolute image pixel.
    pub fn pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (self.to_image_x(self.norm_x(x)), self.to_image_y(self.norm_y(y)))
    }

    /// The axis data rectangle as `(x_min, x_max, y_min, y_max)`,
    /// in the caller's original (possibly reversed) order.
    pub fn limits(&self) -> (f64, f64, f64, f64) {
        (self.x_limits.0, self.x_limits.1, self.y_limits.0, self.y_limits.1)
    }
}
