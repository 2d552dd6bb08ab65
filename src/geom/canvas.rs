use crate::foundation::core::Point;

/// Named corner of a [`Canvas`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    /// Upper-left corner.
    LeftTop,
    /// Upper-right corner.
    RightTop,
    /// Lower-left corner.
    LeftBottom,
    /// Lower-right corner.
    RightBottom,
}

/// Axis-aligned rectangle with a center position and cached derived state.
///
/// Coordinates live in Y-up viewport space. Every mutator recomputes the
/// corners and aspect ratio before returning, so derived reads are always
/// consistent with the last-applied rectangle. A zero height yields aspect
/// ratio `1.0`; no input validation is performed.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    position: Point,
    width: f64,
    height: f64,
    aspect_ratio: f64,
    left_top: Point,
    right_top: Point,
    left_bottom: Point,
    right_bottom: Point,
}

impl Canvas {
    /// Build a canvas centered at `(x, y)` with the given size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let mut canvas = Self {
            position: Point::new(x, y),
            width,
            height,
            aspect_ratio: 1.0,
            left_top: Point::ZERO,
            right_top: Point::ZERO,
            left_bottom: Point::ZERO,
            right_bottom: Point::ZERO,
        };
        canvas.refresh();
        canvas
    }

    /// Replace position and size in one step.
    pub fn apply(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.position = Point::new(x, y);
        self.width = width;
        self.height = height;
        self.refresh();
    }

    /// Move the center to `(x, y)`, keeping the size.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
        self.refresh();
    }

    /// Replace the size, keeping the center.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.refresh();
    }

    /// Multiply width and height by per-axis factors.
    pub fn scale(&mut self, scale_x: f64, scale_y: f64) {
        self.width *= scale_x;
        self.height *= scale_y;
        self.refresh();
    }

    /// Copy position and size from another canvas.
    pub fn inherit(&mut self, other: &Canvas) {
        self.apply(other.x(), other.y(), other.width(), other.height());
    }

    /// Center x coordinate.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Center y coordinate.
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Canvas width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Center point.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Width over height; `1.0` when the height is zero.
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// One of the four cached corner points.
    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::LeftTop => self.left_top,
            Corner::RightTop => self.right_top,
            Corner::LeftBottom => self.left_bottom,
            Corner::RightBottom => self.right_bottom,
        }
    }

    fn refresh(&mut self) {
        self.aspect_ratio = if self.height == 0.0 {
            1.0
        } else {
            self.width / self.height
        };

        let half_w = self.width * 0.5;
        let half_h = self.height * 0.5;
        self.left_top = Point::new(self.position.x - half_w, self.position.y + half_h);
        self.right_top = Point::new(self.position.x + half_w, self.position.y + half_h);
        self.left_bottom = Point::new(self.position.x - half_w, self.position.y - half_h);
        self.right_bottom = Point::new(self.position.x + half_w, self.position.y - half_h);
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geom/canvas.rs"]
mod tests;
