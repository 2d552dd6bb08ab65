use crate::{
    foundation::core::{Color, Point},
    model::request::{FontIncline, FontLine, FontWeight, HorizontalAlign, LineStyle},
    render::painter::{FontState, Painter},
};

/// One recorded paint primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    /// Stroked segment.
    Line {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
        /// Stroke color.
        color: Color,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke style.
        style: LineStyle,
    },
    /// Point marker.
    Point {
        /// Marker center.
        position: Point,
        /// Marker color.
        color: Color,
        /// Marker size in pixels.
        size: f64,
    },
    /// Axis-aligned rectangle.
    Rect {
        /// Rectangle center.
        center: Point,
        /// Half width.
        half_width: f64,
        /// Half height.
        half_height: f64,
        /// Filled or outline.
        filled: bool,
        /// Rectangle color.
        color: Color,
        /// Outline width in pixels.
        width: f64,
        /// Outline style.
        style: LineStyle,
    },
    /// Polygon-approximated circle.
    Circle {
        /// Circle center.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Filled or outline.
        filled: bool,
        /// Circle color.
        color: Color,
        /// Outline width in pixels.
        width: f64,
        /// Outline style.
        style: LineStyle,
    },
    /// Text label.
    Text {
        /// Anchor point including the alignment x-offset.
        anchor: Point,
        /// Substituted label text.
        text: String,
        /// Horizontal alignment inside the label box.
        alignment: HorizontalAlign,
        /// Label box size in pixels.
        background_size: (f64, f64),
        /// Backdrop color, if any.
        background: Option<Color>,
        /// Whether the text changes per frame.
        dynamic: bool,
        /// Text color.
        color: Color,
        /// Font selection at paint time.
        font: FontState,
    },
}

/// Retained painter backend recording [`PaintOp`] values.
///
/// This is the host-integration surface for draw-manager style rendering and
/// the primary test double: the host replays the recorded list through its
/// own toolkit. Primitives issued outside a begin/end session are dropped.
#[derive(Debug, Default)]
pub struct DisplayListPainter {
    ops: Vec<PaintOp>,
    in_session: bool,
    color: Color,
    line_width: f64,
    line_style: LineStyle,
    point_size: f64,
    font: FontState,
}

impl DisplayListPainter {
    /// Build an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations, in paint order.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Take the recorded operations, leaving the recorder empty.
    pub fn take_ops(&mut self) -> Vec<PaintOp> {
        std::mem::take(&mut self.ops)
    }

    /// Drop all recorded operations.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    fn reset_state(&mut self) {
        self.color = Color::BLACK;
        self.line_width = 1.0;
        self.line_style = LineStyle::Solid;
        self.point_size = 1.0;
        self.font = FontState::default();
    }
}

impl Painter for DisplayListPainter {
    fn begin_drawable(&mut self) {
        self.in_session = true;
        self.reset_state();
    }

    fn end_drawable(&mut self) {
        self.in_session = false;
    }

    fn set_color(&mut self, color: Color) {
        if self.in_session {
            self.color = color;
        }
    }

    fn set_line_width(&mut self, width: f64) {
        if self.in_session {
            self.line_width = width;
        }
    }

    fn set_line_style(&mut self, style: LineStyle) {
        if self.in_session {
            self.line_style = style;
        }
    }

    fn set_point_size(&mut self, size: f64) {
        if self.in_session {
            self.point_size = size;
        }
    }

    fn set_font_name(&mut self, name: &str) {
        if self.in_session {
            self.font.name = Some(name.to_string());
        }
    }

    fn set_font_size(&mut self, size: u32) {
        if self.in_session {
            self.font.size = size;
        }
    }

    fn set_font_stretch(&mut self, stretch: i32) {
        if self.in_session {
            self.font.stretch = stretch;
        }
    }

    fn set_font_weight(&mut self, weight: FontWeight) {
        if self.in_session {
            self.font.weight = weight;
        }
    }

    fn set_font_incline(&mut self, incline: FontIncline) {
        if self.in_session {
            self.font.incline = incline;
        }
    }

    fn set_font_line(&mut self, line: FontLine) {
        if self.in_session {
            self.font.line = line;
        }
    }

    fn line2d(&mut self, from: Point, to: Point) {
        if self.in_session {
            self.ops.push(PaintOp::Line {
                from,
                to,
                color: self.color,
                width: self.line_width,
                style: self.line_style,
            });
        }
    }

    fn point2d(&mut self, point: Point) {
        if self.in_session {
            self.ops.push(PaintOp::Point {
                position: point,
                color: self.color,
                size: self.point_size,
            });
        }
    }

    fn rect2d(&mut self, center: Point, half_width: f64, half_height: f64, filled: bool) {
        if self.in_session {
            self.ops.push(PaintOp::Rect {
                center,
                half_width,
                half_height,
                filled,
                color: self.color,
                width: self.line_width,
                style: self.line_style,
            });
        }
    }

    fn circle2d(&mut self, center: Point, radius: f64, filled: bool) {
        if self.in_session {
            self.ops.push(PaintOp::Circle {
                center,
                radius,
                filled,
                color: self.color,
                width: self.line_width,
                style: self.line_style,
            });
        }
    }

    fn text2d(
        &mut self,
        anchor: Point,
        text: &str,
        alignment: HorizontalAlign,
        background_size: (f64, f64),
        background: Option<Color>,
        dynamic: bool,
    ) {
        if self.in_session {
            self.ops.push(PaintOp::Text {
                anchor,
                text: text.to_string(),
                alignment,
                background_size,
                background,
                dynamic,
                color: self.color,
                font: self.font.clone(),
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/display_list.rs"]
mod tests;
