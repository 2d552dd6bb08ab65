use crate::{
    foundation::core::{Color, Point},
    model::request::{FontIncline, FontLine, FontWeight, HorizontalAlign, LineStyle},
};

/// Number of polygon segments used to approximate a circle of `radius`.
///
/// The radius in pixels doubles as the tessellation budget, clamped to the
/// 8..=360 range.
pub fn circle_segment_count(radius: f64) -> usize {
    (radius as i64).clamp(8, 360) as usize
}

/// Current font selection carried by a painter session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontState {
    /// Family name; `None` keeps the backend's default face.
    pub name: Option<String>,
    /// Pixel size.
    pub size: u32,
    /// Stretch in percent.
    pub stretch: i32,
    /// Weight.
    pub weight: FontWeight,
    /// Incline.
    pub incline: FontIncline,
    /// Line decoration.
    pub line: FontLine,
}

impl Default for FontState {
    fn default() -> Self {
        Self {
            name: None,
            size: crate::model::request::DEFAULT_FONT_SIZE,
            stretch: crate::model::request::FONT_STRETCH_UNSTRETCHED,
            weight: FontWeight::Light,
            incline: FontIncline::Normal,
            line: FontLine::None,
        }
    }
}

/// 2D overlay painting surface.
///
/// All coordinates are viewport pixels with the origin at the bottom-left
/// corner and y growing upward. Primitives are only honored between
/// [`Painter::begin_drawable`] and [`Painter::end_drawable`]; calls outside a
/// session are ignored, and session state (color, stroke, font) resets at
/// every `begin_drawable`.
pub trait Painter {
    /// Open a drawable session with default state.
    fn begin_drawable(&mut self);

    /// Close the current drawable session.
    fn end_drawable(&mut self);

    /// Set the primitive color.
    fn set_color(&mut self, color: Color);

    /// Set the stroke width in pixels.
    fn set_line_width(&mut self, width: f64);

    /// Set the stroke style.
    fn set_line_style(&mut self, style: LineStyle);

    /// Set the point-marker size in pixels.
    fn set_point_size(&mut self, size: f64);

    /// Select a font family by name.
    fn set_font_name(&mut self, name: &str);

    /// Set the font pixel size.
    fn set_font_size(&mut self, size: u32);

    /// Set the font stretch in percent.
    fn set_font_stretch(&mut self, stretch: i32);

    /// Set the font weight.
    fn set_font_weight(&mut self, weight: FontWeight);

    /// Set the font incline.
    fn set_font_incline(&mut self, incline: FontIncline);

    /// Set the font line decoration.
    fn set_font_line(&mut self, line: FontLine);

    /// Stroke a segment between two points.
    fn line2d(&mut self, from: Point, to: Point);

    /// Draw a point marker.
    fn point2d(&mut self, point: Point);

    /// Draw an axis-aligned rectangle from its center and half extents.
    fn rect2d(&mut self, center: Point, half_width: f64, half_height: f64, filled: bool);

    /// Draw a polygon-approximated circle.
    fn circle2d(&mut self, center: Point, radius: f64, filled: bool);

    /// Draw a text label.
    ///
    /// `anchor` already carries the caller's alignment x-offset; the label box
    /// of `background_size` pixels starts at `anchor.x` minus that same
    /// offset, so the box itself stays put while the text aligns inside it.
    /// `background` of `None` paints no backdrop. `dynamic` marks per-frame
    /// text so a backend may skip caching the rasterized label.
    #[allow(clippy::too_many_arguments)]
    fn text2d(
        &mut self,
        anchor: Point,
        text: &str,
        alignment: HorizontalAlign,
        background_size: (f64, f64),
        background: Option<Color>,
        dynamic: bool,
    );
}

#[cfg(test)]
#[path = "../../tests/unit/render/painter.rs"]
mod tests;
