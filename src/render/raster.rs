use std::f64::consts::TAU;

use crate::{
    foundation::core::{Color, Point},
    foundation::error::{FramegateError, FramegateResult},
    model::request::{FontIncline, FontLine, FontWeight, HorizontalAlign, LineStyle},
    render::painter::{FontState, Painter, circle_segment_count},
};

/// RGBA8 brush color carried through Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelBrush {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

struct RegisteredFont {
    family: String,
    data: vello_cpu::peniko::FontData,
}

/// Immediate-mode painter backend rasterizing into a premultiplied RGBA8
/// pixmap.
///
/// Coordinates follow the painter contract (origin bottom-left, y up) and are
/// flipped into pixmap space internally. Fonts are supplied by the caller as
/// raw bytes through [`RasterPainter::register_font`]; an unknown family falls
/// back to the first registered font, and with no fonts registered text
/// labels paint their background only.
pub struct RasterPainter {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<LabelBrush>,
    fonts: Vec<RegisteredFont>,
    in_session: bool,
    color: Color,
    line_width: f64,
    line_style: LineStyle,
    point_size: f64,
    font: FontState,
}

impl RasterPainter {
    /// Build a painter for a `width` by `height` pixel surface.
    pub fn new(width: u32, height: u32) -> FramegateResult<Self> {
        if width == 0 || height == 0 {
            return Err(FramegateError::validation(
                "raster surface dimensions must be non-zero",
            ));
        }
        let width = u16::try_from(width).map_err(|_| {
            FramegateError::validation("raster surface width exceeds u16::MAX")
        })?;
        let height = u16::try_from(height).map_err(|_| {
            FramegateError::validation("raster surface height exceeds u16::MAX")
        })?;

        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            fonts: Vec::new(),
            in_session: false,
            color: Color::BLACK,
            line_width: 1.0,
            line_style: LineStyle::Solid,
            point_size: 1.0,
            font: FontState::default(),
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Register a font from raw bytes; returns the primary family name.
    pub fn register_font(&mut self, bytes: Vec<u8>) -> FramegateResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            FramegateError::validation("no font families registered from font bytes")
        })?;
        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| FramegateError::validation("registered font family has no name"))?
            .to_string();

        let data =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        self.fonts.push(RegisteredFont {
            family: family.clone(),
            data,
        });
        Ok(family)
    }

    /// Flush pending paints and read the surface back as premultiplied RGBA8.
    pub fn finish(&mut self) -> Vec<u8> {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }

    fn reset_state(&mut self) {
        self.color = Color::BLACK;
        self.line_width = 1.0;
        self.line_style = LineStyle::Solid;
        self.point_size = 1.0;
        self.font = FontState::default();
    }

    /// Flip a painter-space point into pixmap space.
    fn to_pixel(&self, point: Point) -> vello_cpu::kurbo::Point {
        vello_cpu::kurbo::Point::new(point.x, f64::from(self.height) - point.y)
    }

    fn apply_fill_state(&mut self) {
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        let [r, g, b, a] = self.color.to_rgba8();
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    }

    fn apply_stroke_state(&mut self) {
        self.apply_fill_state();
        let mut stroke = vello_cpu::kurbo::Stroke::new(self.line_width.max(0.0));
        if let Some(pattern) = dash_pattern(self.line_style, self.line_width.max(1.0)) {
            stroke = stroke.with_dashes(0.0, pattern);
        }
        self.ctx.set_stroke(stroke);
    }

    fn resolve_font(&self) -> Option<&RegisteredFont> {
        match &self.font.name {
            Some(name) => self
                .fonts
                .iter()
                .find(|font| font.family.eq_ignore_ascii_case(name))
                .or_else(|| self.fonts.first()),
            None => self.fonts.first(),
        }
    }

    fn layout_label(
        &mut self,
        text: &str,
        family: String,
        brush: LabelBrush,
    ) -> parley::Layout<LabelBrush> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(
            self.font.size as f32,
        ));
        builder.push_default(parley::style::StyleProperty::Brush(brush));
        let mut layout: parley::Layout<LabelBrush> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

/// Dash pattern for a stroke style, scaled by the stroke width.
fn dash_pattern(style: LineStyle, unit: f64) -> Option<Vec<f64>> {
    match style {
        LineStyle::Solid => None,
        LineStyle::ShortDotted => Some(vec![unit, unit]),
        LineStyle::Dotted => Some(vec![unit, unit * 2.0]),
        LineStyle::ShortDashed => Some(vec![unit * 2.0, unit * 2.0]),
        LineStyle::Dashed => Some(vec![unit * 4.0, unit * 4.0]),
    }
}

impl Painter for RasterPainter {
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
        if !self.in_session {
            return;
        }
        self.apply_stroke_state();
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(self.to_pixel(from));
        path.line_to(self.to_pixel(to));
        self.ctx.stroke_path(&path);
    }

    fn point2d(&mut self, point: Point) {
        if !self.in_session {
            return;
        }
        self.apply_fill_state();
        // Point markers rasterize as squares.
        let center = self.to_pixel(point);
        let half = (self.point_size * 0.5).max(0.5);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            center.x - half,
            center.y - half,
            center.x + half,
            center.y + half,
        ));
    }

    fn rect2d(&mut self, center: Point, half_width: f64, half_height: f64, filled: bool) {
        if !self.in_session {
            return;
        }
        let center = self.to_pixel(center);
        let rect = vello_cpu::kurbo::Rect::new(
            center.x - half_width,
            center.y - half_height,
            center.x + half_width,
            center.y + half_height,
        );
        if filled {
            self.apply_fill_state();
            self.ctx.fill_rect(&rect);
        } else {
            self.apply_stroke_state();
            let mut path = vello_cpu::kurbo::BezPath::new();
            path.move_to((rect.x0, rect.y0));
            path.line_to((rect.x1, rect.y0));
            path.line_to((rect.x1, rect.y1));
            path.line_to((rect.x0, rect.y1));
            path.close_path();
            self.ctx.stroke_path(&path);
        }
    }

    fn circle2d(&mut self, center: Point, radius: f64, filled: bool) {
        if !self.in_session {
            return;
        }
        let center = self.to_pixel(center);
        let segments = circle_segment_count(radius);
        let mut path = vello_cpu::kurbo::BezPath::new();
        for i in 0..segments {
            let angle = TAU * i as f64 / segments as f64;
            let vertex = vello_cpu::kurbo::Point::new(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            );
            if i == 0 {
                path.move_to(vertex);
            } else {
                path.line_to(vertex);
            }
        }
        path.close_path();
        if filled {
            self.apply_fill_state();
            self.ctx.fill_path(&path);
        } else {
            self.apply_stroke_state();
            self.ctx.stroke_path(&path);
        }
    }

    fn text2d(
        &mut self,
        anchor: Point,
        text: &str,
        alignment: HorizontalAlign,
        background_size: (f64, f64),
        background: Option<Color>,
        _dynamic: bool,
    ) {
        if !self.in_session {
            return;
        }
        let (box_width, box_height) = background_size;
        if box_width <= 0.0 || box_height <= 0.0 {
            return;
        }

        // The caller pre-offsets the anchor by the alignment; undo it so the
        // label box itself stays anchored while text aligns inside.
        let anchor_offset = match alignment {
            HorizontalAlign::Left => 0.0,
            HorizontalAlign::Right => box_width,
            HorizontalAlign::Center => box_width * 0.5,
        };
        let box_left = anchor.x - anchor_offset;
        let box_top = f64::from(self.height) - (anchor.y + box_height);

        if let Some(background) = background {
            let text_color = self.color;
            self.color = background;
            self.apply_fill_state();
            self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                box_left,
                box_top,
                box_left + box_width,
                box_top + box_height,
            ));
            self.color = text_color;
        }

        let Some(font) = self.resolve_font() else {
            return;
        };
        let family = font.family.clone();
        let font_data = font.data.clone();

        let [r, g, b, a] = self.color.to_rgba8();
        let brush = LabelBrush { r, g, b, a };
        let layout = self.layout_label(text, family, brush);

        let text_width = f64::from(layout.width());
        let text_height = f64::from(layout.height());

        // Text wider than its box falls back to left alignment.
        let align_offset = if text_width >= box_width {
            0.0
        } else {
            match alignment {
                HorizontalAlign::Left => 0.0,
                HorizontalAlign::Right => box_width - text_width,
                HorizontalAlign::Center => (box_width - text_width) * 0.5,
            }
        };
        let vertical_offset = ((box_height - text_height) * 0.5).max(0.0);

        self.ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            box_left + align_offset,
            box_top + vertical_offset,
        )));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font_data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
