use crate::{
    foundation::core::{Color, Point, Vec2},
    geom::canvas::Canvas,
};

/// Default font pixel size for text elements.
pub const DEFAULT_FONT_SIZE: u32 = 12;
/// Unstretched font stretch factor (percent).
pub const FONT_STRETCH_UNSTRETCHED: i32 = 100;

/// Kind of overlay element a slot draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ShapeKind {
    /// Token-substituted text label.
    #[default]
    Text,
    /// Point markers at each resolved position.
    Point,
    /// Polygon-approximated circles at each resolved position.
    Circle,
    /// Polyline through the resolved positions.
    Line,
    /// Draws nothing (region/gate rectangles may still draw).
    None,
}

/// Gate canvas an element's region is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GateKind {
    /// Viewport canvas shifted by camera pan.
    Port,
    /// Raw viewport canvas.
    #[default]
    Viewport,
    /// Film aperture gate.
    Film,
    /// Image gate (same extents as the film gate).
    Image,
    /// Film gate scaled by 0.8.
    SafeTitle,
    /// Film gate scaled by 0.9.
    SafeAction,
    /// Render-resolution gate.
    Render,
    /// Render gate scaled by 0.8.
    RenderSafeTitle,
    /// Render gate scaled by 0.9.
    RenderSafeAction,
}

impl GateKind {
    /// Map a host gate selector integer; unknown values fall back to `Port`.
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => Self::Port,
            1 => Self::Viewport,
            2 => Self::Film,
            3 => Self::Image,
            4 => Self::SafeTitle,
            5 => Self::SafeAction,
            6 => Self::Render,
            7 => Self::RenderSafeTitle,
            8 => Self::RenderSafeAction,
            _ => Self::Port,
        }
    }
}

/// Horizontal side a region attaches to within its gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HorizontalAttach {
    /// Region left edge follows the gate left edge.
    #[default]
    Left,
    /// Region right edge follows the gate right edge; offsets mirror inward.
    Right,
    /// Region centers on the gate center.
    Middle,
}

/// Vertical side a region attaches to within its gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VerticalAttach {
    /// Region top edge follows the gate top edge; offsets mirror inward.
    #[default]
    Top,
    /// Region bottom edge follows the gate bottom edge.
    Bottom,
    /// Region centers on the gate center.
    Middle,
}

/// Horizontal content alignment inside a region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HorizontalAlign {
    /// Anchor content at the region's left edge.
    #[default]
    Left,
    /// Anchor content at the region's right edge.
    Right,
    /// Anchor content at the region's horizontal center.
    Center,
}

/// Vertical content alignment inside a region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VerticalAlign {
    /// Anchor content at the region's top edge.
    #[default]
    Top,
    /// Anchor content at the region's bottom edge.
    Bottom,
    /// Anchor content at the region's vertical center.
    Center,
}

/// Stroke style for lines, circles and rectangle outlines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineStyle {
    /// Continuous stroke.
    #[default]
    Solid,
    /// Fine dotted stroke.
    ShortDotted,
    /// Fine dashed stroke.
    ShortDashed,
    /// Dashed stroke.
    Dashed,
    /// Dotted stroke.
    Dotted,
}

/// Font weight for text elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FontWeight {
    /// Light weight.
    #[default]
    Light,
    /// Bold weight.
    Bold,
}

/// Font incline for text elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FontIncline {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Italic glyphs.
    Italic,
}

/// Font line decoration for text elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FontLine {
    /// No decoration.
    #[default]
    None,
    /// Line above the text.
    Overline,
    /// Line under the text.
    Underline,
    /// Line through the text.
    Strikeout,
}

/// Scene metadata snapshot used by the `$FILE`/date text tokens.
///
/// Date components are preformatted strings supplied by the host when the
/// element configuration is applied.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneMeta {
    /// Full scene file path.
    #[serde(default)]
    pub file: String,
    /// Creation year, zero-padded to four digits.
    #[serde(default)]
    pub year: String,
    /// Creation month, zero-padded to two digits.
    #[serde(default)]
    pub month: String,
    /// Creation day, zero-padded to two digits.
    #[serde(default)]
    pub day: String,
    /// Creation hour, zero-padded to two digits.
    #[serde(default)]
    pub hour: String,
    /// Creation minute, zero-padded to two digits.
    #[serde(default)]
    pub minute: String,
}

/// Fully-formed configuration record for one overlay element.
///
/// This is the explicit counterpart of the host's per-attribute sync: the host
/// builds one record per element slot and applies it with
/// [`DrawRequest::apply_config`]. It is also the unit serialized by
/// [`crate::HudDocument`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementConfig {
    /// Master draw-enable flag.
    pub draw: bool,
    /// Shape kind drawn by this element.
    pub shape: ShapeKind,
    /// Gate the region anchors to.
    pub gate: GateKind,
    /// Whether to outline the selected gate rectangle.
    pub draw_gate: bool,
    /// Whether to draw the region rectangle.
    pub draw_region: bool,
    /// Whether the region rectangle is filled.
    pub region_filled: bool,
    /// Element size factor; scales the region symmetrically about its center.
    pub size: f64,
    /// Primary element color.
    pub color: Color,
    /// Region rectangle color.
    pub region_color: Color,
    /// Region offset as a percentage of the gate size.
    pub region_offset: Point,
    /// Region size as a percentage of the gate size.
    pub region_size: Vec2,
    /// Horizontal attachment side.
    pub horizontal_attach: HorizontalAttach,
    /// Vertical attachment side.
    pub vertical_attach: VerticalAttach,
    /// Horizontal content alignment.
    pub horizontal_align: HorizontalAlign,
    /// Vertical content alignment.
    pub vertical_align: VerticalAlign,
    /// Point/circle radius before scaling.
    pub radius: f64,
    /// Whether circles are filled.
    pub filled: bool,
    /// Stroke style.
    pub line_style: LineStyle,
    /// Stroke width before scaling.
    pub line_width: f64,
    /// Raw positions as percentages of the region size.
    pub positions: Vec<Point>,
    /// Text template with `$TOKEN` placeholders.
    pub text: String,
    /// Whether the text changes per frame (backends may skip caching).
    pub text_dynamic: bool,
    /// Whether point/stroke/font scale tracks the render-resolution gate.
    pub fit_to_resolution_gate: bool,
    /// Index into the host font catalog; out of range leaves the font unset.
    pub font_style: i32,
    /// Font pixel size before scaling.
    pub font_size: u32,
    /// Font stretch in percent.
    pub font_stretch: i32,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Font incline.
    pub font_incline: FontIncline,
    /// Font line decoration.
    pub font_line: FontLine,
    /// Text label background; `None` or zero alpha disables it.
    pub text_background: Option<Color>,
    /// Scene metadata snapshot for the file/date tokens.
    #[serde(default)]
    pub meta: SceneMeta,
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            draw: false,
            shape: ShapeKind::Text,
            gate: GateKind::Viewport,
            draw_gate: true,
            draw_region: false,
            region_filled: false,
            size: 1.0,
            color: Color::BLACK,
            region_color: Color::BLACK,
            region_offset: Point::ZERO,
            region_size: Vec2::ZERO,
            horizontal_attach: HorizontalAttach::Left,
            vertical_attach: VerticalAttach::Top,
            horizontal_align: HorizontalAlign::Left,
            vertical_align: VerticalAlign::Top,
            radius: 1.0,
            filled: true,
            line_style: LineStyle::Solid,
            line_width: 2.0,
            positions: Vec::new(),
            text: "Text".to_string(),
            text_dynamic: false,
            fit_to_resolution_gate: true,
            font_style: -1,
            font_size: DEFAULT_FONT_SIZE,
            font_stretch: FONT_STRETCH_UNSTRETCHED,
            font_weight: FontWeight::Light,
            font_incline: FontIncline::Normal,
            font_line: FontLine::None,
            text_background: None,
            meta: SceneMeta::default(),
        }
    }
}

impl ElementConfig {
    /// Rebuild the configuration record stored in a request.
    pub fn from_request(request: &DrawRequest) -> Self {
        Self {
            draw: request.draw,
            shape: request.shape,
            gate: request.gate,
            draw_gate: request.draw_gate,
            draw_region: request.draw_region,
            region_filled: request.region_filled,
            size: request.size,
            color: request.color,
            region_color: request.region_color,
            region_offset: request.region_offset,
            region_size: request.region_size,
            horizontal_attach: request.horizontal_attach,
            vertical_attach: request.vertical_attach,
            horizontal_align: request.horizontal_align,
            vertical_align: request.vertical_align,
            radius: request.radius,
            filled: request.filled,
            line_style: request.line_style,
            line_width: request.line_width,
            positions: request.positions.clone(),
            text: request.text.clone(),
            text_dynamic: request.text_dynamic,
            fit_to_resolution_gate: request.fit_to_resolution_gate,
            font_style: request.font_style,
            font_size: request.font_size,
            font_stretch: request.font_stretch,
            font_weight: request.font_weight,
            font_incline: request.font_incline,
            font_line: request.font_line,
            text_background: request.text_background,
            meta: request.meta.clone(),
        }
    }
}

/// One overlay element: configuration plus computed placement.
///
/// Configuration fields are written by [`DrawRequest::apply_config`]; the
/// resolved region and position list are written by
/// [`crate::prepare_for_draw`] on every layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawRequest {
    /// Master draw-enable flag.
    pub draw: bool,
    /// Shape kind drawn by this element.
    pub shape: ShapeKind,
    /// Gate the region anchors to.
    pub gate: GateKind,
    /// Whether to outline the selected gate rectangle.
    pub draw_gate: bool,
    /// Whether to draw the region rectangle.
    pub draw_region: bool,
    /// Whether the region rectangle is filled.
    pub region_filled: bool,
    /// Element size factor.
    pub size: f64,
    /// Primary element color.
    pub color: Color,
    /// Region rectangle color.
    pub region_color: Color,
    /// Region offset as a percentage of the gate size.
    pub region_offset: Point,
    /// Region size as a percentage of the gate size.
    pub region_size: Vec2,
    /// Horizontal attachment side.
    pub horizontal_attach: HorizontalAttach,
    /// Vertical attachment side.
    pub vertical_attach: VerticalAttach,
    /// Horizontal content alignment.
    pub horizontal_align: HorizontalAlign,
    /// Vertical content alignment.
    pub vertical_align: VerticalAlign,
    /// Point/circle radius before scaling.
    pub radius: f64,
    /// Whether circles are filled.
    pub filled: bool,
    /// Stroke style.
    pub line_style: LineStyle,
    /// Stroke width before scaling.
    pub line_width: f64,
    /// Raw positions as percentages of the region size.
    pub positions: Vec<Point>,
    /// Pixel-space offsets from the region center, one per raw position.
    pub resolved_positions: Vec<Point>,
    /// Resolved region rectangle in pixel space.
    pub region: Canvas,
    /// Text template with `$TOKEN` placeholders.
    pub text: String,
    /// Whether the text changes per frame.
    pub text_dynamic: bool,
    /// Whether point/stroke/font scale tracks the render-resolution gate.
    pub fit_to_resolution_gate: bool,
    /// Configured font catalog index.
    pub font_style: i32,
    /// Font family resolved from the catalog; `None` keeps the painter's font.
    pub font_family: Option<String>,
    /// Font pixel size before scaling.
    pub font_size: u32,
    /// Font stretch in percent.
    pub font_stretch: i32,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Font incline.
    pub font_incline: FontIncline,
    /// Font line decoration.
    pub font_line: FontLine,
    /// Text label background; `None` or zero alpha disables it.
    pub text_background: Option<Color>,
    /// Scene metadata snapshot for the file/date tokens.
    pub meta: SceneMeta,
}

impl Default for DrawRequest {
    fn default() -> Self {
        let config = ElementConfig::default();
        let mut request = Self {
            draw: false,
            shape: ShapeKind::Text,
            gate: GateKind::Viewport,
            draw_gate: true,
            draw_region: false,
            region_filled: false,
            size: 1.0,
            color: Color::BLACK,
            region_color: Color::BLACK,
            region_offset: Point::ZERO,
            region_size: Vec2::ZERO,
            horizontal_attach: HorizontalAttach::Left,
            vertical_attach: VerticalAttach::Top,
            horizontal_align: HorizontalAlign::Left,
            vertical_align: VerticalAlign::Top,
            radius: 1.0,
            filled: true,
            line_style: LineStyle::Solid,
            line_width: 2.0,
            positions: Vec::new(),
            resolved_positions: Vec::new(),
            region: Canvas::default(),
            text: String::new(),
            text_dynamic: false,
            fit_to_resolution_gate: true,
            font_style: -1,
            font_family: None,
            font_size: DEFAULT_FONT_SIZE,
            font_stretch: FONT_STRETCH_UNSTRETCHED,
            font_weight: FontWeight::Light,
            font_incline: FontIncline::Normal,
            font_line: FontLine::None,
            text_background: None,
            meta: SceneMeta::default(),
        };
        request.apply_config(&config, &[]);
        request
    }
}

impl DrawRequest {
    /// Write a fully-formed configuration record into this request.
    ///
    /// The font-style index resolves through `font_catalog` into a family
    /// name; out-of-range indices leave the family unset. The position list is
    /// normalized: an empty list becomes a single origin point, and `Text`
    /// elements keep exactly one point. A text background with zero alpha is
    /// treated as disabled.
    pub fn apply_config(&mut self, config: &ElementConfig, font_catalog: &[String]) {
        self.draw = config.draw;
        self.shape = config.shape;
        self.gate = config.gate;
        self.draw_gate = config.draw_gate;
        self.draw_region = config.draw_region;
        self.region_filled = config.region_filled;
        self.size = config.size;
        self.color = config.color;
        self.region_color = config.region_color;
        self.region_offset = config.region_offset;
        self.region_size = config.region_size;
        self.horizontal_attach = config.horizontal_attach;
        self.vertical_attach = config.vertical_attach;
        self.horizontal_align = config.horizontal_align;
        self.vertical_align = config.vertical_align;
        self.radius = config.radius;
        self.filled = config.filled;
        self.line_style = config.line_style;
        self.line_width = config.line_width;
        self.text = config.text.clone();
        self.text_dynamic = config.text_dynamic;
        self.fit_to_resolution_gate = config.fit_to_resolution_gate;
        self.font_style = config.font_style;
        self.font_family = usize::try_from(config.font_style)
            .ok()
            .and_then(|i| font_catalog.get(i))
            .cloned();
        self.font_size = config.font_size;
        self.font_stretch = config.font_stretch;
        self.font_weight = config.font_weight;
        self.font_incline = config.font_incline;
        self.font_line = config.font_line;
        self.text_background = config.text_background.filter(|c| c.a > 0.0);
        self.meta = config.meta.clone();

        self.positions = match config.shape {
            ShapeKind::Text => vec![config.positions.first().copied().unwrap_or(Point::ZERO)],
            _ if config.positions.is_empty() => vec![Point::ZERO],
            _ => config.positions.clone(),
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/request.rs"]
mod tests;
