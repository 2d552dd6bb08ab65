pub use kurbo::{Point, Rect, Vec2};

/// Straight-alpha RGBA color with `[0, 1]` channels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel (1.0 = opaque).
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Build a color from all four channels.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Return the same color with a replaced alpha channel.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Convert to straight-alpha RGBA8, clamping each channel to `[0, 1]`.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn quantize(c: f32) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Render-target resolution in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    /// Horizontal resolution.
    pub width: f64,
    /// Vertical resolution.
    pub height: f64,
}

impl Resolution {
    /// Build a resolution from width and height.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height; `1.0` when height is zero.
    pub fn aspect_ratio(self) -> f64 {
        if self.height == 0.0 {
            1.0
        } else {
            self.width / self.height
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 256.0,
            height: 256.0,
        }
    }
}

/// Viewport rectangle in screen pixels, origin at its lower-left corner.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportRect {
    /// X coordinate of the lower-left origin.
    pub origin_x: f64,
    /// Y coordinate of the lower-left origin.
    pub origin_y: f64,
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
}

impl ViewportRect {
    /// Build a viewport rectangle.
    pub fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }
}

/// Camera film-fit policy: how the film aperture aspect ratio is mapped onto a
/// differently shaped container (viewport or render resolution).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FilmFit {
    /// Pick the axis so the full aperture fits inside the container.
    #[default]
    Fill,
    /// Fit the horizontal aperture to the container width.
    Horizontal,
    /// Fit the vertical aperture to the container height.
    Vertical,
    /// Pick the axis so the aperture covers the container (inverse of `Fill`).
    Overscan,
}

/// Axis a film fit resolves to for a concrete container shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FitAxis {
    /// Gate width tracks the container width.
    #[default]
    Horizontal,
    /// Gate height tracks the container height.
    Vertical,
}
