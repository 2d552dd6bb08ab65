use crate::foundation::core::{FilmFit, Vec2};

/// Per-frame camera snapshot supplied by the host integration.
///
/// Pan and zoom are read only when `pan_zoom_enabled` is set; layout otherwise
/// treats the camera as unpanned at zoom `1.0`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraState {
    /// Display name used by the `$CAMERA` text token.
    pub name: String,
    /// Film-fit policy.
    pub film_fit: FilmFit,
    /// Horizontal film aperture in camera units.
    pub horizontal_film_aperture: f64,
    /// Vertical film aperture in camera units.
    pub vertical_film_aperture: f64,
    /// Anamorphic lens squeeze ratio; scales horizontal pixel size only.
    pub lens_squeeze_ratio: f64,
    /// Overscan factor applied to the viewport-to-aperture mapping.
    pub overscan: f64,
    /// 2D pan/zoom zoom factor.
    pub zoom: f64,
    /// 2D pan offset in aperture units.
    pub pan: Vec2,
    /// Whether the camera's 2D pan/zoom is active.
    pub pan_zoom_enabled: bool,
    /// Lens focal length, for the `$FOCAL_LENGHT` token.
    pub focal_length: f64,
    /// Focus distance, for the `$FOCUS_DISTANCE` token.
    pub focus_distance: f64,
}

impl CameraState {
    /// Effective `(zoom, pan)` honoring the pan/zoom enable flag.
    pub fn effective_pan_zoom(&self) -> (f64, Vec2) {
        if self.pan_zoom_enabled {
            (self.zoom, self.pan)
        } else {
            (1.0, Vec2::ZERO)
        }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        // 35mm full aperture in inches, the host's stock camera.
        Self {
            name: String::new(),
            film_fit: FilmFit::Fill,
            horizontal_film_aperture: 1.417,
            vertical_film_aperture: 0.945,
            lens_squeeze_ratio: 1.0,
            overscan: 1.0,
            zoom: 1.0,
            pan: Vec2::ZERO,
            pan_zoom_enabled: false,
            focal_length: 35.0,
            focus_distance: 5.0,
        }
    }
}
