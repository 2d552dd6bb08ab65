use crate::{
    foundation::core::{FitAxis, Resolution},
    geom::canvas::Canvas,
    model::request::GateKind,
};

/// Per-frame layout snapshot consumed by [`crate::draw`].
///
/// One instance exists per HUD node; the host passes the previous frame's
/// value back into [`crate::prepare_for_draw`], which mutates it in place.
/// All canvases are recomputed from scratch on every layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameData {
    /// Registry index this frame is bound to; `None` makes drawing a no-op.
    pub hud_index: Option<u32>,
    /// Render resolution used for the render-family gates.
    pub resolution: Resolution,
    /// Viewport width in pixels.
    pub viewport_width: f64,
    /// Viewport height in pixels.
    pub viewport_height: f64,
    /// Camera display name.
    pub camera_name: String,
    /// Camera focal length.
    pub focal_length: f64,
    /// Camera focus distance.
    pub focus_distance: f64,
    /// Film fit resolved against the viewport shape.
    pub fit: FitAxis,
    /// Aperture-to-pixel conversion factor for the film gates.
    pub pixel_scale: f64,
    /// Aperture-to-pixel conversion factor for the render gates.
    pub pixel_resolution_scale: f64,
    /// Viewport-to-film interface scale factor.
    pub scale: f64,
    /// Raw viewport canvas.
    pub viewport: Canvas,
    /// Viewport canvas shifted by camera pan.
    pub port: Canvas,
    /// Film aperture gate.
    pub film: Canvas,
    /// Image gate (same extents as the film gate).
    pub image: Canvas,
    /// Render-resolution gate.
    pub render: Canvas,
    /// Film gate scaled by 0.9.
    pub safe_action: Canvas,
    /// Film gate scaled by 0.8.
    pub safe_title: Canvas,
    /// Render gate scaled by 0.9.
    pub render_safe_action: Canvas,
    /// Render gate scaled by 0.8.
    pub render_safe_title: Canvas,
}

impl FrameData {
    /// Gate canvas for a selector.
    pub fn gate(&self, kind: GateKind) -> &Canvas {
        match kind {
            GateKind::Port => &self.port,
            GateKind::Viewport => &self.viewport,
            GateKind::Film => &self.film,
            GateKind::Image => &self.image,
            GateKind::SafeTitle => &self.safe_title,
            GateKind::SafeAction => &self.safe_action,
            GateKind::Render => &self.render,
            GateKind::RenderSafeTitle => &self.render_safe_title,
            GateKind::RenderSafeAction => &self.render_safe_action,
        }
    }
}

impl Default for FrameData {
    fn default() -> Self {
        Self {
            hud_index: None,
            resolution: Resolution::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            camera_name: String::new(),
            focal_length: 0.0,
            focus_distance: 0.0,
            fit: FitAxis::Horizontal,
            pixel_scale: 1.0,
            pixel_resolution_scale: 1.0,
            scale: 1.0,
            viewport: Canvas::default(),
            port: Canvas::default(),
            film: Canvas::default(),
            image: Canvas::default(),
            render: Canvas::default(),
            safe_action: Canvas::default(),
            safe_title: Canvas::default(),
            render_safe_action: Canvas::default(),
            render_safe_title: Canvas::default(),
        }
    }
}
