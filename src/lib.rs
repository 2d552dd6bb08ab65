//! Framegate is a camera-framing HUD overlay engine.
//!
//! It lays out and paints the framing chrome a camera viewport needs:
//! resolution and film gates, safe-action/safe-title guides, and text, point,
//! circle and line annotations anchored to those gates. The host application
//! feeds it a camera snapshot, a viewport rectangle and a render resolution
//! once per frame; framegate answers with pixel-space canvases and paint
//! calls.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: write [`ElementConfig`] records into a [`HudRegistry`]
//!    entry (directly or via a JSON [`HudDocument`]).
//! 2. **Layout**: [`prepare_for_draw`] resolves film fit, pixel scales, the
//!    nine gate canvases and every element's region into a [`FrameData`]
//!    snapshot.
//! 3. **Draw**: [`draw`] replays the enabled elements through a [`Painter`]
//!    backend, either retained ([`DisplayListPainter`]) or immediate CPU
//!    raster ([`RasterPainter`]).
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No hidden state**: the registry is a plain owned arena; reclamation is
//!   an explicit [`HudRegistry::prune`]/[`HudRegistry::allocate`] call.
//! - **Geometry never errors**: degenerate inputs resolve to documented
//!   fallbacks; `Result` is reserved for document I/O and surface setup.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod config;
mod foundation;
mod geom;
mod layout;
mod model;
mod registry;
mod render;

pub use config::document::HudDocument;
pub use foundation::core::{Color, FilmFit, FitAxis, Point, Rect, Resolution, Vec2, ViewportRect};
pub use foundation::error::{FramegateError, FramegateResult};
pub use geom::canvas::{Canvas, Corner};
pub use layout::engine::{prepare_for_draw, resolve_film_fit};
pub use model::camera::CameraState;
pub use model::frame::FrameData;
pub use model::request::{
    DEFAULT_FONT_SIZE, DrawRequest, ElementConfig, FONT_STRETCH_UNSTRETCHED, FontIncline,
    FontLine, FontWeight, GateKind, HorizontalAlign, HorizontalAttach, LineStyle, SceneMeta,
    ShapeKind, VerticalAlign, VerticalAttach,
};
pub use registry::directory::{HudRegistry, RegistryEntry};
pub use render::display_list::{DisplayListPainter, PaintOp};
pub use render::draw::{DrawContext, draw};
pub use render::painter::{FontState, Painter, circle_segment_count};
pub use render::raster::{LabelBrush, RasterPainter};
pub use render::tokens::{PlaybackRange, TokenContext, substitute_tokens};
