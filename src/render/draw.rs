use crate::{
    foundation::core::{FitAxis, Point},
    geom::canvas::Corner,
    model::frame::FrameData,
    model::request::{DrawRequest, HorizontalAlign, ShapeKind},
    registry::directory::HudRegistry,
    render::painter::Painter,
    render::tokens::{PlaybackRange, TokenContext, substitute_tokens},
};

/// Per-frame host state consumed by [`draw`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawContext {
    /// Playback range backing the frame text tokens.
    pub playback: PlaybackRange,
}

/// Paint every enabled element of the frame's registry entry.
///
/// A no-op when the frame carries no registry binding or the bound entry no
/// longer exists. Elements paint in registry first-access order; within one
/// element the sub-order is fixed: gate rectangle, region rectangle, shape
/// body. Every primitive group runs in its own painter session.
#[tracing::instrument(skip(painter, registry, context, frame))]
pub fn draw(
    painter: &mut dyn Painter,
    registry: &HudRegistry,
    context: &DrawContext,
    frame: &FrameData,
) {
    let Some(index) = frame.hud_index else {
        return;
    };
    let Some(entry) = registry.get(index) else {
        return;
    };

    for (_, request) in entry.requests() {
        if request.draw {
            draw_request(painter, context, frame, request);
        }
    }
}

fn draw_request(
    painter: &mut dyn Painter,
    context: &DrawContext,
    frame: &FrameData,
    request: &DrawRequest,
) {
    let gate = frame.gate(request.gate);
    let corner = request.region.corner(Corner::LeftBottom);
    let mut x = corner.x;
    let mut y = corner.y;

    // Grow/shrink the region about its center by the element size factor.
    let mut scale = request.size;
    let width_scaled = request.region.width() * scale;
    x -= (width_scaled - request.region.width()) * 0.5;
    let width = width_scaled.trunc();
    let height_scaled = request.region.height() * scale;
    y -= (height_scaled - request.region.height()) * 0.5;
    let height = height_scaled.trunc();

    // Track the render-resolution gate so screen size ignores viewport zoom.
    if request.fit_to_resolution_gate {
        let gate_scale = match frame.fit {
            FitAxis::Horizontal => gate.width() / frame.resolution.width,
            FitAxis::Vertical => gate.height() / frame.resolution.height,
        };
        scale *= gate_scale;
    }

    let line_width = request.line_width * scale;

    let alignment_offset_x = match request.horizontal_align {
        HorizontalAlign::Left => 0.0,
        HorizontalAlign::Right => width,
        HorizontalAlign::Center => width * 0.5,
    };

    if request.draw_gate {
        painter.begin_drawable();
        painter.set_color(request.color);
        painter.set_line_width(line_width);
        painter.set_line_style(request.line_style);
        painter.rect2d(gate.position(), gate.width() * 0.5, gate.height() * 0.5, false);
        painter.end_drawable();
    }

    if request.draw_region {
        painter.begin_drawable();
        painter.set_color(request.region_color);
        painter.set_line_width(line_width);
        painter.set_line_style(request.line_style);
        painter.rect2d(
            request.region.position(),
            width * 0.5,
            height * 0.5,
            request.region_filled,
        );
        painter.end_drawable();
    }

    let place = |point: Point| {
        Point::new(
            x + point.x * scale + alignment_offset_x,
            y + point.y * scale,
        )
    };

    match request.shape {
        ShapeKind::Text => {
            if request.text.is_empty() {
                return;
            }
            painter.begin_drawable();
            painter.set_color(request.color);
            if let Some(name) = &request.font_family {
                painter.set_font_name(name);
            }
            painter.set_font_size((request.font_size as f64 * scale) as u32);
            painter.set_font_stretch(request.font_stretch);
            painter.set_font_line(request.font_line);
            painter.set_font_weight(request.font_weight);
            painter.set_font_incline(request.font_incline);

            let anchor = place(
                request
                    .resolved_positions
                    .first()
                    .copied()
                    .unwrap_or(Point::ZERO),
            );
            let token_ctx = TokenContext {
                playback: context.playback,
                camera_name: &frame.camera_name,
                focal_length: frame.focal_length,
                focus_distance: frame.focus_distance,
                meta: &request.meta,
            };
            let text = substitute_tokens(&request.text, &token_ctx);
            painter.text2d(
                anchor,
                &text,
                request.horizontal_align,
                (width, height),
                request.text_background,
                request.text_dynamic,
            );
            painter.end_drawable();
        }
        ShapeKind::Point => {
            painter.begin_drawable();
            painter.set_color(request.color);
            painter.set_point_size(request.radius * scale);
            for point in &request.resolved_positions {
                painter.point2d(place(*point));
            }
            painter.end_drawable();
        }
        ShapeKind::Circle => {
            painter.begin_drawable();
            painter.set_color(request.color);
            painter.set_line_width(line_width);
            painter.set_line_style(request.line_style);
            let radius = request.radius * scale;
            for point in &request.resolved_positions {
                painter.circle2d(place(*point), radius, request.filled);
            }
            painter.end_drawable();
        }
        ShapeKind::Line => {
            painter.begin_drawable();
            painter.set_color(request.color);
            painter.set_line_width(line_width);
            painter.set_line_style(request.line_style);
            let mut previous: Option<Point> = None;
            for point in &request.resolved_positions {
                let point = place(*point);
                if let Some(from) = previous {
                    painter.line2d(from, point);
                }
                previous = Some(point);
            }
            painter.end_drawable();
        }
        ShapeKind::None => {}
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/draw.rs"]
mod tests;
