use crate::{
    foundation::core::{FilmFit, FitAxis, Resolution, ViewportRect},
    model::camera::CameraState,
    model::frame::FrameData,
    model::request::{HorizontalAttach, VerticalAttach},
    registry::directory::HudRegistry,
};

/// Resolve a film-fit policy against a container aspect ratio.
///
/// `Fill` picks the axis that keeps the whole aperture inside the container;
/// `Overscan` picks the inverse axis so the aperture covers it.
pub fn resolve_film_fit(fit: FilmFit, container_aspect: f64, film_aspect: f64) -> FitAxis {
    match fit {
        FilmFit::Horizontal => FitAxis::Horizontal,
        FilmFit::Vertical => FitAxis::Vertical,
        FilmFit::Fill => {
            if container_aspect < film_aspect {
                FitAxis::Vertical
            } else {
                FitAxis::Horizontal
            }
        }
        FilmFit::Overscan => {
            if container_aspect < film_aspect {
                FitAxis::Horizontal
            } else {
                FitAxis::Vertical
            }
        }
    }
}

/// Compute all gate canvases and resolve every enabled element's region.
///
/// Recomputes the full [`FrameData`] snapshot from scratch: viewport and port
/// canvases, film/image/render gates with their safe variants, pixel scales,
/// and per-element region rectangles and position offsets. The previous
/// frame's data is reused as storage when supplied. A negative `hud_index`
/// means the node is inactive and yields `None`.
#[tracing::instrument(skip(registry, camera, previous))]
pub fn prepare_for_draw(
    registry: &mut HudRegistry,
    camera: &CameraState,
    viewport: ViewportRect,
    resolution: Resolution,
    hud_index: i32,
    previous: Option<FrameData>,
) -> Option<FrameData> {
    if hud_index < 0 {
        return None;
    }
    let hud_index = hud_index as u32;

    let mut data = previous.unwrap_or_default();
    data.hud_index = Some(hud_index);
    data.resolution = resolution;
    data.viewport_width = viewport.width;
    data.viewport_height = viewport.height;
    data.camera_name = camera.name.clone();
    data.focal_length = camera.focal_length;
    data.focus_distance = camera.focus_distance;

    let entry = registry.entry(hud_index);
    entry.set_resolution(resolution.width, resolution.height);

    data.viewport.apply(
        viewport.origin_x + viewport.width * 0.5,
        viewport.origin_y + viewport.height * 0.5,
        viewport.width,
        viewport.height,
    );
    data.port.inherit(&data.viewport);

    let (zoom, pan) = camera.effective_pan_zoom();
    let film_aspect = camera.horizontal_film_aperture / camera.vertical_film_aperture;
    let resolution_aspect = resolution.aspect_ratio();

    let fit = resolve_film_fit(camera.film_fit, data.viewport.aspect_ratio(), film_aspect);
    let resolution_fit = resolve_film_fit(camera.film_fit, resolution_aspect, film_aspect);
    data.fit = fit;

    // Aperture re-derived for the render resolution's shape.
    let (horizontal_resolution_aperture, vertical_resolution_aperture) = match resolution_fit {
        FitAxis::Horizontal => (
            camera.horizontal_film_aperture,
            camera.horizontal_film_aperture / resolution_aspect,
        ),
        FitAxis::Vertical => (
            camera.vertical_film_aperture * resolution_aspect,
            camera.vertical_film_aperture,
        ),
    };

    let pixel_scale = match fit {
        FitAxis::Horizontal => {
            data.viewport.width() / camera.overscan / camera.horizontal_film_aperture / zoom
        }
        FitAxis::Vertical => {
            data.viewport.height() / camera.overscan / camera.vertical_film_aperture / zoom
        }
    };
    let pixel_resolution_scale = match resolution_fit {
        FitAxis::Horizontal => {
            data.viewport.width() / camera.overscan / horizontal_resolution_aperture / zoom
        }
        FitAxis::Vertical => {
            data.viewport.height() / camera.overscan / vertical_resolution_aperture / zoom
        }
    };
    let pixel_scale_x = pixel_scale * camera.lens_squeeze_ratio;
    let pixel_resolution_scale_x = pixel_resolution_scale * camera.lens_squeeze_ratio;
    data.pixel_scale = pixel_scale;
    data.pixel_resolution_scale = pixel_resolution_scale;

    data.port.move_to(
        data.port.x() - pan.x * pixel_scale,
        data.port.y() - pan.y * pixel_scale,
    );
    let port_x = data.port.x();
    let port_y = data.port.y();

    let film_width = camera.horizontal_film_aperture * pixel_scale_x;
    let film_height = camera.vertical_film_aperture * pixel_scale;
    data.film.apply(port_x, port_y, film_width, film_height);
    data.image.apply(port_x, port_y, film_width, film_height);

    data.scale = (viewport.width / film_width) / (viewport.height / film_height);

    let render_width = horizontal_resolution_aperture * pixel_resolution_scale_x;
    let render_height = vertical_resolution_aperture * pixel_resolution_scale;
    data.render.apply(port_x, port_y, render_width, render_height);

    data.safe_action
        .apply(port_x, port_y, film_width * 0.9, film_height * 0.9);
    data.safe_title
        .apply(port_x, port_y, film_width * 0.8, film_height * 0.8);
    data.render_safe_action
        .apply(port_x, port_y, render_width * 0.9, render_height * 0.9);
    data.render_safe_title
        .apply(port_x, port_y, render_width * 0.8, render_height * 0.8);

    entry.for_each_request_mut(|_, request| {
        if !request.draw {
            return;
        }
        let gate = data.gate(request.gate);

        let width_percentage = gate.width() / 100.0;
        let height_percentage = gate.height() / 100.0;
        let offset_x = request.region_offset.x * width_percentage;
        let offset_y = request.region_offset.y * height_percentage;
        let real_width = request.region_size.x * width_percentage;
        let real_height = request.region_size.y * height_percentage;

        // Offsets push the region inward from whichever edge it attaches to.
        let x = match request.horizontal_attach {
            HorizontalAttach::Left => {
                gate.x() - gate.width() * 0.5 + real_width * 0.5 + offset_x
            }
            HorizontalAttach::Right => {
                gate.x() + gate.width() * 0.5 - real_width * 0.5 - offset_x
            }
            HorizontalAttach::Middle => gate.x() + offset_x,
        };
        let y = match request.vertical_attach {
            VerticalAttach::Top => gate.y() + gate.height() * 0.5 - real_height * 0.5 - offset_y,
            VerticalAttach::Bottom => {
                gate.y() - gate.height() * 0.5 + real_height * 0.5 + offset_y
            }
            VerticalAttach::Middle => gate.y() + offset_y,
        };

        request
            .region
            .apply(x, y, real_width.trunc(), real_height.trunc());

        let count = request.positions.len();
        request
            .resolved_positions
            .resize(count, crate::foundation::core::Point::ZERO);
        for (resolved, raw) in request
            .resolved_positions
            .iter_mut()
            .zip(request.positions.iter())
        {
            resolved.x = raw.x * (real_width / 100.0);
            resolved.y = raw.y * (real_height / 100.0);
        }
    });

    Some(data)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
