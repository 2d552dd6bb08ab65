use crate::model::request::SceneMeta;

/// Host playback range, in frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaybackRange {
    /// Animation start frame.
    pub start: f64,
    /// Animation end frame.
    pub end: f64,
    /// Current frame.
    pub current: f64,
}

/// Values backing the `$TOKEN` placeholders of a text element.
#[derive(Clone, Debug)]
pub struct TokenContext<'a> {
    /// Playback range for the frame tokens.
    pub playback: PlaybackRange,
    /// Camera display name.
    pub camera_name: &'a str,
    /// Camera focal length.
    pub focal_length: f64,
    /// Camera focus distance.
    pub focus_distance: f64,
    /// Scene file and creation-date strings.
    pub meta: &'a SceneMeta,
}

/// Replace recognized `$TOKEN` placeholders and unescape `\n \r \t`.
///
/// Plain substring substitution; tokens sharing a prefix are replaced
/// longest-first so `$FRAME_AST` never decays into `$FRAME` plus `_AST`.
/// Frame tokens are zero-padded to three digits. `$FOCAL_LENGHT` keeps its
/// historical misspelling; documents in the wild rely on it.
pub fn substitute_tokens(template: &str, ctx: &TokenContext<'_>) -> String {
    let mut text = template.to_string();

    if text.contains("$FRAME_AST") {
        text = text.replace("$FRAME_AST", &frame_number(ctx.playback.start));
    }
    if text.contains("$FRAME_AET") {
        text = text.replace("$FRAME_AET", &frame_number(ctx.playback.end));
    }
    if text.contains("$FRAME_COUNT") {
        let count = ctx.playback.end - ctx.playback.start + 1.0;
        text = text.replace("$FRAME_COUNT", &frame_number(count));
    }
    if text.contains("$FRAME_REAL") {
        text = text.replace("$FRAME_REAL", &frame_number(ctx.playback.current));
    }
    if text.contains("$FRAME") {
        let frame = ctx.playback.current - ctx.playback.start;
        text = text.replace("$FRAME", &frame_number(frame));
    }

    if text.contains("$FILE_SHORT") {
        text = text.replace("$FILE_SHORT", file_short(&ctx.meta.file));
    }
    if text.contains("$FILE") {
        text = text.replace("$FILE", &ctx.meta.file);
    }

    if text.contains("$YEAR") {
        text = text.replace("$YEAR", &ctx.meta.year);
    }
    if text.contains("$MONTH") {
        text = text.replace("$MONTH", &ctx.meta.month);
    }
    if text.contains("$DAY") {
        text = text.replace("$DAY", &ctx.meta.day);
    }
    if text.contains("$HOUR") {
        text = text.replace("$HOUR", &ctx.meta.hour);
    }
    if text.contains("$MINUTE") {
        text = text.replace("$MINUTE", &ctx.meta.minute);
    }

    if text.contains("$CAMERA") {
        text = text.replace("$CAMERA", ctx.camera_name);
    }
    if text.contains("$FOCAL_LENGHT") {
        text = text.replace("$FOCAL_LENGHT", &short_decimal(ctx.focal_length));
    }
    if text.contains("$FOCUS_DISTANCE") {
        text = text.replace("$FOCUS_DISTANCE", &short_decimal(ctx.focus_distance));
    }

    text = text.replace("\\n", "\n");
    text = text.replace("\\r", "\r");
    text = text.replace("\\t", "\t");

    text
}

fn frame_number(value: f64) -> String {
    format!("{:03}", value as i64)
}

/// File name without directory and extension.
fn file_short(file: &str) -> &str {
    let name = file.rsplit('/').next().unwrap_or(file);
    name.split('.').next().unwrap_or(name)
}

/// Decimal string truncated to two fractional digits.
fn short_decimal(value: f64) -> String {
    let text = value.to_string();
    match text.split_once('.') {
        Some((integer, fraction)) => {
            let keep = fraction.len().min(2);
            format!("{integer}.{}", &fraction[..keep])
        }
        None => format!("{text}.0"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/tokens.rs"]
mod tests;
