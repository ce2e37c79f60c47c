/// Background offset for a `[data-parallax]` element, in pixels.
///
/// The attribute is read as a plain number; an empty attribute counts as
/// zero. Anything unparsable yields `None` so the element is left alone.
pub fn background_offset(scroll_y: f64, speed: &str) -> Option<f64> {
    let speed = speed.trim();
    let speed = if speed.is_empty() { 0.0 } else { speed.parse::<f64>().ok()? };
    let offset = scroll_y * speed;
    offset.is_finite().then_some(offset)
}

/// CSS value for `background-position-y`.
pub fn background_position(offset: f64) -> String {
    format!("{}px", offset)
}
