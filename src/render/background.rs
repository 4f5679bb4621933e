use crate::{
    foundation::{color::Rgb8, core::Canvas},
    render::markup::{FONT_FAMILY, XML_PROLOG, escape_text, watermark},
};

/// Gradient end stop relative to the base color.
pub const BACKGROUND_SHADE: f64 = -0.3;

/// Grid cell edge in pixels.
const GRID_STEP: u32 = 40;

/// Inset of the frame border from each edge.
const FRAME_INSET: u32 = 20;

/// Render a full-frame scene placeholder.
///
/// The document layers, back to front: a diagonal gradient from `color` to a darker shade, a
/// faint grid, an inset frame, the centered `label`, and the corner watermark. `label` may be
/// empty and may contain line breaks; it is emitted as a single text run. `&`, `<` and `>` in
/// `label` are escaped as entities, so only labels free of them appear verbatim in the markup.
pub fn background_svg(color: Rgb8, label: &str, canvas: Canvas) -> String {
    let Canvas { width, height } = canvas;
    let base = color.to_hex();
    let shade = color.adjust_brightness(BACKGROUND_SHADE).to_hex();
    let frame_w = width.saturating_sub(2 * FRAME_INSET);
    let frame_h = height.saturating_sub(2 * FRAME_INSET);

    format!(
        r##"{XML_PROLOG}
<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="bg-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{base};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{shade};stop-opacity:1" />
    </linearGradient>
    <pattern id="grid" width="{GRID_STEP}" height="{GRID_STEP}" patternUnits="userSpaceOnUse">
      <path d="M {GRID_STEP} 0 L 0 0 0 {GRID_STEP}" fill="none" stroke="rgba(255,255,255,0.05)" stroke-width="1"/>
    </pattern>
  </defs>

  <rect width="{width}" height="{height}" fill="url(#bg-gradient)"/>
  <rect width="{width}" height="{height}" fill="url(#grid)"/>

  <rect x="{FRAME_INSET}" y="{FRAME_INSET}" width="{frame_w}" height="{frame_h}"
        fill="none" stroke="rgba(255,255,255,0.1)" stroke-width="2"/>

  <text x="{cx}" y="{cy}"
        font-family="{FONT_FAMILY}"
        font-size="72"
        font-weight="bold"
        fill="rgba(255,255,255,0.3)"
        text-anchor="middle"
        dominant-baseline="middle">{label}</text>

{mark}
</svg>
"##,
        cx = canvas.center_x(),
        cy = canvas.center_y(),
        label = escape_text(label),
        mark = watermark(width, height, "rgba(255,255,255,0.2)"),
    )
}
