use crate::{
    foundation::{color::Rgb8, core::Canvas},
    render::markup::{FONT_FAMILY, XML_PROLOG, escape_text, watermark},
};

/// Gradient end stop relative to the base color.
pub const CHARACTER_SHADE: f64 = -0.4;

// Silhouette geometry, fixed in canvas pixels.
const HEAD_CY: u32 = 250;
const HEAD_RX: u32 = 120;
const HEAD_RY: u32 = 160;
const BODY_Y: u32 = 380;
const BODY_W: u32 = 160;
const BODY_H: u32 = 500;
const BODY_RADIUS: u32 = 40;
const NAME_Y: u32 = 950;
const EMOTION_Y: u32 = 1000;

/// Render a character sprite placeholder on a transparent canvas.
///
/// A two-shape silhouette (head ellipse over a rounded body) is filled with a vertical
/// gradient of `color` and outlined. `name` is drawn beneath in the base color and
/// `emotion` below it in parentheses. Both texts are escaped like
/// [`background_svg`](crate::render::background_svg) labels: `&`, `<` and `>` become entities.
pub fn character_svg(color: Rgb8, name: &str, emotion: &str, canvas: Canvas) -> String {
    let Canvas { width, height } = canvas;
    let base = color.to_hex();
    let shade = color.adjust_brightness(CHARACTER_SHADE).to_hex();
    let cx = canvas.center_x();
    let body_x = cx - f64::from(BODY_W) / 2.0;

    let head = format!(r#"cx="{cx}" cy="{HEAD_CY}" rx="{HEAD_RX}" ry="{HEAD_RY}""#);
    let body = format!(
        r#"x="{body_x}" y="{BODY_Y}" width="{BODY_W}" height="{BODY_H}" rx="{BODY_RADIUS}""#
    );

    format!(
        r##"{XML_PROLOG}
<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
  <rect width="{width}" height="{height}" fill="rgba(0,0,0,0)"/>

  <defs>
    <linearGradient id="char-gradient" x1="0%" y1="0%" x2="0%" y2="100%">
      <stop offset="0%" style="stop-color:{base};stop-opacity:0.9" />
      <stop offset="100%" style="stop-color:{shade};stop-opacity:0.9" />
    </linearGradient>
  </defs>

  <ellipse {head} fill="url(#char-gradient)" opacity="0.8"/>
  <rect {body} fill="url(#char-gradient)" opacity="0.8"/>

  <ellipse {head} fill="none" stroke="rgba(255,255,255,0.3)" stroke-width="3"/>
  <rect {body} fill="none" stroke="rgba(255,255,255,0.3)" stroke-width="3"/>

  <text x="{cx}" y="{NAME_Y}"
        font-family="{FONT_FAMILY}"
        font-size="48"
        font-weight="bold"
        fill="{base}"
        text-anchor="middle">{name}</text>

  <text x="{cx}" y="{EMOTION_Y}"
        font-family="{FONT_FAMILY}"
        font-size="32"
        fill="rgba(255,255,255,0.6)"
        text-anchor="middle">({emotion})</text>

{mark}
</svg>
"##,
        name = escape_text(name),
        emotion = escape_text(emotion),
        mark = watermark(width, height, "rgba(255,255,255,0.3)"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::markup::WATERMARK;

    fn crimson() -> Rgb8 {
        Rgb8::from_hex("#c41e3a").unwrap()
    }

    #[test]
    fn contains_name_and_parenthesized_emotion() {
        let svg = character_svg(crimson(), "HARPER", "Neutral", Canvas::CHARACTER);
        assert!(svg.contains(">HARPER</text>"));
        assert!(svg.contains(">(Neutral)</text>"));
        assert!(svg.contains(WATERMARK));
    }

    #[test]
    fn only_the_emotion_text_differs_between_emotions() {
        let neutral = character_svg(crimson(), "HARPER", "Neutral", Canvas::CHARACTER);
        let worried = character_svg(crimson(), "HARPER", "Worried", Canvas::CHARACTER);
        assert_ne!(neutral, worried);
        assert_eq!(neutral.replace("(Neutral)", "(Worried)"), worried);
    }

    #[test]
    fn output_is_deterministic() {
        let a = character_svg(crimson(), "MARCUS", "Angry", Canvas::CHARACTER);
        let b = character_svg(crimson(), "MARCUS", "Angry", Canvas::CHARACTER);
        assert_eq!(a, b);
    }

    #[test]
    fn silhouette_is_centered_on_canvas() {
        let svg = character_svg(crimson(), "ROWAN", "Calm", Canvas::CHARACTER);
        assert!(svg.contains(r#"<svg width="960" height="1080""#));
        assert!(svg.contains(r#"<ellipse cx="480" cy="250" rx="120" ry="160""#));
        assert!(svg.contains(r#"<rect x="400" y="380" width="160" height="500" rx="40""#));
        assert!(svg.contains(r#"<text x="480" y="950""#));
    }

    #[test]
    fn name_uses_base_color_and_gradient_darkens() {
        let svg = character_svg(crimson(), "HARPER", "Cold", Canvas::CHARACTER);
        assert!(svg.contains(r##"fill="#c41e3a""##));
        assert!(svg.contains("stop-color:#c41e3a;stop-opacity:0.9"));
        // 196 -> 117.6, 30 -> 18, 58 -> 34.8
        assert!(svg.contains("stop-color:#751222;stop-opacity:0.9"));
    }

    #[test]
    fn name_and_emotion_markup_is_escaped() {
        let svg = character_svg(crimson(), "A&B", "<Sly>", Canvas::CHARACTER);
        assert!(svg.contains(">A&amp;B</text>"));
        assert!(svg.contains(">(&lt;Sly&gt;)</text>"));
    }

    #[test]
    fn canvas_background_is_transparent() {
        let svg = character_svg(crimson(), "HARPER", "Cold", Canvas::CHARACTER);
        assert!(svg.contains(r#"fill="rgba(0,0,0,0)""#));
    }
}
