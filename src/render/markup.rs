use std::borrow::Cow;

/// Corner text stamped on every generated document.
pub const WATERMARK: &str = "PLACEHOLDER";

pub(crate) const FONT_FAMILY: &str = "Arial, sans-serif";

pub(crate) const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Escape character data for use inside an element body.
///
/// Line breaks and quotes pass through untouched.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Bottom-right watermark shared by both layouts.
pub(crate) fn watermark(width: u32, height: u32, fill: &str) -> String {
    format!(
        r#"  <text x="{x}" y="{y}"
        font-family="{FONT_FAMILY}"
        font-size="16"
        fill="{fill}"
        text-anchor="end">{WATERMARK}</text>"#,
        x = i64::from(width) - 20,
        y = i64::from(height) - 20,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_text("HARPER"), Cow::Borrowed("HARPER")));
        assert!(matches!(
            escape_text("LAKE HOUSE\nDAY"),
            Cow::Borrowed("LAKE HOUSE\nDAY")
        ));
    }

    #[test]
    fn markup_characters_are_escaped() {
        assert_eq!(escape_text("R&D <lab>"), "R&amp;D &lt;lab&gt;");
        assert_eq!(escape_text("say \"hi\""), "say \"hi\"");
    }

    #[test]
    fn watermark_sits_in_bottom_right_corner() {
        let w = watermark(1920, 1080, "rgba(255,255,255,0.2)");
        assert!(w.contains(r#"x="1900" y="1060""#));
        assert!(w.contains(r#"text-anchor="end">PLACEHOLDER</text>"#));
    }
}
