use crate::foundation::error::{PlacegenError, PlacegenResult};

/// Straight 8-bit RGB color, the only color model the placeholder tables use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb` (either case).
    pub fn from_hex(s: &str) -> PlacegenResult<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PlacegenError::color(format!(
                "'{s}' is not a 6-digit hex RGB color"
            )));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| PlacegenError::color(format!("'{s}': {e}")))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Lighten (`factor > 0`, blend toward white) or darken (`factor <= 0`, scale toward black).
    ///
    /// Each channel is clamped to `[0, 255]` and truncated.
    pub fn adjust_brightness(self, factor: f64) -> Self {
        fn channel(c: u8, factor: f64) -> u8 {
            let c = f64::from(c);
            let v = if factor > 0.0 {
                c + (255.0 - c) * factor
            } else {
                c * (1.0 + factor)
            };
            v.clamp(0.0, 255.0) as u8
        }

        Self::new(
            channel(self.r, factor),
            channel(self.g, factor),
            channel(self.b, factor),
        )
    }
}

impl std::fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Rgb8 {
    type Err = PlacegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// String-in, string-out form of [`Rgb8::adjust_brightness`].
pub fn adjust_brightness(hex: &str, factor: f64) -> PlacegenResult<String> {
    Ok(Rgb8::from_hex(hex)?.adjust_brightness(factor).to_hex())
}
