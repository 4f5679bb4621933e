use crate::foundation::error::{PlacegenError, PlacegenResult};

/// Document dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Full-frame scene backdrop.
    pub const BACKGROUND: Self = Self {
        width: 1920,
        height: 1080,
    };

    /// Standing character sprite (half the scene width).
    pub const CHARACTER: Self = Self {
        width: 960,
        height: 1080,
    };

    pub fn new(width: u32, height: u32) -> PlacegenResult<Self> {
        if width == 0 || height == 0 {
            return Err(PlacegenError::validation(
                "canvas width/height must be non-zero",
            ));
        }
        Ok(Self { width, height })
    }

    pub fn center_x(self) -> f64 {
        f64::from(self.width) / 2.0
    }

    pub fn center_y(self) -> f64 {
        f64::from(self.height) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_rejects_zero_dimensions() {
        assert!(Canvas::new(0, 10).is_err());
        assert!(Canvas::new(10, 0).is_err());
        assert_eq!(Canvas::new(3, 4).unwrap(), Canvas { width: 3, height: 4 });
    }

    #[test]
    fn center_handles_odd_sizes() {
        let c = Canvas::new(7, 9).unwrap();
        assert_eq!(c.center_x(), 3.5);
        assert_eq!(c.center_y(), 4.5);
    }
}
