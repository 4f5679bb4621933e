//! Optional vector-to-raster conversion.
//!
//! A host may or may not be able to turn markup into real PNG bytes. When no [`Rasterizer`] is
//! available the generator writes the markup itself under the raster extension instead.

#[cfg(feature = "raster")]
pub mod builtin;
pub mod external;

use crate::foundation::error::{PlacegenError, PlacegenResult};

#[cfg(feature = "raster")]
pub use builtin::ResvgRasterizer;
pub use external::{ExternalRasterizer, RSVG_CONVERT};

/// PNG file signature.
pub const PNG_MAGIC: &[u8; 8] = b"\x89PNG\r\n\x1a\n";

/// Converts a complete SVG document into encoded PNG bytes.
pub trait Rasterizer {
    /// Short name for progress output and logs.
    fn name(&self) -> &'static str;

    fn rasterize(&self, svg: &str) -> PlacegenResult<Vec<u8>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterKind {
    /// In-process `resvg` renderer.
    #[cfg(feature = "raster")]
    Resvg,
    /// Host `rsvg-convert` binary.
    External,
}

pub fn create_rasterizer(kind: RasterKind) -> PlacegenResult<Box<dyn Rasterizer>> {
    match kind {
        #[cfg(feature = "raster")]
        RasterKind::Resvg => Ok(Box::new(ResvgRasterizer::new())),
        RasterKind::External => {
            if !ExternalRasterizer::is_available() {
                return Err(PlacegenError::raster(format!(
                    "{RSVG_CONVERT} was requested but was not found on PATH"
                )));
            }
            Ok(Box::new(ExternalRasterizer::default()))
        }
    }
}

/// Pick the best converter this build and host offer, if any.
///
/// Returns `None` when nothing is available; callers treat that as the fallback path.
pub fn detect_rasterizer() -> Option<Box<dyn Rasterizer>> {
    if let Some(r) = builtin_rasterizer() {
        tracing::debug!("using built-in {} rasterizer", r.name());
        return Some(r);
    }

    if ExternalRasterizer::is_available() {
        tracing::debug!("using {RSVG_CONVERT} from PATH");
        return Some(Box::new(ExternalRasterizer::default()));
    }

    tracing::debug!("no rasterizer available; raster copies will hold svg markup");
    None
}

#[cfg(feature = "raster")]
fn builtin_rasterizer() -> Option<Box<dyn Rasterizer>> {
    Some(Box::new(ResvgRasterizer::new()))
}

#[cfg(not(feature = "raster"))]
fn builtin_rasterizer() -> Option<Box<dyn Rasterizer>> {
    None
}

pub(crate) fn check_png(bytes: Vec<u8>, who: &str) -> PlacegenResult<Vec<u8>> {
    if !bytes.starts_with(PNG_MAGIC) {
        return Err(PlacegenError::raster(format!(
            "{who} did not produce PNG data ({} bytes)",
            bytes.len()
        )));
    }
    Ok(bytes)
}
