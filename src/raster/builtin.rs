use std::{io::Cursor, sync::Arc};

use anyhow::Context as _;

use crate::{
    foundation::error::{PlacegenError, PlacegenResult},
    raster::{Rasterizer, check_png},
};

/// Largest edge we are willing to allocate a pixmap for.
const MAX_DIM: u32 = 16_384;

/// In-process converter built on `usvg` + `resvg`.
///
/// Text is shaped against the host's system fonts; a host with no fonts still produces a valid
/// image, just without glyphs.
#[derive(Clone)]
pub struct ResvgRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResvgRasterizer {
    pub fn new() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        let r = Self {
            fontdb: Arc::new(db),
        };
        tracing::debug!(faces = r.font_face_count(), "loaded system fonts");
        r
    }

    pub fn font_face_count(&self) -> usize {
        self.fontdb.faces().count()
    }
}

impl Rasterizer for ResvgRasterizer {
    fn name(&self) -> &'static str {
        "resvg"
    }

    #[tracing::instrument(skip(self, svg), fields(svg_len = svg.len()))]
    fn rasterize(&self, svg: &str) -> PlacegenResult<Vec<u8>> {
        let opts = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse svg tree")?;

        let (width, height) = raster_size(&tree)?;
        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| PlacegenError::raster("failed to allocate svg pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        check_png(encode_png(&pixmap)?, self.name())
    }
}

fn raster_size(tree: &usvg::Tree) -> PlacegenResult<(u32, u32)> {
    fn to_px(v: f32) -> PlacegenResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(PlacegenError::raster("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    let size = tree.size();
    let w = to_px(size.width())?;
    let h = to_px(size.height())?;
    if w > MAX_DIM || h > MAX_DIM {
        return Err(PlacegenError::raster(format!(
            "svg raster size too large: {w}x{h} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }
    Ok((w, h))
}

/// tiny-skia stores premultiplied pixels; PNG wants straight alpha.
fn encode_png(pixmap: &resvg::tiny_skia::Pixmap) -> PlacegenResult<Vec<u8>> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let img = image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba)
        .ok_or_else(|| PlacegenError::raster("pixmap buffer does not match its dimensions"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}
