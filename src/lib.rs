//! Placeholder art for visual-novel asset trees.
//!
//! Renders simple parametric SVG stand-ins for scene backgrounds and character sprites and writes
//! them under `game/background` and `game/figure`, each as a `.svg` plus a copy under the asset's
//! own raster extension (real PNG when a [`Rasterizer`] is available).
#![forbid(unsafe_code)]

pub mod catalog;
pub mod foundation;
pub mod generate;
pub mod raster;
pub mod render;

pub use catalog::{AssetPaths, BackgroundAsset, Catalog, CharacterAsset, asset_paths};
pub use foundation::color::{Rgb8, adjust_brightness};
pub use foundation::core::Canvas;
pub use foundation::error::{PlacegenError, PlacegenResult};
pub use generate::{AssetKind, AssetOutcome, GenerateReport, Generator, RasterOutcome};
pub use raster::{ExternalRasterizer, RasterKind, Rasterizer, create_rasterizer, detect_rasterizer};
#[cfg(feature = "raster")]
pub use raster::ResvgRasterizer;
pub use render::{WATERMARK, background_svg, character_svg};
