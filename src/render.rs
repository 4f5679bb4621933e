//! Markup renderers for the two placeholder layouts.
//!
//! Both renderers are pure: the same inputs always yield byte-identical documents.

pub mod background;
pub mod character;
pub mod markup;

pub use crate::foundation::core::Canvas;
pub use background::background_svg;
pub use character::character_svg;
pub use markup::WATERMARK;
