//! The pixel-buffer collaborator the pipeline operates on.
//!
//! [`ImageSurface`] abstracts whatever owns the pixels (a host application's
//! drawable, a decoded PNG, a test fixture). [`RgbaImage`] is the in-memory
//! implementation used by the conversion itself and by the preview output.
//!
//! [`ImageKind`] records what the source looked like before it was expanded
//! to RGBA. It is reported in logs and never changes the conversion.

mod image;
mod kind;

pub use image::{ImageSurface, RgbaImage};
pub use kind::ImageKind;
