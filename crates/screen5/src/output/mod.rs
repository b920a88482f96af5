//! Conversion results.
//!
//! [`ConvertedImage`] keeps the canonical per-pixel indices alongside every
//! byte stream the conversion produced. Nothing here touches the file
//! system; callers write [`Artifact`]s wherever they like.

mod converted;

pub use converted::{Artifact, ConvertedImage};
