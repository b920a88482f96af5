//! Public API: the [`Converter`] entry point, its [`ConvertOptions`] and the
//! [`ConvertError`] it reports.

mod builder;
mod error;
mod options;

pub use builder::Converter;
pub use error::ConvertError;
pub use options::{ConvertOptions, DEFAULT_TRANSPARENT_COLOR};
