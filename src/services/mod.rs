pub mod conversion;
pub mod image_loader;
pub mod output_writer;
pub mod preview;

pub use conversion::{ConversionReport, ConversionService, TracingProgress};
pub use image_loader::{decode_png, load_png};
pub use output_writer::{write_atomic, OutputWriter};
pub use preview::{encode_preview_png, write_preview};
