use std::path::{Path, PathBuf};

use screen5::encode::preview_listing;
use screen5::{ConvertedImage, Converter, Encoding, Progress};

use super::image_loader::load_png;
use super::output_writer::OutputWriter;
use crate::error::AppError;
use crate::models::JobConfig;

/// Forwards pipeline progress to `tracing`, one event per stage and per
/// whole percent.
#[derive(Debug, Default)]
pub struct TracingProgress {
    stage: Option<String>,
    last_percent: Option<u32>,
}

impl Progress for TracingProgress {
    fn report_progress(&mut self, fraction: f64, message: Option<&str>) {
        if let Some(message) = message {
            tracing::debug!("{message}");
            self.stage = Some(message.to_string());
            self.last_percent = None;
        }
        let percent = (fraction.clamp(0.0, 1.0) * 100.0) as u32;
        if self.last_percent.is_some_and(|last| last >= percent) {
            return;
        }
        self.last_percent = Some(percent);
        tracing::trace!(stage = self.stage.as_deref().unwrap_or(""), percent, "Progress");
    }
}

/// What a finished conversion produced.
#[derive(Debug)]
pub struct ConversionReport {
    pub image: ConvertedImage,
    pub written: Vec<PathBuf>,
}

/// Converts PNG files according to one job configuration.
#[derive(Debug, Clone)]
pub struct ConversionService {
    config: JobConfig,
    converter: Converter,
}

impl ConversionService {
    pub fn new(config: JobConfig) -> Self {
        let converter = Converter::new(config.options.clone());
        Self { config, converter }
    }

    fn writer(&self) -> OutputWriter {
        OutputWriter::new(&self.config.output_dir, self.config.stem())
    }

    /// Convert `input` and write all requested files.
    ///
    /// Existing outputs are detected before the image is even decoded.
    pub fn convert_file(&self, input: &Path) -> Result<ConversionReport, AppError> {
        let writer = self.writer();
        writer.check_available(&self.converter.output_extensions())?;

        let source = load_png(input)?;
        let mut progress = TracingProgress::default();
        let image = self.converter.convert(&source, &mut progress)?;

        tracing::info!(
            input = %input.display(),
            colors = image.palette().len(),
            transparency = image.used_transparency(),
            encoding = %image.encoding(),
            "Converted image"
        );

        let written = writer.write_all(&image.artifacts())?;
        Ok(ConversionReport { image, written })
    }

    /// Quantize `input` without writing anything and list the palette.
    pub fn palette_listing(&self, input: &Path) -> Result<String, AppError> {
        let options = self
            .config
            .options
            .clone()
            .encoding(Encoding::NoOutput)
            .export_palette(false)
            .export_text_palette(false);

        let source = load_png(input)?;
        let image = Converter::new(options).convert(&source, &mut TracingProgress::default())?;

        let mut listing = preview_listing(image.palette());
        if image.used_transparency() {
            listing.push_str(&format!(
                "(index 0 reserved for {})\n",
                self.config.options.transparent_color
            ));
        }
        Ok(listing)
    }
}
