use crate::color::Color;
use crate::encode::Encoding;
use crate::palette::Palette;
use crate::surface::RgbaImage;

/// One output file: its extension and content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifact<'a> {
    /// Upper-case extension without the dot, e.g. `"SC5"`.
    pub extension: &'static str,
    pub bytes: &'a [u8],
}

impl Artifact<'_> {
    /// `STEM.EXT`
    pub fn file_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.extension)
    }
}

/// The outcome of a conversion.
#[derive(Debug, Clone)]
pub struct ConvertedImage {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) indices: Vec<u8>,
    pub(crate) palette: Palette,
    pub(crate) used_transparency: bool,
    pub(crate) encoding: Encoding,
    pub(crate) image: Option<Vec<u8>>,
    pub(crate) palette_file: Option<Vec<u8>>,
    pub(crate) text_palette: Option<String>,
    pub(crate) preview: Option<RgbaImage>,
}

impl ConvertedImage {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Hardware palette index of every pixel, row-major. Index 0 is the
    /// transparent slot when [`used_transparency`](Self::used_transparency)
    /// is set.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Quantized colors, without the transparent slot.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Whether index 0 was kept for transparency.
    #[inline]
    pub fn used_transparency(&self) -> bool {
        self.used_transparency
    }

    /// Offset between palette positions and hardware indices.
    #[inline]
    pub fn index_offset(&self) -> usize {
        usize::from(self.used_transparency)
    }

    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Encoded image container, `None` for `no-output`.
    pub fn image_bytes(&self) -> Option<&[u8]> {
        self.image.as_deref()
    }

    /// `.PAL` content, when palette export was requested.
    pub fn palette_file(&self) -> Option<&[u8]> {
        self.palette_file.as_deref()
    }

    /// `.TXT` listing, when text palette export was requested.
    pub fn text_palette(&self) -> Option<&str> {
        self.text_palette.as_deref()
    }

    /// Input image repainted with palette colors (`no-output` only).
    /// Transparent pixels keep the transparent color.
    pub fn preview(&self) -> Option<&RgbaImage> {
        self.preview.as_ref()
    }

    /// Color shown for hardware index `index`, `None` for the transparent
    /// slot or an unused index.
    pub fn color_of(&self, index: u8) -> Option<Color> {
        let position = (index as usize).checked_sub(self.index_offset())?;
        self.palette.colors().get(position).copied()
    }

    /// Every file this conversion should produce, image first.
    pub fn artifacts(&self) -> Vec<Artifact<'_>> {
        let mut artifacts = Vec::with_capacity(3);
        if let (Some(bytes), Some(extension)) = (&self.image, self.encoding.extension()) {
            artifacts.push(Artifact { extension, bytes });
        }
        if let Some(bytes) = &self.palette_file {
            artifacts.push(Artifact {
                extension: "PAL",
                bytes,
            });
        }
        if let Some(text) = &self.text_palette {
            artifacts.push(Artifact {
                extension: "TXT",
                bytes: text.as_bytes(),
            });
        }
        artifacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converted(encoding: Encoding, used_transparency: bool) -> ConvertedImage {
        ConvertedImage {
            width: 2,
            height: 1,
            indices: vec![0, 1],
            palette: Palette::new(vec![Color::new(224, 0, 0)]).unwrap(),
            used_transparency,
            encoding,
            image: encoding.extension().map(|_| vec![0x01]),
            palette_file: Some(vec![0xFE]),
            text_palette: Some("SCREEN 5 palette:\n".to_string()),
            preview: None,
        }
    }

    #[test]
    fn test_artifact_order_and_names() {
        let image = converted(Encoding::Sc5, false);
        let names: Vec<String> = image
            .artifacts()
            .iter()
            .map(|a| a.file_name("NONAME"))
            .collect();
        assert_eq!(names, ["NONAME.SC5", "NONAME.PAL", "NONAME.TXT"]);
    }

    #[test]
    fn test_no_output_has_no_image_artifact() {
        let image = converted(Encoding::NoOutput, false);
        let extensions: Vec<&str> = image.artifacts().iter().map(|a| a.extension).collect();
        assert_eq!(extensions, ["PAL", "TXT"]);
        assert!(image.image_bytes().is_none());
    }

    #[test]
    fn test_color_of_respects_offset() {
        let image = converted(Encoding::Sc5, true);
        assert_eq!(image.color_of(0), None);
        assert_eq!(image.color_of(1), Some(Color::new(224, 0, 0)));
        assert_eq!(image.color_of(2), None);

        let image = converted(Encoding::Sc5, false);
        assert_eq!(image.color_of(0), Some(Color::new(224, 0, 0)));
    }
}
