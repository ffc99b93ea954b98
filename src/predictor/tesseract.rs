//! Tesseract recognition through `leptess`.

use crate::core::{BoxError, RecognitionConfig, TextRecognizer};
use image::{GrayImage, ImageFormat};
use leptess::{LepTess, Variable};
use std::io::Cursor;
use std::path::PathBuf;
use tracing::{debug, info};

/// A [`TextRecognizer`] backed by the Tesseract engine.
///
/// The engine is initialized on the first call with the data path and
/// language of that call's configuration and reused while those two settings
/// stay the same; a call with a different language or data path starts a new
/// engine. `leptess` initializes Tesseract with its default engine mode, which
/// runs the legacy and LSTM engines together where both are installed.
#[derive(Default)]
pub struct TesseractRecognizer {
    engine: Option<(EngineKey, LepTess)>,
}

/// The init-time settings an engine was created with.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EngineKey {
    language: String,
    data_path: Option<PathBuf>,
}

impl From<&RecognitionConfig> for EngineKey {
    fn from(config: &RecognitionConfig) -> Self {
        Self {
            language: config.language.clone(),
            data_path: config.data_path.clone(),
        }
    }
}

impl TesseractRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    fn engine(&mut self, config: &RecognitionConfig) -> Result<&mut LepTess, BoxError> {
        let key = EngineKey::from(config);
        if self.engine.as_ref().is_some_and(|(current, _)| *current != key) {
            debug!("Recognition settings changed, restarting Tesseract");
            self.engine = None;
        }

        if self.engine.is_none() {
            let data_path = match &key.data_path {
                Some(path) => Some(
                    path.to_str()
                        .ok_or_else(|| format!("tessdata path is not UTF-8: {}", path.display()))?
                        .to_string(),
                ),
                None => None,
            };
            let engine = LepTess::new(data_path.as_deref(), &key.language).map_err(|err| {
                format!(
                    "failed to initialize Tesseract for language '{}': {err}",
                    key.language
                )
            })?;
            info!(
                "Tesseract initialized ({}, language {})",
                config.config_string(),
                key.language
            );
            self.engine = Some((key, engine));
        }
        self.engine
            .as_mut()
            .map(|(_, engine)| engine)
            .ok_or_else(|| BoxError::from("Tesseract engine unavailable"))
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(
        &mut self,
        bitmap: &GrayImage,
        config: &RecognitionConfig,
    ) -> Result<String, BoxError> {
        let mut png = Vec::new();
        bitmap.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        let engine = self.engine(config)?;
        engine
            .set_variable(
                Variable::TesseditPagesegMode,
                &config.page_seg_mode.to_string(),
            )
            .map_err(|err| format!("failed to set page segmentation mode: {err}"))?;
        engine
            .set_image_from_mem(&png)
            .map_err(|err| format!("failed to hand image to Tesseract: {err}"))?;
        // Only takes effect once an image is set.
        engine.set_source_resolution(config.dpi as i32);

        let text = engine.get_utf8_text()?;
        debug!("Recognized {} characters", text.chars().count());
        Ok(text)
    }
}
