use image::{DynamicImage, GrayImage};

use crate::error::RecognizeError;

/// Narrow port over an OCR engine trained on Modi script.
///
/// Recognizers receive a pre-processed grayscale page and return whatever
/// text they found. An image with no text is an empty `Ok` span, never an
/// error; [`RecognizeError`] is reserved for genuine engine failures.
pub trait OcrRecognizer {
    fn recognize(&self, image: &GrayImage) -> Result<String, RecognizeError>;
}

/// Colorspace conversion only: the recognizer gets a single-channel page
/// regardless of what the host hands us.
pub fn preprocess(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}

#[cfg(feature = "ocr")]
pub use self::ocrs_backend::{OcrsConfig, OcrsRecognizer};

#[cfg(feature = "ocr")]
mod ocrs_backend {
    use std::path::{Path, PathBuf};

    use image::GrayImage;
    use ocrs::{ImageSource, OcrEngine as OcrsEngine, OcrEngineParams};
    use rten::Model;
    use tracing::{debug, info};

    use super::OcrRecognizer;
    use crate::error::RecognizeError;

    const DETECTION_MODEL_FILENAME: &str = "text-detection.rten";
    const RECOGNITION_MODEL_FILENAME: &str = "text-recognition.rten";

    /// Model file locations for the `ocrs` engine.
    #[derive(Debug, Clone)]
    pub struct OcrsConfig {
        pub detection_model_path: PathBuf,
        pub recognition_model_path: PathBuf,
    }

    impl OcrsConfig {
        /// Expects `text-detection.rten` and `text-recognition.rten` in `dir`.
        pub fn from_dir(dir: impl AsRef<Path>) -> Self {
            let dir = dir.as_ref();
            Self {
                detection_model_path: dir.join(DETECTION_MODEL_FILENAME),
                recognition_model_path: dir.join(RECOGNITION_MODEL_FILENAME),
            }
        }

        fn validate(&self) -> Result<(), RecognizeError> {
            for path in [&self.detection_model_path, &self.recognition_model_path] {
                if !path.exists() {
                    return Err(RecognizeError::ModelUnavailable(format!(
                        "model file not found: {}",
                        path.display()
                    )));
                }
            }
            Ok(())
        }
    }

    /// `ocrs`-backed recognizer. Model loading is the expensive step; build
    /// once and reuse across pages.
    pub struct OcrsRecognizer {
        engine: OcrsEngine,
    }

    impl OcrsRecognizer {
        pub fn new(config: OcrsConfig) -> Result<Self, RecognizeError> {
            config.validate()?;

            let detection = Model::load_file(&config.detection_model_path).map_err(|err| {
                RecognizeError::ModelUnavailable(format!(
                    "load {}: {err}",
                    config.detection_model_path.display()
                ))
            })?;
            let recognition = Model::load_file(&config.recognition_model_path).map_err(|err| {
                RecognizeError::ModelUnavailable(format!(
                    "load {}: {err}",
                    config.recognition_model_path.display()
                ))
            })?;

            let engine = OcrsEngine::new(OcrEngineParams {
                detection_model: Some(detection),
                recognition_model: Some(recognition),
                ..Default::default()
            })
            .map_err(|err| RecognizeError::Engine(format!("init engine: {err}")))?;

            info!("ocrs recognizer ready");
            Ok(Self { engine })
        }
    }

    impl OcrRecognizer for OcrsRecognizer {
        fn recognize(&self, image: &GrayImage) -> Result<String, RecognizeError> {
            let (width, height) = image.dimensions();
            let rgb = image::DynamicImage::ImageLuma8(image.clone()).to_rgb8();

            let source = ImageSource::from_bytes(rgb.as_raw(), (width, height))
                .map_err(|err| RecognizeError::Engine(format!("image source: {err}")))?;
            let input = self
                .engine
                .prepare_input(source)
                .map_err(|err| RecognizeError::Engine(format!("prepare input: {err}")))?;
            let text = self
                .engine
                .get_text(&input)
                .map_err(|err| RecognizeError::Engine(format!("recognize: {err}")))?;

            debug!(chars = text.len(), "ocr complete");
            Ok(text)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn config_from_dir_uses_well_known_filenames() {
            let config = OcrsConfig::from_dir("/tmp/modi-models");
            assert_eq!(
                config.detection_model_path,
                PathBuf::from("/tmp/modi-models/text-detection.rten")
            );
            assert_eq!(
                config.recognition_model_path,
                PathBuf::from("/tmp/modi-models/text-recognition.rten")
            );
        }

        #[test]
        fn missing_models_are_reported_as_unavailable() {
            let config = OcrsConfig::from_dir("/nonexistent/modi-models");
            assert!(matches!(
                OcrsRecognizer::new(config),
                Err(RecognizeError::ModelUnavailable(_))
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn preprocess_keeps_dimensions_and_drops_color() {
        let rgb = image::RgbImage::from_pixel(4, 3, Rgb([200, 10, 10]));
        let gray = preprocess(&DynamicImage::ImageRgb8(rgb));
        assert_eq!(gray.dimensions(), (4, 3));
    }
}
