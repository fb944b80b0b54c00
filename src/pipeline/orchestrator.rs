use image::DynamicImage;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::PipelineError;
use crate::gateway::{TranslationGateway, TranslationModel};
use crate::normalize::Normalizer;
use crate::recognize::{preprocess, OcrRecognizer};
use crate::translit::{contains_devanagari, transliterate_to_devanagari, transliterate_to_modi};

use super::PipelineConfig;

/// Stage values of a completed text-entry run. Both are part of the
/// contract: callers render the final Modi span and may surface the
/// intermediate Marathi for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextReport {
    pub marathi: String,
    pub modi: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TextOutcome {
    /// Nothing to do: input was empty or whitespace-only. Not a failure.
    EmptyInput,
    Translated(TextReport),
}

/// Stage values of a completed image-entry run, one per stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageReport {
    pub recognized: String,
    pub devanagari: String,
    pub english: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ImageOutcome {
    /// OCR returned an empty span. Not a failure.
    NoTextRecognized,
    /// OCR returned symbols, but none were Modi glyphs the table knows.
    NoScriptRecognized,
    Translated(ImageReport),
}

impl TextReport {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl ImageReport {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Composes the gateway, normalizer, and transliteration engine into the
/// two directional flows. Generic over the model and recognizer ports so
/// hosts and tests supply their own adapters.
pub struct TranslatorPipeline<M, R> {
    gateway: TranslationGateway<M>,
    normalizer: Normalizer,
    recognizer: R,
}

impl<M: TranslationModel, R: OcrRecognizer> TranslatorPipeline<M, R> {
    pub fn new(model: M, recognizer: R, config: &PipelineConfig) -> Self {
        Self {
            gateway: TranslationGateway::new(model),
            normalizer: Normalizer::new(&config.artifact_patterns),
            recognizer,
        }
    }

    /// English text → Modi script, keeping the Marathi intermediate.
    pub fn translate_text(&self, input: &str) -> Result<TextOutcome, PipelineError> {
        if input.trim().is_empty() {
            debug!("text pipeline: empty input");
            return Ok(TextOutcome::EmptyInput);
        }
        let batch = [input.to_string()];
        let translated = self.gateway.translate_en_to_mr(&batch)?;
        let raw = translated
            .into_iter()
            .next()
            .expect("batch shape checked by gateway");
        Ok(TextOutcome::Translated(self.finish_text(&raw)))
    }

    /// Batched form of [`translate_text`](Self::translate_text): one gateway
    /// call for all non-empty spans, outcomes in input order.
    pub fn translate_text_batch(
        &self,
        inputs: &[String],
    ) -> Result<Vec<TextOutcome>, PipelineError> {
        let todo: Vec<usize> = inputs
            .iter()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(i, _)| i)
            .collect();
        let batch: Vec<String> = todo.iter().map(|&i| inputs[i].clone()).collect();
        let translated = self.gateway.translate_en_to_mr(&batch)?;

        let mut outcomes = vec![TextOutcome::EmptyInput; inputs.len()];
        for (&i, raw) in todo.iter().zip(translated) {
            outcomes[i] = TextOutcome::Translated(self.finish_text(&raw));
        }
        Ok(outcomes)
    }

    /// Modi-script image → English text, keeping every stage value.
    pub fn translate_image(&self, image: &DynamicImage) -> Result<ImageOutcome, PipelineError> {
        let gray = preprocess(image);
        let recognized = self.recognizer.recognize(&gray)?;
        if recognized.trim().is_empty() {
            debug!("image pipeline: recognizer found no text");
            return Ok(ImageOutcome::NoTextRecognized);
        }

        let devanagari = transliterate_to_devanagari(&recognized);
        if !contains_devanagari(&devanagari) {
            debug!("image pipeline: no mappable script glyphs");
            return Ok(ImageOutcome::NoScriptRecognized);
        }

        let english = self.gateway.translate_mr_to_en(&devanagari)?;
        info!("image pipeline complete");
        Ok(ImageOutcome::Translated(ImageReport {
            recognized,
            devanagari,
            english,
        }))
    }

    fn finish_text(&self, raw_marathi: &str) -> TextReport {
        let marathi = self.normalizer.normalize(raw_marathi);
        let modi = transliterate_to_modi(&marathi);
        TextReport { marathi, modi }
    }
}
