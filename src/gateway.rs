use tracing::debug;

use crate::error::TranslateError;

/// Language tags passed to the model. The target tag is always supplied
/// explicitly; the model's own language detection is never relied on.
pub const ENGLISH: &str = "en";
pub const MARATHI: &str = "mr";

/// Narrow port over a bidirectional translation model.
///
/// Adapter contract: the returned vector holds exactly one span per input,
/// positionally corresponding to `texts`. An adapter that batches or
/// reorders internally must restore input order before returning; the
/// gateway checks the length but cannot check positions.
pub trait TranslationModel {
    fn translate_batch(
        &self,
        source_lang: &str,
        target_lang: &str,
        texts: &[String],
    ) -> Result<Vec<String>, TranslateError>;
}

/// Directional wrapper around a [`TranslationModel`]. Holds no per-request
/// state and performs no retries.
pub struct TranslationGateway<M> {
    model: M,
}

impl<M: TranslationModel> TranslationGateway<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// English → Marathi, batched. An empty batch returns empty without
    /// touching the model.
    pub fn translate_en_to_mr(&self, texts: &[String]) -> Result<Vec<String>, TranslateError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        debug!(batch = texts.len(), "translate en -> mr");
        let out = self.model.translate_batch(ENGLISH, MARATHI, texts)?;
        if out.len() != texts.len() {
            return Err(TranslateError::BatchShape {
                expected: texts.len(),
                got: out.len(),
            });
        }
        Ok(out)
    }

    /// Marathi → English, single span.
    pub fn translate_mr_to_en(&self, text: &str) -> Result<String, TranslateError> {
        debug!("translate mr -> en");
        let batch = [text.to_string()];
        let mut out = self.model.translate_batch(MARATHI, ENGLISH, &batch)?;
        match out.len() {
            1 => Ok(out.remove(0)),
            got => Err(TranslateError::BatchShape { expected: 1, got }),
        }
    }
}
