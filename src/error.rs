use thiserror::Error;

/// Failures of the external translation model adapter. The gateway never
/// retries; retry policy belongs to the caller.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("translation model unavailable: {0}")]
    Unavailable(String),

    /// The adapter returned a different number of spans than it was given.
    /// A batch like this has no positional reading, so it is rejected
    /// rather than zipped short.
    #[error("translation model returned {got} spans for {expected} inputs")]
    BatchShape { expected: usize, got: usize },
}

/// Failures of the external OCR recognizer. "No text found" is not an
/// error; recognizers report it as an empty span.
#[derive(Error, Debug)]
pub enum RecognizeError {
    #[error("recognizer model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("recognition failed: {0}")]
    Engine(String),
}

/// A pipeline stage failed. Benign early halts (empty input, no text or
/// script detected) are outcome variants, not errors.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("translation stage failed")]
    Translation(#[from] TranslateError),

    #[error("recognition stage failed")]
    Recognition(#[from] RecognizeError),
}
