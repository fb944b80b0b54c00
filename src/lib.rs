pub mod error;
pub mod gateway;
pub mod logging;
pub mod normalize;
pub mod pipeline;
pub mod recognize;
pub mod script;
pub mod translit;

pub use error::{PipelineError, RecognizeError, TranslateError};
pub use gateway::{TranslationGateway, TranslationModel};
pub use normalize::Normalizer;
pub use pipeline::{
    load_config, ImageOutcome, ImageReport, PipelineConfig, TextOutcome, TextReport,
    TranslatorPipeline,
};
pub use recognize::{preprocess, OcrRecognizer};
pub use script::{forward, glyph_inventory, inverse, GlyphClass, GlyphPair};
pub use translit::{transliterate_to_devanagari, transliterate_to_modi};
