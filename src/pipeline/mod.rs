mod config;
mod orchestrator;

pub use config::{load_config, PipelineConfig};
pub use orchestrator::{ImageOutcome, ImageReport, TextOutcome, TextReport, TranslatorPipeline};
