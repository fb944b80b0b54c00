use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::normalize::DEFAULT_ARTIFACTS;

/// Pipeline settings, loadable from TOML. Everything defaults so an empty
/// file (or no file) is a valid configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct PipelineConfig {
    /// Literal substrings stripped from translation-model output before
    /// transliteration. Extend when a deployment discovers a new artifact.
    #[serde(default = "default_artifact_patterns")]
    pub artifact_patterns: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            artifact_patterns: default_artifact_patterns(),
        }
    }
}

fn default_artifact_patterns() -> Vec<String> {
    DEFAULT_ARTIFACTS.iter().map(|a| a.to_string()).collect()
}

pub fn load_config(path: &Path) -> anyhow::Result<PipelineConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: PipelineConfig = toml::from_str(&text).context("parse config toml")?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: PipelineConfig = toml::from_str("").expect("parse");
        assert_eq!(cfg.artifact_patterns, vec!["@ action".to_string()]);
    }

    #[test]
    fn artifact_list_is_extensible() {
        let cfg: PipelineConfig =
            toml::from_str(r#"artifact_patterns = ["@ action", "<unk>"]"#).expect("parse");
        assert_eq!(cfg.artifact_patterns.len(), 2);
    }

    #[test]
    fn load_config_reports_missing_file() {
        let err = load_config(Path::new("/nonexistent/modi.toml")).unwrap_err();
        assert!(err.to_string().contains("read config"));
    }
}
