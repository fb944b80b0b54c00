use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Artifact substrings the translation model is known to leak into its
/// output. The list is open-ended: cleanup must stay targeted, so anything
/// not on it passes through untouched.
pub const DEFAULT_ARTIFACTS: [&str; 1] = ["@ action"];

static DEFAULT_ARTIFACT_RE: Lazy<Regex> =
    Lazy::new(|| artifact_regex(&DEFAULT_ARTIFACTS).expect("default artifact regex"));

fn artifact_regex<S: AsRef<str>>(artifacts: &[S]) -> Option<Regex> {
    let pats: Vec<String> = artifacts
        .iter()
        .map(|a| regex::escape(a.as_ref()))
        .filter(|p| !p.is_empty())
        .collect();
    if pats.is_empty() {
        return None;
    }
    Some(Regex::new(&pats.join("|")).expect("artifact regex"))
}

/// Removes known model artifacts and trims outer whitespace. Interior
/// content is never rewritten otherwise.
pub struct Normalizer {
    pattern: Option<Regex>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            pattern: Some(DEFAULT_ARTIFACT_RE.clone()),
        }
    }
}

impl Normalizer {
    /// Build a normalizer for an explicit artifact list. An empty list
    /// yields a trim-only normalizer.
    pub fn new<S: AsRef<str>>(artifacts: &[S]) -> Self {
        Self {
            pattern: artifact_regex(artifacts),
        }
    }

    pub fn normalize(&self, raw: &str) -> String {
        let cleaned = match &self.pattern {
            Some(re) => {
                let stripped = re.replace_all(raw, "");
                if stripped.len() != raw.len() {
                    debug!(
                        removed = raw.len() - stripped.len(),
                        "stripped model artifacts"
                    );
                }
                stripped.into_owned()
            }
            None => raw.to_string(),
        };
        cleaned.trim().to_string()
    }
}
