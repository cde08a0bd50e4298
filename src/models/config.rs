//! Configuration models for mathforge.
//!
//! A run is described by one TOML file: output paths, LaTeX boilerplate,
//! and one `[problems.<kind>]` table per requested problem kind.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level configuration for mathforge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output file locations
    pub output: OutputConfig,

    /// LaTeX boilerplate bracketing both documents
    #[serde(default)]
    pub latex: LatexConfig,

    /// Per-kind settings, keyed by the kind's config slug.
    /// Kinds without a table are not emitted.
    #[serde(default)]
    pub problems: BTreeMap<String, ProblemSettings>,

    /// Generation settings
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Output configuration.
///
/// Paths may contain `${ENV_VAR}` placeholders, expanded at write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Problems document path
    pub problems: String,

    /// Solutions document path
    pub solutions: String,
}

impl OutputConfig {
    /// Problems path with environment variables expanded.
    pub fn problems_path(&self) -> PathBuf {
        PathBuf::from(expand_env_vars(&self.problems))
    }

    /// Solutions path with environment variables expanded.
    pub fn solutions_path(&self) -> PathBuf {
        PathBuf::from(expand_env_vars(&self.solutions))
    }
}

/// LaTeX boilerplate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatexConfig {
    /// Text emitted before the first section of each document
    #[serde(default = "default_preamble")]
    pub preamble: String,

    /// Text emitted after the last section of each document
    #[serde(default = "default_postamble")]
    pub postamble: String,
}

fn default_preamble() -> String {
    r"\documentclass[11pt,notitlepage,letterpaper,oneside]{article}
\usepackage{amsmath}
\newcommand{\abs}[1]{\left\lvert{#1}\right\rvert}
\begin{document}"
        .to_string()
}

fn default_postamble() -> String {
    r"\end{document}".to_string()
}

impl Default for LatexConfig {
    fn default() -> Self {
        Self {
            preamble: default_preamble(),
            postamble: default_postamble(),
        }
    }
}

/// Settings for one problem kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProblemSettings {
    /// Number of problems to emit (0 emits nothing, not even a header)
    #[serde(default)]
    pub nprobs: usize,

    /// Depth flag: full worked solutions instead of short answers
    #[serde(default)]
    pub solutions: bool,

    /// Clear fractional bounds by scaling (reverse absolute-value kind only)
    #[serde(default)]
    pub full_simplify: bool,
}

/// Generation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// RNG seed; omit to seed from OS entropy (non-reproducible runs)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_owned(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })
    }

    /// Settings for a kind, defaulting to "not requested" when absent.
    pub fn settings(&self, slug: &str) -> ProblemSettings {
        self.problems.get(slug).cloned().unwrap_or_default()
    }

    /// Total problem count requested across all kinds.
    pub fn total_requested(&self) -> usize {
        self.problems.values().map(|s| s.nprobs).sum()
    }
}

/// Expand environment variables in a string.
///
/// Supports ${VAR_NAME} syntax.
/// If the variable is not set, the placeholder is left unchanged.
pub fn expand_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

    for cap in re.captures_iter(s) {
        let var_name = &cap[1];
        if let Ok(value) = std::env::var(var_name) {
            result = result.replace(&cap[0], &value);
        }
    }

    result
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str(
            r#"
            [output]
            problems = "problems.tex"
            solutions = "solutions.tex"

            [problems.abs-value-inequality]
            nprobs = 5
            solutions = true
            "#,
        )
        .unwrap();

        assert_eq!(config.output.problems, "problems.tex");
        let settings = config.settings("abs-value-inequality");
        assert_eq!(settings.nprobs, 5);
        assert!(settings.solutions);
        assert!(!settings.full_simplify);

        // Absent table means not requested
        let absent = config.settings("binomial-expansion");
        assert_eq!(absent.nprobs, 0);

        // Defaults carry the article preamble
        assert!(config.latex.preamble.contains(r"\begin{document}"));
        assert_eq!(config.latex.postamble, r"\end{document}");
        assert_eq!(config.generation.seed, None);
        assert_eq!(config.total_requested(), 5);
    }

    #[test]
    fn test_expand_env_vars() {
        std::env::set_var("MATHFORGE_TEST_DIR", "/tmp/worksheets");
        assert_eq!(
            expand_env_vars("${MATHFORGE_TEST_DIR}/problems.tex"),
            "/tmp/worksheets/problems.tex"
        );
        // Unset variables are left as-is
        assert_eq!(
            expand_env_vars("${MATHFORGE_UNSET_VAR}/x.tex"),
            "${MATHFORGE_UNSET_VAR}/x.tex"
        );
    }
}
