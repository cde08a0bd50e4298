//! Worksheet generation pipeline.
//!
//! Pipeline flow:
//! Config → Registry iteration → problem/solution LaTeX streams → output files

use crate::generators::Registry;
use crate::models::{Config, ForgeError, Result, RunStats};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::{debug, info};

/// Driver for one worksheet generation run.
pub struct WorksheetPipeline {
    config: Config,
    registry: Registry,
}

impl WorksheetPipeline {
    /// Create a pipeline, validating the config against the registry.
    pub fn new(config: Config) -> Result<Self> {
        let registry = Registry::builtin();

        for slug in config.problems.keys() {
            if registry.get(slug).is_none() {
                return Err(ForgeError::UnknownProblemKind(slug.clone()));
            }
        }

        Ok(Self { config, registry })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render the problem and solution streams.
    ///
    /// Deterministic given the RNG state: every kind is visited in registry
    /// order, and kinds with a zero (or absent) count contribute nothing.
    pub fn render(&self, rng: &mut StdRng) -> (String, String) {
        self.render_with(rng, |_, _| {})
    }

    /// Render with a per-section progress callback `(slug, emitted)`.
    fn render_with(
        &self,
        rng: &mut StdRng,
        mut progress: impl FnMut(&str, usize),
    ) -> (String, String) {
        let mut probtex = String::new();
        let mut solntex = String::new();

        probtex.push_str(&self.config.latex.preamble);
        probtex.push('\n');
        solntex.push_str(&self.config.latex.preamble);
        solntex.push('\n');

        for kind in self.registry.iter() {
            let settings = self.config.settings(kind.slug);
            if settings.nprobs > 0 {
                debug!(
                    kind = kind.slug,
                    nprobs = settings.nprobs,
                    solutions = settings.solutions,
                    "Emitting section"
                );
            }
            kind.emit(&mut probtex, &mut solntex, rng, &settings);
            progress(kind.slug, settings.nprobs);
        }

        probtex.push_str(&self.config.latex.postamble);
        probtex.push('\n');
        solntex.push_str(&self.config.latex.postamble);
        solntex.push('\n');

        (probtex, solntex)
    }

    /// Build the RNG from the configured seed, or from OS entropy.
    fn rng(&self) -> StdRng {
        match self.config.generation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Run the pipeline: render both streams and write them to the
    /// configured output paths.
    pub fn run(&self) -> Result<RunStats> {
        let start = Instant::now();
        let total = self.config.total_requested();

        info!(
            total_problems = total,
            seed = ?self.config.generation.seed,
            "Starting worksheet generation"
        );

        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({percent}%) {msg}")
                .unwrap()
                .progress_chars("##-"),
        );

        let mut rng = self.rng();
        let (probtex, solntex) = self.render_with(&mut rng, |slug, emitted| {
            pb.inc(emitted as u64);
            if emitted > 0 {
                pb.set_message(slug.to_string());
            }
        });
        pb.finish_with_message("rendered");

        let header = format!(
            "% Generated by mathforge {} on {}\n",
            env!("CARGO_PKG_VERSION"),
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );

        let prob_path = self.config.output.problems_path();
        std::fs::write(&prob_path, format!("{header}{probtex}"))
            .map_err(|e| ForgeError::io("writing problems document", e))?;

        let soln_path = self.config.output.solutions_path();
        std::fs::write(&soln_path, format!("{header}{solntex}"))
            .map_err(|e| ForgeError::io("writing solutions document", e))?;

        let mut stats = RunStats::default();
        for kind in self.registry.iter() {
            let settings = self.config.settings(kind.slug);
            if settings.nprobs == 0 {
                continue;
            }
            stats.total_sections += 1;
            stats.total_problems += settings.nprobs;
            if settings.solutions {
                stats.total_full_solutions += settings.nprobs;
            } else {
                stats.total_answers += settings.nprobs;
            }
        }
        stats.runtime_secs = start.elapsed().as_secs_f64();
        stats.finalize();

        info!(
            sections = stats.total_sections,
            problems = stats.total_problems,
            problems_doc = %prob_path.display(),
            solutions_doc = %soln_path.display(),
            "Worksheet generation complete"
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(toml_str: &str) -> Config {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let config = config_from(
            r#"
            [output]
            problems = "p.tex"
            solutions = "s.tex"

            [problems.no-such-kind]
            nprobs = 1
            "#,
        );
        let err = WorksheetPipeline::new(config).err().unwrap();
        assert!(matches!(err, ForgeError::UnknownProblemKind(k) if k == "no-such-kind"));
    }

    #[test]
    fn test_same_seed_renders_identical_streams() {
        let config = config_from(
            r#"
            [output]
            problems = "p.tex"
            solutions = "s.tex"

            [generation]
            seed = 99

            [problems.abs-value-inequality]
            nprobs = 5
            solutions = true

            [problems.two-urn]
            nprobs = 3
            "#,
        );
        let pipeline = WorksheetPipeline::new(config).unwrap();

        let (p1, s1) = pipeline.render(&mut StdRng::seed_from_u64(99));
        let (p2, s2) = pipeline.render(&mut StdRng::seed_from_u64(99));
        assert_eq!(p1, p2);
        assert_eq!(s1, s2);

        let (p3, _) = pipeline.render(&mut StdRng::seed_from_u64(100));
        assert_ne!(p1, p3);
    }

    #[test]
    fn test_zero_counts_render_bare_documents() {
        let config = config_from(
            r#"
            [output]
            problems = "p.tex"
            solutions = "s.tex"

            [problems.abs-value-inequality]
            nprobs = 0
            solutions = true
            "#,
        );
        let pipeline = WorksheetPipeline::new(config).unwrap();
        let (probtex, solntex) = pipeline.render(&mut StdRng::seed_from_u64(1));

        for stream in [&probtex, &solntex] {
            assert!(stream.contains(r"\begin{document}"));
            assert!(stream.ends_with("\\end{document}\n"));
            assert_eq!(stream.matches("\\subsection*").count(), 0);
            assert_eq!(stream.matches("\\item").count(), 0);
        }
    }

    #[test]
    fn test_answers_only_vs_full_solutions() {
        let base = r#"
            [output]
            problems = "p.tex"
            solutions = "s.tex"

            [problems.binomial-nth-term]
            nprobs = 3
        "#;

        // Depth flag off: three short answers, no derivations
        let pipeline = WorksheetPipeline::new(config_from(base)).unwrap();
        let (probtex, solntex) = pipeline.render(&mut StdRng::seed_from_u64(4));
        assert_eq!(probtex.matches("\\item").count(), 3);
        assert_eq!(solntex.matches("\\item").count(), 3);
        assert_eq!(solntex.matches("binomial expansion is given by").count(), 0);

        // Depth flag on: three full derivations
        let with_solutions = format!("{base}\nsolutions = true\n");
        let pipeline = WorksheetPipeline::new(config_from(&with_solutions)).unwrap();
        let (_, solntex) = pipeline.render(&mut StdRng::seed_from_u64(4));
        assert_eq!(solntex.matches("binomial expansion is given by").count(), 3);
    }

    #[test]
    fn test_sections_follow_registry_order() {
        let config = config_from(
            r#"
            [output]
            problems = "p.tex"
            solutions = "s.tex"

            [problems.two-urn]
            nprobs = 1

            [problems.abs-value-inequality]
            nprobs = 1
            "#,
        );
        let pipeline = WorksheetPipeline::new(config).unwrap();
        let (probtex, _) = pipeline.render(&mut StdRng::seed_from_u64(8));

        let abs = probtex.find("Absolute-Value Inequalities").unwrap();
        let urn = probtex.find("Urn Problems").unwrap();
        assert!(abs < urn);
    }

    #[test]
    fn test_run_writes_both_documents() {
        let dir = tempfile::TempDir::new().unwrap();
        let prob_path = dir.path().join("problems.tex");
        let soln_path = dir.path().join("solutions.tex");

        let config = config_from(&format!(
            r#"
            [output]
            problems = "{}"
            solutions = "{}"

            [generation]
            seed = 7

            [problems.reverse-abs-value]
            nprobs = 2
            solutions = true
            full_simplify = true
            "#,
            prob_path.display(),
            soln_path.display(),
        ));

        let pipeline = WorksheetPipeline::new(config).unwrap();
        let stats = pipeline.run().unwrap();

        assert_eq!(stats.total_sections, 1);
        assert_eq!(stats.total_problems, 2);
        assert_eq!(stats.total_full_solutions, 2);
        assert_eq!(stats.total_answers, 0);

        let probs = std::fs::read_to_string(&prob_path).unwrap();
        let solns = std::fs::read_to_string(&soln_path).unwrap();
        assert!(probs.starts_with("% Generated by mathforge"));
        assert!(probs.contains("Reverse Absolute-Value Inequalities"));
        assert_eq!(probs.matches("\\item").count(), 2);
        assert!(solns.contains(r"\end{document}"));
    }
}
