//! Problem generators: the shared contract, the kind registry, and the
//! batch emission that writes one section of each document.

mod abs_value;
mod binomial;
mod probability;

pub use abs_value::{AbsValueInequality, CompareOp, ReverseAbsValue};
pub use binomial::{BinomialContraction, BinomialExpansion, BinomialNthTerm};
pub use probability::{
    CoverageChoice, RiskFactor, SurveyProbability, ThreeEvent, TwoEvent, TwoUrn,
};

use crate::models::ProblemSettings;
use rand::rngs::StdRng;

/// One sampled problem instance.
///
/// Construction performs all randomness up front; the three accessors are
/// pure functions of the sampled state.
pub trait Problem {
    /// The question, as LaTeX body text.
    fn statement(&self) -> String;

    /// The short answer.
    fn answer(&self) -> String;

    /// The full worked derivation.
    fn solution(&self) -> String;
}

type SampleFn = fn(&mut StdRng, &ProblemSettings) -> Box<dyn Problem>;

/// Descriptor for one registered problem kind.
pub struct GeneratorKind {
    /// Stable identifier used as the config table key
    pub slug: &'static str,

    /// Human-readable section name shown in the rendered documents
    pub section: &'static str,

    sample: SampleFn,
}

impl GeneratorKind {
    /// Sample one fresh instance.
    pub fn sample(&self, rng: &mut StdRng, settings: &ProblemSettings) -> Box<dyn Problem> {
        (self.sample)(rng, settings)
    }

    /// Emit one section into the problem and solution streams.
    ///
    /// A zero count emits nothing at all: no section header, no empty
    /// list. Otherwise each stream gets exactly one section header and one
    /// enumerated list; every item carries the statement, and the solution
    /// stream additionally carries either the full solution or the short
    /// answer depending on the depth flag.
    pub fn emit(
        &self,
        probtex: &mut String,
        solntex: &mut String,
        rng: &mut StdRng,
        settings: &ProblemSettings,
    ) {
        if settings.nprobs == 0 {
            return;
        }

        let header = format!("\\subsection*{{{}}}\n\\begin{{enumerate}}\n", self.section);
        probtex.push_str(&header);
        solntex.push_str(&header);

        for _ in 0..settings.nprobs {
            let prob = self.sample(rng, settings);
            let statement = prob.statement();
            probtex.push_str(&format!("\\item {statement}\n"));
            solntex.push_str(&format!("\\item {statement}\n"));
            if settings.solutions {
                solntex.push_str(&prob.solution());
            } else {
                solntex.push_str(&prob.answer());
            }
            solntex.push('\n');
        }

        probtex.push_str("\\end{enumerate}\n");
        solntex.push_str("\\end{enumerate}\n");
    }
}

/// The ordered collection of all problem kinds available for selection.
///
/// Built once by explicit enumeration, sorted by (section, slug), and
/// read-only afterwards. Lifetime = process lifetime; nothing removes or
/// deduplicates entries.
pub struct Registry {
    kinds: Vec<GeneratorKind>,
}

impl Registry {
    /// Build the registry of built-in problem kinds.
    pub fn builtin() -> Self {
        let mut registry = Self { kinds: Vec::new() };

        registry.add(GeneratorKind {
            slug: "abs-value-inequality",
            section: "Absolute-Value Inequalities",
            sample: |rng, _| Box::new(AbsValueInequality::sample(rng)),
        });
        registry.add(GeneratorKind {
            slug: "reverse-abs-value",
            section: "Reverse Absolute-Value Inequalities",
            sample: |rng, settings| Box::new(ReverseAbsValue::sample(rng, settings.full_simplify)),
        });
        registry.add(GeneratorKind {
            slug: "binomial-expansion",
            section: "Binomial Expansion Problems",
            sample: |rng, _| Box::new(BinomialExpansion::sample(rng)),
        });
        registry.add(GeneratorKind {
            slug: "binomial-nth-term",
            section: "Binomial Expansion Problems",
            sample: |rng, _| Box::new(BinomialNthTerm::sample(rng)),
        });
        registry.add(GeneratorKind {
            slug: "binomial-contraction",
            section: "Binomial Expansion Problems",
            sample: |rng, _| Box::new(BinomialContraction::sample(rng)),
        });
        registry.add(GeneratorKind {
            slug: "survey-probability",
            section: "Basic Probability",
            sample: |rng, _| Box::new(SurveyProbability::sample(rng)),
        });
        registry.add(GeneratorKind {
            slug: "two-urn",
            section: "Urn Problems",
            sample: |rng, _| Box::new(TwoUrn::sample(rng)),
        });
        registry.add(GeneratorKind {
            slug: "coverage-choice",
            section: "Coverage Choice Problems",
            sample: |rng, _| Box::new(CoverageChoice::sample(rng)),
        });
        registry.add(GeneratorKind {
            slug: "risk-factor",
            section: "Conditional Probability",
            sample: |rng, _| Box::new(RiskFactor::sample(rng)),
        });
        registry.add(GeneratorKind {
            slug: "two-event",
            section: "Two Variable Probability",
            sample: |rng, _| Box::new(TwoEvent::sample(rng)),
        });
        registry.add(GeneratorKind {
            slug: "three-event",
            section: "Three Variable Probability",
            sample: |rng, _| Box::new(ThreeEvent::sample(rng)),
        });

        // One consistent presentation order everywhere the registry is
        // iterated: by section name, then slug within a shared section.
        registry
            .kinds
            .sort_by(|l, r| (l.section, l.slug).cmp(&(r.section, r.slug)));
        registry
    }

    fn add(&mut self, kind: GeneratorKind) {
        self.kinds.push(kind);
    }

    /// Iterate kinds in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratorKind> {
        self.kinds.iter()
    }

    /// Look up a kind by its config slug.
    pub fn get(&self, slug: &str) -> Option<&GeneratorKind> {
        self.kinds.iter().find(|k| k.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_registry_is_sorted_by_section() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), 11);

        let order: Vec<(&str, &str)> = registry.iter().map(|k| (k.section, k.slug)).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);

        assert!(registry.get("abs-value-inequality").is_some());
        assert!(registry.get("no-such-kind").is_none());
    }

    #[test]
    fn test_zero_count_emits_nothing() {
        let registry = Registry::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        for kind in registry.iter() {
            for solutions in [false, true] {
                let settings = ProblemSettings {
                    nprobs: 0,
                    solutions,
                    full_simplify: false,
                };
                let mut probtex = String::new();
                let mut solntex = String::new();
                kind.emit(&mut probtex, &mut solntex, &mut rng, &settings);
                assert!(probtex.is_empty(), "{} wrote a header for count 0", kind.slug);
                assert!(solntex.is_empty(), "{} wrote a header for count 0", kind.slug);
            }
        }
    }

    /// Drop embedded `itemize` environments so only the enumerate items
    /// emitted by the section wrapper remain countable.
    fn strip_itemize(stream: &str) -> String {
        let mut out = String::new();
        let mut rest = stream;
        while let Some(start) = rest.find("\\begin{itemize}") {
            out.push_str(&rest[..start]);
            let after = &rest[start..];
            match after.find("\\end{itemize}") {
                Some(end) => rest = &after[end + "\\end{itemize}".len()..],
                None => {
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }

    #[test]
    fn test_nonzero_count_emits_one_header_and_n_items() {
        let registry = Registry::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let n = 4;

        for kind in registry.iter() {
            for solutions in [false, true] {
                let settings = ProblemSettings {
                    nprobs: n,
                    solutions,
                    full_simplify: false,
                };
                let mut probtex = String::new();
                let mut solntex = String::new();
                kind.emit(&mut probtex, &mut solntex, &mut rng, &settings);

                for stream in [&probtex, &solntex] {
                    assert_eq!(
                        stream.matches("\\subsection*").count(),
                        1,
                        "{} header count",
                        kind.slug
                    );
                    assert_eq!(
                        strip_itemize(stream).matches("\\item").count(),
                        n,
                        "{} item count",
                        kind.slug
                    );
                    assert_eq!(stream.matches("\\begin{enumerate}").count(), 1);
                    assert_eq!(stream.matches("\\end{enumerate}").count(), 1);
                }
            }
        }
    }

    #[test]
    fn test_accessors_are_pure() {
        // Repeated accessor calls on one instance return identical text.
        let registry = Registry::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let settings = ProblemSettings::default();

        for kind in registry.iter() {
            let prob = kind.sample(&mut rng, &settings);
            assert_eq!(prob.statement(), prob.statement(), "{}", kind.slug);
            assert_eq!(prob.answer(), prob.answer(), "{}", kind.slug);
            assert_eq!(prob.solution(), prob.solution(), "{}", kind.slug);
        }
    }
}
