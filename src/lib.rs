//! mathforge - Randomized math worksheet generation with LaTeX output.
//!
//! ## Architecture
//!
//! mathforge is built around two ideas:
//! - **Registry**: an init-time list of every problem kind available for
//!   selection, built once by explicit enumeration and read-only afterwards
//! - **Problem generators**: each kind samples its parameters up front and
//!   derives three text artifacts (statement, answer, worked solution) from
//!   that state
//!
//! ## Pipeline
//!
//! Config → Registry iteration → problem/solution LaTeX streams → output files
//!
//! Each requested kind contributes one section per document: every problem's
//! statement lands in the problems document, and either its short answer or
//! its full solution lands in the solutions document, depending on the
//! per-kind depth flag.

pub mod generators;
pub mod math;
pub mod models;
pub mod pipeline;

// Re-exports for convenience
pub use generators::{GeneratorKind, Problem, Registry};
pub use models::{Config, ForgeError, ProblemSettings, Result, RunStats};
pub use pipeline::WorksheetPipeline;
