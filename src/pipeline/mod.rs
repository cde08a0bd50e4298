//! Worksheet generation pipeline.

mod worksheet;

pub use worksheet::WorksheetPipeline;
