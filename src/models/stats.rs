//! Run statistics for a generation pass.

/// Statistics for a worksheet generation run.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Problem sections emitted (kinds with a nonzero count)
    pub total_sections: usize,

    /// Problems emitted across all sections
    pub total_problems: usize,

    /// Problems whose solution stream entry is a full derivation
    pub total_full_solutions: usize,

    /// Problems whose solution stream entry is a short answer
    pub total_answers: usize,

    /// Total runtime in seconds
    pub runtime_secs: f64,

    /// Problems per second throughput
    pub throughput_per_sec: f64,
}

impl RunStats {
    /// Calculate derived stats.
    pub fn finalize(&mut self) {
        if self.runtime_secs > 0.0 {
            self.throughput_per_sec = self.total_problems as f64 / self.runtime_secs;
        }
    }
}
