/// Tuning knobs shared by the sequential and parallel solvers.
///
/// Neither option changes results: with `early_exit` the relaxation passes
/// stop once a pass changes nothing, but the negative-cycle scan still runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub early_exit: bool,
    /// Worker threads for the parallel solver; `0` uses rayon's global pool.
    pub num_threads: usize,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }
}
