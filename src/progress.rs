// src/progress.rs
/// Progress reporting for a reconstruction run. Frontends implement this to
/// surface status; the library itself only logs through `tracing`.
pub trait Progress {
    /// Called at the start with the number of phases that will run.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one phase completes, successfully or not.
    fn item_done(&mut self, _label: &str) {}

    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
