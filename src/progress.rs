// src/progress.rs
/// Lightweight progress reporting for a watch run.
/// Frontends implement this to surface status; the CLI logs it.
pub trait Progress {
    /// Called at the start with the number of expansions to check.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one expansion has been fetched and filtered.
    fn item_done(&mut self, _expansion: &str, _matched: usize) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// Progress sink that writes through the crate's log macros.
#[derive(Default)]
pub struct LogProgress {
    done: usize,
    total: usize,
    matched: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        logf!("Checking {} expansions", total);
    }
    fn log(&mut self, msg: &str) {
        logf!("{}", msg);
    }
    fn item_done(&mut self, expansion: &str, matched: usize) {
        self.done += 1;
        self.matched += matched;
        logf!("{} done ({}/{}), {} tracked quest(s) active", expansion, self.done, self.total, matched);
    }
    fn finish(&mut self) {
        logf!("Check complete ({}/{}), {} match(es) total", self.done, self.total, self.matched);
    }
}
