/// Receives progress updates from a long-running scan.
pub trait Progress: Send + Sync {
    /// Label the current phase (e.g. "Listing", "Scanning").
    fn set_phase(&self, phase: &str);

    /// Announce how many units of work the current phase has.
    fn set_total(&self, total: u64);

    /// Record one finished unit of work.
    fn advance(&self);

    /// Finish and clear the progress indicator.
    fn done(&self);
}
