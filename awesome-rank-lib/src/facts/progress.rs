/// A trait for reporting progress of a ranking run.
pub trait Progress: Send + Sync {
    /// Set the phase label for the current operation (e.g., "Discovering", "Collecting").
    fn set_phase(&self, phase: &str);

    /// Switch to determinate reporting over `total` work items.
    fn set_total(&self, total: u64);

    /// Record that `completed` items are done, `current` naming the one being worked on.
    fn advance(&self, completed: u64, current: &str);

    /// Finish and clear the progress indicator.
    fn done(&self);
}
