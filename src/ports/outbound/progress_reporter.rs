/// ProgressReporter port for user-facing status output
///
/// This port abstracts status and warning output (e.g., to stderr) so that
/// it never mixes with the query result on stdout.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports scan progress
    ///
    /// # Arguments
    /// * `current` - Candidates checked so far
    /// * `total` - Size of the candidate pool
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal warning (unresolved target, deprecated option, ...)
    fn report_warning(&self, message: &str);
}
