/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts user-facing messages (e.g., to stderr) so that
/// assembly and emission stay free of console concerns.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a fixed number of steps
    ///
    /// # Arguments
    /// * `current` - Steps completed so far
    /// * `total` - Total number of steps
    /// * `message` - Optional label for the current step
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal condition the user should know about
    fn report_warning(&self, message: &str);

    /// Reports an error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
