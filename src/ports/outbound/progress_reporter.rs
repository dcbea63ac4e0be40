use crate::alert_reporting::domain::SeveritySummary;

/// ProgressReporter port for reporting progress during a run
///
/// This port abstracts user feedback (e.g., to stderr) so it never mixes
/// with the result lines printed on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Marks the start of a blocking operation (e.g., the API request)
    ///
    /// # Arguments
    /// * `message` - Describes what is being waited on
    fn begin_wait(&self, message: &str);

    /// Marks the end of the operation started with [`begin_wait`](Self::begin_wait)
    fn end_wait(&self);

    /// Reports a non-fatal warning
    fn report_warning(&self, message: &str);

    /// Reports how many open alerts were found per severity
    fn report_summary(&self, summary: &SeveritySummary);
}
