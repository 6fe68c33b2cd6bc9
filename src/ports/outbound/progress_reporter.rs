/// ProgressReporter port for user-facing diagnostics
///
/// Degraded registry lookups, cycle warnings and run progress all flow
/// through here, never through stdout.
pub trait ProgressReporter {
    /// Reports an informational line
    fn report(&self, message: &str);

    /// Reports progress on a unit of work
    ///
    /// # Arguments
    /// * `current` - Items done so far
    /// * `total` - Items expected, or 0 when unknown
    /// * `message` - Optional label for the current item
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal problem
    fn report_error(&self, message: &str);

    /// Reports that a phase finished
    fn report_completion(&self, message: &str);
}

impl<P: ProgressReporter + ?Sized> ProgressReporter for &P {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
