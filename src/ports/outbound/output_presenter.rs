use crate::shared::Result;

/// OutputPresenter port: the destination of the formatted graph report
pub trait OutputPresenter {
    /// Writes `content` to stdout or to a file
    ///
    /// # Errors
    /// Returns an error if the destination is rejected (missing parent
    /// directory, symlink target) or the write fails
    fn present(&self, content: &str) -> Result<()>;
}
