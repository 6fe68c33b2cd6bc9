use crate::application::dto::GraphResponse;
use crate::shared::Result;

/// GraphFormatter port for turning a resolved graph into report text
pub trait GraphFormatter {
    /// Formats the resolved graph and its query results
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &GraphResponse) -> Result<String>;
}
