use chrono::{SecondsFormat, Utc};

/// ReportMetadata value object describing who produced a report and when
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
}

impl ReportMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
        }
    }

    /// Metadata stamped with the current UTC time (RFC 3339, second precision)
    pub fn generate(tool_name: &str, tool_version: &str) -> Self {
        Self::new(
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            tool_name.to_string(),
            tool_version.to_string(),
        )
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_metadata_new() {
        let metadata = ReportMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "depviz".to_string(),
            "0.1.0".to_string(),
        );

        assert_eq!(metadata.timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "depviz");
        assert_eq!(metadata.tool_version(), "0.1.0");
    }

    #[test]
    fn test_generate_uses_utc_rfc3339() {
        let metadata = ReportMetadata::generate("depviz", "0.3.0");
        assert!(metadata.timestamp().ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(metadata.timestamp()).is_ok());
        assert_eq!(metadata.tool_version(), "0.3.0");
    }
}
