use thiserror::Error;

/// Main error type for the statistics service
#[derive(Error, Debug)]
pub enum CreaseError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Dataset errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{column}' in {table}")]
    MissingColumn { table: String, column: String },

    #[error("Invalid record in {table} at line {line}: {reason}")]
    InvalidRecord {
        table: String,
        line: u64,
        reason: String,
    },

    // Query errors
    #[error("No data found for team: {team}")]
    NoData { team: String },

    // Chart errors
    #[error("Chart '{chart}' failed: {reason}")]
    Chart { chart: String, reason: String },

    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CreaseError {
    /// True when the error only means the filter matched nothing
    pub fn is_no_data(&self) -> bool {
        matches!(self, CreaseError::NoData { .. })
    }

    pub fn chart(chart: &str, reason: impl ToString) -> Self {
        CreaseError::Chart {
            chart: chart.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for CreaseError
pub type Result<T> = std::result::Result<T, CreaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_message_names_team() {
        let err = CreaseError::NoData {
            team: "Gujarat Lions".to_string(),
        };
        assert!(err.is_no_data());
        assert_eq!(err.to_string(), "No data found for team: Gujarat Lions");
    }

    #[test]
    fn test_missing_column_message() {
        let err = CreaseError::MissingColumn {
            table: "match_data".to_string(),
            column: "striker".to_string(),
        };
        assert!(!err.is_no_data());
        assert_eq!(err.to_string(), "Missing column 'striker' in match_data");
    }
}
