//! Output formatting for `crease summary`.
//!
//! Supports two modes: human-readable tables (default) and JSON (--json).

use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::Result;

/// Output mode for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Table
        }
    }
}

/// Render rows as a table, or a placeholder when there are none
pub fn render_table<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        "(no results)".to_string()
    } else {
        Table::new(rows).to_string()
    }
}

/// Print a single Serialize item as pretty JSON
pub fn print_json<T: Serialize>(item: &T) -> Result<()> {
    println!("{}", to_json(item)?);
    Ok(())
}

pub fn to_json<T: Serialize>(item: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(item)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct Row {
        name: &'static str,
        runs: u64,
    }

    #[test]
    fn test_render_table_lists_rows() {
        let table = render_table(&[Row {
            name: "V Kohli",
            runs: 973,
        }]);
        assert!(table.contains("V Kohli"));
        assert!(table.contains("973"));
    }

    #[test]
    fn test_render_table_empty() {
        assert_eq!(render_table::<Row>(&[]), "(no results)");
    }

    #[test]
    fn test_to_json_reports_serialization_error() {
        use std::collections::HashMap;

        // JSON object keys must be strings
        let bad: HashMap<(u8, u8), u8> = HashMap::from([((1, 2), 3)]);
        let err = to_json(&bad).unwrap_err();
        assert!(matches!(err, crate::error::CreaseError::Json(_)));

        let ok = to_json(&serde_json::json!({"runs": 12})).unwrap();
        assert!(ok.contains("\"runs\": 12"));
    }

    #[test]
    fn test_output_mode_flag() {
        assert_eq!(OutputMode::from_json_flag(true), OutputMode::Json);
        assert_eq!(OutputMode::from_json_flag(false), OutputMode::Table);
    }
}
